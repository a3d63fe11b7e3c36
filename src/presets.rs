//! Named parameter bundles in the `p=…, pm=…, r=…, y=…, n=…` encoding.

use std::collections::HashMap;

use crate::input::RawInputs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub label: &'static str,
    pub encoding: &'static str,
}

pub const PRESETS: [Preset; 4] = [
    Preset {
        name: "starter",
        label: "Starter saver",
        encoding: "p=1000, pm=100, r=5, y=10, n=12",
    },
    Preset {
        name: "retirement",
        label: "Retirement (30y)",
        encoding: "p=10000, pm=500, r=7, y=30, n=12",
    },
    Preset {
        name: "lump-sum",
        label: "Lump sum, quarterly",
        encoding: "p=50000, pm=0, r=4.5, y=20, n=4",
    },
    Preset {
        name: "daily",
        label: "Daily compounding",
        encoding: "p=2500, pm=250, r=6, y=15, n=365",
    },
];

pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

impl Preset {
    pub fn inputs(&self) -> RawInputs {
        parse(self.encoding)
    }

    /// Query string that reloads the page with this preset.
    pub fn query(&self) -> String {
        format!("preset={}", self.name)
    }
}

/// Decodes a preset string into raw field text.
///
/// Every one of the five fields is overwritten: keys missing from the
/// encoding come back empty and fall through to the coercion defaults.
pub fn parse(encoding: &str) -> RawInputs {
    let pairs: HashMap<&str, &str> = encoding
        .split(',')
        .filter_map(|kv| kv.split_once('='))
        .map(|(k, v)| (k.trim(), v.trim()))
        .collect();
    let field = |key: &str| Some(pairs.get(key).copied().unwrap_or_default().to_string());
    RawInputs {
        principal: field("p"),
        monthly: field("pm"),
        rate: field("r"),
        years: field("y"),
        freq: field("n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_maps_short_keys_to_fields() {
        let raw = parse("p=10000, pm=500 ,r = 7,y=30,n=12");
        assert_eq!(raw.principal.as_deref(), Some("10000"));
        assert_eq!(raw.monthly.as_deref(), Some("500"));
        assert_eq!(raw.rate.as_deref(), Some("7"));
        assert_eq!(raw.years.as_deref(), Some("30"));
        assert_eq!(raw.freq.as_deref(), Some("12"));
    }

    #[test]
    fn missing_keys_overwrite_with_empty_text() {
        let raw = parse("p=100");
        assert_eq!(raw.monthly.as_deref(), Some(""));
        let params = raw.coerce().expect("defaults apply");
        assert_eq!(params.principal, 100.0);
        assert_eq!(params.years, 1.0);
        assert_eq!(params.compounding_per_year, 12);
    }

    #[test]
    fn every_builtin_preset_coerces_to_valid_parameters() {
        for preset in &PRESETS {
            let params = preset.inputs().coerce().expect(preset.name);
            assert!(params.years >= 1.0, "{}", preset.name);
        }
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("Retirement").map(|p| p.name), Some("retirement"));
        assert!(find("unknown").is_none());
    }
}
