//! Locale-aware currency formatting.
//!
//! Amounts are always US dollars; the locale only decides separators, symbol
//! placement and how many fraction digits are shown (never more than two).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "ja-JP")]
    JaJp,
}

pub const SUPPORTED_LOCALES: [Locale; 5] = [
    Locale::EnUs,
    Locale::EnGb,
    Locale::DeDe,
    Locale::FrFr,
    Locale::JaJp,
];

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
            Locale::JaJp => "ja-JP",
        }
    }

    /// Picks the first supported language from an `Accept-Language` header.
    ///
    /// A bare language (`de`) matches its regional default. Quality weights are
    /// ignored; header order wins.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        header
            .split(',')
            .filter_map(|part| part.split(';').next())
            .map(str::trim)
            .find_map(|tag| tag.parse().ok())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-").to_ascii_lowercase();
        let locale = match normalized.as_str() {
            "en-us" | "en" => Locale::EnUs,
            "en-gb" => Locale::EnGb,
            "de-de" | "de" | "de-at" => Locale::DeDe,
            "fr-fr" | "fr" => Locale::FrFr,
            "ja-jp" | "ja" => Locale::JaJp,
            _ => return Err(format!("unsupported locale `{s}`")),
        };
        Ok(locale)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum SymbolPlacement {
    Prefix,
    SuffixSpaced,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CurrencyFormatter {
    locale: Locale,
    symbol: &'static str,
    placement: SymbolPlacement,
    group_separator: &'static str,
    decimal_separator: char,
    fraction_digits: usize,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl CurrencyFormatter {
    pub fn new(locale: Locale) -> Self {
        let (symbol, placement, group_separator, decimal_separator, fraction_digits) = match locale
        {
            Locale::EnUs => ("$", SymbolPlacement::Prefix, ",", '.', 2),
            Locale::EnGb => ("US$", SymbolPlacement::Prefix, ",", '.', 2),
            Locale::DeDe => ("$", SymbolPlacement::SuffixSpaced, ".", ',', 2),
            Locale::FrFr => ("$US", SymbolPlacement::SuffixSpaced, "\u{202f}", ',', 2),
            Locale::JaJp => ("$", SymbolPlacement::Prefix, ",", '.', 2),
        };
        Self {
            locale,
            symbol,
            placement,
            group_separator,
            decimal_separator,
            fraction_digits,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return if amount.is_nan() {
                "NaN".to_string()
            } else if amount > 0.0 {
                format!("{}∞", self.symbol)
            } else {
                format!("-{}∞", self.symbol)
            };
        }

        let fixed = format!("{:.*}", self.fraction_digits, amount.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let negative = amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));

        let mut number = group_digits(int_part, self.group_separator);
        if !frac_part.is_empty() {
            number.push(self.decimal_separator);
            number.push_str(frac_part);
        }

        let sign = if negative { "-" } else { "" };
        match self.placement {
            SymbolPlacement::Prefix => format!("{sign}{}{number}", self.symbol),
            SymbolPlacement::SuffixSpaced => format!("{sign}{number}\u{a0}{}", self.symbol),
        }
    }
}

/// Escapes text for HTML and SVG bodies and attribute values.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
