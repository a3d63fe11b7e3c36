//! Coercion of loosely-typed form input into `SimulationParameters`.
//!
//! Empty, unparsable, non-finite and zero values fall back to a default
//! (0 for amounts and the rate, 1 for years, 12 for the frequency). Values that
//! parse but make no sense, such as a negative horizon, are still rejected.

use serde::Deserialize;

use crate::core::{DEFAULT_COMPOUNDING_PER_YEAR, SimulationParameters};
use crate::error::{ProjectionError, ProjectionResult};

pub const DEFAULT_YEARS: f64 = 1.0;

/// The five input fields as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawInputs {
    pub principal: Option<String>,
    pub monthly: Option<String>,
    pub rate: Option<String>,
    pub years: Option<String>,
    pub freq: Option<String>,
}

impl RawInputs {
    pub fn is_empty(&self) -> bool {
        [
            &self.principal,
            &self.monthly,
            &self.rate,
            &self.years,
            &self.freq,
        ]
        .iter()
        .all(|f| f.is_none())
    }

    pub fn coerce(&self) -> ProjectionResult<SimulationParameters> {
        NumericInputs {
            principal: parse_field(self.principal.as_deref()),
            monthly: parse_field(self.monthly.as_deref()),
            rate: parse_field(self.rate.as_deref()),
            years: parse_field(self.years.as_deref()),
            freq: parse_field(self.freq.as_deref()),
        }
        .coerce()
    }
}

/// The five fields after parsing; `None` stands for missing or unparsable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericInputs {
    pub principal: Option<f64>,
    pub monthly: Option<f64>,
    pub rate: Option<f64>,
    pub years: Option<f64>,
    pub freq: Option<f64>,
}

impl NumericInputs {
    pub fn coerce(&self) -> ProjectionResult<SimulationParameters> {
        let principal = or_default(self.principal, 0.0);
        let monthly = or_default(self.monthly, 0.0);
        let rate = or_default(self.rate, 0.0);
        let years = or_default(self.years, DEFAULT_YEARS);
        let freq = or_default(self.freq, DEFAULT_COMPOUNDING_PER_YEAR as f64).round();
        if freq < 1.0 {
            return Err(ProjectionError::invalid(
                "compounding_per_year",
                "must be >= 1",
            ));
        }
        SimulationParameters::with_compounding(principal, monthly, rate, years, freq as u32)
    }
}

fn parse_field(text: Option<&str>) -> Option<f64> {
    text.and_then(|t| t.trim().parse::<f64>().ok())
}

fn or_default(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => default,
    }
}
