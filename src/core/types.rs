use serde::Serialize;

#[cfg(test)]
use crate::error::{ChartError, ChartResult};
use crate::error::{ProjectionError, ProjectionResult};

pub const DEFAULT_COMPOUNDING_PER_YEAR: u32 = 12;

/// Longest horizon accepted at the boundary, in years.
pub const MAX_YEARS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParameters {
    pub principal: f64,
    pub monthly_contribution: f64,
    pub annual_rate_percent: f64,
    pub years: f64,
    pub compounding_per_year: u32,
}

impl SimulationParameters {
    /// Builds parameters with monthly compounding.
    pub fn new(
        principal: f64,
        monthly_contribution: f64,
        annual_rate_percent: f64,
        years: f64,
    ) -> ProjectionResult<Self> {
        Self::with_compounding(
            principal,
            monthly_contribution,
            annual_rate_percent,
            years,
            DEFAULT_COMPOUNDING_PER_YEAR,
        )
    }

    pub fn with_compounding(
        principal: f64,
        monthly_contribution: f64,
        annual_rate_percent: f64,
        years: f64,
        compounding_per_year: u32,
    ) -> ProjectionResult<Self> {
        let params = Self {
            principal,
            monthly_contribution,
            annual_rate_percent,
            years,
            compounding_per_year,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> ProjectionResult<()> {
        for (name, value) in [
            ("principal", self.principal),
            ("monthly_contribution", self.monthly_contribution),
            ("annual_rate_percent", self.annual_rate_percent),
            ("years", self.years),
        ] {
            if !value.is_finite() {
                return Err(ProjectionError::invalid(name, "must be a finite number"));
            }
        }
        if self.principal < 0.0 {
            return Err(ProjectionError::invalid("principal", "must be >= 0"));
        }
        if self.years <= 0.0 {
            return Err(ProjectionError::invalid("years", "must be > 0"));
        }
        if self.years > MAX_YEARS {
            return Err(ProjectionError::invalid(
                "years",
                format!("must be <= {MAX_YEARS}"),
            ));
        }
        if self.compounding_per_year == 0 {
            return Err(ProjectionError::invalid(
                "compounding_per_year",
                "must be >= 1",
            ));
        }
        Ok(())
    }

    /// Whole months simulated; sub-month horizons still run one month.
    pub fn months(&self) -> u32 {
        ((self.years * 12.0).floor() as u32).max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlySnapshot {
    pub year: u32,
    pub balance: f64,
    pub cumulative_contribution: f64,
    pub interest_earned: f64,
}

/// End-of-horizon figures shown above the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub final_balance: f64,
    pub total_contribution: f64,
    pub total_interest: f64,
    pub principal_plus_contribution: f64,
}

/// Parallel per-year series handed to the chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<u32>,
    pub total_balance: Vec<f64>,
    pub principal_contributed: Vec<f64>,
}

impl ChartSeries {
    /// Pairs two bare value columns, labelling them `1..=len`. Projections
    /// build their series from snapshot years instead.
    #[cfg(test)]
    pub(crate) fn new(
        total_balance: Vec<f64>,
        principal_contributed: Vec<f64>,
    ) -> ChartResult<Self> {
        if total_balance.len() != principal_contributed.len() {
            return Err(ChartError::MismatchedSeries {
                total: total_balance.len(),
                principal: principal_contributed.len(),
            });
        }
        let labels = (1..=total_balance.len() as u32).collect();
        Ok(Self {
            labels,
            total_balance,
            principal_contributed,
        })
    }

    pub fn len(&self) -> usize {
        self.total_balance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_balance.is_empty()
    }

    pub fn interest(&self) -> Vec<f64> {
        self.total_balance
            .iter()
            .zip(&self.principal_contributed)
            .map(|(total, principal)| total - principal)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_name(result: ProjectionResult<SimulationParameters>) -> &'static str {
        match result {
            Err(ProjectionError::InvalidParameter { name, .. }) => name,
            Ok(params) => panic!("expected rejection, got {params:?}"),
        }
    }

    #[test]
    fn horizon_above_ceiling_is_rejected() {
        assert_eq!(
            rejected_name(SimulationParameters::new(1000.0, 0.0, 5.0, MAX_YEARS + 0.5)),
            "years"
        );
        assert!(SimulationParameters::new(1000.0, 0.0, 5.0, MAX_YEARS).is_ok());
    }

    #[test]
    fn non_finite_values_are_rejected_by_name() {
        let cases = [
            ((f64::NAN, 0.0, 0.0, 1.0), "principal"),
            ((0.0, f64::INFINITY, 0.0, 1.0), "monthly_contribution"),
            ((0.0, 0.0, f64::NEG_INFINITY, 1.0), "annual_rate_percent"),
            ((0.0, 0.0, 0.0, f64::NAN), "years"),
        ];
        for ((p, pm, r, y), expected) in cases {
            assert_eq!(
                rejected_name(SimulationParameters::with_compounding(p, pm, r, y, 12)),
                expected
            );
        }
    }

    #[test]
    fn zero_compounding_frequency_is_rejected() {
        assert_eq!(
            rejected_name(SimulationParameters::with_compounding(100.0, 0.0, 5.0, 1.0, 0)),
            "compounding_per_year"
        );
    }

    #[test]
    fn non_positive_horizon_and_negative_principal_are_rejected() {
        assert_eq!(rejected_name(SimulationParameters::new(100.0, 0.0, 5.0, 0.0)), "years");
        assert_eq!(rejected_name(SimulationParameters::new(100.0, 0.0, 5.0, -2.0)), "years");
        assert_eq!(
            rejected_name(SimulationParameters::new(-0.01, 0.0, 5.0, 1.0)),
            "principal"
        );
    }

    #[test]
    fn negative_contribution_and_rate_are_accepted() {
        let params = SimulationParameters::new(100.0, -10.0, -2.0, 3.0).expect("valid");
        assert_eq!(params.months(), 36);
    }
}
