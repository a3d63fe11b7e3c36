use tracing::debug;

use super::types::{ChartSeries, ProjectionSummary, SimulationParameters, YearlySnapshot};

const MONTHS_PER_YEAR: u32 = 12;

/// One simulated horizon: the inputs plus the yearly snapshots they produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub parameters: SimulationParameters,
    pub snapshots: Vec<YearlySnapshot>,
}

impl Projection {
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// `None` when the horizon produced no full year.
    pub fn summary(&self) -> Option<ProjectionSummary> {
        summarize(self.parameters.principal, &self.snapshots)
    }

    pub fn series(&self) -> ChartSeries {
        chart_series(self.parameters.principal, &self.snapshots)
    }
}

pub fn project(parameters: SimulationParameters) -> Projection {
    let snapshots = simulate(&parameters);
    debug!(
        principal = parameters.principal,
        monthly = parameters.monthly_contribution,
        rate = parameters.annual_rate_percent,
        years = parameters.years,
        n = parameters.compounding_per_year,
        snapshots = snapshots.len(),
        "projection computed"
    );
    Projection {
        parameters,
        snapshots,
    }
}

/// Per-month growth rate that reproduces the effective annual yield of
/// `n`-times-per-year compounding at the nominal `annual_rate_percent`.
pub fn monthly_growth_rate(annual_rate_percent: f64, compounding_per_year: u32) -> f64 {
    let annual = annual_rate_percent / 100.0;
    let n = compounding_per_year as f64;
    (1.0 + annual / n).powf(n / 12.0) - 1.0
}

/// Steps the balance month by month and emits a snapshot at every 12th month.
///
/// Interest accrues before that month's contribution is added. Partial final
/// years are dropped, so horizons shorter than a year return an empty vector.
pub fn simulate(params: &SimulationParameters) -> Vec<YearlySnapshot> {
    let rate = monthly_growth_rate(params.annual_rate_percent, params.compounding_per_year);
    let months = params.months();

    let mut balance = params.principal;
    let mut contributed = 0.0;
    let mut snapshots = Vec::with_capacity((months / MONTHS_PER_YEAR) as usize);
    for month in 1..=months {
        balance = balance * (1.0 + rate) + params.monthly_contribution;
        contributed += params.monthly_contribution;
        if month % MONTHS_PER_YEAR == 0 {
            snapshots.push(YearlySnapshot {
                year: month / MONTHS_PER_YEAR,
                balance,
                cumulative_contribution: contributed,
                interest_earned: balance - params.principal - contributed,
            });
        }
    }
    snapshots
}

pub fn summarize(principal: f64, snapshots: &[YearlySnapshot]) -> Option<ProjectionSummary> {
    let last = snapshots.last()?;
    Some(ProjectionSummary {
        final_balance: last.balance,
        total_contribution: last.cumulative_contribution,
        total_interest: last.interest_earned,
        principal_plus_contribution: principal + last.cumulative_contribution,
    })
}

pub fn chart_series(principal: f64, snapshots: &[YearlySnapshot]) -> ChartSeries {
    ChartSeries {
        labels: snapshots.iter().map(|s| s.year).collect(),
        total_balance: snapshots.iter().map(|s| s.balance).collect(),
        principal_contributed: snapshots
            .iter()
            .map(|s| principal + s.cumulative_contribution)
            .collect(),
    }
}
