mod engine;
mod types;

pub use engine::{
    Projection, chart_series, monthly_growth_rate, project, simulate, summarize,
};
pub use types::{
    ChartSeries, DEFAULT_COMPOUNDING_PER_YEAR, MAX_YEARS, ProjectionSummary,
    SimulationParameters, YearlySnapshot,
};
