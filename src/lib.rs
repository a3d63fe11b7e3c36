//! Compound-interest projections with yearly snapshots, rendered as an
//! area/line chart, a summary and a per-year table.

pub mod api;
pub mod chart;
pub mod core;
pub mod error;
pub mod format;
pub mod input;
pub mod presets;
pub mod report;
pub mod telemetry;

pub use crate::core::{Projection, SimulationParameters, YearlySnapshot, project, simulate};
pub use error::{AppError, ChartError, ProjectionError};
