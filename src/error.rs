use thiserror::Error;

pub type ProjectionResult<T> = Result<T, ProjectionError>;
pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl ProjectionError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("chart series is empty")]
    EmptySeries,

    #[error("chart series lengths differ: total={total}, principal={principal}")]
    MismatchedSeries { total: usize, principal: usize },

    #[error("invalid surface size: width={width}, height={height}")]
    InvalidSurface { width: f64, height: f64 },
}

/// Failures surfaced by the command-line and server entry points.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("unknown preset `{0}`")]
    UnknownPreset(String),

    #[error("{0}")]
    Locale(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
