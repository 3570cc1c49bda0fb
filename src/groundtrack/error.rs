use strum_macros::{AsRefStr, Display};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid {field} time '{value}': {message}")]
    InvalidTime {
        field: &'static str,
        value: String,
        message: String,
    },
    #[error("invalid increment {field} '{value}'")]
    InvalidIncrement { field: &'static str, value: String },
    #[error("invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),
    #[error("end time must be after start time")]
    EndNotAfterStart,
    #[error("time increment must be greater than 0")]
    IncrementNotPositive,
    #[error("time increment is larger than the time window")]
    IncrementExceedsWindow,
}

#[derive(Debug, Error)]
pub enum PropagationError {
    #[error("invalid TLE: {0}")]
    InvalidTle(String),
    #[error("invalid orbital elements: {0}")]
    InvalidElements(String),
    #[error("epoch {epoch} is out of range: {message}")]
    Epoch { epoch: f64, message: String },
    #[error("propagation failed at epoch {epoch}: {message}")]
    Propagation { epoch: f64, message: String },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Stage a plot request failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum FailureDomain {
    Validation,
    Propagation,
    Rendering,
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Propagation(#[from] PropagationError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl PlotError {
    pub fn domain(&self) -> FailureDomain {
        match self {
            PlotError::Validation(_) => FailureDomain::Validation,
            PlotError::Propagation(_) => FailureDomain::Propagation,
            PlotError::Render(_) => FailureDomain::Rendering,
        }
    }
}
