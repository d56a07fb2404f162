use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Trial error: {0}")]
    Trial(#[from] TrialError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Fault raised while a single trial is running. The experiment runner
/// scores these as unsuccessful attacks instead of aborting the batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrialError {
    #[error("step counter overflowed at {steps} adding {cost}")]
    StepOverflow { steps: f64, cost: f64 },

    #[error("trial panicked: {0}")]
    Panicked(String),
}
