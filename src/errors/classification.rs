use super::types::SimError;

/// Where an error stops: the whole batch, or only the trial that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorScope {
    Batch,
    Trial,
}

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub scope: ErrorScope,
}

impl SimError {
    /// Classify this error to determine its type and how far it propagates.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            SimError::Trial(_) => ErrorClassification {
                error_type: "TrialError",
                scope: ErrorScope::Trial,
            },

            // Everything else happens at load/report time and ends the batch
            SimError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                scope: ErrorScope::Batch,
            },
            SimError::Io(_) => ErrorClassification {
                error_type: "IoError",
                scope: ErrorScope::Batch,
            },
            SimError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                scope: ErrorScope::Batch,
            },
            SimError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                scope: ErrorScope::Batch,
            },
        }
    }

    /// Process exit code used by the binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            SimError::Config(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TrialError;

    #[test]
    fn test_config_error_is_batch_scoped() {
        let err = SimError::Config("missing network_config_file".into());
        let class = err.classify();
        assert_eq!(class.scope, ErrorScope::Batch);
        assert_eq!(class.error_type, "ConfigError");
    }

    #[test]
    fn test_trial_error_is_trial_scoped() {
        let err = SimError::from(TrialError::StepOverflow { steps: f64::MAX, cost: f64::MAX });
        let class = err.classify();
        assert_eq!(class.scope, ErrorScope::Trial);
        assert_eq!(class.error_type, "TrialError");
    }

    #[test]
    fn test_config_error_exit_code() {
        let err = SimError::Config("Failed to read scenario.yaml: stream did not contain valid UTF-8".into());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_io_error_exit_code() {
        let err = SimError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert_eq!(err.exit_code(), 1);
    }
}
