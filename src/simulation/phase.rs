use serde::{Deserialize, Serialize};

/// Where a trial is in its scan, exploit, escalate sequence.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TrialPhase {
    #[default]
    Init,
    Scanning,
    Exploiting,
    Escalating,
    Terminated,
}

impl std::fmt::Display for TrialPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::Scanning => write!(f, "scanning"),
            Self::Exploiting => write!(f, "exploiting"),
            Self::Escalating => write!(f, "escalating"),
            Self::Terminated => write!(f, "terminated"),
        }
    }
}
