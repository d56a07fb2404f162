use serde::{Deserialize, Serialize};

/// Terminal outcome of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// A sensitive host was compromised.
    Compromised,
    NotCompromised,
}

impl Verdict {
    pub fn from_compromised(compromised: bool) -> Self {
        if compromised {
            Verdict::Compromised
        } else {
            Verdict::NotCompromised
        }
    }

    pub fn is_compromised(&self) -> bool {
        matches!(self, Verdict::Compromised)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compromised => write!(f, "compromised"),
            Self::NotCompromised => write!(f, "not compromised"),
        }
    }
}
