use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Traversal strategy for a trial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Explore outward from the seed hosts under the step budget.
    #[default]
    Seeded,
    /// Single pass over every host and service with unlimited reconnaissance.
    Exhaustive,
}

impl Policy {
    pub const ALL: [Policy; 2] = [Policy::Seeded, Policy::Exhaustive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seeded => "seeded",
            Self::Exhaustive => "exhaustive",
        }
    }

    /// Label used in sweep reports.
    pub fn approach_label(&self) -> &'static str {
        match self {
            Self::Seeded => "Approach 1 (Manual Attack)",
            Self::Exhaustive => "Approach 3 (Privilege Escalation)",
        }
    }

    pub fn uses_budget(&self) -> bool {
        matches!(self, Self::Seeded)
    }
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seeded" | "a" | "manual" => Ok(Self::Seeded),
            "exhaustive" | "b" | "escalation" => Ok(Self::Exhaustive),
            other => Err(format!("unknown policy '{}': expected 'seeded' or 'exhaustive'", other)),
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!("seeded".parse::<Policy>().unwrap(), Policy::Seeded);
        assert_eq!("Exhaustive".parse::<Policy>().unwrap(), Policy::Exhaustive);
        assert_eq!("b".parse::<Policy>().unwrap(), Policy::Exhaustive);
        assert!("random".parse::<Policy>().is_err());
    }

    #[test]
    fn test_policy_default_and_budget() {
        assert_eq!(Policy::default(), Policy::Seeded);
        assert!(Policy::Seeded.uses_budget());
        assert!(!Policy::Exhaustive.uses_budget());
    }

    #[test]
    fn test_policy_serialization() {
        let json = serde_json::to_string(&Policy::Exhaustive).unwrap();
        assert_eq!(json, "\"exhaustive\"");
        assert_eq!(format!("{}", Policy::Seeded), "seeded");
    }
}
