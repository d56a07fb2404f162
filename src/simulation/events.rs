use serde::{Deserialize, Serialize};
use crate::models::{AccessLevel, Verdict};

/// One entry in a trial's attack trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AttackEvent {
    Seeded { host: String },
    Scanned { host: String, services: usize, processes: usize, steps: f64 },
    ExploitAttempted { host: String, exploit: String, success: bool },
    EscalationAttempted { host: String, escalation: String, success: bool },
    AccessChanged { host: String, from: AccessLevel, to: AccessLevel },
    BudgetExhausted { steps: f64 },
    Finished { verdict: Verdict, host: Option<String> },
}
