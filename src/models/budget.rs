use serde::{Deserialize, Serialize};

pub const DEFAULT_STEP_LIMIT: f64 = 1000.0;
pub const DEFAULT_SCAN_COST: f64 = 1.0;

/// Cost ceiling and per-scan prices for one seeded trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationBudget {
    pub step_limit: f64,
    pub service_scan_cost: f64,
    pub os_scan_cost: f64,
    pub process_scan_cost: f64,
}

impl Default for SimulationBudget {
    fn default() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
            service_scan_cost: DEFAULT_SCAN_COST,
            os_scan_cost: DEFAULT_SCAN_COST,
            process_scan_cost: DEFAULT_SCAN_COST,
        }
    }
}
