use serde::{Deserialize, Serialize};

/// Default seed hosts: the attacker's beachhead in the stock scenarios.
pub const DEFAULT_INITIAL_HOSTS: &[&str] = &["(1, 0)", "(2, 0)"];

/// Top-level experiment config. Points at the scenario file to simulate.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct MainConfig {
    pub network_config_file: Option<String>,
    pub seed: Option<u64>,
    pub initial_hosts: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct HostRecord {
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub processes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExploitRecord {
    pub service: String,
    pub os: String,
    #[serde(default)]
    pub prob: f64,
    #[serde(default = "default_cost")]
    pub cost: f64,
    #[serde(default = "default_exploit_access")]
    pub access: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EscalationRecord {
    pub process: String,
    pub os: String,
    #[serde(default)]
    pub prob: f64,
    #[serde(default = "default_cost")]
    pub cost: f64,
    #[serde(default = "default_escalation_access")]
    pub access: String,
}

/// Scalar scenario settings. Technique and host tables are walked by hand
/// so their declaration order survives.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioSettings {
    #[serde(default)]
    pub sensitive_hosts: Vec<String>,
    pub initial_hosts: Option<Vec<String>>,
    #[serde(default = "default_cost")]
    pub service_scan_cost: f64,
    #[serde(default = "default_cost")]
    pub os_scan_cost: f64,
    #[serde(default = "default_cost")]
    pub process_scan_cost: f64,
    #[serde(default = "default_step_limit")]
    pub step_limit: f64,
}

fn default_cost() -> f64 {
    crate::models::DEFAULT_SCAN_COST
}

fn default_step_limit() -> f64 {
    crate::models::DEFAULT_STEP_LIMIT
}

fn default_exploit_access() -> String {
    "user".to_string()
}

fn default_escalation_access() -> String {
    "root".to_string()
}
