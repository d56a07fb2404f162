use serde::{Deserialize, Serialize};

/// Outcome of one trial as seen by the experiment runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub run: u64,
    pub success: bool,
    pub elapsed_secs: f64,
    pub steps: Option<f64>,
    pub error: Option<String>,
}

/// Batch summary. Field names are consumed verbatim by report tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    #[serde(rename = "Total Runs")]
    pub total_runs: u64,
    #[serde(rename = "Successful Attacks")]
    pub successes: u64,
    #[serde(rename = "Unsuccessful Attacks")]
    pub failures: u64,
    #[serde(rename = "Total Time Taken")]
    pub total_time_secs: f64,
    #[serde(rename = "Average Time per Run")]
    pub average_time_secs: f64,
}

impl AggregateResult {
    pub fn from_records(total_runs: u64, records: &[TrialRecord]) -> Self {
        let successes = records.iter().filter(|r| r.success).count() as u64;
        let failures = records.len() as u64 - successes;
        let total_time_secs: f64 = records.iter().map(|r| r.elapsed_secs).sum();
        let average_time_secs = if total_runs > 0 {
            total_time_secs / total_runs as f64
        } else {
            0.0
        };

        Self {
            total_runs,
            successes,
            failures,
            total_time_secs,
            average_time_secs,
        }
    }

    /// Fraction of runs that compromised a sensitive host.
    pub fn success_rate(&self) -> f64 {
        if self.total_runs == 0 {
            0.0
        } else {
            self.successes as f64 / self.total_runs as f64
        }
    }
}
