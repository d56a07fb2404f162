use serde::{Deserialize, Serialize};
use crate::models::AggregateResult;
use crate::simulation::Policy;

pub const NOT_AVAILABLE: &str = "N/A";

/// One report column value. Missing batches render as `N/A`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Count(u64),
    Seconds(f64),
    Missing(String),
}

impl Cell {
    fn missing() -> Self {
        Cell::Missing(NOT_AVAILABLE.to_string())
    }

    /// Seconds rounded to four decimals.
    fn seconds(secs: f64) -> Self {
        Cell::Seconds((secs * 10_000.0).round() / 10_000.0)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Count(n) => write!(f, "{}", n),
            Cell::Seconds(s) => write!(f, "{:.4}", s),
            Cell::Missing(s) => f.write_str(s),
        }
    }
}

/// One (config, policy) line of a sweep report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Iteration")]
    pub iteration: usize,
    #[serde(rename = "Datestamp")]
    pub datestamp: String,
    #[serde(rename = "Approach")]
    pub approach: String,
    #[serde(rename = "Total Runs")]
    pub total_runs: Cell,
    #[serde(rename = "Successful Attacks")]
    pub successes: Cell,
    #[serde(rename = "Unsuccessful Attacks")]
    pub failures: Cell,
    #[serde(rename = "Total Time Taken (s)")]
    pub total_time: Cell,
    #[serde(rename = "Average Time per Run (s)")]
    pub average_time: Cell,
}

impl ReportRow {
    pub fn new(
        iteration: usize,
        datestamp: &str,
        policy: Policy,
        result: Option<&AggregateResult>,
    ) -> Self {
        let (total_runs, successes, failures, total_time, average_time) = match result {
            Some(r) => (
                Cell::Count(r.total_runs),
                Cell::Count(r.successes),
                Cell::Count(r.failures),
                Cell::seconds(r.total_time_secs),
                Cell::seconds(r.average_time_secs),
            ),
            None => (
                Cell::missing(),
                Cell::missing(),
                Cell::missing(),
                Cell::missing(),
                Cell::missing(),
            ),
        };

        Self {
            iteration,
            datestamp: datestamp.to_string(),
            approach: policy.approach_label().to_string(),
            total_runs,
            successes,
            failures,
            total_time,
            average_time,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self.total_runs, Cell::Missing(_))
    }
}
