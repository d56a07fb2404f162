use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::errors::SimError;
use crate::models::{AggregateResult, TrialRecord};
use crate::simulation::Policy;

/// What `summary.json` holds for one batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub policy: Policy,
    pub seed: u64,
    pub config: String,
    pub started_at: String,
    pub completed_at: String,
    #[serde(flatten)]
    pub result: AggregateResult,
}

/// Writes batch artifacts into a log directory. Files are replaced
/// atomically so a crash never leaves a half-written summary.
pub struct ExperimentLedger {
    dir: PathBuf,
}

impl ExperimentLedger {
    pub async fn create(dir: &Path) -> Result<Self, SimError> {
        tokio::fs::create_dir_all(dir).await?;
        Ok(Self { dir: dir.to_path_buf() })
    }

    pub fn summary_path(&self) -> PathBuf {
        self.dir.join("summary.json")
    }

    pub fn trials_path(&self) -> PathBuf {
        self.dir.join("trials.json")
    }

    pub async fn write_summary(&self, summary: &BatchSummary) -> Result<(), SimError> {
        save_json(&self.summary_path(), summary).await
    }

    pub async fn write_trials(&self, records: &[TrialRecord]) -> Result<(), SimError> {
        save_json(&self.trials_path(), records).await
    }
}

async fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), SimError> {
    let tmp = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(&tmp, &json).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_summary_written_with_report_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ExperimentLedger::create(&dir.path().join("seeded")).await.unwrap();
        let summary = BatchSummary {
            policy: Policy::Seeded,
            seed: 7,
            config: "config/config0.yaml".to_string(),
            started_at: "2026-01-01T00:00:00Z".to_string(),
            completed_at: "2026-01-01T00:00:01Z".to_string(),
            result: AggregateResult::from_records(0, &[]),
        };
        ledger.write_summary(&summary).await.unwrap();

        let raw = std::fs::read_to_string(ledger.summary_path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["policy"], "seeded");
        assert_eq!(json["Total Runs"], 0);
        assert_eq!(json["Average Time per Run"], 0.0);
        assert!(!ledger.summary_path().with_extension("json.tmp").exists());

        let parsed: BatchSummary = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.seed, 7);
    }

    #[tokio::test]
    async fn test_trials_written() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ExperimentLedger::create(dir.path()).await.unwrap();
        let records = vec![TrialRecord {
            run: 1,
            success: true,
            elapsed_secs: 0.01,
            steps: Some(5.0),
            error: None,
        }];
        ledger.write_trials(&records).await.unwrap();
        let raw = std::fs::read_to_string(ledger.trials_path()).unwrap();
        let parsed: Vec<TrialRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].run, 1);
        assert!(parsed[0].success);
        assert_eq!(parsed[0].steps, Some(5.0));
        assert!((parsed[0].elapsed_secs - 0.01).abs() < 1e-12);
    }
}
