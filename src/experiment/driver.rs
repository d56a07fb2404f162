use std::path::Path;
use chrono::Utc;
use crate::config::load_experiment;
use crate::errors::SimError;
use crate::models::AggregateResult;
use crate::simulation::Policy;
use super::ledger::{BatchSummary, ExperimentLedger};
use super::observer::{NoopObserver, TrialObserver};
use super::runner::{BatchOutcome, ExperimentRunner};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct ExperimentOptions {
    pub policy: Policy,
    /// Batch seed. Falls back to the main config's `seed`, then to a random one.
    pub seed: Option<u64>,
}

/// Run `master_number` seeded-policy trials for the main config at `config_path`,
/// writing the batch ledger into `log_dir`.
pub async fn run_experiment(
    master_number: u64,
    config_path: &Path,
    log_dir: &Path,
) -> Result<AggregateResult, SimError> {
    let outcome = run_experiment_with(
        master_number,
        config_path,
        log_dir,
        &ExperimentOptions::default(),
        &mut NoopObserver,
    )
    .await?;
    Ok(outcome.result)
}

/// Load, run and record one batch.
///
/// Config problems surface as [`SimError::Config`] before any trial runs;
/// trial faults never do.
pub async fn run_experiment_with(
    master_number: u64,
    config_path: &Path,
    log_dir: &Path,
    options: &ExperimentOptions,
    observer: &mut dyn TrialObserver,
) -> Result<BatchOutcome, SimError> {
    let ledger = ExperimentLedger::create(log_dir).await?;
    let (main, model) = load_experiment(config_path).await?;

    let seed = options.seed.or(main.seed).unwrap_or_else(rand::random);
    let started_at = Utc::now().to_rfc3339();
    info!(
        config = %config_path.display(),
        policy = %options.policy,
        seed,
        trials = master_number,
        "Running experiment"
    );

    let outcome = ExperimentRunner::new(&model, options.policy)
        .with_seed(seed)
        .run_observed(master_number, observer);

    let summary = BatchSummary {
        policy: options.policy,
        seed,
        config: config_path.display().to_string(),
        started_at,
        completed_at: Utc::now().to_rfc3339(),
        result: outcome.result.clone(),
    };
    ledger.write_summary(&summary).await?;
    ledger.write_trials(&outcome.records).await?;

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"
host_configurations:
  "(1,0)": { os: linux, services: [ssh], processes: [sshd] }
exploits:
  e_ssh: { service: ssh, os: linux, prob: 1.0, cost: 1, access: user }
privilege_escalation:
  pe_sshd: { process: sshd, os: linux, prob: 1.0, cost: 1, access: root }
sensitive_hosts: ["(1,0)"]
initial_hosts: ["(1,0)"]
step_limit: 100
"#;

    fn write_configs(dir: &Path) -> std::path::PathBuf {
        std::fs::write(dir.join("scenario.yaml"), SCENARIO).unwrap();
        let main = dir.join("config.yaml");
        std::fs::write(&main, "network_config_file: scenario.yaml\nseed: 3\n").unwrap();
        main
    }

    #[tokio::test]
    async fn test_run_experiment_writes_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let main = write_configs(dir.path());
        let log_dir = dir.path().join("logs").join("approach1");

        let result = run_experiment(10, &main, &log_dir).await.unwrap();
        assert_eq!(result.total_runs, 10);
        assert_eq!(result.successes, 10);
        assert_eq!(result.failures, 0);
        assert!(log_dir.join("summary.json").exists());
        assert!(log_dir.join("trials.json").exists());
    }

    #[tokio::test]
    async fn test_config_seed_used_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        let main = write_configs(dir.path());
        let options = ExperimentOptions { policy: Policy::Exhaustive, seed: None };
        let outcome = run_experiment_with(2, &main, &dir.path().join("logs"), &options, &mut NoopObserver)
            .await
            .unwrap();
        assert_eq!(outcome.seed, 3);

        let options = ExperimentOptions { policy: Policy::Exhaustive, seed: Some(8) };
        let outcome = run_experiment_with(2, &main, &dir.path().join("logs"), &options, &mut NoopObserver)
            .await
            .unwrap();
        assert_eq!(outcome.seed, 8);
    }

    #[tokio::test]
    async fn test_missing_config_returns_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_experiment(5, &dir.path().join("absent.yaml"), &dir.path().join("logs"))
            .await
            .unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
        assert!(!dir.path().join("logs").join("summary.json").exists());
    }
}
