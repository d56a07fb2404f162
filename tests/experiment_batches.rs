use breachsim::experiment::{run_experiment, run_experiment_with, ExperimentOptions, NoopObserver};
use breachsim::models::AggregateResult;
use breachsim::simulation::Policy;
use breachsim::SimError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SCENARIO: &str = r#"
host_configurations:
  "(1, 0)": { os: linux, services: [ssh, http], processes: [tomcat] }
  "(2, 0)": { os: windows, services: [smb], processes: [schtask] }
  "(3, 0)": { os: linux, services: [ssh], processes: [tomcat] }
exploits:
  e_ssh: { service: ssh, os: linux, prob: 0.6, cost: 2 }
  e_http: { service: http, os: linux, prob: 0.3 }
  e_smb: { service: smb, os: windows, prob: 0.5, cost: 3 }
privilege_escalation:
  pe_tomcat: { process: tomcat, os: linux, prob: 0.4 }
  pe_schtask: { process: schtask, os: windows, prob: 0.7 }
sensitive_hosts: ["(3, 0)"]
service_scan_cost: 1
os_scan_cost: 2
process_scan_cost: 1
step_limit: 50
"#;

fn create_fixture(dir: &TempDir) -> PathBuf {
    fs::write(dir.path().join("scenario.yaml"), SCENARIO).unwrap();
    let main = dir.path().join("config.yaml");
    fs::write(&main, "network_config_file: scenario.yaml\nseed: 17\n").unwrap();
    main
}

#[tokio::test]
async fn test_batch_counts_are_consistent() {
    let dir = TempDir::new().unwrap();
    let main = create_fixture(&dir);

    for policy in Policy::ALL {
        for n in [0u64, 1, 25] {
            let options = ExperimentOptions { policy, seed: None };
            let outcome = run_experiment_with(n, &main, &dir.path().join("logs"), &options, &mut NoopObserver)
                .await
                .unwrap();
            assert_eq!(outcome.result.total_runs, n);
            assert_eq!(outcome.result.successes + outcome.result.failures, n);
            if n == 0 {
                assert_eq!(outcome.result.average_time_secs, 0.0);
            }
        }
    }
}

#[tokio::test]
async fn test_same_config_seed_replays_batch() {
    let dir = TempDir::new().unwrap();
    let main = create_fixture(&dir);
    let options = ExperimentOptions { policy: Policy::Exhaustive, seed: None };

    let first = run_experiment_with(30, &main, &dir.path().join("a"), &options, &mut NoopObserver)
        .await
        .unwrap();
    let second = run_experiment_with(30, &main, &dir.path().join("b"), &options, &mut NoopObserver)
        .await
        .unwrap();

    let a: Vec<bool> = first.records.iter().map(|r| r.success).collect();
    let b: Vec<bool> = second.records.iter().map(|r| r.success).collect();
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_summary_file_matches_returned_result() {
    let dir = TempDir::new().unwrap();
    let main = create_fixture(&dir);
    let log_dir = dir.path().join("logs").join("approach1_logs");

    let result = run_experiment(12, &main, &log_dir).await.unwrap();

    let raw = fs::read_to_string(log_dir.join("summary.json")).unwrap();
    let on_disk: AggregateResult = serde_json::from_str(&raw).unwrap();
    assert_eq!(on_disk.total_runs, result.total_runs);
    assert_eq!(on_disk.successes, result.successes);
    assert_eq!(on_disk.failures, result.failures);
    assert!((on_disk.total_time_secs - result.total_time_secs).abs() < 1e-9);

    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    for key in [
        "Total Runs",
        "Successful Attacks",
        "Unsuccessful Attacks",
        "Total Time Taken",
        "Average Time per Run",
    ] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
}

#[tokio::test]
async fn test_missing_pointer_yields_no_result() {
    let dir = TempDir::new().unwrap();
    let main = dir.path().join("config.yaml");
    fs::write(&main, "seed: 1\n").unwrap();

    let err = run_experiment(5, &main, &dir.path().join("logs")).await.unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}
