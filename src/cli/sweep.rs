use std::path::{Path, PathBuf};
use chrono::Local;
use console::style;
use crate::cli::commands::SweepArgs;
use crate::cli::progress::TrialProgress;
use crate::errors::{ErrorScope, SimError};
use crate::experiment::{run_experiment_with, ExperimentOptions, NoopObserver, TrialObserver};
use crate::reporting::{write_report, ReportRow};
use crate::simulation::Policy;
use tracing::{info, warn};

pub async fn handle_sweep(args: SweepArgs, quiet: bool) -> Result<(), SimError> {
    let policies = parse_policies(args.policies.as_deref())?;
    let configs = expand_configs(&args.configs)?;
    if configs.is_empty() {
        return Err(SimError::Config(format!("No config files match '{}'", args.configs)));
    }
    info!(configs = configs.len(), policies = policies.len(), trials = args.trials, "Starting sweep");

    let mut rows = Vec::new();
    for (iteration, config) in configs.iter().enumerate() {
        let datestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let stem = config
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("config")
            .to_string();

        for policy in &policies {
            let log_dir = PathBuf::from(&args.log_dir).join(&stem).join(policy.as_str());
            let options = ExperimentOptions { policy: *policy, seed: args.seed };
            let mut progress = TrialProgress::new(&format!("{} {}", stem, policy.approach_label()));
            let mut noop = NoopObserver;
            let observer: &mut dyn TrialObserver = if quiet { &mut noop } else { &mut progress };

            let result = match run_experiment_with(args.trials, config, &log_dir, &options, observer).await {
                Ok(outcome) => Some(outcome.result),
                Err(e) if e.classify().scope == ErrorScope::Batch => {
                    warn!(config = %config.display(), policy = %policy, error = %e, "Experiment did not return any results");
                    None
                }
                Err(e) => return Err(e),
            };
            rows.push(ReportRow::new(iteration, &datestamp, *policy, result.as_ref()));
        }
    }

    let paths = write_report(Path::new(&args.report_dir), &rows).await?;
    if !quiet {
        let missing = rows.iter().filter(|r| r.is_missing()).count();
        println!(
            "{} Simulation report saved to {} ({} rows, {} without results)",
            style("✓").green(),
            style(paths.json.display()).cyan(),
            rows.len(),
            missing
        );
    }
    Ok(())
}

fn parse_policies(raw: Option<&str>) -> Result<Vec<Policy>, SimError> {
    match raw {
        None => Ok(Policy::ALL.to_vec()),
        Some(list) => list
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.parse::<Policy>().map_err(SimError::Config))
            .collect(),
    }
}

fn expand_configs(pattern: &str) -> Result<Vec<PathBuf>, SimError> {
    let mut configs = Vec::new();
    for entry in glob::glob(pattern)
        .map_err(|e| SimError::Config(format!("Invalid glob pattern: {}", e)))?
    {
        let path = entry.map_err(|e| SimError::Config(format!("Glob error: {}", e)))?;
        configs.push(path);
    }
    configs.sort();
    Ok(configs)
}
