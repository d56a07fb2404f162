use std::path::PathBuf;
use console::style;
use crate::cli::commands::RunArgs;
use crate::cli::progress::TrialProgress;
use crate::errors::SimError;
use crate::experiment::{run_experiment_with, ExperimentOptions, NoopObserver, TrialObserver};
use crate::reporting::formatter::format_summary;
use crate::simulation::Policy;
use tracing::info;

pub async fn handle_run(args: RunArgs, quiet: bool) -> Result<(), SimError> {
    let policy: Policy = args.policy.parse().map_err(SimError::Config)?;
    let log_dir = PathBuf::from(&args.log_dir).join(policy.as_str());
    let options = ExperimentOptions { policy, seed: args.seed };

    let mut progress = TrialProgress::new(policy.approach_label());
    let mut noop = NoopObserver;
    let observer: &mut dyn TrialObserver = if quiet || args.json { &mut noop } else { &mut progress };

    let outcome = run_experiment_with(
        args.trials,
        &PathBuf::from(&args.config),
        &log_dir,
        &options,
        observer,
    )
    .await?;

    info!(
        policy = %policy,
        seed = outcome.seed,
        log_dir = %log_dir.display(),
        "Run finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.result)?);
    } else if !quiet {
        let title = format!("{} Experiment Summary", policy.approach_label());
        println!("{}", style(format_summary(&title, &outcome.result)).bold());
        println!("Seed: {} (replay with --seed {})", outcome.seed, outcome.seed);
    }
    Ok(())
}
