use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "breachsim", version, about = "Stochastic attack simulation over modeled networks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress bars and summaries
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a batch of trials for one policy
    Run(RunArgs),
    /// Run every policy across a set of main configs and write a report
    Sweep(SweepArgs),
    /// Validate a main config and the scenario it points at
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct RunArgs {
    /// Main YAML config (must set network_config_file)
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: String,

    /// Number of trials
    #[arg(short = 'n', long, default_value = "1000")]
    pub trials: u64,

    /// Traversal policy: seeded, exhaustive
    #[arg(short, long, default_value = "seeded")]
    pub policy: String,

    /// Directory for batch logs
    #[arg(long, default_value = "logs")]
    pub log_dir: String,

    /// Batch seed for reproducible runs (overrides the config's seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct SweepArgs {
    /// Glob matching main config files
    #[arg(long, default_value = "config/config*.yaml")]
    pub configs: String,

    /// Trials per policy per config
    #[arg(short = 'n', long, default_value = "100")]
    pub trials: u64,

    /// Comma-separated policies to run (default: all)
    #[arg(long)]
    pub policies: Option<String>,

    /// Directory for batch logs
    #[arg(long, default_value = "logs")]
    pub log_dir: String,

    /// Directory for the sweep report
    #[arg(long, default_value = "reports")]
    pub report_dir: String,

    /// Batch seed applied to every run
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Main config file to validate
    pub config: String,
}
