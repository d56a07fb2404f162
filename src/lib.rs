pub mod cli;
pub mod config;
pub mod errors;
pub mod experiment;
pub mod models;
pub mod reporting;
pub mod simulation;
pub mod utils;

pub use errors::{SimError, TrialError};
pub use experiment::{run_experiment, ExperimentRunner};
pub use models::{AggregateResult, NetworkModel, Verdict};
pub use simulation::{AttackSimulator, Policy};
