pub mod driver;
pub mod ledger;
pub mod observer;
pub mod runner;

pub use driver::{run_experiment, run_experiment_with, ExperimentOptions};
pub use ledger::{BatchSummary, ExperimentLedger};
pub use observer::{NoopObserver, TrialObserver};
pub use runner::{run_batch, BatchOutcome, ExperimentRunner, TrialSignal};
