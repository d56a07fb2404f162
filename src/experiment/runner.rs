use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use crate::errors::TrialError;
use crate::models::{AggregateResult, NetworkModel, SimulationBudget, TrialRecord};
use crate::simulation::{AttackSimulator, Policy};
use super::observer::{NoopObserver, TrialObserver};
use tracing::{debug, error, info};

/// Per-trial records plus the batch aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub seed: u64,
    pub result: AggregateResult,
    pub records: Vec<TrialRecord>,
}

/// Outcome of one trial body: the success signal and, when known, the steps spent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialSignal {
    pub success: bool,
    pub steps: Option<f64>,
}

impl From<bool> for TrialSignal {
    fn from(success: bool) -> Self {
        Self { success, steps: None }
    }
}

/// Run `trial_count` independent trials sequentially.
///
/// Trial `run` (1-based) gets its own generator seeded with `seed + run`.
/// A trial that returns an error or panics is logged and scored as an
/// unsuccessful attack; the batch always completes.
pub fn run_batch<F>(
    trial_count: u64,
    seed: u64,
    observer: &mut dyn TrialObserver,
    mut trial: F,
) -> BatchOutcome
where
    F: FnMut(u64, &mut ChaCha8Rng) -> Result<TrialSignal, TrialError>,
{
    observer.batch_started(trial_count);
    let mut records = Vec::with_capacity(trial_count.min(1 << 20) as usize);

    for run in 1..=trial_count {
        debug!(run, total = trial_count, "Starting run");
        let start = Instant::now();
        let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(run));

        let outcome = catch_unwind(AssertUnwindSafe(|| trial(run, &mut rng)))
            .unwrap_or_else(|payload| Err(TrialError::Panicked(panic_message(payload.as_ref()))));
        let elapsed_secs = start.elapsed().as_secs_f64();

        let record = match outcome {
            Ok(signal) => {
                debug!(run, success = signal.success, elapsed_secs, "Run completed");
                TrialRecord {
                    run,
                    success: signal.success,
                    elapsed_secs,
                    steps: signal.steps,
                    error: None,
                }
            }
            Err(e) => {
                error!(run, error = %e, elapsed_secs, "Run failed");
                TrialRecord {
                    run,
                    success: false,
                    elapsed_secs,
                    steps: None,
                    error: Some(e.to_string()),
                }
            }
        };
        observer.trial_finished(&record);
        records.push(record);
    }

    let result = AggregateResult::from_records(trial_count, &records);
    observer.batch_finished(&result);

    BatchOutcome { seed, result, records }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Repeats attack-simulation trials over one model and policy.
pub struct ExperimentRunner<'m> {
    model: &'m NetworkModel,
    policy: Policy,
    budget: SimulationBudget,
    seed: u64,
}

impl<'m> ExperimentRunner<'m> {
    /// Runner with a random batch seed; see [`ExperimentRunner::with_seed`].
    pub fn new(model: &'m NetworkModel, policy: Policy) -> Self {
        Self {
            model,
            policy,
            budget: *model.budget(),
            seed: rand::random(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_budget(mut self, budget: SimulationBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn run(&self, trial_count: u64) -> BatchOutcome {
        self.run_observed(trial_count, &mut NoopObserver)
    }

    pub fn run_observed(&self, trial_count: u64, observer: &mut dyn TrialObserver) -> BatchOutcome {
        info!(
            policy = %self.policy,
            trials = trial_count,
            seed = self.seed,
            step_limit = self.budget.step_limit,
            "Starting experiment"
        );
        let simulator = AttackSimulator::new(self.model, self.policy).with_budget(self.budget);
        let outcome = run_batch(trial_count, self.seed, observer, |_, rng| {
            let report = simulator.run(rng)?;
            Ok(TrialSignal {
                success: report.verdict.is_compromised(),
                steps: Some(report.steps),
            })
        });
        info!(
            policy = %self.policy,
            total_runs = outcome.result.total_runs,
            successes = outcome.result.successes,
            failures = outcome.result.failures,
            total_time_secs = outcome.result.total_time_secs,
            average_time_secs = outcome.result.average_time_secs,
            "Experiment summary"
        );
        outcome
    }
}
