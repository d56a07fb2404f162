use crate::models::{AggregateResult, TrialRecord};

/// Hook for watching a batch as it runs. All methods default to no-ops.
pub trait TrialObserver {
    fn batch_started(&mut self, _total: u64) {}
    fn trial_finished(&mut self, _record: &TrialRecord) {}
    fn batch_finished(&mut self, _result: &AggregateResult) {}
}

pub struct NoopObserver;

impl TrialObserver for NoopObserver {}
