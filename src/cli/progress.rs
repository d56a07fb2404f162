use indicatif::{ProgressBar, ProgressStyle};
use crate::experiment::TrialObserver;
use crate::models::{AggregateResult, TrialRecord};

/// Progress bar over the trials of one batch.
pub struct TrialProgress {
    label: String,
    bar: Option<ProgressBar>,
    successes: u64,
    failed: u64,
}

impl TrialProgress {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            bar: None,
            successes: 0,
            failed: 0,
        }
    }
}

impl TrialObserver for TrialProgress {
    fn batch_started(&mut self, total: u64) {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("  {bar:30.cyan/dark_gray} {pos}/{len} runs | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        bar.set_message(self.label.clone());
        self.bar = Some(bar);
    }

    fn trial_finished(&mut self, record: &TrialRecord) {
        if record.success {
            self.successes += 1;
        }
        if record.error.is_some() {
            self.failed += 1;
        }
        if let Some(bar) = &self.bar {
            bar.set_message(format!(
                "{} | {} compromised | {} faulted",
                self.label, self.successes, self.failed
            ));
            bar.inc(1);
        }
    }

    fn batch_finished(&mut self, _result: &AggregateResult) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
