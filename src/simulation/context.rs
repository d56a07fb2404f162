use crate::errors::TrialError;
use crate::models::SimulationBudget;
use super::phase::TrialPhase;

/// Step accounting for one trial, threaded explicitly through the engine.
#[derive(Debug, Clone)]
pub struct SimulationContext {
    budget: SimulationBudget,
    steps: f64,
    phase: TrialPhase,
}

impl SimulationContext {
    pub fn new(budget: SimulationBudget) -> Self {
        Self {
            budget,
            steps: 0.0,
            phase: TrialPhase::Init,
        }
    }

    pub fn budget(&self) -> &SimulationBudget {
        &self.budget
    }

    pub fn steps(&self) -> f64 {
        self.steps
    }

    pub fn phase(&self) -> TrialPhase {
        self.phase
    }

    pub fn enter(&mut self, phase: TrialPhase) {
        self.phase = phase;
    }

    /// Add `cost` to the step counter. Returns the new total. A total that is
    /// no longer finite leaves the counter untouched.
    pub fn charge(&mut self, cost: f64) -> Result<f64, TrialError> {
        let total = self.steps + cost;
        if !total.is_finite() {
            return Err(TrialError::StepOverflow { steps: self.steps, cost });
        }
        self.steps = total;
        Ok(total)
    }

    /// True once the counter has reached the step limit.
    pub fn is_exhausted(&self) -> bool {
        self.steps >= self.budget.step_limit
    }
}
