use std::collections::HashSet;
use rand::Rng;
use serde::Serialize;
use crate::errors::TrialError;
use crate::models::{AccessLevel, HostConfig, NetworkModel, NetworkState, SimulationBudget, Verdict};
use super::context::SimulationContext;
use super::events::AttackEvent;
use super::phase::TrialPhase;
use super::policy::Policy;
use tracing::debug;

/// Everything a finished trial leaves behind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialReport {
    pub policy: Policy,
    pub verdict: Verdict,
    pub state: NetworkState,
    pub events: Vec<AttackEvent>,
    pub steps: f64,
    /// Phase the trial was in when it stopped.
    pub ended_in: TrialPhase,
}

/// Runs single attack trials against a read-only network model.
pub struct AttackSimulator<'m> {
    model: &'m NetworkModel,
    policy: Policy,
    budget: SimulationBudget,
}

impl<'m> AttackSimulator<'m> {
    pub fn new(model: &'m NetworkModel, policy: Policy) -> Self {
        Self {
            model,
            policy,
            budget: *model.budget(),
        }
    }

    /// Override the scenario's step budget.
    pub fn with_budget(mut self, budget: SimulationBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Run one trial. All randomness comes from `rng`.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TrialReport, TrialError> {
        let trial = Trial {
            model: self.model,
            policy: self.policy,
            rng,
            ctx: SimulationContext::new(self.budget),
            state: NetworkState::new(),
            events: Vec::new(),
        };
        match self.policy {
            Policy::Seeded => trial.run_seeded(),
            Policy::Exhaustive => trial.run_exhaustive(),
        }
    }
}

struct Trial<'m, 'r, R: Rng + ?Sized> {
    model: &'m NetworkModel,
    policy: Policy,
    rng: &'r mut R,
    ctx: SimulationContext,
    state: NetworkState,
    events: Vec<AttackEvent>,
}

impl<'m, 'r, R: Rng + ?Sized> Trial<'m, 'r, R> {
    fn run_seeded(mut self) -> Result<TrialReport, TrialError> {
        let model = self.model;
        self.seed_initial_hosts();

        let mut visited: HashSet<&str> = HashSet::new();
        for host in model.initial_hosts() {
            if !visited.insert(host.as_str()) {
                debug!(host = %host, "Seed host already explored, skipping");
                continue;
            }
            if self.policy.uses_budget() && self.ctx.is_exhausted() {
                debug!(steps = self.ctx.steps(), "Step limit reached, ending exploration");
                self.events.push(AttackEvent::BudgetExhausted { steps: self.ctx.steps() });
                break;
            }

            let config = model.host(host);
            let budget = *self.ctx.budget();
            self.ctx.enter(TrialPhase::Scanning);
            self.ctx.charge(budget.service_scan_cost)?;
            let services = config.map(|h| h.services.as_slice()).unwrap_or_default();
            self.ctx.charge(budget.os_scan_cost)?;
            let os = config.map(|h| h.os.as_str()).unwrap_or_default();
            self.ctx.charge(budget.process_scan_cost)?;
            let processes = config.map(|h| h.processes.as_slice()).unwrap_or_default();
            self.events.push(AttackEvent::Scanned {
                host: host.clone(),
                services: services.len(),
                processes: processes.len(),
                steps: self.ctx.steps(),
            });

            let mut escalation_tried = false;
            for service in services {
                self.ctx.enter(TrialPhase::Exploiting);
                let Some(exploit) = model.find_exploit(service, os) else {
                    continue;
                };
                let success = self.draw(exploit.prob);
                self.events.push(AttackEvent::ExploitAttempted {
                    host: host.clone(),
                    exploit: exploit.name.clone(),
                    success,
                });
                if !success {
                    continue;
                }
                self.ctx.charge(exploit.cost)?;
                self.grant(host, exploit.access);
                debug!(host = %host, exploit = %exploit.name, access = %exploit.access, "Exploit succeeded");

                // One escalation pass per host, and only from user access
                if escalation_tried {
                    continue;
                }
                escalation_tried = true;
                self.ctx.enter(TrialPhase::Escalating);
                for process in processes {
                    if self.state.access(host) != AccessLevel::User {
                        break;
                    }
                    let Some(pe) = model.find_escalation(process, os) else {
                        continue;
                    };
                    let success = self.draw(pe.prob);
                    self.events.push(AttackEvent::EscalationAttempted {
                        host: host.clone(),
                        escalation: pe.name.clone(),
                        success,
                    });
                    if !success {
                        continue;
                    }
                    self.ctx.charge(pe.cost)?;
                    self.grant(host, pe.access);
                    debug!(host = %host, escalation = %pe.name, access = %pe.access, "Privilege escalation succeeded");
                    if model.is_sensitive(host) {
                        return Ok(self.finish(Verdict::Compromised, Some(host.clone())));
                    }
                }
            }
            debug!(host = %host, steps = self.ctx.steps(), "Completed scanning");
        }

        Ok(self.final_check())
    }

    fn run_exhaustive(mut self) -> Result<TrialReport, TrialError> {
        let model = self.model;
        self.seed_initial_hosts();

        self.ctx.enter(TrialPhase::Exploiting);
        let mut footholds: Vec<(&HostConfig, AccessLevel)> = Vec::new();
        for host in model.hosts() {
            for service in &host.services {
                let Some(exploit) = model.find_exploit(service, &host.os) else {
                    continue;
                };
                let success = self.draw(exploit.prob);
                self.events.push(AttackEvent::ExploitAttempted {
                    host: host.id.clone(),
                    exploit: exploit.name.clone(),
                    success,
                });
                if success {
                    debug!(host = %host.id, exploit = %exploit.name, "Exploit succeeded");
                    footholds.push((host, exploit.access));
                }
            }
        }

        self.ctx.enter(TrialPhase::Escalating);
        let mut escalated: HashSet<&str> = HashSet::new();
        for (host, access) in footholds {
            if access == AccessLevel::User && escalated.insert(host.id.as_str()) {
                if let Some(pe) = model.find_escalation_for_host(host) {
                    let success = self.draw(pe.prob);
                    self.events.push(AttackEvent::EscalationAttempted {
                        host: host.id.clone(),
                        escalation: pe.name.clone(),
                        success,
                    });
                    if success {
                        debug!(host = %host.id, escalation = %pe.name, "Privilege escalation succeeded");
                        self.grant(&host.id, AccessLevel::Root);
                    }
                }
            }

            if self.state.access(&host.id) == AccessLevel::Root && model.is_sensitive(&host.id) {
                return Ok(self.finish(Verdict::Compromised, Some(host.id.clone())));
            }
        }

        Ok(self.final_check())
    }

    fn seed_initial_hosts(&mut self) {
        for host in self.model.initial_hosts() {
            if self.state.status(host).is_some() {
                continue;
            }
            self.grant(host, AccessLevel::User);
            self.events.push(AttackEvent::Seeded { host: host.clone() });
        }
    }

    /// Bernoulli draw: succeeds with probability `prob`.
    fn draw(&mut self, prob: f64) -> bool {
        self.rng.gen::<f64>() < prob
    }

    fn grant(&mut self, host: &str, level: AccessLevel) {
        let from = self.state.access(host);
        let to = self.state.grant(host, level);
        if to != from {
            self.events.push(AttackEvent::AccessChanged {
                host: host.to_string(),
                from,
                to,
            });
        }
    }

    /// Any compromised sensitive host counts, whatever its access level.
    fn final_check(self) -> TrialReport {
        let hit = self
            .state
            .compromised_hosts()
            .find(|h| self.model.is_sensitive(h))
            .map(str::to_string);
        let verdict = Verdict::from_compromised(hit.is_some());
        self.finish(verdict, hit)
    }

    fn finish(mut self, verdict: Verdict, host: Option<String>) -> TrialReport {
        let ended_in = self.ctx.phase();
        self.ctx.enter(TrialPhase::Terminated);
        debug!(
            policy = %self.policy,
            verdict = %verdict,
            ended_in = %ended_in,
            host = host.as_deref().unwrap_or("-"),
            steps = self.ctx.steps(),
            "Trial finished"
        );
        self.events.push(AttackEvent::Finished { verdict, host });
        TrialReport {
            policy: self.policy,
            verdict,
            state: self.state,
            events: self.events,
            steps: self.ctx.steps(),
            ended_in,
        }
    }
}
