use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use super::budget::SimulationBudget;

/// Access an attacker holds on a host, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    #[default]
    None,
    User,
    Root,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::User => "user",
            Self::Root => "root",
        }
    }

    /// Parse an access level that a technique can grant. `none` is not grantable.
    pub fn parse_granted(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Some(Self::User),
            "root" => Some(Self::Root),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One modeled network node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostConfig {
    pub id: String,
    pub os: String,
    pub services: Vec<String>,
    pub processes: Vec<String>,
}

/// Remote technique matched by (service, os).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exploit {
    pub name: String,
    pub service: String,
    pub os: String,
    pub prob: f64,
    pub cost: f64,
    pub access: AccessLevel,
}

impl Exploit {
    pub fn matches(&self, service: &str, os: &str) -> bool {
        self.service == service && self.os == os
    }
}

/// Local technique matched by (process, os).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrivilegeEscalation {
    pub name: String,
    pub process: String,
    pub os: String,
    pub prob: f64,
    pub cost: f64,
    pub access: AccessLevel,
}

impl PrivilegeEscalation {
    pub fn matches(&self, process: &str, os: &str) -> bool {
        self.process == process && self.os == os
    }
}

/// Immutable scenario description shared read-only by every trial.
///
/// Hosts, exploits and escalations keep the order they were declared in;
/// technique lookup always returns the first match in that order.
#[derive(Debug, Clone)]
pub struct NetworkModel {
    hosts: Vec<HostConfig>,
    host_index: HashMap<String, usize>,
    exploits: Vec<Exploit>,
    escalations: Vec<PrivilegeEscalation>,
    sensitive_hosts: Vec<String>,
    sensitive_set: HashSet<String>,
    initial_hosts: Vec<String>,
    budget: SimulationBudget,
}

impl NetworkModel {
    pub fn new(
        hosts: Vec<HostConfig>,
        exploits: Vec<Exploit>,
        escalations: Vec<PrivilegeEscalation>,
        sensitive_hosts: Vec<String>,
        initial_hosts: Vec<String>,
        budget: SimulationBudget,
    ) -> Self {
        let host_index = hosts
            .iter()
            .enumerate()
            .map(|(i, h)| (h.id.clone(), i))
            .collect();
        let sensitive_set = sensitive_hosts.iter().cloned().collect();
        Self {
            hosts,
            host_index,
            exploits,
            escalations,
            sensitive_hosts,
            sensitive_set,
            initial_hosts,
            budget,
        }
    }

    pub fn hosts(&self) -> &[HostConfig] {
        &self.hosts
    }

    pub fn host(&self, id: &str) -> Option<&HostConfig> {
        self.host_index.get(id).map(|&i| &self.hosts[i])
    }

    pub fn exploits(&self) -> &[Exploit] {
        &self.exploits
    }

    pub fn escalations(&self) -> &[PrivilegeEscalation] {
        &self.escalations
    }

    pub fn sensitive_hosts(&self) -> &[String] {
        &self.sensitive_hosts
    }

    pub fn is_sensitive(&self, host: &str) -> bool {
        self.sensitive_set.contains(host)
    }

    pub fn initial_hosts(&self) -> &[String] {
        &self.initial_hosts
    }

    pub fn budget(&self) -> &SimulationBudget {
        &self.budget
    }

    /// Replace the seed host list, e.g. from a main-config override.
    pub fn with_initial_hosts(mut self, initial_hosts: Vec<String>) -> Self {
        self.initial_hosts = initial_hosts;
        self
    }

    pub fn find_exploit(&self, service: &str, os: &str) -> Option<&Exploit> {
        self.exploits.iter().find(|e| e.matches(service, os))
    }

    pub fn find_escalation(&self, process: &str, os: &str) -> Option<&PrivilegeEscalation> {
        self.escalations.iter().find(|p| p.matches(process, os))
    }

    /// First escalation whose process runs on `host` and whose OS matches it.
    pub fn find_escalation_for_host(&self, host: &HostConfig) -> Option<&PrivilegeEscalation> {
        self.escalations
            .iter()
            .find(|p| p.os == host.os && host.processes.iter().any(|proc| *proc == p.process))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exploit(name: &str, service: &str, os: &str) -> Exploit {
        Exploit {
            name: name.to_string(),
            service: service.to_string(),
            os: os.to_string(),
            prob: 0.5,
            cost: 1.0,
            access: AccessLevel::User,
        }
    }

    fn escalation(name: &str, process: &str, os: &str) -> PrivilegeEscalation {
        PrivilegeEscalation {
            name: name.to_string(),
            process: process.to_string(),
            os: os.to_string(),
            prob: 0.5,
            cost: 1.0,
            access: AccessLevel::Root,
        }
    }

    fn model() -> NetworkModel {
        let hosts = vec![HostConfig {
            id: "(1, 0)".to_string(),
            os: "linux".to_string(),
            services: vec!["ssh".to_string()],
            processes: vec!["cron".to_string(), "tomcat".to_string()],
        }];
        NetworkModel::new(
            hosts,
            vec![exploit("e_ssh_win", "ssh", "windows"), exploit("e_ssh", "ssh", "linux"), exploit("e_ssh_2", "ssh", "linux")],
            vec![escalation("pe_tomcat", "tomcat", "linux"), escalation("pe_cron", "cron", "linux")],
            vec!["(1, 0)".to_string()],
            vec!["(1, 0)".to_string()],
            SimulationBudget::default(),
        )
    }

    #[test]
    fn test_access_level_ordering() {
        assert!(AccessLevel::None < AccessLevel::User);
        assert!(AccessLevel::User < AccessLevel::Root);
        assert_eq!(AccessLevel::default(), AccessLevel::None);
    }

    #[test]
    fn test_parse_granted_rejects_none() {
        assert_eq!(AccessLevel::parse_granted("user"), Some(AccessLevel::User));
        assert_eq!(AccessLevel::parse_granted(" ROOT "), Some(AccessLevel::Root));
        assert_eq!(AccessLevel::parse_granted("none"), None);
        assert_eq!(AccessLevel::parse_granted("admin"), None);
    }

    #[test]
    fn test_find_exploit_takes_first_match() {
        let model = model();
        let found = model.find_exploit("ssh", "linux").unwrap();
        assert_eq!(found.name, "e_ssh");
        assert!(model.find_exploit("ftp", "linux").is_none());
    }

    #[test]
    fn test_find_escalation_by_process() {
        let model = model();
        assert_eq!(model.find_escalation("cron", "linux").unwrap().name, "pe_cron");
        assert!(model.find_escalation("cron", "windows").is_none());
    }

    #[test]
    fn test_find_escalation_for_host_uses_declaration_order() {
        let model = model();
        let host = model.host("(1, 0)").unwrap();
        // pe_tomcat is declared first even though cron is listed first on the host
        assert_eq!(model.find_escalation_for_host(host).unwrap().name, "pe_tomcat");
    }

    #[test]
    fn test_sensitive_lookup() {
        let model = model();
        assert!(model.is_sensitive("(1, 0)"));
        assert!(!model.is_sensitive("(2, 0)"));
        assert!(model.host("(9, 9)").is_none());
    }
}
