use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use super::network::AccessLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostStatus {
    pub compromised: bool,
    pub access: AccessLevel,
}

/// Per-trial record of touched hosts. Hosts never seeded or granted access
/// have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkState {
    hosts: BTreeMap<String, HostStatus>,
}

impl NetworkState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise a host's access to `level`; access never goes down. Returns the
    /// access the host holds afterwards.
    pub fn grant(&mut self, host: &str, level: AccessLevel) -> AccessLevel {
        let status = self.hosts.entry(host.to_string()).or_insert(HostStatus {
            compromised: false,
            access: AccessLevel::None,
        });
        if level > status.access {
            status.access = level;
        }
        if status.access > AccessLevel::None {
            status.compromised = true;
        }
        status.access
    }

    pub fn status(&self, host: &str) -> Option<&HostStatus> {
        self.hosts.get(host)
    }

    /// Current access on `host`; untouched hosts report `None`.
    pub fn access(&self, host: &str) -> AccessLevel {
        self.hosts.get(host).map(|s| s.access).unwrap_or_default()
    }

    pub fn is_compromised(&self, host: &str) -> bool {
        self.hosts.get(host).map_or(false, |s| s.compromised)
    }

    pub fn compromised_hosts(&self) -> impl Iterator<Item = &str> {
        self.hosts
            .iter()
            .filter(|(_, s)| s.compromised)
            .map(|(h, _)| h.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HostStatus)> {
        self.hosts.iter().map(|(h, s)| (h.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_host_is_absent() {
        let state = NetworkState::new();
        assert!(state.status("(1, 0)").is_none());
        assert_eq!(state.access("(1, 0)"), AccessLevel::None);
        assert!(!state.is_compromised("(1, 0)"));
    }

    #[test]
    fn test_user_grant_marks_compromised() {
        let mut state = NetworkState::new();
        state.grant("(1, 0)", AccessLevel::User);
        let status = state.status("(1, 0)").unwrap();
        assert!(status.compromised);
        assert_eq!(status.access, AccessLevel::User);
    }

    #[test]
    fn test_grant_never_regresses() {
        let mut state = NetworkState::new();
        state.grant("(1, 0)", AccessLevel::Root);
        assert_eq!(state.grant("(1, 0)", AccessLevel::User), AccessLevel::Root);
        state.grant("(1, 0)", AccessLevel::User);
        assert_eq!(state.access("(1, 0)"), AccessLevel::Root);
    }

    #[test]
    fn test_compromised_hosts_lists_only_compromised() {
        let mut state = NetworkState::new();
        state.grant("(1, 0)", AccessLevel::User);
        state.grant("(3, 1)", AccessLevel::None);
        let hosts: Vec<&str> = state.compromised_hosts().collect();
        assert_eq!(hosts, vec!["(1, 0)"]);
        assert_eq!(state.len(), 2);
    }
}
