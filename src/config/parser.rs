use std::path::{Path, PathBuf};
use serde_yaml::{Mapping, Value};
use crate::errors::SimError;
use crate::models::{AccessLevel, Exploit, HostConfig, NetworkModel, PrivilegeEscalation, SimulationBudget};
use super::schema::{MAIN_SCHEMA, SCENARIO_SCHEMA};
use super::types::*;
use tracing::{info, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

/// Load the main config at `path` and the scenario it points at.
pub async fn load_experiment(path: &Path) -> Result<(MainConfig, NetworkModel), SimError> {
    let main = parse_main_config(path).await?;
    let scenario_path = resolve_scenario_path(path, &main)?;
    let mut model = load_scenario(&scenario_path).await?;
    if let Some(hosts) = &main.initial_hosts {
        model = model.with_initial_hosts(dedupe_hosts(hosts.clone()));
    }
    info!(
        scenario = %scenario_path.display(),
        hosts = model.hosts().len(),
        exploits = model.exploits().len(),
        escalations = model.escalations().len(),
        "Loaded network configuration"
    );
    Ok((main, model))
}

/// Load the network model selected by the main config at `path`.
pub async fn load_network_model(path: &Path) -> Result<NetworkModel, SimError> {
    let (_, model) = load_experiment(path).await?;
    Ok(model)
}

pub async fn parse_main_config(path: &Path) -> Result<MainConfig, SimError> {
    let mapping = read_yaml_mapping(path).await?;
    let yaml = Value::Mapping(mapping);
    validate_schema(&yaml, &MAIN_SCHEMA)?;
    serde_yaml::from_value(yaml)
        .map_err(|e| SimError::Config(format!("Invalid main config {}: {}", path.display(), e)))
}

/// Load a scenario file directly, bypassing the main config.
pub async fn load_scenario(path: &Path) -> Result<NetworkModel, SimError> {
    let mapping = read_yaml_mapping(path).await?;
    build_model(mapping)
        .map_err(|e| match e {
            SimError::Config(msg) => SimError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
}

/// Parse scenario YAML held in memory.
pub fn parse_scenario_str(content: &str) -> Result<NetworkModel, SimError> {
    let yaml: Value = serde_yaml::from_str(content)
        .map_err(|e| SimError::Config(format!("Unparsable scenario: {}", e)))?;
    match yaml {
        Value::Mapping(mapping) => build_model(mapping),
        _ => Err(SimError::Config("Scenario root is not a mapping".into())),
    }
}

fn resolve_scenario_path(main_path: &Path, main: &MainConfig) -> Result<PathBuf, SimError> {
    let file = main
        .network_config_file
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .ok_or_else(|| SimError::Config(format!(
            "network_config_file not specified in {}",
            main_path.display()
        )))?;

    let candidate = PathBuf::from(file);
    if candidate.is_absolute() || candidate.exists() {
        return Ok(candidate);
    }
    if let Some(parent) = main_path.parent() {
        let sibling = parent.join(&candidate);
        if sibling.exists() {
            return Ok(sibling);
        }
    }
    Ok(candidate)
}

async fn read_yaml_mapping(path: &Path) -> Result<Mapping, SimError> {
    if !path.exists() {
        return Err(SimError::Config(format!("Config file not found: {}", path.display())));
    }

    let read_error = |e: std::io::Error| SimError::Config(format!("Failed to read {}: {}", path.display(), e));
    let metadata = tokio::fs::metadata(path).await.map_err(read_error)?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(SimError::Config(format!("Config file exceeds 1MB limit: {}", path.display())));
    }

    let content = tokio::fs::read_to_string(path).await.map_err(read_error)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| SimError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

    match yaml {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(SimError::Config(format!(
            "Loaded YAML content is not a mapping: {}",
            path.display()
        ))),
    }
}

fn build_model(mapping: Mapping) -> Result<NetworkModel, SimError> {
    validate_schema(&Value::Mapping(mapping.clone()), &SCENARIO_SCHEMA)?;

    let mut hosts = Vec::new();
    for (id, value) in ordered_entries(&mapping, "host_configurations")? {
        let record: HostRecord = if value.is_null() {
            HostRecord::default()
        } else {
            serde_yaml::from_value(value)
                .map_err(|e| SimError::Config(format!("host '{}': {}", id, e)))?
        };
        hosts.push(HostConfig {
            id,
            os: record.os,
            services: record.services,
            processes: record.processes,
        });
    }

    let mut exploits = Vec::new();
    for (name, value) in ordered_entries(&mapping, "exploits")? {
        let record: ExploitRecord = serde_yaml::from_value(value)
            .map_err(|e| SimError::Config(format!("exploit '{}': {}", name, e)))?;
        let prob = checked_probability("exploit", &name, record.prob)?;
        let access = granted_access("exploit", &name, &record.access)?;
        let cost = checked_cost(&format!("exploit '{}': cost", name), record.cost)?;
        exploits.push(Exploit {
            name,
            service: record.service,
            os: record.os,
            prob,
            cost,
            access,
        });
    }

    let mut escalations = Vec::new();
    for (name, value) in ordered_entries(&mapping, "privilege_escalation")? {
        let record: EscalationRecord = serde_yaml::from_value(value)
            .map_err(|e| SimError::Config(format!("privilege escalation '{}': {}", name, e)))?;
        let prob = checked_probability("privilege escalation", &name, record.prob)?;
        let access = granted_access("privilege escalation", &name, &record.access)?;
        let cost = checked_cost(&format!("privilege escalation '{}': cost", name), record.cost)?;
        escalations.push(PrivilegeEscalation {
            name,
            process: record.process,
            os: record.os,
            prob,
            cost,
            access,
        });
    }

    let settings: ScenarioSettings = serde_yaml::from_value(Value::Mapping(mapping))
        .map_err(|e| SimError::Config(format!("Invalid scenario settings: {}", e)))?;

    let budget = SimulationBudget {
        step_limit: checked_cost("step_limit", settings.step_limit)?,
        service_scan_cost: checked_cost("service_scan_cost", settings.service_scan_cost)?,
        os_scan_cost: checked_cost("os_scan_cost", settings.os_scan_cost)?,
        process_scan_cost: checked_cost("process_scan_cost", settings.process_scan_cost)?,
    };
    let initial_hosts = match settings.initial_hosts {
        Some(hosts) => dedupe_hosts(hosts),
        None => DEFAULT_INITIAL_HOSTS.iter().map(|h| h.to_string()).collect(),
    };

    let model = NetworkModel::new(
        hosts,
        exploits,
        escalations,
        settings.sensitive_hosts,
        initial_hosts,
        budget,
    );
    validate_references(&model);
    Ok(model)
}

/// Entries of the mapping under `key`, in declaration order. Absent or null
/// sections are empty.
fn ordered_entries(mapping: &Mapping, key: &str) -> Result<Vec<(String, Value)>, SimError> {
    match mapping.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Mapping(section)) => section
            .iter()
            .map(|(k, v)| match k {
                Value::String(name) => Ok((name.clone(), v.clone())),
                other => Err(SimError::Config(format!(
                    "{} has a non-string key: {:?}",
                    key, other
                ))),
            })
            .collect(),
        Some(_) => Err(SimError::Config(format!("{} must be a mapping", key))),
    }
}

fn checked_probability(kind: &str, name: &str, prob: f64) -> Result<f64, SimError> {
    if prob.is_finite() && (0.0..=1.0).contains(&prob) {
        Ok(prob)
    } else {
        Err(SimError::Config(format!(
            "{} '{}': prob {} is outside [0, 1]",
            kind, name, prob
        )))
    }
}

fn checked_cost(field: &str, value: f64) -> Result<f64, SimError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SimError::Config(format!(
            "{} must be a finite, non-negative number, got {}",
            field, value
        )))
    }
}

/// Drop repeated seed hosts, keeping the first occurrence.
fn dedupe_hosts(hosts: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    hosts
        .into_iter()
        .filter(|host| {
            let first = seen.insert(host.clone());
            if !first {
                warn!(host = %host, "Duplicate initial host ignored");
            }
            first
        })
        .collect()
}

fn granted_access(kind: &str, name: &str, access: &str) -> Result<AccessLevel, SimError> {
    AccessLevel::parse_granted(access).ok_or_else(|| SimError::Config(format!(
        "{} '{}': access must be 'user' or 'root', got '{}'",
        kind, name, access
    )))
}

/// Validate config against a JSON schema. Advisory only: findings are logged.
fn validate_schema(yaml: &Value, schema: &serde_json::Value) -> Result<(), SimError> {
    let json_str = serde_json::to_string(yaml)
        .map_err(|e| SimError::Config(format!("Config conversion error: {}", e)))?;
    let json_value: serde_json::Value = serde_json::from_str(&json_str)
        .map_err(|e| SimError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(schema)
        .map_err(|e| SimError::Internal(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Config schema warning");
        }
    }

    Ok(())
}

/// Host references that name nothing in the model are legal but suspicious.
fn validate_references(model: &NetworkModel) {
    if model.sensitive_hosts().is_empty() {
        warn!("Scenario declares no sensitive hosts; no trial can succeed by escalation");
    }
    for host in model.sensitive_hosts() {
        if model.host(host).is_none() {
            warn!(host = %host, "Sensitive host not present in host_configurations");
        }
    }
    for host in model.initial_hosts() {
        if model.host(host).is_none() {
            warn!(host = %host, "Initial host not present in host_configurations");
        }
    }
}
