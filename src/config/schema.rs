use serde_json::{json, Value};
use std::sync::LazyLock;

pub static SCENARIO_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "host_configurations": {
                "type": "object",
                "additionalProperties": {
                    "type": ["object", "null"],
                    "properties": {
                        "os": { "type": "string" },
                        "services": { "type": "array", "items": { "type": "string" } },
                        "processes": { "type": "array", "items": { "type": "string" } }
                    }
                }
            },
            "exploits": {
                "type": "object",
                "additionalProperties": { "$ref": "#/$defs/technique" }
            },
            "privilege_escalation": {
                "type": "object",
                "additionalProperties": { "$ref": "#/$defs/technique" }
            },
            "sensitive_hosts": { "type": "array", "items": { "type": "string" } },
            "initial_hosts": { "type": "array", "items": { "type": "string" } },
            "service_scan_cost": { "type": "number", "minimum": 0 },
            "os_scan_cost": { "type": "number", "minimum": 0 },
            "process_scan_cost": { "type": "number", "minimum": 0 },
            "step_limit": { "type": "number", "minimum": 0 }
        },
        "$defs": {
            "technique": {
                "type": "object",
                "required": ["os"],
                "properties": {
                    "service": { "type": "string" },
                    "process": { "type": "string" },
                    "os": { "type": "string" },
                    "prob": { "type": "number", "minimum": 0, "maximum": 1 },
                    "cost": { "type": "number", "minimum": 0 },
                    "access": { "type": "string", "enum": ["user", "root"] }
                }
            }
        }
    })
});

pub static MAIN_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["network_config_file"],
        "properties": {
            "network_config_file": { "type": "string" },
            "seed": { "type": "integer", "minimum": 0 },
            "initial_hosts": { "type": "array", "items": { "type": "string" } }
        }
    })
});
