//! Metadata validation.
//!
//! Every walkthrough directory carries a `walkthrough.json` file that is
//! validated against an embedded JSON schema.

use std::sync::OnceLock;

use jsonschema::Validator;
use serde_json::Value;

const METADATA_SCHEMA_JSON: &str = include_str!("../resources/walkthrough-schema.json");

static SCHEMA: OnceLock<Validator> = OnceLock::new();

fn schema() -> &'static Validator {
    SCHEMA.get_or_init(|| {
        let schema_json: Value =
            serde_json::from_str(METADATA_SCHEMA_JSON).expect("Invalid embedded schema");
        Validator::new(&schema_json).expect("Invalid schema compilation")
    })
}

/// Validates a metadata JSON string. Returns the first violation as a
/// human-readable message.
pub fn validate_str(json_str: &str) -> Result<(), String> {
    let instance: Value = serde_json::from_str(json_str)
        .map_err(|e| format!("Invalid JSON: {e}"))?;
    validate_value(&instance)
}

pub fn validate_value(instance: &Value) -> Result<(), String> {
    if let Err(e) = schema().validate(instance) {
        return Err(format!("{} at {}", e, e.instance_path()));
    }
    Ok(())
}
