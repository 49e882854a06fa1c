//! JSON Schema validation for copyway settings

use anyhow::{Result, anyhow};
use jsonschema::Validator;
use serde_json::Value;

/// Get the compiled embedded JSON schema for settings files
pub fn get_schema() -> Result<Validator> {
    let schema_str = include_str!("../../docs/schema.json");
    let schema: Value = serde_json::from_str(schema_str)
        .map_err(|e| anyhow!("Failed to parse embedded JSON schema: {e}"))?;

    jsonschema::draft7::new(&schema).map_err(|e| anyhow!("Failed to compile JSON schema: {e}"))
}

/// Validate a settings value against the schema
pub fn validate_against_schema(settings: &Value) -> Result<()> {
    let schema = get_schema()?;

    let error_messages: Vec<String> = schema
        .iter_errors(settings)
        .map(|e| format!("  - {e}"))
        .collect();

    if !error_messages.is_empty() {
        return Err(anyhow!(
            "Settings validation failed:\n{}",
            error_messages.join("\n")
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_accepts_partial_destination() {
        let value = json!({ "destinations": [{ "path": "/archive", "description": "Archive" }] });
        assert!(validate_against_schema(&value).is_ok());
    }

    #[test]
    fn test_schema_rejects_wrong_types() {
        let value = json!({ "destinations": [{ "path": 3, "description": "Archive" }] });
        assert!(validate_against_schema(&value).is_err());

        let value = json!({ "destinations": "nope" });
        assert!(validate_against_schema(&value).is_err());
    }
}
