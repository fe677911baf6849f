use crate::domain::model::Payload;
use crate::utils::error::{LayerError, Result};

#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "invoke-local")]
#[command(about = "Invoke the layer demo handler outside of Lambda")]
pub struct CliConfig {
    #[arg(long, default_value = "{}", help = "Event payload as an inline JSON object")]
    pub payload: String,

    #[arg(long, conflicts_with = "payload", help = "Read the event payload from a JSON file")]
    pub payload_file: Option<PathBuf>,

    #[arg(long, default_value = "1", help = "Number of invocations")]
    pub times: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_payload(&self) -> Result<Payload> {
        match &self.payload_file {
            Some(path) => {
                tracing::debug!("Reading payload from {}", path.display());
                let raw = std::fs::read_to_string(path)?;
                parse_payload(&raw)
            }
            None => parse_payload(&self.payload),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("times", self.times, 1)?;

        if let Some(path) = &self.payload_file {
            validate_path("payload_file", &path.to_string_lossy())?;
        }

        tracing::debug!("CLI configuration validation passed");
        Ok(())
    }
}

/// Parses a JSON document that must be an object at the top level.
pub fn parse_payload(raw: &str) -> Result<Payload> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    match value {
        serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(LayerError::InvalidPayload {
            message: format!("expected a JSON object, got {}", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_object() {
        let payload = parse_payload(r#"{"key1": "value1", "nested": {"n": [1, 2]}}"#).unwrap();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload["key1"], "value1");
    }

    #[test]
    fn test_parse_payload_rejects_non_object() {
        let err = parse_payload("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, LayerError::InvalidPayload { .. }));
        assert!(err.to_string().contains("an array"));

        assert!(matches!(
            parse_payload("null"),
            Err(LayerError::InvalidPayload { .. })
        ));
    }

    #[test]
    fn test_parse_payload_invalid_json() {
        assert!(matches!(
            parse_payload("{not json"),
            Err(LayerError::SerializationError(_))
        ));
    }
}
