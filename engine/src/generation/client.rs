use async_trait::async_trait;
use serde::Deserialize;
use shared::GeneratedArtifact;

use super::prompt::GenerationPrompt;
use crate::error::EngineError;

/// One outbound generation call. Implementations must not retry.
#[async_trait]
pub trait StrategyGenerator: Send + Sync {
    async fn generate(&self, prompt: &GenerationPrompt) -> Result<GeneratedArtifact, EngineError>;
}

#[derive(Deserialize)]
struct RawArtifact {
    name: String,
    code: String,
    explanation: String,
}

/// Strict parse of the service's JSON text. Unknown keys are ignored;
/// missing or blank fields are rejected.
pub fn parse_artifact(text: &str) -> Result<GeneratedArtifact, EngineError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EngineError::MalformedResponse("empty response text".to_string()));
    }

    let raw: RawArtifact = serde_json::from_str(trimmed)?;

    for (field, value) in [("name", &raw.name), ("code", &raw.code), ("explanation", &raw.explanation)] {
        if value.trim().is_empty() {
            return Err(EngineError::MalformedResponse(format!("field '{}' is empty", field)));
        }
    }

    Ok(GeneratedArtifact { name: raw.name, code: raw.code, explanation: raw.explanation })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complete_artifact() {
        let artifact = parse_artifact(r#" {"name":"Sanctus Edge","code":"//@version=5\nstrategy(\"x\")","explanation":"Trend + momentum"} "#).unwrap();
        assert_eq!(artifact.name, "Sanctus Edge");
        assert!(artifact.code.starts_with("//@version=5"));
        assert_eq!(artifact.explanation, "Trend + momentum");
    }

    #[test]
    fn test_extra_fields_are_tolerated() {
        let artifact = parse_artifact(r#"{"name":"A","code":"B","explanation":"C","confidence":0.9}"#).unwrap();
        assert_eq!(artifact.code, "B");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let err = parse_artifact(r#"{"name":"A","code":"B"}"#).unwrap_err();
        assert!(matches!(err, EngineError::JsonError { .. }));
    }

    #[test]
    fn test_blank_field_is_rejected() {
        let err = parse_artifact(r#"{"name":"A","code":"  ","explanation":"C"}"#).unwrap_err();
        assert!(matches!(err, EngineError::MalformedResponse(ref msg) if msg.contains("code")));
    }

    #[test]
    fn test_empty_and_non_json_text() {
        assert!(matches!(parse_artifact("   "), Err(EngineError::MalformedResponse(_))));
        assert!(matches!(parse_artifact("Here is your strategy!"), Err(EngineError::JsonError { .. })));
    }
}
