use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// User-facing, already localized. Carries no upstream detail.
    #[error("{0}")]
    GenerationFailed(String),

    #[error("Generation service error: {0}")]
    UpstreamError(String),

    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),

    #[error("HTTP transport error: {source}")]
    HttpError {
        #[from]
        source: reqwest::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

impl From<shared::ModelError> for EngineError {
    fn from(err: shared::ModelError) -> Self {
        EngineError::InvalidInput(err.to_string())
    }
}

impl From<EngineError> for tonic::Status {
    fn from(err: EngineError) -> Self {
        tracing::error!("Mapping EngineError to tonic::Status: {:?}", err);
        match err {
            EngineError::ConfigError(msg) => tonic::Status::failed_precondition(format!("Configuration error: {}", msg)),
            EngineError::InvalidInput(msg) => tonic::Status::invalid_argument(format!("Invalid input: {}", msg)),
            EngineError::GenerationFailed(msg) => tonic::Status::unavailable(msg),
            EngineError::UpstreamError(msg) => tonic::Status::internal(format!("Generation service error: {}", msg)),
            EngineError::MalformedResponse(msg) => tonic::Status::internal(format!("Malformed generation response: {}", msg)),
            EngineError::HttpError { source } => tonic::Status::internal(format!("HTTP transport error: {}", source)),
            EngineError::JsonError { source } => tonic::Status::internal(format!("JSON error: {}", source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_failure_keeps_message_verbatim() {
        let status: tonic::Status = EngineError::GenerationFailed("Algorithm compilation error.".to_string()).into();
        assert_eq!(status.code(), tonic::Code::Unavailable);
        assert_eq!(status.message(), "Algorithm compilation error.");
    }

    #[test]
    fn test_status_codes() {
        let status: tonic::Status = EngineError::InvalidInput("window size must be at least 1".to_string()).into();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);

        let status: tonic::Status = EngineError::ConfigError("API_KEY is not set".to_string()).into();
        assert_eq!(status.code(), tonic::Code::FailedPrecondition);
        assert!(status.message().contains("API_KEY"));

        let status: tonic::Status = EngineError::UpstreamError("HTTP 500".to_string()).into();
        assert_eq!(status.code(), tonic::Code::Internal);
    }

    #[test]
    fn test_model_error_becomes_invalid_input() {
        let err: EngineError = shared::ModelError::NoIndicators.into();
        assert!(matches!(err, EngineError::InvalidInput(ref msg) if msg.contains("indicator")));
    }

    #[test]
    fn test_json_error_maps_to_internal() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let status: tonic::Status = EngineError::from(source).into();
        assert_eq!(status.code(), tonic::Code::Internal);
        assert!(status.message().starts_with("JSON error"));
    }
}
