// REST client for the hosted generative model.
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use shared::GeneratedArtifact;

use super::client::{parse_artifact, StrategyGenerator};
use super::prompt::GenerationPrompt;
use crate::config::EngineSettings;
use crate::error::EngineError;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

impl GenerateContentResponse {
    /// Text of the first candidate: every non-thought text part, joined.
    fn candidate_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let texts: Vec<String> = content.parts.into_iter().filter(|p| !p.thought).filter_map(|p| p.text).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

impl GeminiClient {
    pub fn new(settings: &EngineSettings) -> Result<Self, EngineError> {
        let client = Client::builder().timeout(settings.request_timeout()).build()?;
        Ok(Self {
            client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn request_body(prompt: &GenerationPrompt) -> Value {
        json!({
            "systemInstruction": {
                "parts": [{ "text": prompt.system_instruction }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt.prompt }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "code": { "type": "STRING" },
                        "explanation": { "type": "STRING" }
                    },
                    "required": ["name", "code", "explanation"]
                }
            }
        })
    }
}

#[async_trait]
impl StrategyGenerator for GeminiClient {
    async fn generate(&self, prompt: &GenerationPrompt) -> Result<GeneratedArtifact, EngineError> {
        let url = self.endpoint();
        tracing::debug!(model = %self.model, url = %url, prompt_len = prompt.prompt.len(), "Sending generation request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&Self::request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            tracing::warn!(status = %status, body = %body, "Generation service responded with an error");
            return Err(EngineError::UpstreamError(format!("status {}", status)));
        }

        let payload: GenerateContentResponse = response.json().await?;
        let text = payload
            .candidate_text()
            .ok_or_else(|| EngineError::MalformedResponse("response carried no candidate text".to_string()))?;

        tracing::debug!(response_len = text.len(), "Generation response received");
        parse_artifact(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::StrategyPipeline;
    use chrono::NaiveDate;
    use shared::{Language, StrategyRequest};
    use std::sync::Arc;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_for(server: &MockServer) -> EngineSettings {
        EngineSettings {
            api_base_url: server.uri(),
            model: "test-model".to_string(),
            api_key: "test-key".to_string(),
            request_timeout_secs: 5,
            ..EngineSettings::default()
        }
    }

    fn prompt() -> GenerationPrompt {
        GenerationPrompt { system_instruction: "system".to_string(), prompt: "build a strategy".to_string() }
    }

    fn candidate_body(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
    }

    #[tokio::test]
    async fn test_generate_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/test-model:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{ "role": "user", "parts": [{ "text": "build a strategy" }] }],
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(
                r#"{"name":"Sanctus Grail","code":"//@version=5","explanation":"Confluence entries"}"#,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiClient::new(&settings_for(&server)).unwrap();
        let artifact = client.generate(&prompt()).await.unwrap();
        assert_eq!(artifact.name, "Sanctus Grail");
        assert_eq!(artifact.code, "//@version=5");
        assert_eq!(artifact.explanation, "Confluence entries");
    }

    #[tokio::test]
    async fn test_generate_without_candidates_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&settings_for(&server)).unwrap();
        let err = client.generate(&prompt()).await.unwrap_err();
        assert!(matches!(err, EngineError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_generate_with_missing_field_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(r#"{"name":"A","code":"B"}"#)))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&settings_for(&server)).unwrap();
        assert!(client.generate(&prompt()).await.is_err());
    }

    #[tokio::test]
    async fn test_generate_server_error_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiClient::new(&settings_for(&server)).unwrap();
        let err = client.generate(&prompt()).await.unwrap_err();
        assert!(matches!(err, EngineError::UpstreamError(ref msg) if msg.contains("500")));
    }

    #[tokio::test]
    async fn test_generate_joins_split_text_parts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [
                            { "text": "weighing the confluence rules", "thought": true },
                            { "text": r#"{"name":"A","code":"# },
                            { "text": r#""B","explanation":"C"}"# }
                        ]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&settings_for(&server)).unwrap();
        let artifact = client.generate(&prompt()).await.unwrap();
        assert_eq!(artifact, GeneratedArtifact { name: "A".to_string(), code: "B".to_string(), explanation: "C".to_string() });
    }

    #[tokio::test]
    async fn test_generate_with_only_thought_parts_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "thinking", "thought": true }] } }]
            })))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&settings_for(&server)).unwrap();
        let err = client.generate(&prompt()).await.unwrap_err();
        assert!(matches!(err, EngineError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_empty_body_through_pipeline_is_one_localized_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiClient::new(&settings_for(&server)).unwrap();
        let pipeline = StrategyPipeline::new(Arc::new(client));
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        let err = pipeline.generate_strategy(&StrategyRequest::default_for(today, Language::En)).await.unwrap_err();
        assert!(matches!(err, EngineError::GenerationFailed(ref msg) if msg == "Algorithm compilation error."));
    }
}
