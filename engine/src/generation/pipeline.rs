// Request → prompt → one generation call → artifact.
use std::sync::Arc;

use shared::{GeneratedArtifact, StrategyRequest};
use uuid::Uuid;

use super::client::StrategyGenerator;
use super::prompt::GenerationPrompt;
use crate::error::EngineError;

pub struct StrategyPipeline {
    generator: Arc<dyn StrategyGenerator>,
}

impl StrategyPipeline {
    pub fn new(generator: Arc<dyn StrategyGenerator>) -> Self {
        Self { generator }
    }

    /// Every failure collapses into `GenerationFailed` carrying the
    /// localized message for the request's language. No retries.
    pub async fn generate_strategy(&self, request: &StrategyRequest) -> Result<GeneratedArtifact, EngineError> {
        let request_id = Uuid::new_v4();
        tracing::info!(
            %request_id,
            style = %request.style,
            risk = request.risk_level,
            timeframe = %request.timeframe,
            indicators = request.indicators.len(),
            language = %request.language,
            "Generating strategy"
        );

        if !request.has_ordered_dates() {
            tracing::warn!(%request_id, start = %request.start_date, end = %request.end_date, "Backtest range is inverted; forwarding as-is");
        }

        let prompt = GenerationPrompt::for_request(request);
        match self.generator.generate(&prompt).await {
            Ok(artifact) => {
                tracing::info!(%request_id, name = %artifact.name, code_len = artifact.code.len(), "Strategy generated");
                Ok(artifact)
            }
            Err(e) => {
                tracing::error!(%request_id, error = %e, "Strategy generation failed");
                Err(EngineError::GenerationFailed(request.language.generation_failure_message().to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use shared::Language;
    use std::sync::Mutex;

    /// Replays a fixed outcome and records each prompt it receives.
    struct ScriptedGenerator {
        outcome: Result<GeneratedArtifact, String>,
        prompts: Mutex<Vec<GenerationPrompt>>,
    }

    impl ScriptedGenerator {
        fn new(outcome: Result<GeneratedArtifact, String>) -> Arc<Self> {
            Arc::new(Self { outcome, prompts: Mutex::new(Vec::new()) })
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl StrategyGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &GenerationPrompt) -> Result<GeneratedArtifact, EngineError> {
            self.prompts.lock().unwrap().push(prompt.clone());
            self.outcome.clone().map_err(EngineError::UpstreamError)
        }
    }

    fn artifact() -> GeneratedArtifact {
        GeneratedArtifact {
            name: "Sanctus Drift".to_string(),
            code: "//@version=5\nstrategy(\"Sanctus Drift\", overlay=true)".to_string(),
            explanation: "EMA trend with RSI confirmation".to_string(),
        }
    }

    fn request(language: Language) -> StrategyRequest {
        StrategyRequest::default_for(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(), language)
    }

    #[tokio::test]
    async fn test_artifact_passes_through_unchanged() {
        let generator = ScriptedGenerator::new(Ok(artifact()));
        let pipeline = StrategyPipeline::new(generator.clone());

        let result = pipeline.generate_strategy(&request(Language::En)).await.unwrap();
        assert_eq!(result, artifact());
        assert_eq!(generator.calls(), 1);

        let prompts = generator.prompts.lock().unwrap();
        assert!(prompts[0].prompt.contains("- Core Indicators: RSI, MACD, SuperTrend"));
        assert!(prompts[0].prompt.contains("2025-05-02 to 2025-06-01"));
    }

    #[tokio::test]
    async fn test_failure_is_localized_and_not_retried() {
        let generator = ScriptedGenerator::new(Err("quota exceeded".to_string()));
        let pipeline = StrategyPipeline::new(generator.clone());

        let err = pipeline.generate_strategy(&request(Language::En)).await.unwrap_err();
        assert!(matches!(err, EngineError::GenerationFailed(ref msg) if msg == "Algorithm compilation error."));
        assert!(!err.to_string().contains("quota"));
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_turkish_failure_message() {
        let generator = ScriptedGenerator::new(Err("timeout".to_string()));
        let pipeline = StrategyPipeline::new(generator);

        let err = pipeline.generate_strategy(&request(Language::Tr)).await.unwrap_err();
        assert_eq!(err.to_string(), "Algoritma derleme hatası.");
    }

    #[tokio::test]
    async fn test_inverted_dates_are_still_forwarded() {
        let generator = ScriptedGenerator::new(Ok(artifact()));
        let pipeline = StrategyPipeline::new(generator.clone());

        let mut req = request(Language::En);
        std::mem::swap(&mut req.start_date, &mut req.end_date);
        assert!(pipeline.generate_strategy(&req).await.is_ok());
        assert!(generator.prompts.lock().unwrap()[0].prompt.contains("2025-06-01 to 2025-05-02"));
    }
}
