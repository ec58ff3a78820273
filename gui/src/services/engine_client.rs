// gRPC client for the SanctusEngine service, built on the client stubs
// the engine crate generates from proto/sanctus.proto.
use anyhow::{Context, Result};
use engine::services::sanctus_service::helpers::{from_grpc_artifact, from_window_response, to_grpc_request};
use engine::services::{MarketWindowRequest, MarketWindowResponse, SanctusEngineClient};
use engine::simulation::MarketSnapshot;
use shared::{GeneratedArtifact, StrategyRequest};
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};
use tonic::Streaming;

#[derive(Clone)]
pub struct EngineClient {
    client: SanctusEngineClient<Channel>,
    endpoint: String,
}

impl EngineClient {
    pub async fn connect(endpoint: String, timeout: Duration) -> Result<Self> {
        let channel = Endpoint::from_shared(endpoint.clone())
            .with_context(|| format!("invalid engine endpoint '{}'", endpoint))?
            .connect_timeout(timeout)
            .connect()
            .await
            .with_context(|| format!("engine unreachable at {}", endpoint))?;
        tracing::info!(%endpoint, "Connected to engine");
        Ok(Self { client: SanctusEngineClient::new(channel), endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn market_window(&mut self) -> Result<MarketSnapshot> {
        let response = self.client.get_market_window(MarketWindowRequest {}).await?.into_inner();
        Ok(from_window_response(response)?)
    }

    pub async fn stream_market_data(&mut self) -> Result<Streaming<MarketWindowResponse>> {
        Ok(self.client.stream_market_data(MarketWindowRequest {}).await?.into_inner())
    }

    pub async fn generate_strategy(&mut self, request: &StrategyRequest) -> Result<GeneratedArtifact> {
        tracing::info!(style = %request.style, risk = request.risk_level, "Requesting strategy generation");
        let response = self.client.generate_strategy(to_grpc_request(request)).await?.into_inner();
        Ok(from_grpc_artifact(response))
    }
}
