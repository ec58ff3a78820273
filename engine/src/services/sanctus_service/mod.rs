// engine/src/services/sanctus_service/mod.rs
// MySanctusEngine and its SanctusEngine impl. Each RPC dispatches to a
// handler in a sibling module.

use super::{MarketWindowRequest, MarketWindowResponse, ProtoStrategyRequest, SanctusEngine, StrategyResponse};
use crate::generation::StrategyPipeline;
use crate::simulation::SharedSnapshot;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status};

pub mod generate_strategy;
pub mod get_market_window;
pub mod helpers;
pub mod stream_market_data;

pub struct MySanctusEngine {
    snapshots: watch::Receiver<SharedSnapshot>,
    pipeline: Arc<StrategyPipeline>,
}

impl MySanctusEngine {
    pub fn new(snapshots: watch::Receiver<SharedSnapshot>, pipeline: Arc<StrategyPipeline>) -> Self {
        MySanctusEngine { snapshots, pipeline }
    }
}

#[tonic::async_trait]
impl SanctusEngine for MySanctusEngine {
    async fn get_market_window(
        &self,
        _request: Request<MarketWindowRequest>,
    ) -> Result<Response<MarketWindowResponse>, Status> {
        tracing::debug!("Received GetMarketWindowRequest, dispatching to handler.");
        get_market_window::handle_get_market_window(&self.snapshots).await
    }

    type StreamMarketDataStream = ReceiverStream<Result<MarketWindowResponse, Status>>;
    async fn stream_market_data(
        &self,
        request: Request<MarketWindowRequest>,
    ) -> Result<Response<Self::StreamMarketDataStream>, Status> {
        tracing::info!(remote = ?request.remote_addr(), "Received StreamMarketDataRequest, dispatching to handler.");
        stream_market_data::handle_stream_market_data(self.snapshots.clone()).await
    }

    async fn generate_strategy(
        &self,
        request: Request<ProtoStrategyRequest>,
    ) -> Result<Response<StrategyResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            style = %req_payload.style,
            risk_level = req_payload.risk_level,
            timeframe = %req_payload.timeframe,
            indicators = ?req_payload.indicators,
            language = %req_payload.language,
            "Received GenerateStrategyRequest, dispatching to handler."
        );
        generate_strategy::handle_generate_strategy(req_payload, self.pipeline.clone()).await
    }
}
