// Handler for the GenerateStrategy RPC
use std::sync::Arc;
use tonic::{Response, Status};

use super::helpers::{from_grpc_request, to_grpc_artifact};
use crate::generation::StrategyPipeline;
use crate::services::{ProtoStrategyRequest, StrategyResponse};

pub async fn handle_generate_strategy(
    req_payload: ProtoStrategyRequest,
    pipeline: Arc<StrategyPipeline>,
) -> Result<Response<StrategyResponse>, Status> {
    let request = match from_grpc_request(req_payload) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error_detail = ?e, "Rejected malformed StrategyRequest");
            return Err(e.into());
        }
    };

    let artifact = pipeline.generate_strategy(&request).await?;
    Ok(Response::new(to_grpc_artifact(artifact)))
}
