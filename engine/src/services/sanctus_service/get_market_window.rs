// Handler for the GetMarketWindow RPC
use tokio::sync::watch;
use tonic::{Response, Status};

use super::helpers::to_window_response;
use crate::services::MarketWindowResponse;
use crate::simulation::SharedSnapshot;

pub async fn handle_get_market_window(
    snapshots: &watch::Receiver<SharedSnapshot>,
) -> Result<Response<MarketWindowResponse>, Status> {
    // Clone the Arc so the borrow guard is released before conversion.
    let snapshot = snapshots.borrow().clone();
    tracing::debug!(sequence = snapshot.sequence, candles = snapshot.candles.len(), "Serving market window");
    Ok(Response::new(to_window_response(&snapshot)))
}
