// Handler for the StreamMarketData RPC
use tokio::sync::{mpsc, watch};
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Response, Status};

use super::helpers::to_window_response;
use crate::services::MarketWindowResponse;
use crate::simulation::SharedSnapshot;

const STREAM_BUFFER: usize = 4;

/// Sends the current window immediately, then one window per feed tick
/// until the client disconnects or the feed stops.
pub async fn handle_stream_market_data(
    mut snapshots: watch::Receiver<SharedSnapshot>,
) -> Result<Response<ReceiverStream<Result<MarketWindowResponse, Status>>>, Status> {
    let (tx, rx) = mpsc::channel(STREAM_BUFFER);

    tokio::spawn(async move {
        let first = snapshots.borrow_and_update().clone();
        if tx.send(Ok(to_window_response(&first))).await.is_err() {
            tracing::debug!("Market stream client disconnected before the first window");
            return;
        }

        loop {
            tokio::select! {
                _ = tx.closed() => {
                    tracing::debug!("Market stream client disconnected");
                    break;
                }
                changed = snapshots.changed() => {
                    if changed.is_err() {
                        tracing::info!("Market feed stopped; closing stream");
                        let _ = tx.send(Err(Status::unavailable("market feed stopped"))).await;
                        break;
                    }
                    let snapshot = snapshots.borrow_and_update().clone();
                    if let Err(e) = tx.send(Ok(to_window_response(&snapshot))).await {
                        tracing::debug!(error = ?e, "Failed to push market window to stream");
                        break;
                    }
                }
            }
        }
    });

    Ok(Response::new(ReceiverStream::new(rx)))
}
