// Drives a MarketFeed on a fixed cadence and publishes each new window.
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::feed::{MarketFeed, SharedSnapshot};
use super::random::RandomSource;

/// Owns the feed inside a single task, so at most one advance runs at a
/// time. Stopping (or dropping) the ticker releases the timer.
pub struct FeedTicker {
    snapshots: watch::Receiver<SharedSnapshot>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl FeedTicker {
    /// Must be called from within a Tokio runtime.
    pub fn start<R>(mut feed: MarketFeed<R>, period: Duration) -> Self
    where
        R: RandomSource + 'static,
    {
        let (tx, rx) = watch::channel(Arc::new(feed.snapshot()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        tracing::info!(window_size = feed.len(), period_ms = period.as_millis() as u64, "Starting market feed ticker");

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval.tick().await; // completes immediately

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = interval.tick() => {
                        let (close, signal) = {
                            let candle = feed.advance();
                            (candle.close, candle.signal)
                        };
                        tracing::debug!(sequence = feed.sequence(), close, %signal, "Market feed advanced");
                        tx.send_replace(Arc::new(feed.snapshot()));
                    }
                }
            }

            tracing::info!(sequence = feed.sequence(), "Market feed ticker stopped");
        });

        Self { snapshots: rx, shutdown: Some(shutdown_tx), handle: Some(handle) }
    }

    pub fn subscribe(&self) -> watch::Receiver<SharedSnapshot> {
        self.snapshots.clone()
    }

    pub fn latest(&self) -> SharedSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Stops the timer and waits for the feed task to finish.
    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::warn!(error = ?e, "Market feed task ended abnormally");
            }
        }
    }
}

impl Drop for FeedTicker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::random::StdRandom;

    const WAIT: Duration = Duration::from_secs(2);

    #[tokio::test]
    async fn test_ticker_publishes_fixed_size_continuous_windows() {
        let feed = MarketFeed::initialize(8, StdRandom::seeded(1)).unwrap();
        let ticker = FeedTicker::start(feed, Duration::from_millis(10));
        let mut rx = ticker.subscribe();

        let mut previous = rx.borrow_and_update().clone();
        assert_eq!(previous.sequence, 0);

        for _ in 0..3 {
            tokio::time::timeout(WAIT, rx.changed()).await.unwrap().unwrap();
            let current = rx.borrow_and_update().clone();
            assert!(current.sequence > previous.sequence);
            assert_eq!(current.candles.len(), 8);

            let candles = &current.candles;
            for pair in candles.windows(2) {
                assert_eq!(pair[1].open, pair[0].close);
            }
            previous = current;
        }

        assert_eq!(ticker.latest().candles.len(), 8);
        ticker.stop().await;
    }

    #[tokio::test]
    async fn test_stop_releases_the_feed_task() {
        let feed = MarketFeed::initialize(3, StdRandom::seeded(2)).unwrap();
        let ticker = FeedTicker::start(feed, Duration::from_millis(10));
        let mut rx = ticker.subscribe();

        ticker.stop().await;

        // Sender lives in the task; once the task is gone the channel closes.
        let result = tokio::time::timeout(WAIT, async {
            loop {
                if rx.changed().await.is_err() {
                    break;
                }
            }
        })
        .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_drop_aborts_the_feed_task() {
        let feed = MarketFeed::initialize(3, StdRandom::seeded(3)).unwrap();
        let ticker = FeedTicker::start(feed, Duration::from_millis(10));
        let mut rx = ticker.subscribe();

        drop(ticker);

        let result = tokio::time::timeout(WAIT, async {
            while rx.changed().await.is_ok() {}
        })
        .await;
        assert!(result.is_ok());
    }
}
