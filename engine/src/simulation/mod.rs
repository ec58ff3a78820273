// Live market simulation: candle synthesis, the rolling window, and the
// timer that advances it.
pub mod feed;
pub mod generator;
pub mod random;
pub mod ticker;

pub use feed::{MarketFeed, MarketSnapshot, SharedSnapshot};
pub use random::{RandomSource, StdRandom};
pub use ticker::FeedTicker;
