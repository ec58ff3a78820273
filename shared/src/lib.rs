pub mod catalog;
pub mod models;
pub mod presets;
pub mod summary;
pub mod utils;

pub use catalog::IndicatorKind;
pub use models::{
    BotStyle, CandleRecord, GeneratedArtifact, Language, ModelError, Signal, StrategyRequest,
    TimeFrame,
};
