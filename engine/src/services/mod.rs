// gRPC surface of the engine. Generated types live in `generated`; the
// service implementation is in `sanctus_service`.
pub mod generated {
    tonic::include_proto!("sanctus");
}

pub mod sanctus_service;

pub use generated::sanctus_engine_client::SanctusEngineClient;
pub use generated::sanctus_engine_server::{SanctusEngine, SanctusEngineServer};
pub use generated::{
    Candle as ProtoCandle, MarketWindowRequest, MarketWindowResponse, StrategyRequest as ProtoStrategyRequest,
    StrategyResponse,
};
