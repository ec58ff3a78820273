// Conversions between domain records and wire messages.
use shared::{CandleRecord, GeneratedArtifact, IndicatorKind, Signal, StrategyRequest};

use crate::error::EngineError;
use crate::services::{MarketWindowResponse, ProtoCandle as GrpcCandle, ProtoStrategyRequest, StrategyResponse};
use crate::simulation::MarketSnapshot;

pub fn to_grpc_candle(candle: &CandleRecord) -> GrpcCandle {
    GrpcCandle {
        timestamp: candle.timestamp.clone(),
        open: candle.open,
        high: candle.high,
        low: candle.low,
        close: candle.close,
        volume: candle.volume,
        oscillator_value: candle.oscillator_value,
        signal: candle.signal.as_str().to_string(),
    }
}

pub fn from_grpc_candle(candle: GrpcCandle) -> Result<CandleRecord, EngineError> {
    let signal: Signal = candle.signal.parse()?;
    Ok(CandleRecord {
        timestamp: candle.timestamp,
        open: candle.open,
        high: candle.high,
        low: candle.low,
        close: candle.close,
        volume: candle.volume,
        oscillator_value: candle.oscillator_value,
        signal,
    })
}

pub fn to_window_response(snapshot: &MarketSnapshot) -> MarketWindowResponse {
    MarketWindowResponse { candles: snapshot.candles.iter().map(to_grpc_candle).collect(), sequence: snapshot.sequence }
}

/// Decodes a window message; any unknown signal rejects the whole window.
pub fn from_window_response(response: MarketWindowResponse) -> Result<MarketSnapshot, EngineError> {
    let candles = response.candles.into_iter().map(from_grpc_candle).collect::<Result<Vec<_>, _>>()?;
    Ok(MarketSnapshot { sequence: response.sequence, candles })
}

pub fn from_grpc_request(req: ProtoStrategyRequest) -> Result<StrategyRequest, EngineError> {
    let indicators = req.indicators.iter().map(|s| s.parse::<IndicatorKind>()).collect::<Result<Vec<_>, _>>()?;
    let request = StrategyRequest {
        risk_level: req.risk_level,
        indicators,
        timeframe: req.timeframe.parse()?,
        style: req.style.parse()?,
        start_date: StrategyRequest::parse_date(&req.start_date)?,
        end_date: StrategyRequest::parse_date(&req.end_date)?,
        notes: req.notes,
        language: req.language.parse()?,
    };
    request.validate()?;
    Ok(request)
}

pub fn to_grpc_request(request: &StrategyRequest) -> ProtoStrategyRequest {
    ProtoStrategyRequest {
        risk_level: request.risk_level,
        indicators: request.indicators.iter().map(|k| k.id().to_string()).collect(),
        timeframe: request.timeframe.label().to_string(),
        style: request.style.as_str().to_string(),
        start_date: request.start_date.format(StrategyRequest::DATE_FORMAT).to_string(),
        end_date: request.end_date.format(StrategyRequest::DATE_FORMAT).to_string(),
        notes: request.notes.clone(),
        language: request.language.as_str().to_string(),
    }
}

pub fn to_grpc_artifact(artifact: GeneratedArtifact) -> StrategyResponse {
    StrategyResponse { name: artifact.name, code: artifact.code, explanation: artifact.explanation }
}

pub fn from_grpc_artifact(response: StrategyResponse) -> GeneratedArtifact {
    GeneratedArtifact { name: response.name, code: response.code, explanation: response.explanation }
}
