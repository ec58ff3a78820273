// Strategy generation: prompt assembly and the outbound model call.
pub mod client;
pub mod gemini;
pub mod pipeline;
pub mod prompt;

pub use client::{parse_artifact, StrategyGenerator};
pub use gemini::GeminiClient;
pub use pipeline::StrategyPipeline;
pub use prompt::{build_prompt, GenerationPrompt, SYSTEM_INSTRUCTION};
