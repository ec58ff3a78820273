// Engine library root: market simulation feed, strategy generation
// pipeline, and the gRPC service that exposes both.

pub mod config;
pub mod error;
pub mod generation;
pub mod services;
pub mod simulation;

// The build script compiles proto/sanctus.proto; the generated code is
// included by src/services/mod.rs.
