// Engine main entry point
use engine::config::EngineSettings;
use engine::generation::{GeminiClient, StrategyPipeline};
use engine::services::sanctus_service::MySanctusEngine;
use engine::services::SanctusEngineServer;
use engine::simulation::{FeedTicker, MarketFeed, StdRandom};
use std::sync::Arc;
use tonic::transport::Server;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    info!("Starting Calix Sanctus Engine...");

    // No credential, no engine: the dashboard shows its halt screen instead.
    let settings = match EngineSettings::load() {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "SYSTEM HALTED: engine configuration is incomplete");
            return Err(e.into());
        }
    };

    let addr = tokio::net::lookup_host(settings.listen_addr())
        .await?
        .next()
        .ok_or_else(|| format!("could not resolve {}", settings.listen_addr()))?;
    info!(%addr, model = %settings.model, window_size = settings.window_size, "Engine will listen on {}", addr);

    let feed = MarketFeed::initialize_signed(settings.window_size, StdRandom::from_entropy())?;
    let ticker = FeedTicker::start(feed, settings.tick_interval());

    let generator = Arc::new(GeminiClient::new(&settings)?);
    let pipeline = Arc::new(StrategyPipeline::new(generator));

    let sanctus_service = MySanctusEngine::new(ticker.subscribe(), pipeline);

    let served = Server::builder()
        .add_service(SanctusEngineServer::new(sanctus_service))
        .serve_with_shutdown(addr, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Shutdown signal received");
        })
        .await;

    ticker.stop().await;
    served?;

    info!("Calix Sanctus Engine stopped.");
    Ok(())
}
