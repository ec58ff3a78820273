#![allow(non_snake_case)]
use anyhow::{Context, Result};
use chrono::Local;
use dioxus::prelude::*;
use engine::services::sanctus_service::helpers::from_window_response;

use crate::components::{ConnectingScreen, Dashboard, GuideModal, Header, HaltScreen, ResultPanel, StrategyForm};
use crate::config::AppConfig;
use crate::services::EngineClient;
use crate::state::{AppState, ConnectionState, Tab};

/// Connects to the engine, loads the first window and then follows the
/// market stream until it ends. Any failure halts the interface.
async fn run_engine_link(
    config: AppConfig,
    mut state: Signal<AppState>,
    mut engine: Signal<Option<EngineClient>>,
) -> Result<()> {
    let mut client = EngineClient::connect(config.engine.endpoint(), config.engine.connect_timeout()).await?;

    let snapshot = client.market_window().await.context("initial market window")?;
    {
        let mut s = state.write();
        s.apply_window(snapshot);
        s.connection = ConnectionState::Ready;
    }
    engine.set(Some(client.clone()));
    tracing::info!(endpoint = client.endpoint(), "Engine link ready");

    let mut stream = client.stream_market_data().await.context("market stream subscription")?;
    while let Some(message) = stream.message().await.context("market stream")? {
        let snapshot = from_window_response(message)?;
        if !state.write().apply_window(snapshot) {
            tracing::debug!("Skipped stale market window");
        }
    }
    anyhow::bail!("market stream closed by engine")
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let language = config.app.language;
    let state = use_context_provider(|| Signal::new(AppState::new(language, Local::now().date_naive())));
    let engine = use_context_provider(|| Signal::new(None::<EngineClient>));

    let link_config = config.clone();
    use_future(move || {
        let config = link_config.clone();
        async move {
            if let Err(e) = run_engine_link(config, state, engine).await {
                tracing::error!("Engine link failed: {:#}", e);
                let mut state = state;
                state.write().halt(format!("{:#}", e));
            }
        }
    });

    let (connection, active_tab) = {
        let s = state.read();
        (s.connection.clone(), s.active_tab)
    };
    let theme = &config.theme;

    match connection {
        ConnectionState::Connecting => rsx! { ConnectingScreen {} },
        ConnectionState::Halted(reason) => rsx! { HaltScreen { reason: reason } },
        ConnectionState::Ready => rsx! {
            div {
                style: "min-height: 100vh; background: {theme.background}; color: {theme.foreground}; font-family: sans-serif;",
                Header {}
                main {
                    style: "padding: 32px 24px; max-width: 1400px; margin: 0 auto;",
                    if active_tab == Tab::Simulation {
                        Dashboard {}
                    } else {
                        div {
                            style: "display: grid; grid-template-columns: 5fr 7fr; gap: 32px;",
                            StrategyForm {}
                            ResultPanel {}
                        }
                    }
                }
                GuideModal {}
            }
        },
    }
}
