// GUI main entry point using Dioxus
#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

mod app;
mod components;
mod config;
mod i18n;
mod services;
mod state;

use app::App;
use config::AppConfig;

fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Calix Sanctus GUI (Dioxus Desktop)...");

    let app_config = match AppConfig::load_default() {
        Ok(cfg) => {
            tracing::info!("Loaded default configuration version {}", cfg.version);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load default configuration: {:#}", e);
            return;
        }
    };

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.app.title.clone())
            .with_inner_size(LogicalSize::new(app_config.app.window_width, app_config.app.window_height)),
    );

    LaunchBuilder::desktop().with_cfg(desktop_config).with_context(app_config).launch(App);

    tracing::info!("Calix Sanctus GUI finished.");
}
