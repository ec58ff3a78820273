// Top bar: product title, tab switcher and language toggle.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::i18n::strings;
use crate::state::{AppState, Tab};

#[component]
pub fn Header() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let config = use_context::<AppConfig>();
    let theme = &config.theme;

    let (language, active_tab) = {
        let s = state.read();
        (s.language, s.active_tab)
    };
    let t = strings(language);

    let tab_style = |tab: Tab| {
        let (border, color) = if active_tab == tab { (theme.accent.as_str(), "#ffffff") } else { ("transparent", theme.muted.as_str()) };
        format!(
            "padding: 8px 16px; font-size: 12px; font-weight: bold; letter-spacing: 0.1em; background: none; border: none; border-bottom: 2px solid {}; color: {}; cursor: pointer;",
            border, color
        )
    };
    let strategy_style = tab_style(Tab::Strategy);
    let simulation_style = tab_style(Tab::Simulation);
    let lang_label = language.as_str().to_uppercase();

    rsx! {
        header {
            style: "border-bottom: 1px solid {theme.border}; background: {theme.background}; position: sticky; top: 0; z-index: 50;",
            div {
                style: "padding: 0 24px; height: 64px; display: flex; align-items: center; justify-content: space-between;",
                div {
                    style: "display: flex; align-items: center; gap: 16px;",
                    span { style: "color: {theme.accent}; font-size: 26px;", "⬡" }
                    div {
                        h1 { style: "margin: 0; font-size: 18px; font-weight: bold; letter-spacing: 0.2em; color: #ffffff;", "{t.title}" }
                        p { style: "margin: 4px 0 0 0; font-size: 9px; font-family: monospace; letter-spacing: 0.2em; color: {theme.accent}; opacity: 0.8;", "{t.subtitle}" }
                    }
                }
                div {
                    style: "display: flex; align-items: center; gap: 24px;",
                    nav {
                        style: "display: flex; gap: 4px;",
                        button { style: "{strategy_style}", onclick: move |_| state.write().active_tab = Tab::Strategy, "{t.tab_strategy}" }
                        button { style: "{simulation_style}", onclick: move |_| state.write().active_tab = Tab::Simulation, "{t.tab_simulation}" }
                    }
                    button {
                        style: "padding: 6px 12px; border-radius: 4px; border: 1px solid {theme.border}; background: none; color: {theme.muted}; font-family: monospace; font-size: 10px; cursor: pointer;",
                        onclick: move |_| {
                            state.write().toggle_language();
                            tracing::info!(language = %state.read().language, "Interface language switched");
                        },
                        span { style: "color: {theme.accent}; margin-right: 6px;", "◍" }
                        "{lang_label}"
                    }
                }
            }
        }
    }
}
