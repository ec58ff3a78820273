// Blocking screens shown while the engine link is not usable.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::i18n::strings;
use crate::state::AppState;

#[component]
pub fn HaltScreen(reason: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let config = use_context::<AppConfig>();
    let theme = &config.theme;
    let t = strings(state.read().language);

    rsx! {
        div {
            style: "min-height: 100vh; background: #000000; display: flex; align-items: center; justify-content: center; color: #ffffff; font-family: monospace; padding: 16px;",
            div {
                style: "background: {theme.panel}; border: 1px solid rgba(127, 29, 29, 0.5); padding: 32px; max-width: 420px; text-align: center;",
                div { style: "font-size: 44px; color: #b91c1c; margin-bottom: 16px;", "⚠" }
                h1 { style: "font-size: 20px; font-weight: bold; letter-spacing: 0.2em; color: {theme.danger}; margin: 0 0 8px 0;", "{t.halted_title}" }
                p { style: "color: {theme.muted}; font-size: 11px; margin: 0 0 16px 0;", "{t.halted_detail}" }
                p { style: "color: #4b5563; font-size: 10px; margin: 0; word-break: break-word;", "{reason}" }
            }
        }
    }
}

#[component]
pub fn ConnectingScreen() -> Element {
    let state = use_context::<Signal<AppState>>();
    let config = use_context::<AppConfig>();
    let t = strings(state.read().language);

    rsx! {
        div {
            style: "min-height: 100vh; background: {config.theme.background}; display: flex; align-items: center; justify-content: center; font-family: monospace; font-size: 12px; letter-spacing: 0.2em; color: {config.theme.accent};",
            "{t.connecting}"
        }
    }
}
