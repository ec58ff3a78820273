// Generated script display with copy / launch actions and the usage guide.
#![allow(non_snake_case)]
use std::time::Duration;

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::i18n::strings;
use crate::state::AppState;

const COPIED_RESET: Duration = Duration::from_secs(2);

/// JS snippet writing `text` to the clipboard.
pub fn clipboard_script(text: &str) -> String {
    // A JSON string literal is also a valid JS one.
    let literal = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    format!("navigator.clipboard.writeText({});", literal)
}

pub fn open_url_script(url: &str) -> String {
    let literal = serde_json::to_string(url).unwrap_or_else(|_| "\"\"".to_string());
    format!("window.open({}, '_blank');", literal)
}

/// Copies the current script and flips the `copied` badge for a moment.
fn copy_to_clipboard(mut state: Signal<AppState>) {
    let Some(code) = state.read().result.as_ref().map(|r| r.code.clone()) else {
        return;
    };
    let _ = eval(&clipboard_script(&code));
    let ticket = state.write().mark_copied();
    spawn(async move {
        tokio::time::sleep(COPIED_RESET).await;
        state.write().clear_copied(ticket);
    });
}

#[component]
pub fn ResultPanel() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let config = use_context::<AppConfig>();
    let theme = config.theme.clone();
    let tradingview_url = config.links.tradingview_url.clone();

    let (language, result, loading, error_message, copied) = {
        let s = state.read();
        (s.language, s.result.clone(), s.loading, s.error_message.clone(), s.copied)
    };
    let t = strings(language);
    let copy_label = if copied { t.copied } else { t.copy };

    let panel = format!(
        "background: {}; border: 1px solid {}; border-radius: 8px; min-height: 560px; display: flex; flex-direction: column; overflow: hidden;",
        theme.panel, theme.border
    );

    if loading {
        return rsx! {
            div {
                style: "{panel} align-items: center; justify-content: center;",
                div { style: "font-size: 28px; color: {theme.accent}; margin-bottom: 16px;", "⟳" }
                p { style: "font-family: monospace; font-size: 11px; letter-spacing: 0.2em; color: {theme.accent};", "{t.analyzing}" }
            }
        };
    }

    if let Some(message) = error_message {
        return rsx! {
            div {
                style: "{panel} align-items: center; justify-content: center; padding: 32px; text-align: center;",
                div { style: "font-size: 28px; color: {theme.danger}; margin-bottom: 12px;", "⚠" }
                p { style: "font-family: monospace; font-size: 12px; color: {theme.danger};", "{message}" }
            }
        };
    }

    let Some(artifact) = result else {
        return rsx! {
            div {
                style: "{panel} align-items: center; justify-content: center; padding: 32px; text-align: center;",
                div { style: "font-size: 36px; color: #374151; margin-bottom: 16px;", "⌘" }
                p { style: "font-family: monospace; font-size: 11px; color: {theme.muted};", "{t.select_prompt}" }
            }
        };
    };

    let action_style = format!(
        "display: flex; align-items: center; gap: 6px; padding: 6px 12px; border-radius: 4px; border: 1px solid {}; background: #000000; color: {}; font-size: 10px; font-weight: bold; cursor: pointer;",
        theme.border, theme.foreground
    );

    rsx! {
        div {
            style: "{panel}",
            div {
                style: "padding: 16px; border-bottom: 1px solid {theme.border}; display: flex; justify-content: space-between; align-items: center; gap: 12px;",
                div {
                    h3 { style: "margin: 0; font-size: 14px; font-weight: bold; color: #ffffff;", "{artifact.name}" }
                    p { style: "margin: 4px 0 0 0; font-size: 9px; font-family: monospace; color: {theme.success};", "● {t.status_ready}" }
                }
                div {
                    style: "display: flex; gap: 8px;",
                    button {
                        style: "{action_style}",
                        onclick: move |_| state.write().show_guide = true,
                        "? {t.how_to}"
                    }
                    button {
                        style: "{action_style}",
                        onclick: move |_| {
                            copy_to_clipboard(state);
                            let _ = eval(&open_url_script(&tradingview_url));
                            tracing::info!("Opened TradingView with the script on the clipboard");
                        },
                        "↗ {t.open_tv}"
                    }
                    button {
                        style: "{action_style} color: {theme.accent};",
                        onclick: move |_| copy_to_clipboard(state),
                        "{copy_label}"
                    }
                }
            }
            pre {
                style: "flex: 1; margin: 0; padding: 16px; background: #000000; color: {theme.foreground}; font-family: monospace; font-size: 11px; line-height: 1.5; overflow: auto; max-height: 420px; white-space: pre;",
                "{artifact.code}"
            }
            div {
                style: "padding: 16px; border-top: 1px solid {theme.border}; font-size: 11px; color: {theme.muted}; line-height: 1.6;",
                "{artifact.explanation}"
            }
        }
    }
}

#[component]
pub fn GuideModal() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let config = use_context::<AppConfig>();
    let theme = &config.theme;

    let (language, visible) = {
        let s = state.read();
        (s.language, s.show_guide)
    };
    if !visible {
        return rsx! {};
    }
    let t = strings(language);
    let steps: Vec<(usize, &'static str)> = t.steps.iter().enumerate().map(|(i, s)| (i + 1, *s)).collect();

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.8); display: flex; align-items: center; justify-content: center; z-index: 100;",
            onclick: move |_| state.write().show_guide = false,
            div {
                style: "background: {theme.panel}; border: 1px solid {theme.border}; border-radius: 8px; padding: 24px; max-width: 440px; width: 100%;",
                onclick: move |evt| evt.stop_propagation(),
                h3 { style: "margin: 0 0 16px 0; font-size: 14px; font-weight: bold; letter-spacing: 0.1em; color: {theme.accent};", "{t.guide_title}" }
                ol {
                    style: "margin: 0 0 20px 0; padding: 0; list-style: none; display: flex; flex-direction: column; gap: 12px;",
                    for (number, step) in steps.into_iter() {
                        li {
                            key: "{number}",
                            style: "display: flex; gap: 12px; font-size: 12px; color: {theme.foreground};",
                            span { style: "color: {theme.accent}; font-family: monospace; font-weight: bold;", "{number}." }
                            span { "{step}" }
                        }
                    }
                }
                button {
                    style: "width: 100%; padding: 10px; border: none; border-radius: 4px; background: {theme.accent}; color: #000000; font-weight: bold; letter-spacing: 0.1em; cursor: pointer;",
                    onclick: move |_| state.write().show_guide = false,
                    "{t.understood}"
                }
            }
        }
    }
}
