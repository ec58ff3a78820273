// Strategy configuration form and the generate action.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::{BotStyle, IndicatorKind, StrategyRequest};

use super::preset_palette::PresetPalette;
use crate::config::AppConfig;
use crate::i18n::strings;
use crate::services::EngineClient;
use crate::state::AppState;

#[component]
pub fn StrategyForm() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let engine = use_context::<Signal<Option<EngineClient>>>();
    let config = use_context::<AppConfig>();
    let theme = config.theme.clone();

    let (language, request, loading, has_result) = {
        let s = state.read();
        (s.language, s.request.clone(), s.loading, s.result.is_some())
    };
    let t = strings(language);

    let styles: Vec<(BotStyle, String, &'static str)> = BotStyle::ALL
        .iter()
        .map(|s| {
            let css = if request.style == *s {
                format!("border: 1px solid {}; background: rgba(212, 175, 55, 0.1);", theme.accent)
            } else {
                format!("border: 1px solid {}; background: #000000;", theme.border)
            };
            (*s, css, s.description(language))
        })
        .collect();
    let indicators: Vec<(IndicatorKind, String, &'static str, &'static str)> = IndicatorKind::ALL
        .iter()
        .map(|k| {
            let css = if request.indicators.contains(k) {
                format!("border: 1px solid {}; color: {}; background: rgba(16, 185, 129, 0.1);", theme.success, theme.success)
            } else {
                format!("border: 1px solid {}; color: {}; background: #000000;", theme.border, theme.muted)
            };
            (*k, css, k.label(), k.description(language))
        })
        .collect();
    let can_generate = !loading && !request.indicators.is_empty();

    let start = request.start_date.format(StrategyRequest::DATE_FORMAT).to_string();
    let end = request.end_date.format(StrategyRequest::DATE_FORMAT).to_string();
    let risk = request.risk_level;
    let risk_percent = risk * 10;
    let (risk_min, risk_max) = (StrategyRequest::MIN_RISK, StrategyRequest::MAX_RISK);
    let button_label = if loading {
        t.analyzing
    } else if has_result {
        t.regenerate_btn
    } else {
        t.generate_btn
    };
    let button_style = if can_generate {
        format!("background: {}; color: #000000; cursor: pointer;", theme.accent)
    } else {
        "background: #1f2937; color: #6b7280; cursor: not-allowed;".to_string()
    };
    let label_style = format!(
        "display: block; font-size: 10px; font-weight: bold; letter-spacing: 0.2em; color: {}; margin-bottom: 12px;",
        theme.muted
    );

    let on_generate = move |_: MouseEvent| {
        let Some(mut client) = engine.read().clone() else {
            tracing::warn!("Generate pressed without an engine connection");
            return;
        };
        let (ticket, request) = state.write().begin_generation();
        tracing::info!(ticket, style = %request.style, risk = request.risk_level, "Submitting strategy request");
        spawn(async move {
            let outcome = match client.generate_strategy(&request).await {
                Ok(artifact) => Ok(artifact),
                Err(e) => {
                    tracing::error!("Strategy generation failed: {:#}", e);
                    Err(request.language.generation_failure_message().to_string())
                }
            };
            if !state.write().finish_generation(ticket, outcome) {
                tracing::debug!(ticket, "Discarded superseded generation result");
            }
        });
    };

    rsx! {
        div {
            style: "background: {theme.panel}; border: 1px solid {theme.border}; border-radius: 8px; padding: 24px; display: flex; flex-direction: column; gap: 28px;",

            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; padding-bottom: 16px; border-bottom: 1px solid {theme.border};",
                div {
                    h2 { style: "margin: 0 0 4px 0; font-size: 16px; font-weight: bold; color: #ffffff; letter-spacing: 0.1em;", "{t.engine_title}" }
                    p { style: "margin: 0; font-size: 10px; font-family: monospace; color: {theme.muted};", "{t.engine_desc}" }
                }
                PresetPalette {}
            }

            div {
                label { style: "{label_style}", "{t.style_label}" }
                div {
                    style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px;",
                    for (bot_style, css, description) in styles.into_iter() {
                        button {
                            key: "{bot_style}",
                            style: "text-align: left; padding: 12px; border-radius: 4px; cursor: pointer; {css}",
                            onclick: move |_| state.write().request.style = bot_style,
                            div { style: "font-size: 12px; font-weight: bold; color: #ffffff;", "{bot_style}" }
                            div { style: "font-size: 10px; color: #6b7280; margin-top: 4px;", "{description}" }
                        }
                    }
                }
            }

            div {
                div {
                    style: "display: flex; justify-content: space-between; align-items: center;",
                    label { style: "{label_style}", "{t.indicators_label}" }
                    span { style: "font-size: 9px; font-family: monospace; color: {theme.muted}; margin-bottom: 12px;", "{t.min_indicators}" }
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 8px;",
                    for (kind, css, label, description) in indicators.into_iter() {
                        button {
                            key: "{kind}",
                            title: "{description}",
                            style: "padding: 6px 12px; border-radius: 4px; font-size: 11px; font-family: monospace; cursor: pointer; {css}",
                            onclick: move |_| state.write().toggle_indicator(kind),
                            "{label}"
                        }
                    }
                }
            }

            div {
                div {
                    style: "display: flex; justify-content: space-between;",
                    label { style: "{label_style}", "{t.risk_label}" }
                    span { style: "font-size: 12px; font-family: monospace; font-weight: bold; color: {theme.accent};", "{risk_percent}%" }
                }
                input {
                    r#type: "range",
                    min: "{risk_min}",
                    max: "{risk_max}",
                    value: "{risk}",
                    style: "width: 100%; accent-color: {theme.accent};",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<u32>() {
                            state.write().set_risk(value);
                        }
                    },
                }
                div {
                    style: "display: flex; justify-content: space-between; font-size: 9px; font-family: monospace; color: {theme.muted}; margin-top: 6px;",
                    span { "{t.safe}" }
                    span { "{t.aggressive}" }
                }
            }

            div {
                label { style: "{label_style}", "{t.backtest_period}" }
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                    div {
                        span { style: "display: block; font-size: 9px; color: {theme.muted}; margin-bottom: 4px;", "{t.start_date}" }
                        input {
                            r#type: "date",
                            value: "{start}",
                            style: "width: 100%; box-sizing: border-box; padding: 8px; background: #000000; border: 1px solid {theme.border}; border-radius: 4px; color: {theme.foreground}; font-family: monospace; font-size: 11px;",
                            onchange: move |evt| {
                                if !state.write().set_start_date(&evt.value()) {
                                    tracing::debug!("Ignored unparsable start date");
                                }
                            },
                        }
                    }
                    div {
                        span { style: "display: block; font-size: 9px; color: {theme.muted}; margin-bottom: 4px;", "{t.end_date}" }
                        input {
                            r#type: "date",
                            value: "{end}",
                            style: "width: 100%; box-sizing: border-box; padding: 8px; background: #000000; border: 1px solid {theme.border}; border-radius: 4px; color: {theme.foreground}; font-family: monospace; font-size: 11px;",
                            onchange: move |evt| {
                                if !state.write().set_end_date(&evt.value()) {
                                    tracing::debug!("Ignored unparsable end date");
                                }
                            },
                        }
                    }
                }
            }

            div {
                label { style: "{label_style}", "{t.notes_label}" }
                textarea {
                    style: "width: 100%; box-sizing: border-box; height: 96px; padding: 12px; background: #000000; border: 1px solid {theme.border}; border-radius: 4px; color: {theme.foreground}; font-family: monospace; font-size: 11px; resize: none;",
                    placeholder: "{t.notes_placeholder}",
                    value: "{request.notes}",
                    oninput: move |evt| state.write().request.notes = evt.value(),
                }
            }

            button {
                style: "width: 100%; padding: 16px; border: none; border-radius: 4px; font-size: 13px; font-weight: bold; letter-spacing: 0.2em; {button_style}",
                disabled: !can_generate,
                onclick: on_generate,
                "{button_label}"
            }
        }
    }
}
