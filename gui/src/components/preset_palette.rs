// Preset palette: fuzzy-filtered list of ready-made strategy setups.
#![allow(non_snake_case)]
use chrono::Local;
use dioxus::prelude::*;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use shared::presets::Preset;
use shared::Language;

use crate::config::AppConfig;
use crate::i18n::strings;
use crate::state::AppState;

/// Presets matching `query`, best match first. An empty query keeps the
/// catalog order.
pub fn filter_presets(query: &str, lang: Language) -> Vec<Preset> {
    let query = query.trim();
    if query.is_empty() {
        return Preset::ALL.to_vec();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, Preset)> = Preset::ALL
        .iter()
        .filter_map(|preset| {
            let haystack = format!("{} {}", preset.label(), preset.description(lang));
            matcher.fuzzy_match(&haystack, query).map(|score| (score, *preset))
        })
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, preset)| preset).collect()
}

#[component]
pub fn PresetPalette() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let config = use_context::<AppConfig>();
    let theme = &config.theme;
    let mut filter_text = use_signal(String::new);

    let (language, open) = {
        let s = state.read();
        (s.language, s.show_presets)
    };
    let t = strings(language);

    let rows: Vec<(Preset, &'static str, &'static str)> = filter_presets(&filter_text.read(), language)
        .into_iter()
        .map(|p| (p, p.label(), p.description(language)))
        .collect();

    rsx! {
        div {
            style: "position: relative;",
            button {
                style: "display: flex; align-items: center; gap: 8px; padding: 8px 16px; background: {theme.panel}; border: 1px solid {theme.border}; border-radius: 4px; color: {theme.accent}; font-size: 11px; font-weight: bold; letter-spacing: 0.1em; cursor: pointer;",
                onclick: move |_| {
                    let mut s = state.write();
                    s.show_presets = !s.show_presets;
                },
                "⚡ {t.presets_btn}"
            }
            if open {
                div {
                    style: "position: absolute; right: 0; top: 100%; margin-top: 8px; width: 288px; background: {theme.panel}; border: 1px solid {theme.border}; border-radius: 8px; box-shadow: 0 20px 40px rgba(0,0,0,0.6); z-index: 50; overflow: hidden;",
                    input {
                        style: "width: 100%; box-sizing: border-box; padding: 10px 12px; background: #000000; border: none; border-bottom: 1px solid {theme.border}; color: {theme.foreground}; font-family: monospace; font-size: 11px; outline: none;",
                        placeholder: "{t.presets_filter}",
                        value: "{filter_text}",
                        autofocus: true,
                        oninput: move |evt| filter_text.set(evt.value()),
                    }
                    if rows.is_empty() {
                        div { style: "padding: 12px; color: {theme.muted}; font-size: 11px; font-family: monospace;", "{t.presets_none}" }
                    }
                    for (preset, label, description) in rows.into_iter() {
                        button {
                            key: "{label}",
                            style: "width: 100%; text-align: left; padding: 12px; background: none; border: none; border-bottom: 1px solid {theme.border}; cursor: pointer; display: block;",
                            onclick: move |_| {
                                state.write().apply_preset(preset, Local::now().date_naive());
                                filter_text.set(String::new());
                                tracing::info!(preset = preset.label(), "Preset applied");
                            },
                            div { style: "font-size: 11px; font-weight: bold; color: #ffffff;", "{label}" }
                            div { style: "font-size: 10px; color: {theme.muted}; margin-top: 2px;", "{description}" }
                        }
                    }
                }
            }
        }
    }
}
