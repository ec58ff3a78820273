// Simulation tab: metric cards, live chart and the execution log.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::summary::{Sentiment, WindowSummary};
use shared::utils::format_currency_whole;
use shared::CandleRecord;
use shared::Signal as TradeSignal;

use super::chart::LiveChart;
use crate::config::{AppConfig, ThemePalette};
use crate::i18n::strings;
use crate::state::AppState;

const PLACEHOLDER: &str = "--";

/// Card values in display order: sentiment, volatility, win rate, signal.
pub fn metric_values(summary: Option<&WindowSummary>) -> [String; 4] {
    match summary {
        Some(s) => [
            s.sentiment.as_str().to_string(),
            format!("{:.1}", s.volatility),
            s.estimated_win_rate.map(|r| format!("{:.1}%", r * 100.0)).unwrap_or_else(|| PLACEHOLDER.to_string()),
            s.latest_signal.as_str().to_string(),
        ],
        None => std::array::from_fn(|_| PLACEHOLDER.to_string()),
    }
}

pub fn log_line(candle: &CandleRecord) -> String {
    match candle.signal {
        TradeSignal::Buy => format!("LONG ENTRY @ {}", format_currency_whole(candle.close)),
        TradeSignal::Sell => format!("SHORT ENTRY @ {}", format_currency_whole(candle.close)),
        TradeSignal::Hold => format!("HOLD @ {}", format_currency_whole(candle.close)),
    }
}

fn sentiment_color(theme: &ThemePalette, sentiment: Option<Sentiment>) -> String {
    match sentiment {
        Some(Sentiment::Bullish) => theme.success.clone(),
        Some(Sentiment::Bearish) => theme.danger.clone(),
        _ => theme.muted.clone(),
    }
}

#[component]
fn MetricCard(label: String, value: String, color: String, icon: String) -> Element {
    let config = use_context::<AppConfig>();
    let theme = &config.theme;
    rsx! {
        div {
            style: "background: {theme.panel}; border: 1px solid {theme.border}; padding: 20px; border-radius: 8px; display: flex; align-items: center; justify-content: space-between;",
            div {
                p { style: "margin: 0 0 4px 0; font-size: 9px; font-family: monospace; color: {theme.muted}; letter-spacing: 0.2em;", "{label}" }
                p { style: "margin: 0; font-size: 18px; font-weight: bold; font-family: monospace; color: {color};", "{value}" }
            }
            span { style: "color: #374151; font-size: 20px;", "{icon}" }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<Signal<AppState>>();
    let config = use_context::<AppConfig>();
    let theme = config.theme.clone();

    let (language, candles, summary, log) = {
        let s = state.read();
        (s.language, s.window.clone(), s.summary(), s.execution_log(config.dashboard.log_entries))
    };
    let t = strings(language);

    let [sentiment, volatility, win_rate, signal] = metric_values(summary.as_ref());
    let sentiment_color = sentiment_color(&theme, summary.as_ref().map(|s| s.sentiment));
    let signal_color = summary.as_ref().map(|s| theme.signal_color(s.latest_signal).to_string()).unwrap_or_else(|| theme.muted.clone());

    let log_rows: Vec<(String, String, String, String)> = log
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let key = format!("{}-{}", i, c.timestamp);
            let meta = format!("{} | Vol: {}", c.timestamp, c.volume);
            (key, meta, log_line(c), theme.signal_color(c.signal).to_string())
        })
        .collect();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",
            div {
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px;",
                MetricCard { label: t.market_sentiment.to_string(), value: sentiment, color: sentiment_color, icon: "↗".to_string() }
                MetricCard { label: t.volatility.to_string(), value: volatility, color: "#60a5fa".to_string(), icon: "∿".to_string() }
                MetricCard { label: t.win_rate.to_string(), value: win_rate, color: theme.accent.clone(), icon: "ϟ".to_string() }
                MetricCard { label: t.signal.to_string(), value: signal, color: signal_color, icon: "▣".to_string() }
            }

            LiveChart { candles: candles, title: t.live_title.to_string() }

            div {
                style: "display: grid; grid-template-columns: 2fr 1fr; gap: 24px;",
                div {
                    style: "background: {theme.panel}; border: 1px solid {theme.border}; border-radius: 8px; padding: 24px;",
                    h3 {
                        style: "margin: 0 0 16px 0; padding-bottom: 8px; border-bottom: 1px solid {theme.border}; color: #ffffff; font-family: monospace; font-size: 12px; letter-spacing: 0.2em;",
                        span { style: "color: {theme.accent}; margin-right: 8px;", ">_" }
                        "{t.log_title}"
                    }
                    div {
                        style: "display: flex; flex-direction: column; gap: 12px; font-family: monospace; font-size: 10px; max-height: 192px; overflow-y: auto;",
                        if log_rows.is_empty() {
                            span { style: "color: {theme.muted};", "{t.log_empty}" }
                        }
                        for (key, meta, line, color) in log_rows.into_iter() {
                            div {
                                key: "{key}",
                                style: "display: flex; justify-content: space-between; align-items: center; opacity: 0.9;",
                                span { style: "color: {color};", "{line}" }
                                span { style: "color: {theme.muted};", "{meta}" }
                            }
                        }
                    }
                }
                div {
                    style: "background: #080808; border: 1px solid {theme.border}; border-radius: 8px; padding: 24px; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center;",
                    div {
                        style: "width: 64px; height: 64px; border-radius: 50%; border: 1px solid {theme.border}; background: {theme.panel}; display: flex; align-items: center; justify-content: center; margin-bottom: 16px; font-size: 30px; color: #ffffff;",
                        "⬡"
                    }
                    h3 { style: "margin: 0 0 4px 0; font-size: 14px; font-weight: bold; color: #ffffff; letter-spacing: 0.1em;", "{t.title}" }
                    p { style: "margin: 0; font-size: 10px; font-family: monospace; color: {theme.muted};", "{t.processing}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(close: f64, signal: TradeSignal) -> CandleRecord {
        CandleRecord {
            timestamp: "14:02:10".to_string(),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1_250,
            oscillator_value: 25.0,
            signal,
        }
    }

    #[test]
    fn test_metric_values_without_window() {
        assert_eq!(metric_values(None), ["--", "--", "--", "--"]);
    }

    #[test]
    fn test_metric_values_from_summary() {
        let summary = WindowSummary {
            sentiment: Sentiment::Bullish,
            volatility: 212.345,
            estimated_win_rate: Some(0.874),
            latest_signal: TradeSignal::Buy,
        };
        assert_eq!(metric_values(Some(&summary)), ["BULLISH", "212.3", "87.4%", "BUY"]);

        let no_rate = WindowSummary { estimated_win_rate: None, ..summary };
        assert_eq!(metric_values(Some(&no_rate))[2], "--");
    }

    #[test]
    fn test_log_lines() {
        assert_eq!(log_line(&candle(94_230.4, TradeSignal::Buy)), "LONG ENTRY @ $94,230");
        assert_eq!(log_line(&candle(50_100.0, TradeSignal::Sell)), "SHORT ENTRY @ $50,100");
    }
}
