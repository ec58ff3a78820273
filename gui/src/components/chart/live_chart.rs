// Live market chart: close-price area, oscillator line and volume bars
// drawn as SVG, with a hover tooltip per column.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::utils::{format_currency, format_currency_whole};
use shared::CandleRecord;

use super::geometry::ChartGeometry;
use crate::config::AppConfig;

const PRICE_TICKS: usize = 5;
const TIME_LABELS: usize = 6;

#[component]
pub fn LiveChart(candles: Vec<CandleRecord>, title: String) -> Element {
    let config = use_context::<AppConfig>();
    let mut hovered = use_signal(|| None::<usize>);

    let chart = &config.chart;
    let theme = &config.theme;
    let geometry = ChartGeometry::new(&candles, chart);

    let width = geometry.width;
    let height = geometry.height;
    let margin = geometry.margin;
    let top = geometry.top();
    let bottom = geometry.bottom();
    let plot_height = geometry.plot_height();
    let column = geometry.column_width();
    let bar_width = (column * 0.5).clamp(1.0, 4.0);
    let axis_x = width - margin + 6.0;

    let area = geometry.area_path(&candles);
    let close_line = geometry.close_points(&candles);
    let oscillator_line = geometry.oscillator_points(&candles);

    let ticks: Vec<(f64, String)> =
        geometry.price_ticks(PRICE_TICKS).into_iter().map(|(y, price)| (y, format_currency_whole(price))).collect();

    let label_every = (candles.len() / TIME_LABELS).max(1);
    let time_labels: Vec<(f64, String)> = candles
        .iter()
        .enumerate()
        .filter(|(i, _)| i % label_every == 0)
        .map(|(i, c)| (geometry.x(i), c.timestamp.clone()))
        .collect();

    let bars: Vec<(f64, f64, f64)> = candles
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let h = geometry.volume_height(c.volume);
            (geometry.x(i) - bar_width / 2.0, bottom - h, h)
        })
        .collect();

    let columns: Vec<(usize, f64)> = (0..candles.len()).map(|i| (i, geometry.column_left(i))).collect();

    let tooltip = hovered().and_then(|i| candles.get(i).map(|c| (geometry.x(i), c)));
    let tooltip_text = tooltip.map(|(_, c)| {
        (c.timestamp.clone(), format!("Close: {}", format_currency(c.close)), format!("RSI: {:.1}", c.oscillator_value), format!("Vol: {}", c.volume))
    });
    let cursor_x = tooltip.map(|(x, _)| x);

    rsx! {
        div {
            style: "width: 100%; background: {theme.panel}; border: 1px solid {theme.border}; border-radius: 8px; padding: 4px; box-sizing: border-box;",
            div {
                style: "background: #080808; border-radius: 4px; padding: 16px; position: relative;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                    h3 {
                        style: "margin: 0; color: {theme.foreground}; font-family: monospace; font-size: 12px; letter-spacing: 0.2em; display: flex; align-items: center; gap: 8px;",
                        span { style: "width: 6px; height: 6px; border-radius: 50%; background: {theme.success}; display: inline-block;" }
                        "{title}"
                    }
                    div {
                        style: "display: flex; gap: 4px; font-family: monospace; font-size: 10px; color: {theme.muted};",
                        span { style: "padding: 2px 8px; border: 1px solid {theme.border}; border-radius: 4px; background: {theme.panel};", "{chart.pair_label}" }
                        span { style: "padding: 2px 8px; border: 1px solid {theme.border}; border-radius: 4px; background: {theme.panel};", "{chart.interval_label}" }
                    }
                }
                if candles.is_empty() {
                    div { style: "height: {height}px; display: flex; align-items: center; justify-content: center; color: {theme.muted}; font-family: monospace; font-size: 11px;", "..." }
                } else {
                    svg {
                        width: "100%",
                        "viewBox": "0 0 {width} {height}",
                        onmouseleave: move |_| hovered.set(None),
                        defs {
                            linearGradient {
                                id: "colorPrice",
                                x1: "0", y1: "0", x2: "0", y2: "1",
                                stop { offset: "5%", "stop-color": "{chart.price_color}", "stop-opacity": "0.1" }
                                stop { offset: "95%", "stop-color": "{chart.price_color}", "stop-opacity": "0" }
                            }
                        }
                        for (y, label) in ticks.iter() {
                            line {
                                x1: "{margin}", y1: "{y}", x2: "{width - margin}", y2: "{y}",
                                stroke: "{chart.grid_color}",
                                "stroke-dasharray": "3 3",
                                opacity: "0.4",
                            }
                            text {
                                x: "{axis_x}", y: "{y + 3.0}",
                                fill: "{theme.muted}",
                                "font-size": "9",
                                "font-family": "monospace",
                                "{label}"
                            }
                        }
                        for (x, bar_top, bar_height) in bars.iter() {
                            rect {
                                x: "{x}", y: "{bar_top}",
                                width: "{bar_width}", height: "{bar_height}",
                                fill: "{chart.volume_color}",
                                opacity: "0.3",
                            }
                        }
                        path { d: "{area}", fill: "url(#colorPrice)", stroke: "none" }
                        polyline {
                            points: "{close_line}",
                            fill: "none",
                            stroke: "{chart.price_color}",
                            stroke_width: "1.5",
                        }
                        polyline {
                            points: "{oscillator_line}",
                            fill: "none",
                            stroke: "{chart.oscillator_color}",
                            stroke_width: "1",
                            opacity: "0.6",
                        }
                        for (x, label) in time_labels.iter() {
                            text {
                                x: "{x}", y: "{bottom + 18.0}",
                                fill: "{theme.muted}",
                                "font-size": "9",
                                "font-family": "monospace",
                                "text-anchor": "middle",
                                "{label}"
                            }
                        }
                        if let Some(x) = cursor_x {
                            line {
                                x1: "{x}", y1: "{top}", x2: "{x}", y2: "{bottom}",
                                stroke: "{chart.volume_color}",
                                stroke_width: "1",
                            }
                        }
                        for (index, left) in columns.into_iter() {
                            rect {
                                key: "{index}",
                                x: "{left}", y: "{top}",
                                width: "{column}", height: "{plot_height}",
                                fill: "transparent",
                                onmouseenter: move |_| hovered.set(Some(index)),
                            }
                        }
                    }
                }
                if let Some((time, close, rsi, volume)) = tooltip_text {
                    div {
                        style: "position: absolute; top: 56px; left: 24px; background: {theme.panel}; border: 1px solid {theme.border}; padding: 10px; border-radius: 4px; font-family: monospace; font-size: 11px; pointer-events: none;",
                        p { style: "margin: 0 0 6px 0; color: {theme.muted}; border-bottom: 1px solid #1f2937; padding-bottom: 4px;", "{time}" }
                        p { style: "margin: 0; color: {theme.success};", "{close}" }
                        p { style: "margin: 0; color: {theme.accent};", "{rsi}" }
                        p { style: "margin: 4px 0 0 0; color: {theme.muted};", "{volume}" }
                    }
                }
            }
        }
    }
}
