// Maps window values onto SVG coordinates: price on the right axis,
// oscillator on a fixed 0..max axis, volume bars on a fixed 0..max axis.
use shared::CandleRecord;

use crate::config::ChartConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    min_price: f64,
    max_price: f64,
    count: usize,
    oscillator_max: f64,
    volume_max: f64,
}

impl ChartGeometry {
    pub fn new(candles: &[CandleRecord], config: &ChartConfig) -> Self {
        let (mut min_price, mut max_price) = candles
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| (lo.min(c.close), hi.max(c.close)));
        if !min_price.is_finite() || !max_price.is_finite() {
            min_price = 0.0;
            max_price = 1.0;
        }
        let pad = ((max_price - min_price) * 0.05).max(1.0);

        Self {
            width: config.width,
            height: config.height,
            margin: config.margin,
            min_price: min_price - pad,
            max_price: max_price + pad,
            count: candles.len().max(1),
            oscillator_max: config.oscillator_axis_max,
            volume_max: config.volume_axis_max,
        }
    }

    pub fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    pub fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }

    pub fn top(&self) -> f64 {
        self.margin
    }

    pub fn bottom(&self) -> f64 {
        self.margin + self.plot_height()
    }

    pub fn column_width(&self) -> f64 {
        self.plot_width() / self.count as f64
    }

    /// Centre of the i-th column.
    pub fn x(&self, index: usize) -> f64 {
        self.margin + index as f64 * self.column_width() + self.column_width() / 2.0
    }

    pub fn column_left(&self, index: usize) -> f64 {
        self.margin + index as f64 * self.column_width()
    }

    pub fn price_y(&self, price: f64) -> f64 {
        let range = self.max_price - self.min_price;
        self.top() + (self.max_price - price) / range * self.plot_height()
    }

    /// Out-of-range oscillator values are pinned to the axis edges.
    pub fn oscillator_y(&self, value: f64) -> f64 {
        let ratio = (value / self.oscillator_max).clamp(0.0, 1.0);
        self.bottom() - ratio * self.plot_height()
    }

    pub fn volume_height(&self, volume: u64) -> f64 {
        (volume as f64 / self.volume_max).min(1.0) * self.plot_height()
    }

    pub fn close_points(&self, candles: &[CandleRecord]) -> String {
        polyline_points(candles.iter().enumerate().map(|(i, c)| (self.x(i), self.price_y(c.close))))
    }

    pub fn oscillator_points(&self, candles: &[CandleRecord]) -> String {
        polyline_points(candles.iter().enumerate().map(|(i, c)| (self.x(i), self.oscillator_y(c.oscillator_value))))
    }

    /// Closed path under the close line, for the gradient fill.
    pub fn area_path(&self, candles: &[CandleRecord]) -> String {
        if candles.is_empty() {
            return String::new();
        }
        let mut d = format!("M {:.2},{:.2}", self.x(0), self.bottom());
        for (i, c) in candles.iter().enumerate() {
            d.push_str(&format!(" L {:.2},{:.2}", self.x(i), self.price_y(c.close)));
        }
        d.push_str(&format!(" L {:.2},{:.2} Z", self.x(candles.len() - 1), self.bottom()));
        d
    }

    /// Evenly spaced horizontal grid lines with their price values.
    pub fn price_ticks(&self, count: usize) -> Vec<(f64, f64)> {
        if count < 2 {
            return Vec::new();
        }
        (0..count)
            .map(|i| {
                let price = self.max_price - (self.max_price - self.min_price) * i as f64 / (count - 1) as f64;
                (self.price_y(price), price)
            })
            .collect()
    }
}

pub fn polyline_points(points: impl Iterator<Item = (f64, f64)>) -> String {
    points.map(|(x, y)| format!("{:.2},{:.2}", x, y)).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use shared::Signal;

    fn candle(close: f64, oscillator_value: f64, volume: u64) -> CandleRecord {
        CandleRecord {
            timestamp: "12:00".to_string(),
            open: close,
            high: close + 10.0,
            low: close - 10.0,
            close,
            volume,
            oscillator_value,
            signal: Signal::Hold,
        }
    }

    fn config() -> ChartConfig {
        AppConfig::load_default().unwrap().chart
    }

    #[test]
    fn test_columns_stay_inside_plot() {
        let candles: Vec<_> = (0..50).map(|i| candle(50_000.0 + i as f64 * 10.0, 50.0, 500)).collect();
        let g = ChartGeometry::new(&candles, &config());
        assert!(g.x(0) > g.margin);
        assert!(g.x(49) < g.width - g.margin);
        assert!((g.column_left(1) - g.column_left(0) - g.column_width()).abs() < 1e-9);
    }

    #[test]
    fn test_higher_price_is_higher_on_screen() {
        let candles = vec![candle(49_000.0, 50.0, 500), candle(51_000.0, 50.0, 500)];
        let g = ChartGeometry::new(&candles, &config());
        assert!(g.price_y(51_000.0) < g.price_y(49_000.0));
        assert!(g.price_y(51_000.0) > g.top());
        assert!(g.price_y(49_000.0) < g.bottom());
    }

    #[test]
    fn test_flat_window_has_finite_coordinates() {
        let candles = vec![candle(50_000.0, 50.0, 500); 3];
        let g = ChartGeometry::new(&candles, &config());
        assert!(g.price_y(50_000.0).is_finite());
        assert!(!g.close_points(&candles).contains("NaN"));
    }

    #[test]
    fn test_fixed_axes() {
        let g = ChartGeometry::new(&[candle(1.0, 0.0, 0)], &config());
        assert_eq!(g.oscillator_y(0.0), g.bottom());
        assert_eq!(g.oscillator_y(100.0), g.top());
        assert_eq!(g.oscillator_y(120.0), g.top());
        assert_eq!(g.oscillator_y(-5.0), g.bottom());
        assert_eq!(g.volume_height(2_500), g.plot_height() / 2.0);
        assert_eq!(g.volume_height(9_000), g.plot_height());
    }

    #[test]
    fn test_paths() {
        let candles = vec![candle(100.0, 20.0, 100), candle(110.0, 80.0, 200)];
        let g = ChartGeometry::new(&candles, &config());
        assert_eq!(g.close_points(&candles).split(' ').count(), 2);
        let area = g.area_path(&candles);
        assert!(area.starts_with("M "));
        assert!(area.ends_with(" Z"));
        assert!(g.area_path(&[]).is_empty());

        let ticks = g.price_ticks(5);
        assert_eq!(ticks.len(), 5);
        assert!(ticks[0].1 > ticks[4].1);
        assert!((ticks[0].0 - g.top()).abs() < 1e-9);
        assert!((ticks[4].0 - g.bottom()).abs() < 1e-9);
    }
}
