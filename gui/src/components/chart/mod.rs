pub mod geometry;
pub mod live_chart;

pub use live_chart::LiveChart;
