// GUI components module
pub mod chart;
pub mod dashboard;
pub mod halt_screen;
pub mod header;
pub mod preset_palette;
pub mod result_panel;
pub mod strategy_form;

pub use dashboard::Dashboard;
pub use halt_screen::{ConnectingScreen, HaltScreen};
pub use header::Header;
pub use result_panel::{GuideModal, ResultPanel};
pub use strategy_form::StrategyForm;
