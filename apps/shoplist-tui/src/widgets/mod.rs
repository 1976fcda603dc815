//! TUI widgets

mod mode_indicator;
mod summary_bar;

pub use mode_indicator::ModeIndicator;
pub use summary_bar::SummaryBar;
