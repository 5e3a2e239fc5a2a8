//! Charts module - aggregate projections and chart drawing

mod plotter;
mod projection;

pub use plotter::{ChartPlotter, PALETTE};
pub use projection::{CategoryBreakdown, MonthlySeries, MONTH_LABELS};
