//! GUI module - User interface components

mod app;
mod chart_view;
mod entry_panel;
mod expense_table;

pub use app::TrackerApp;
pub use chart_view::ChartView;
pub use entry_panel::{EntryAction, EntryPanel};
pub use expense_table::ExpenseTable;
