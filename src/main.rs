//! SpendSmart Tracker - Personal Expense Tracker & Spending Charts
//!
//! A Rust application for recording categorized expenses and visualizing
//! spending by category and by month.

mod charts;
mod data;
mod gui;

use eframe::egui;
use gui::TrackerApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("SpendSmart Tracker"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "SpendSmart Tracker",
        options,
        Box::new(|cc| Ok(Box::new(TrackerApp::new(cc)))),
    )
}
