//! SpendSmart Main Application
//! Main window with the entry side panel and the chart area.

use crate::data::{ExpenseRecord, ExpenseStore};
use crate::gui::{ChartView, EntryAction, EntryPanel, ExpenseTable};
use egui::{Color32, RichText, SidePanel, Visuals};

/// Main application window.
pub struct TrackerApp {
    store: ExpenseStore,
    entry_panel: EntryPanel,
    chart_view: ChartView,
    dark_mode: bool,
}

impl TrackerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // The page starts in light mode; the toggle swaps the whole theme.
        cc.egui_ctx.set_visuals(Visuals::light());

        let store = ExpenseStore::new();
        let mut chart_view = ChartView::new();
        chart_view.refresh(&store);

        Self {
            store,
            entry_panel: EntryPanel::new(),
            chart_view,
            dark_mode: false,
        }
    }

    /// Validate the form and, if it passes, add the record and redraw the
    /// charts from the updated store.
    fn handle_submit(&mut self) {
        if let Some(record) = self.entry_panel.submit() {
            self.store.add(record);
            self.chart_view.refresh(&self.store);
        }
    }

    /// Remove the record picked in the table and redraw the charts.
    fn handle_delete(&mut self, record: ExpenseRecord) {
        self.store.remove(&record);
        self.chart_view.refresh(&self.store);
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("💰 SpendSmart Tracker")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(5.0);

        if ui.toggle_value(&mut self.dark_mode, "🌙 Dark Mode").changed() {
            let visuals = if self.dark_mode {
                Visuals::dark()
            } else {
                Visuals::light()
            };
            ui.ctx().set_visuals(visuals);
        }
    }
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - entry form, running total, expense table
        SidePanel::left("entry_panel")
            .min_width(360.0)
            .max_width(420.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.show_header(ui);

                    ui.add_space(10.0);
                    ui.separator();
                    ui.add_space(5.0);

                    if self.entry_panel.show(ui) == EntryAction::Submit {
                        self.handle_submit();
                    }

                    ui.add_space(10.0);
                    ui.separator();
                    ui.add_space(5.0);

                    ui.label(
                        RichText::new(format!("Total Expense: Rs.{:.2}", self.store.total()))
                            .size(15.0)
                            .strong(),
                    );

                    ui.add_space(8.0);

                    if let Some(record) = ExpenseTable::show(ui, &self.store) {
                        self.handle_delete(record);
                    }
                });
            });

        // Central panel - charts
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.chart_view.show(ui);
            });
        });
    }
}
