//! Chart View Widget
//! Central panel with the two chart cards. Created once at startup; only
//! its projection data is replaced when the store changes.

use crate::charts::{CategoryBreakdown, ChartPlotter, MonthlySeries, PALETTE};
use crate::data::{Category, ExpenseStore};
use egui::{Color32, RichText};
use std::collections::HashMap;

const CARD_SPACING: f32 = 15.0;
const CARD_WIDTH: f32 = 340.0;
const DOUGHNUT_SIZE: f32 = 260.0;
const LINE_CHART_HEIGHT: f32 = 260.0;

// Chart configuration is fixed here; the projections are the only part
// that changes after a store update.
const CATEGORY_CHART_TITLE: &str = "Expenses by Category";
const MONTHLY_CHART_TITLE: &str = "Expenses by Month";

/// Holds the current chart projections and the per-category colors.
pub struct ChartView {
    breakdown: CategoryBreakdown,
    series: MonthlySeries,
    /// Colors parallel to `breakdown.entries()`.
    colors: Vec<Color32>,
    /// Palette slot per category, fixed at first appearance.
    assigned: HashMap<Category, Color32>,
}

impl Default for ChartView {
    fn default() -> Self {
        Self {
            breakdown: CategoryBreakdown::default(),
            series: MonthlySeries::default(),
            colors: Vec::new(),
            assigned: HashMap::new(),
        }
    }
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute both projections from the store. Called after every add
    /// or remove.
    pub fn refresh(&mut self, store: &ExpenseStore) {
        let breakdown = CategoryBreakdown::from_records(store.all());
        let colors = breakdown
            .entries()
            .iter()
            .map(|(category, _)| {
                let fallback = PALETTE[self.assigned.len() % PALETTE.len()];
                *self.assigned.entry(*category).or_insert(fallback)
            })
            .collect();
        self.breakdown = breakdown;
        self.colors = colors;
        self.series = MonthlySeries::from_records(store.all());
    }

    /// Draw both chart cards, side by side when the panel is wide enough.
    pub fn show(&self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            self.draw_category_card(ui);
            ui.add_space(CARD_SPACING);
            self.draw_monthly_card(ui);
        });
    }

    fn draw_category_card(&self, ui: &mut egui::Ui) {
        Self::card_frame(ui).show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.label(RichText::new(CATEGORY_CHART_TITLE).size(16.0).strong());
                ui.add_space(6.0);
                ChartPlotter::draw_category_legend(ui, self.breakdown.entries(), &self.colors);
                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    ChartPlotter::draw_doughnut_chart(
                        ui,
                        &self.breakdown,
                        &self.colors,
                        DOUGHNUT_SIZE,
                    );
                });
            });
        });
    }

    fn draw_monthly_card(&self, ui: &mut egui::Ui) {
        Self::card_frame(ui).show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.label(RichText::new(MONTHLY_CHART_TITLE).size(16.0).strong());
                ui.add_space(6.0);
                ChartPlotter::draw_monthly_chart(ui, &self.series, LINE_CHART_HEIGHT);
            });
        });
    }

    fn card_frame(ui: &egui::Ui) -> egui::Frame {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ExpenseRecord;
    use chrono::NaiveDate;

    fn record(category: Category, amount: f64, day: u32) -> ExpenseRecord {
        ExpenseRecord::new(
            category,
            amount,
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        )
    }

    #[test]
    fn categories_keep_their_color_across_refreshes() {
        let mut store = ExpenseStore::new();
        let mut view = ChartView::new();

        store.add(record(Category::Food, 100.0, 1));
        view.refresh(&store);
        let food_color = view.colors[0];

        store.add(record(Category::Rent, 200.0, 2));
        store.add(record(Category::Food, 50.0, 3));
        view.refresh(&store);

        assert_eq!(view.colors[0], food_color);
        assert_ne!(view.colors[1], food_color);
    }

    #[test]
    fn refresh_replaces_projections_in_place() {
        let mut store = ExpenseStore::new();
        let mut view = ChartView::new();
        view.refresh(&store);
        assert!(view.breakdown.is_empty());

        store.add(record(Category::Utilities, 75.0, 10));
        view.refresh(&store);
        assert_eq!(view.breakdown.entries(), &[(Category::Utilities, 75.0)]);
        assert_eq!(view.series.totals()[0], 75.0);
    }
}
