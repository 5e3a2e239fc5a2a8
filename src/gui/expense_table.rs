//! Expense Table Widget
//! Lists the current records with a delete control per row and the running
//! total in the footer.

use crate::data::{ExpenseRecord, ExpenseStore};
use egui::RichText;

/// Striped table of recorded expenses.
pub struct ExpenseTable;

impl ExpenseTable {
    /// Draw the table. Returns the record whose Delete button was clicked.
    pub fn show(ui: &mut egui::Ui, store: &ExpenseStore) -> Option<ExpenseRecord> {
        let mut delete_request = None;

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("expense_table")
                    .striped(true)
                    .min_col_width(70.0)
                    .spacing([10.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Category").strong().size(12.0));
                        ui.label(RichText::new("Amount").strong().size(12.0));
                        ui.label(RichText::new("Date").strong().size(12.0));
                        ui.label(RichText::new("Action").strong().size(12.0));
                        ui.end_row();

                        for record in store.all() {
                            ui.label(RichText::new(record.category.as_str()).size(12.0));
                            ui.label(RichText::new(record.amount.to_string()).size(12.0));
                            ui.label(RichText::new(record.date.to_string()).size(12.0));
                            if ui.small_button("Delete").clicked() {
                                delete_request = Some(*record);
                            }
                            ui.end_row();
                        }

                        ui.label(RichText::new("Total:").strong().size(12.0));
                        ui.label(RichText::new(store.total().to_string()).size(12.0));
                        ui.label("");
                        ui.label("");
                        ui.end_row();
                    });
            });

        delete_request
    }
}
