//! Entry Panel Widget
//! The expense form: category selector, amount and date fields, submit
//! button, and the status line for validation failures.

use crate::data::{Category, EntryDraft, ExpenseRecord, FormError};
use egui::{Color32, ComboBox, RichText};

const LABEL_WIDTH: f32 = 80.0;
const FIELD_WIDTH: f32 = 180.0;

/// Actions triggered by the entry panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    None,
    Submit,
}

/// The expense entry form and its validation status.
pub struct EntryPanel {
    draft: EntryDraft,
    error: Option<FormError>,
}

impl Default for EntryPanel {
    fn default() -> Self {
        Self {
            draft: EntryDraft::default(),
            error: None,
        }
    }
}

impl EntryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the form. Returns `Submit` when the add button was clicked.
    pub fn show(&mut self, ui: &mut egui::Ui) -> EntryAction {
        let mut action = EntryAction::None;

        ui.label(RichText::new("Add Expense").size(14.0).strong());
        ui.add_space(8.0);

        // Category selector
        ui.horizontal(|ui| {
            ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new("Category:"));
            let selected = self
                .draft
                .category
                .map(|c| c.as_str())
                .unwrap_or("Select Category");
            ComboBox::from_id_salt("category")
                .width(FIELD_WIDTH)
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for category in Category::ALL {
                        if ui
                            .selectable_label(
                                self.draft.category == Some(category),
                                category.as_str(),
                            )
                            .clicked()
                        {
                            self.draft.category = Some(category);
                        }
                    }
                });
        });

        ui.add_space(5.0);

        // Amount field
        ui.horizontal(|ui| {
            ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new("Amount:"));
            ui.add(
                egui::TextEdit::singleline(&mut self.draft.amount)
                    .desired_width(FIELD_WIDTH)
                    .hint_text("e.g. 1000"),
            );
        });

        ui.add_space(5.0);

        // Date field
        ui.horizontal(|ui| {
            ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new("Date:"));
            ui.add(
                egui::TextEdit::singleline(&mut self.draft.date)
                    .desired_width(FIELD_WIDTH)
                    .hint_text("YYYY-MM-DD"),
            );
        });

        ui.add_space(10.0);

        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("Add Expense").size(14.0))
                .min_size(egui::vec2(160.0, 30.0));
            if ui.add(button).clicked() {
                action = EntryAction::Submit;
            }
        });

        if let Some(error) = &self.error {
            ui.add_space(5.0);
            ui.label(
                RichText::new(error.to_string())
                    .size(11.0)
                    .color(Color32::from_rgb(220, 53, 69)),
            );
        }

        action
    }

    /// Validate the draft. On success the fields are cleared and the record
    /// returned; on failure the status line shows the error until the next
    /// successful submission.
    pub fn submit(&mut self) -> Option<ExpenseRecord> {
        match self.draft.validate() {
            Ok(record) => {
                self.draft.clear();
                self.error = None;
                Some(record)
            }
            Err(error) => {
                log::warn!("expense entry rejected: {}", error);
                self.error = Some(error);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_with(category: Option<Category>, amount: &str, date: &str) -> EntryPanel {
        let mut panel = EntryPanel::new();
        panel.draft = EntryDraft {
            category,
            amount: amount.to_string(),
            date: date.to_string(),
        };
        panel
    }

    #[test]
    fn rejected_submit_yields_nothing_and_keeps_the_draft() {
        let mut panel = panel_with(None, "100", "2024-01-15");
        assert_eq!(panel.submit(), None);
        assert_eq!(panel.error, Some(FormError::MissingCategory));
        // The user's input stays in place for correction.
        assert_eq!(panel.draft.amount, "100");
    }

    #[test]
    fn successful_submit_clears_draft_and_error() {
        let mut panel = panel_with(Some(Category::Food), "bad", "2024-01-15");
        panel.submit();
        assert_eq!(panel.error, Some(FormError::InvalidAmount));

        panel.draft.amount = "100".to_string();
        let record = panel.submit().unwrap();
        assert_eq!(record.category, Category::Food);
        assert_eq!(record.amount, 100.0);
        assert_eq!(panel.error, None);
        assert!(panel.draft.amount.is_empty());
    }
}
