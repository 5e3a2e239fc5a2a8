//! Entry Form Module
//! Validates raw form input before it reaches the expense store.

use crate::data::{Category, ExpenseRecord};
use chrono::NaiveDate;
use thiserror::Error;

/// Date format expected from the date field.
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please select a category from the list")]
    MissingCategory,
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Please select a date")]
    MissingDate,
    #[error("Please enter the date as YYYY-MM-DD")]
    InvalidDate,
}

/// Raw state of the entry form: the category selection and the two text
/// fields exactly as the user left them.
#[derive(Debug, Default, Clone)]
pub struct EntryDraft {
    pub category: Option<Category>,
    pub amount: String,
    pub date: String,
}

impl EntryDraft {
    /// Validate the draft and build a record from it.
    ///
    /// Checks run in field order and stop at the first failure: category,
    /// then amount, then date.
    pub fn validate(&self) -> Result<ExpenseRecord, FormError> {
        let category = self.category.ok_or(FormError::MissingCategory)?;

        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidAmount)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(FormError::InvalidAmount);
        }

        let date_text = self.date.trim();
        if date_text.is_empty() {
            return Err(FormError::MissingDate);
        }
        let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT)
            .map_err(|_| FormError::InvalidDate)?;

        Ok(ExpenseRecord::new(category, amount, date))
    }

    /// Reset the fields after a successful submission.
    pub fn clear(&mut self) {
        *self = EntryDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(category: Option<Category>, amount: &str, date: &str) -> EntryDraft {
        EntryDraft {
            category,
            amount: amount.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn valid_draft_builds_record() {
        let record = draft(Some(Category::Food), "100", "2024-01-15")
            .validate()
            .unwrap();
        assert_eq!(record.category, Category::Food);
        assert_eq!(record.amount, 100.0);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn missing_category_is_rejected_first() {
        // Category wins even when the other fields are also bad.
        let err = draft(None, "not a number", "").validate().unwrap_err();
        assert_eq!(err, FormError::MissingCategory);
    }

    #[test]
    fn zero_negative_and_non_numeric_amounts_are_rejected() {
        for amount in ["0", "-5", "abc", "", "NaN", "inf"] {
            let err = draft(Some(Category::Rent), amount, "2024-02-01")
                .validate()
                .unwrap_err();
            assert_eq!(err, FormError::InvalidAmount, "amount {:?}", amount);
        }
    }

    #[test]
    fn empty_date_is_rejected() {
        let err = draft(Some(Category::Rent), "200", "").validate().unwrap_err();
        assert_eq!(err, FormError::MissingDate);

        let err = draft(Some(Category::Rent), "200", "   ")
            .validate()
            .unwrap_err();
        assert_eq!(err, FormError::MissingDate);
    }

    #[test]
    fn malformed_date_is_rejected() {
        for date in ["yesterday", "15/01/2024", "2024-13-01"] {
            let err = draft(Some(Category::Rent), "200", date)
                .validate()
                .unwrap_err();
            assert_eq!(err, FormError::InvalidDate, "date {:?}", date);
        }
    }

    #[test]
    fn amount_checked_before_date() {
        let err = draft(Some(Category::Food), "-1", "").validate().unwrap_err();
        assert_eq!(err, FormError::InvalidAmount);
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut d = draft(Some(Category::Food), "100", "2024-01-15");
        d.clear();
        assert!(d.category.is_none());
        assert!(d.amount.is_empty());
        assert!(d.date.is_empty());
    }
}
