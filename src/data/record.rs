//! Expense Record Module
//! The domain entity: a dated, categorized amount.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Expense category. The set is closed; free-text categories do not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Rent,
    Utilities,
    Transportation,
    Entertainment,
}

impl Category {
    /// All categories, in the order they appear in the selector.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Rent,
        Category::Utilities,
        Category::Transportation,
        Category::Entertainment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Rent => "Rent",
            Category::Utilities => "Utilities",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single expense entry. Never mutated after creation.
///
/// Records carry no unique id: two records with the same category, amount
/// and date are the same record for deletion purposes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpenseRecord {
    pub category: Category,
    pub amount: f64,
    pub date: NaiveDate,
}

impl ExpenseRecord {
    pub fn new(category: Category, amount: f64, date: NaiveDate) -> Self {
        Self {
            category,
            amount,
            date,
        }
    }

    /// Calendar month of the record as a 0-based index (Jan = 0).
    pub fn month_index(&self) -> usize {
        self.date.month0() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_index_is_zero_based() {
        let jan = ExpenseRecord::new(Category::Food, 10.0, date(2024, 1, 15));
        let dec = ExpenseRecord::new(Category::Rent, 10.0, date(2024, 12, 31));
        assert_eq!(jan.month_index(), 0);
        assert_eq!(dec.month_index(), 11);
    }

    #[test]
    fn records_compare_structurally() {
        let a = ExpenseRecord::new(Category::Food, 50.0, date(2024, 3, 1));
        let b = ExpenseRecord::new(Category::Food, 50.0, date(2024, 3, 1));
        let c = ExpenseRecord::new(Category::Food, 50.0, date(2024, 3, 2));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn category_labels_match_selector_set() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            labels,
            ["Food", "Rent", "Utilities", "Transportation", "Entertainment"]
        );
    }
}
