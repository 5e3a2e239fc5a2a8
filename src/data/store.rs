//! Expense Store Module
//! Holds the ordered list of expense records and the running total.

use crate::data::ExpenseRecord;

/// In-memory store for expense records.
///
/// The running total is maintained incrementally on add/remove; it is never
/// recomputed from the records.
#[derive(Debug, Default)]
pub struct ExpenseStore {
    records: Vec<ExpenseRecord>,
    total: f64,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Inputs are validated by the entry form before they
    /// get here; the store itself accepts anything.
    pub fn add(&mut self, record: ExpenseRecord) {
        log::info!(
            "expense added: {} {} on {}",
            record.category,
            record.amount,
            record.date
        );
        self.total += record.amount;
        self.records.push(record);
    }

    /// Remove every record structurally equal to `record`.
    ///
    /// The running total gives the amount back exactly once, no matter how
    /// many rows matched. Callers pass a record taken from `all()`.
    pub fn remove(&mut self, record: &ExpenseRecord) {
        let before = self.records.len();
        self.records.retain(|r| r != record);
        let removed = before - self.records.len();
        self.total -= record.amount;
        log::info!(
            "expense removed: {} {} on {} ({} row(s))",
            record.category,
            record.amount,
            record.date,
            removed
        );
    }

    /// Current records, in insertion order.
    pub fn all(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Current running total.
    pub fn total(&self) -> f64 {
        self.total
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
