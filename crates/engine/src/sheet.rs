//! Flat row mirrored to the expenses spreadsheet.

use serde::Serialize;

use crate::ExpenseRecord;

/// One spreadsheet row: `identifier, amount, category, date`.
///
/// Only these four columns are mirrored; the richer record fields live in the
/// document store alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SheetRow {
    pub identifier: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl SheetRow {
    pub const HEADER: [&'static str; 4] = ["identifier", "amount", "category", "date"];

    /// Builds the row for `record`, submitted by `identifier`.
    #[must_use]
    pub fn new(identifier: impl Into<String>, record: &ExpenseRecord) -> Self {
        Self {
            identifier: identifier.into(),
            amount: record.amount.to_string(),
            category: record.category.clone(),
            date: record.date.to_string(),
        }
    }

    /// Cells in column order.
    #[must_use]
    pub fn cells(&self) -> [&str; 4] {
        [
            self.identifier.as_str(),
            self.amount.as_str(),
            self.category.as_str(),
            self.date.as_str(),
        ]
    }
}
