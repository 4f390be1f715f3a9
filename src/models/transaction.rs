use chrono::NaiveDate;

use super::MonthKey;

/// A logged block of time. Durations are whole minutes; dates are
/// `YYYY-MM-DD` strings validated at the input boundary.
#[derive(Debug, Clone)]
pub(crate) struct Transaction {
    pub id: Option<i64>,
    pub description: String,
    /// Stable reference to the owning category. The display name is
    /// resolved at render time, so renaming a category never orphans
    /// historical entries.
    pub category_id: i64,
    pub duration_minutes: i64,
    pub date: String,
}

impl Transaction {
    pub(crate) fn new(
        description: String,
        category_id: i64,
        duration_minutes: i64,
        date: String,
    ) -> Self {
        Self {
            id: None,
            description,
            category_id,
            duration_minutes,
            date,
        }
    }

    pub(crate) fn in_month(&self, month: MonthKey) -> bool {
        month.contains_date(&self.date)
    }

    /// Parse a user-entered date and re-render it as zero-padded
    /// `YYYY-MM-DD`. chrono accepts non-padded numeric fields, and a stored
    /// `2024-3-5` would never prefix-match its month key, so the parsed
    /// date is always re-rendered rather than stored raw.
    pub(crate) fn canonical_date(raw: &str) -> Option<String> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .ok()
            .map(|d| d.format("%Y-%m-%d").to_string())
    }
}
