//! Monthly budget aggregation. Everything here is a pure function over
//! borrowed store snapshots; the UI recomputes a `MonthSummary` after every
//! mutation and render, which is fine at the scale this tool targets.

use crate::models::{Category, MonthKey, Transaction};


pub(crate) const MINUTES_PER_DAY: i64 = 1440;

/// One row of the budget table, in category insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryRow {
    pub category_id: i64,
    pub name: String,
    pub assigned: i64,
    pub activity: i64,
    pub available: i64,
}

/// Derived figures for one month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct MonthSummary {
    /// Days in the month × 1440. A ceiling for display, not an enforced cap.
    pub capacity: i64,
    pub assigned: i64,
    pub available: i64,
    pub rows: Vec<CategoryRow>,
}

/// Total minutes in a calendar month: leap-aware day count × 1440.
pub(crate) fn month_capacity_minutes(month: MonthKey) -> i64 {
    month.days() * MINUTES_PER_DAY
}

/// Sum of every category's assigned minutes for `month`. Categories with
/// no entry contribute zero; the result is order-independent.
pub(crate) fn total_assigned_minutes(categories: &[Category], month: MonthKey) -> i64 {
    categories.iter().map(|c| c.assigned_for(month)).sum()
}

/// Minutes spent in `month` against one category. A linear scan over all
/// transactions, matched by category id and date prefix.
pub(crate) fn activity_minutes(
    transactions: &[Transaction],
    category_id: i64,
    month: MonthKey,
) -> i64 {
    transactions
        .iter()
        .filter(|t| t.category_id == category_id && t.in_month(month))
        .map(|t| t.duration_minutes)
        .sum()
}

/// Assigned minus activity. Negative means over-spend; the sign drives the
/// red/green indicator in the budget table.
pub(crate) fn available_minutes(assigned: i64, activity: i64) -> i64 {
    assigned - activity
}

/// Derive the whole month view: global capacity/assigned/available plus one
/// row per category in insertion order. Over-assignment past the month's
/// capacity is allowed and simply shows up as a negative remainder.
pub(crate) fn summarize(
    categories: &[Category],
    transactions: &[Transaction],
    month: MonthKey,
) -> MonthSummary {
    let capacity = month_capacity_minutes(month);
    let assigned = total_assigned_minutes(categories, month);

    let rows = categories
        .iter()
        .filter_map(|category| {
            let category_id = category.id?;
            let assigned = category.assigned_for(month);
            let activity = activity_minutes(transactions, category_id, month);
            Some(CategoryRow {
                category_id,
                name: category.name.clone(),
                assigned,
                activity,
                available: available_minutes(assigned, activity),
            })
        })
        .collect();

    MonthSummary {
        capacity,
        assigned,
        available: capacity - assigned,
        rows,
    }
}
