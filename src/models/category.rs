use std::collections::BTreeMap;

use super::MonthKey;

#[derive(Debug, Clone)]
pub(crate) struct Category {
    pub id: Option<i64>,
    pub name: String,
    /// Assigned minutes per month. Absent entries mean zero budget.
    pub budgeted: BTreeMap<MonthKey, i64>,
}

impl Category {
    pub(crate) fn new(name: String) -> Self {
        Self {
            id: None,
            name,
            budgeted: BTreeMap::new(),
        }
    }

    /// Minutes assigned to this category for `month`, zero when unset.
    pub(crate) fn assigned_for(&self, month: MonthKey) -> i64 {
        self.budgeted.get(&month).copied().unwrap_or(0)
    }

    /// Find a category by name (case-insensitive) in a slice.
    pub(crate) fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
        let lower = name.to_lowercase();
        categories.iter().find(|c| c.name.to_lowercase() == lower)
    }

    /// Find a category by ID in a slice.
    pub(crate) fn find_by_id(categories: &[Category], id: i64) -> Option<&Category> {
        categories.iter().find(|c| c.id == Some(id))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
