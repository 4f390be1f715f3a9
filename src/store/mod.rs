use thiserror::Error;

use crate::models::{Category, MonthKey, Transaction};

#[cfg(test)]
mod tests;

/// Failures at the store boundary. Malformed input is rejected here rather
/// than stored, so aggregate sums can never be poisoned by a bad edit.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum StoreError {
    #[error("invalid budget value '{0}': expected a non-negative number of minutes")]
    InvalidBudgetValue(String),
    #[error("no category with id {0}")]
    UnknownCategory(i64),
    #[error("no transaction with id {0}")]
    UnknownTransaction(i64),
    #[error("category name cannot be empty")]
    EmptyCategoryName,
    #[error("a category named '{0}' already exists")]
    DuplicateCategory(String),
}

/// In-memory record store for one session. Owns the two core collections,
/// assigns ids, and exposes the synchronous mutation entry points. Both
/// collections keep insertion order; the budget table renders rows in the
/// order categories were created.
#[derive(Debug)]
pub(crate) struct Store {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    next_transaction_id: i64,
    next_category_id: i64,
}

impl Store {
    pub(crate) fn new() -> Self {
        Self {
            transactions: Vec::new(),
            categories: Vec::new(),
            next_transaction_id: 1,
            next_category_id: 1,
        }
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub(crate) fn category(&self, id: i64) -> Option<&Category> {
        Category::find_by_id(&self.categories, id)
    }

    pub(crate) fn transaction(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == Some(id))
    }

    // ── Categories ────────────────────────────────────────────

    /// Create a category with an empty budget map. Returns the new id.
    pub(crate) fn add_category(&mut self, name: &str) -> Result<i64, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyCategoryName);
        }
        if Category::find_by_name(&self.categories, name).is_some() {
            return Err(StoreError::DuplicateCategory(name.to_string()));
        }
        let id = self.next_category_id;
        self.next_category_id += 1;
        let mut category = Category::new(name.to_string());
        category.id = Some(id);
        self.categories.push(category);
        Ok(id)
    }

    /// Rename a category. Transactions reference categories by id, so the
    /// rename shows up everywhere immediately with no history drift.
    pub(crate) fn rename_category(&mut self, id: i64, new_name: &str) -> Result<(), StoreError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(StoreError::EmptyCategoryName);
        }
        if let Some(existing) = Category::find_by_name(&self.categories, new_name) {
            if existing.id != Some(id) {
                return Err(StoreError::DuplicateCategory(new_name.to_string()));
            }
        }
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == Some(id))
            .ok_or(StoreError::UnknownCategory(id))?;
        category.name = new_name.to_string();
        Ok(())
    }

    /// Parse a raw budget edit and overwrite (or insert) that category's
    /// entry for `month`. Non-numeric or negative input is rejected with
    /// `InvalidBudgetValue` and leaves the stored map untouched. Returns
    /// the stored value. Applying the same value twice is a no-op.
    pub(crate) fn update_category_budget(
        &mut self,
        id: i64,
        month: MonthKey,
        raw: &str,
    ) -> Result<i64, StoreError> {
        let minutes: i64 = raw
            .trim()
            .parse()
            .map_err(|_| StoreError::InvalidBudgetValue(raw.to_string()))?;
        if minutes < 0 {
            return Err(StoreError::InvalidBudgetValue(raw.to_string()));
        }
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == Some(id))
            .ok_or(StoreError::UnknownCategory(id))?;
        category.budgeted.insert(month, minutes);
        Ok(minutes)
    }

    // ── Transactions ──────────────────────────────────────────

    /// Append a transaction. The category must exist; the id-based join is
    /// enforced here so it cannot drift later.
    pub(crate) fn add_transaction(&mut self, mut txn: Transaction) -> Result<i64, StoreError> {
        if self.category(txn.category_id).is_none() {
            return Err(StoreError::UnknownCategory(txn.category_id));
        }
        let id = self.next_transaction_id;
        self.next_transaction_id += 1;
        txn.id = Some(id);
        self.transactions.push(txn);
        Ok(id)
    }

    /// Replace the stored transaction with the same id.
    pub(crate) fn update_transaction(&mut self, txn: Transaction) -> Result<(), StoreError> {
        let id = txn.id.ok_or(StoreError::UnknownTransaction(0))?;
        if self.category(txn.category_id).is_none() {
            return Err(StoreError::UnknownCategory(txn.category_id));
        }
        let slot = self
            .transactions
            .iter_mut()
            .find(|t| t.id == Some(id))
            .ok_or(StoreError::UnknownTransaction(id))?;
        *slot = txn;
        Ok(())
    }

    pub(crate) fn delete_transaction(&mut self, id: i64) -> Result<(), StoreError> {
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id == Some(id))
            .ok_or(StoreError::UnknownTransaction(id))?;
        self.transactions.remove(pos);
        Ok(())
    }
}
