use crate::budget::{self, CategoryRow, MonthSummary};
use crate::models::{MonthKey, Transaction};
use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Budget,
    Transactions,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Budget, Self::Transactions]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Budget => write!(f, "Budget"),
            Self::Transactions => write!(f, "Transactions"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Editing => write!(f, "EDIT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// What the Editing input line is currently bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditTarget {
    /// Inline budget edit for one category and the selected month.
    AssignBudget { category_id: i64 },
    RenameTransaction { id: i64 },
    RenameCategory { category_id: i64 },
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteTransaction { id: i64, description: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    /// Month shown on the budget screen. Navigation is unbounded.
    pub(crate) month: MonthKey,

    // Budget screen (derived on every refresh, never stored elsewhere)
    pub(crate) summary: MonthSummary,
    pub(crate) category_index: usize,
    pub(crate) category_scroll: usize,

    // Transactions screen (filtered snapshot of the store)
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,
    /// (id, name) pairs for resolving category names at render time.
    pub(crate) category_lookup: Vec<(i64, String)>,

    // Editing / confirmation
    pub(crate) edit_target: Option<EditTarget>,
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Budget,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            status_message: String::new(),
            show_help: false,

            month: MonthKey::current(),

            summary: MonthSummary::default(),
            category_index: 0,
            category_scroll: 0,

            transactions: Vec::new(),
            transaction_index: 0,
            transaction_scroll: 0,
            category_lookup: Vec::new(),

            edit_target: None,
            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Recompute the month summary from the store. Called after every
    /// mutation and month change, before control returns to the user.
    pub(crate) fn refresh_summary(&mut self, store: &Store) {
        self.summary = budget::summarize(store.categories(), store.transactions(), self.month);
        let last = self.summary.rows.len().saturating_sub(1);
        if self.category_index > last {
            self.category_index = last;
        }
        // Scroll tracks the selection; a stale offset past the end would
        // render an empty page.
        if self.category_scroll > self.category_index {
            self.category_scroll = self.category_index;
        }
    }

    /// Rebuild the transaction list, applying the live search filter over
    /// descriptions and category names (case-insensitive).
    pub(crate) fn refresh_transactions(&mut self, store: &Store) {
        let needle = self.search_input.to_lowercase();
        self.transactions = store
            .transactions()
            .iter()
            .filter(|t| {
                if needle.is_empty() {
                    return true;
                }
                let cat_name = store
                    .category(t.category_id)
                    .map(|c| c.name.to_lowercase())
                    .unwrap_or_default();
                t.description.to_lowercase().contains(&needle) || cat_name.contains(&needle)
            })
            .cloned()
            .collect();
        self.category_lookup = store
            .categories()
            .iter()
            .filter_map(|c| c.id.map(|id| (id, c.name.clone())))
            .collect();
        let last = self.transactions.len().saturating_sub(1);
        if self.transaction_index > last {
            self.transaction_index = last;
        }
        if self.transaction_scroll > self.transaction_index {
            self.transaction_scroll = self.transaction_index;
        }
    }

    pub(crate) fn refresh_all(&mut self, store: &Store) {
        self.refresh_summary(store);
        self.refresh_transactions(store);
    }

    pub(crate) fn set_month(&mut self, month: MonthKey, store: &Store) {
        self.month = month;
        self.refresh_summary(store);
    }

    /// Rows the active screen's table can actually draw in a frame of this
    /// height. The chrome bars plus table borders and header take 6 lines;
    /// the Budget screen gives 15 more to the summary cards and the chart.
    pub(crate) fn table_page(&self, frame_height: u16) -> usize {
        let rows = frame_height.saturating_sub(6) as usize;
        match self.screen {
            Screen::Budget => rows.saturating_sub(15),
            Screen::Transactions => rows,
        }
        .max(1)
    }

    pub(crate) fn selected_row(&self) -> Option<&CategoryRow> {
        self.summary.rows.get(self.category_index)
    }

    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.transactions.get(self.transaction_index)
    }

    pub(crate) fn category_name(&self, id: i64) -> &str {
        self.category_lookup
            .iter()
            .find(|(cid, _)| *cid == id)
            .map(|(_, name)| name.as_str())
            .unwrap_or("—")
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
