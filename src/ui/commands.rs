use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, EditTarget, InputMode, PendingAction, Screen};
use crate::models::{Category, MonthKey, Transaction};
use crate::store::Store;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Store) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit TimeBudget", cmd_quit, r);
    register_command!("quit", "Quit TimeBudget", cmd_quit, r);
    register_command!("b", "Go to Budget", cmd_budget_screen, r);
    register_command!("budget", "Go to Budget", cmd_budget_screen, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("month", "Set month (e.g. :month 2024-01)", cmd_month, r);
    register_command!("m", "Set month (e.g. :m 2024-01)", cmd_month, r);
    register_command!("next-month", "Go to next month", cmd_next_month, r);
    register_command!("prev-month", "Go to previous month", cmd_prev_month, r);
    register_command!(
        "category",
        "Create category (e.g. :category Deep Work)",
        cmd_category,
        r
    );
    register_command!(
        "rename-category",
        "Rename selected category",
        cmd_rename_category,
        r
    );
    register_command!(
        "assign",
        "Assign minutes for this month (e.g. :assign Deep Work 6000)",
        cmd_assign,
        r
    );
    register_command!(
        "add-txn",
        "Log time (e.g. :add-txn 2024-03-05 90 Deep Work standup)",
        cmd_add_txn,
        r
    );
    register_command!(
        "delete-txn",
        "Delete selected transaction",
        cmd_delete_txn,
        r
    );
    register_command!("rename", "Rename selected transaction", cmd_rename, r);
    register_command!(
        "recat",
        "Re-categorize selected transaction (e.g. :recat Sleep)",
        cmd_recat,
        r
    );
    register_command!(
        "duration",
        "Change selected transaction's minutes (e.g. :duration 45)",
        cmd_duration,
        r
    );
    register_command!(
        "redate",
        "Change selected transaction's date (e.g. :redate 2024-03-06)",
        cmd_redate,
        r
    );
    register_command!(
        "search",
        "Search transactions (e.g. :search standup)",
        cmd_search,
        r
    );
    register_command!("s", "Search transactions (e.g. :s standup)", cmd_search, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        // Try fuzzy match
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_budget_screen(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Budget;
    app.refresh_summary(store);
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    app.refresh_transactions(store);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_month(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :month <YYYY-MM> (e.g. :month 2024-01)");
        return Ok(());
    }

    // Accept "2024-01" or a bare month number in the current year
    let key = if args.len() <= 2 {
        args.parse::<u32>()
            .ok()
            .and_then(|m| MonthKey::new(app.month.year(), m))
    } else {
        MonthKey::parse(args)
    };

    match key {
        Some(month) => {
            app.set_month(month, store);
            app.set_status(format!("Switched to month: {month}"));
        }
        None => app.set_status("Invalid month format. Use YYYY-MM (e.g. 2024-01)"),
    }
    Ok(())
}

fn cmd_next_month(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.set_month(app.month.next(), store);
    Ok(())
}

fn cmd_prev_month(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.set_month(app.month.prev(), store);
    Ok(())
}

fn cmd_category(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :category <name>. Example: :category Deep Work");
        return Ok(());
    }

    match store.add_category(args) {
        Ok(_) => {
            app.refresh_all(store);
            app.set_status(format!("Created category: {args}"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_rename_category(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let (category_id, current_name) = match app.selected_row() {
        Some(row) => (row.category_id, row.name.clone()),
        None => {
            app.set_status("No category selected. Switch to the Budget screen first");
            return Ok(());
        }
    };

    if args.is_empty() {
        // No args → inline edit prefilled with the current name
        app.command_input = current_name;
        app.edit_target = Some(EditTarget::RenameCategory { category_id });
        app.input_mode = InputMode::Editing;
        return Ok(());
    }

    match store.rename_category(category_id, args) {
        Ok(()) => {
            app.refresh_all(store);
            app.set_status(format!("Renamed category to: {args}"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_assign(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :assign <category> <minutes>. Example: :assign Deep Work 6000");
        return Ok(());
    }

    // Last token is the raw minutes value, everything before is the name
    let parts: Vec<&str> = args.rsplitn(2, ' ').collect();
    if parts.len() < 2 {
        app.set_status("Usage: :assign <category> <minutes>");
        return Ok(());
    }
    let raw_minutes = parts[0];
    let category_name = parts[1];

    let Some(category_id) =
        Category::find_by_name(store.categories(), category_name).and_then(|c| c.id)
    else {
        app.set_status(format!("Category '{category_name}' not found"));
        return Ok(());
    };

    let month = app.month;
    match store.update_category_budget(category_id, month, raw_minutes) {
        Ok(minutes) => {
            app.refresh_summary(store);
            app.set_status(format!("Assigned {minutes} min to {category_name} for {month}"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_add_txn(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    const USAGE: &str = "Usage: :add-txn <YYYY-MM-DD> <minutes> <category> <description>";

    let mut parts = args.splitn(3, ' ');
    let (Some(date), Some(minutes_str), Some(rest)) = (parts.next(), parts.next(), parts.next())
    else {
        app.set_status(USAGE);
        return Ok(());
    };

    let Some(date) = Transaction::canonical_date(date) else {
        app.set_status(format!("Invalid date '{date}'. Use YYYY-MM-DD"));
        return Ok(());
    };
    let minutes: i64 = match minutes_str.parse() {
        Ok(m) if m >= 0 => m,
        _ => {
            app.set_status(format!(
                "Invalid duration '{minutes_str}': expected a non-negative number of minutes"
            ));
            return Ok(());
        }
    };

    // The category name may contain spaces, so match the longest category
    // name that prefixes the remainder; what follows is the description.
    let Some((category_id, description)) = split_category_prefix(store.categories(), rest) else {
        app.set_status(format!("No category matches the start of '{rest}'"));
        return Ok(());
    };
    if description.is_empty() {
        app.set_status(USAGE);
        return Ok(());
    }

    let txn = Transaction::new(description.to_string(), category_id, minutes, date);
    match store.add_transaction(txn) {
        Ok(_) => {
            app.refresh_all(store);
            app.set_status(format!("Logged {minutes} min: {description}"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

/// Split `rest` into a known category (matched case-insensitively, longest
/// name first) and the trailing description.
fn split_category_prefix<'a>(categories: &[Category], rest: &'a str) -> Option<(i64, &'a str)> {
    let mut by_length: Vec<&Category> = categories.iter().collect();
    by_length.sort_by_key(|c| std::cmp::Reverse(c.name.len()));
    for cat in by_length {
        if rest.eq_ignore_ascii_case(&cat.name) {
            return cat.id.map(|id| (id, ""));
        }
        if let Some((head, tail)) = rest.split_at_checked(cat.name.len()) {
            if head.eq_ignore_ascii_case(&cat.name) && tail.starts_with(' ') {
                return cat.id.map(|id| (id, tail.trim_start()));
            }
        }
    }
    None
}

fn cmd_delete_txn(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    let Some(txn) = app.selected_transaction() else {
        app.set_status("No transaction selected");
        return Ok(());
    };
    let Some(id) = txn.id else {
        return Ok(());
    };
    let description = txn.description.clone();
    app.confirm_message = format!("Delete '{description}'?");
    app.pending_action = Some(PendingAction::DeleteTransaction { id, description });
    app.input_mode = InputMode::Confirm;
    Ok(())
}

fn cmd_rename(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let Some(txn) = app.selected_transaction().cloned() else {
        app.set_status("No transaction selected");
        return Ok(());
    };
    let Some(id) = txn.id else {
        return Ok(());
    };

    if args.is_empty() {
        app.command_input = txn.description.clone();
        app.edit_target = Some(EditTarget::RenameTransaction { id });
        app.input_mode = InputMode::Editing;
        return Ok(());
    }

    let mut edited = txn;
    edited.description = args.to_string();
    match store.update_transaction(edited) {
        Ok(()) => {
            app.refresh_all(store);
            app.set_status(format!("Renamed to: {args}"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_recat(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :recat <category>. Example: :recat Sleep");
        return Ok(());
    }
    let Some(txn) = app.selected_transaction().cloned() else {
        app.set_status("No transaction selected");
        return Ok(());
    };

    let Some(category_id) = Category::find_by_name(store.categories(), args).and_then(|c| c.id)
    else {
        app.set_status(format!("Category '{args}' not found"));
        return Ok(());
    };

    let mut edited = txn;
    edited.category_id = category_id;
    match store.update_transaction(edited) {
        Ok(()) => {
            app.refresh_all(store);
            app.set_status(format!("Re-categorized to: {args}"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_duration(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let Some(txn) = app.selected_transaction().cloned() else {
        app.set_status("No transaction selected");
        return Ok(());
    };

    let minutes: i64 = match args.parse() {
        Ok(m) if m >= 0 => m,
        _ => {
            app.set_status(format!(
                "Invalid duration '{args}': expected a non-negative number of minutes"
            ));
            return Ok(());
        }
    };

    let mut edited = txn;
    edited.duration_minutes = minutes;
    match store.update_transaction(edited) {
        Ok(()) => {
            app.refresh_all(store);
            app.set_status(format!("Duration set to {minutes} min"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_redate(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let Some(txn) = app.selected_transaction().cloned() else {
        app.set_status("No transaction selected");
        return Ok(());
    };

    let Some(date) = Transaction::canonical_date(args) else {
        app.set_status(format!("Invalid date '{args}'. Use YYYY-MM-DD"));
        return Ok(());
    };

    let mut edited = txn;
    edited.date = date.clone();
    match store.update_transaction(edited) {
        Ok(()) => {
            app.refresh_all(store);
            app.set_status(format!("Date set to {date}"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_search(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.screen = Screen::Transactions;
    app.refresh_transactions(store);

    if args.is_empty() {
        app.set_status("Search cleared");
    } else {
        app.set_status(format!("Searching: {args}"));
    }

    Ok(())
}
