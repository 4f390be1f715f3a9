use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::store::Store;
use crate::ui::app::{App, EditTarget, InputMode, PendingAction, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(store: &mut Store) -> Result<()> {
    let mut app = App::new();
    app.refresh_all(store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &mut Store,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            app.visible_rows = app.table_page(f.area().height);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, store)?,
                InputMode::Command => handle_command_input(key, app, store)?,
                InputMode::Search => handle_search_input(key, app, store),
                InputMode::Editing => handle_editing_input(key, app, store),
                InputMode::Confirm => handle_confirm_input(key, app, store),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, store: &mut Store) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
            app.search_input.clear();
        }
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => switch_screen(app, store, Screen::Budget),
        KeyCode::Char('2') => switch_screen(app, store, Screen::Transactions),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            switch_screen(app, store, screens[next]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, store, screens[prev]);
        }
        KeyCode::Enter => handle_enter(app),
        KeyCode::Esc => {
            app.status_message.clear();
            if !app.search_input.is_empty() {
                app.search_input.clear();
                app.refresh_transactions(store);
            }
        }
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('H') => {
            commands::handle_command("prev-month", app, store)?;
        }
        KeyCode::Char('L') => {
            commands::handle_command("next-month", app, store)?;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_up(app);
            }
        }
        KeyCode::Char('D') if app.screen == Screen::Transactions => {
            commands::handle_command("delete-txn", app, store)?;
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, store: &mut Store) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, store)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_search_input(key: event::KeyEvent, app: &mut App, store: &mut Store) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.screen = Screen::Transactions;
            app.refresh_transactions(store);
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.search_input.clear();
            app.refresh_transactions(store);
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            // Live search: filter as you type
            app.screen = Screen::Transactions;
            app.transaction_index = 0;
            app.transaction_scroll = 0;
            app.refresh_transactions(store);
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            // Live search: filter as you type
            app.screen = Screen::Transactions;
            app.transaction_index = 0;
            app.transaction_scroll = 0;
            app.refresh_transactions(store);
        }
        _ => {}
    }
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App, store: &mut Store) {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
            if let Some(target) = app.edit_target.take() {
                apply_edit(target, &input, app, store);
            }
        }
        KeyCode::Esc => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
            app.edit_target = None;
            app.set_status("Edit cancelled");
        }
        KeyCode::Backspace => {
            app.command_input.pop();
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
}

/// Commit an Editing-mode input line. Store-side rejections (bad budget
/// values, vanished ids) land in the status bar, never in the stored data.
fn apply_edit(target: EditTarget, input: &str, app: &mut App, store: &mut Store) {
    match target {
        EditTarget::AssignBudget { category_id } => {
            let month = app.month;
            match store.update_category_budget(category_id, month, input) {
                Ok(minutes) => {
                    app.refresh_summary(store);
                    let name = store
                        .category(category_id)
                        .map(|c| c.name.clone())
                        .unwrap_or_default();
                    app.set_status(format!("Assigned {minutes} min to {name} for {month}"));
                }
                Err(e) => app.set_status(e.to_string()),
            }
        }
        EditTarget::RenameTransaction { id } => {
            let Some(txn) = store.transaction(id) else {
                return;
            };
            if input.is_empty() {
                app.set_status("Description cannot be empty");
                return;
            }
            let mut edited = txn.clone();
            edited.description = input.to_string();
            match store.update_transaction(edited) {
                Ok(()) => {
                    app.refresh_all(store);
                    app.set_status(format!("Renamed to: {input}"));
                }
                Err(e) => app.set_status(e.to_string()),
            }
        }
        EditTarget::RenameCategory { category_id } => {
            match store.rename_category(category_id, input) {
                Ok(()) => {
                    app.refresh_all(store);
                    app.set_status(format!("Renamed category to: {input}"));
                }
                Err(e) => app.set_status(e.to_string()),
            }
        }
    }
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, store: &mut Store) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(action) = app.pending_action.take() {
                match action {
                    PendingAction::DeleteTransaction { id, description } => {
                        match store.delete_transaction(id) {
                            Ok(()) => {
                                // refresh_all clamps both the selection and
                                // the scroll offset to the shrunk list
                                app.refresh_all(store);
                                app.set_status(format!("Deleted: {description}"));
                            }
                            Err(e) => app.set_status(e.to_string()),
                        }
                    }
                }
            }
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
        }
        _ => {
            // Any other key = cancel
            app.pending_action = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, store: &Store, screen: Screen) {
    app.screen = screen;
    match screen {
        Screen::Budget => app.refresh_summary(store),
        Screen::Transactions => app.refresh_transactions(store),
    }
}

fn handle_enter(app: &mut App) {
    match app.screen {
        Screen::Budget => {
            // Inline budget edit, prefilled with the current assigned value
            match app.selected_row().map(|r| (r.category_id, r.assigned)) {
                Some((category_id, assigned)) => {
                    app.command_input = assigned.to_string();
                    app.edit_target = Some(EditTarget::AssignBudget { category_id });
                    app.input_mode = InputMode::Editing;
                }
                None => app.set_status("No categories yet. Create one with :category <name>"),
            }
        }
        Screen::Transactions => {
            let selected = app
                .selected_transaction()
                .and_then(|t| t.id.map(|id| (id, t.description.clone())));
            if let Some((id, description)) = selected {
                app.command_input = description;
                app.edit_target = Some(EditTarget::RenameTransaction { id });
                app.input_mode = InputMode::Editing;
            }
        }
    }
}

fn handle_move_down(app: &mut App) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Budget => scroll_down(
            &mut app.category_index,
            &mut app.category_scroll,
            app.summary.rows.len(),
            page,
        ),
        Screen::Transactions => scroll_down(
            &mut app.transaction_index,
            &mut app.transaction_scroll,
            app.transactions.len(),
            page,
        ),
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Budget => scroll_up(&mut app.category_index, &mut app.category_scroll),
        Screen::Transactions => scroll_up(&mut app.transaction_index, &mut app.transaction_scroll),
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Budget => scroll_to_top(&mut app.category_index, &mut app.category_scroll),
        Screen::Transactions => {
            scroll_to_top(&mut app.transaction_index, &mut app.transaction_scroll)
        }
    }
}

fn handle_goto_bottom(app: &mut App) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Budget => scroll_to_bottom(
            &mut app.category_index,
            &mut app.category_scroll,
            app.summary.rows.len(),
            page,
        ),
        Screen::Transactions => scroll_to_bottom(
            &mut app.transaction_index,
            &mut app.transaction_scroll,
            app.transactions.len(),
            page,
        ),
    }
}
