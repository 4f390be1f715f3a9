use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_duration, format_minutes, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Summary cards
            Constraint::Min(6),     // Category table
            Constraint::Length(10), // Assigned-minutes chart
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_category_table(f, chunks[1], app);
    render_assigned_chart(f, chunks[2], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let summary = &app.summary;
    render_card(f, cards[0], "Total Minutes", summary.capacity, theme::ACCENT);
    render_card(f, cards[1], "Assigned", summary.assigned, theme::YELLOW);
    render_card(
        f,
        cards[2],
        "Available",
        summary.available,
        if summary.available >= 0 {
            theme::GREEN
        } else {
            theme::RED
        },
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, minutes: i64, color: ratatui::style::Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            format_minutes(minutes),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format_duration(minutes), theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_category_table(f: &mut Frame, area: Rect, app: &App) {
    if app.summary.rows.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No categories yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Create one with :category <name>, then Enter to assign minutes",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(table_block(app, 0));
        f.render_widget(msg, area);
        return;
    }

    let header_cells = ["Category", "Assigned", "Activity", "Available"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .summary
        .rows
        .iter()
        .enumerate()
        .skip(app.category_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, row)| {
            let style = if i == app.category_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let available_style = if row.available >= 0 {
                theme::surplus_style()
            } else {
                theme::deficit_style()
            };

            Row::new(vec![
                Cell::from(truncate(&row.name, 24)),
                Cell::from(format_minutes(row.assigned)),
                Cell::from(format_minutes(row.activity)),
                Cell::from(Span::styled(format_minutes(row.available), available_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(table_block(app, app.summary.rows.len()));
    f.render_widget(table, area);
}

fn table_block(app: &App, count: usize) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" Budget for {} ({count} categories) ", app.month),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ))
}

fn render_assigned_chart(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Assigned by Category ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let with_budget: Vec<_> = app
        .summary
        .rows
        .iter()
        .filter(|r| r.assigned > 0)
        .take(12)
        .collect();

    if with_budget.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Nothing assigned this month",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = with_budget
        .iter()
        .map(|row| {
            Bar::default()
                .value(row.assigned.max(0) as u64)
                .label(Line::from(truncate(&row.name, 10)))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}
