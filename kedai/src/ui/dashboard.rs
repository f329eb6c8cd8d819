//! Account overview and order history

use crate::app::App;
use crate::ui::format_date;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};
use shared::models::OrderStatus;
use shared::util::format_price;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let [profile_area, orders_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let profile = match app.session.user() {
        Some(user) => Line::from(vec![
            Span::styled(user.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  @{}", user.username),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::from("Not signed in"),
    };
    frame.render_widget(
        Paragraph::new(profile).block(Block::default().borders(Borders::ALL).title(" Account ")),
        profile_area,
    );

    let block = Block::default().borders(Borders::ALL).title(" Orders ");
    if app.history_loading {
        frame.render_widget(Paragraph::new("Loading orders…").block(block), orders_area);
        return;
    }
    if app.history.is_empty() {
        frame.render_widget(
            Paragraph::new("No orders yet. Your receipts will show up here.").block(block),
            orders_area,
        );
        return;
    }

    let rows: Vec<Row> = app
        .history
        .iter()
        .map(|order| {
            Row::new(vec![
                Span::raw(order.id.clone()),
                Span::raw(format_date(order.created_at)),
                status_span(order.status),
                Span::raw(format_price(order.total)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(12),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(vec!["Order", "Placed", "Status", "Total"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray))
    .block(block);
    let mut state = TableState::default().with_selected(Some(app.history_selected));
    frame.render_stateful_widget(table, orders_area, &mut state);
}

pub(crate) fn status_span(status: OrderStatus) -> Span<'static> {
    match status {
        OrderStatus::Pending => Span::styled("PENDING", Style::default().fg(Color::Yellow)),
        OrderStatus::Processing => Span::styled("PROCESSING", Style::default().fg(Color::Cyan)),
        OrderStatus::Completed => Span::styled("COMPLETED", Style::default().fg(Color::Green)),
        OrderStatus::Cancelled => Span::styled("CANCELLED", Style::default().fg(Color::Red)),
    }
}
