//! Order status screen with the estimated-ready countdown

use crate::app::App;
use crate::order_watch::OrderWatch;
use crate::ui::dashboard::status_span;
use crate::ui::format_date;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use shared::models::{Order, OrderStatus};
use shared::util::format_price;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(watch) = app.watch.as_ref() else {
        return;
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Order {} ", watch.order_id()));

    if watch.is_loading() && watch.order().is_none() {
        frame.render_widget(Paragraph::new("Fetching order…").block(block), area);
        return;
    }

    if let Some(error) = watch.error() {
        let lines = vec![
            Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Press r to retry.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let Some(order) = watch.order() else {
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [status_area, countdown_area, items_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .areas(inner);

    let status_line = Line::from(vec![
        Span::raw("Status: "),
        status_span(order.status),
        Span::styled(
            format!("   placed {}", format_date(order.created_at)),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(status_line), status_area);

    draw_countdown(frame, countdown_area, watch, order);
    draw_items(frame, items_area, order);
}

fn draw_countdown(frame: &mut Frame, area: Rect, watch: &OrderWatch, order: &Order) {
    match order.status {
        OrderStatus::Processing if watch.locally_ready() => {
            // presentational inference, not a server-confirmed transition
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "Should be ready, waiting for confirmation",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ))),
                area,
            );
        }
        OrderStatus::Processing => {
            let Some(remaining) = watch.remaining_secs() else {
                return;
            };
            let total_secs = (OrderWatch::ready_at(order) - order.created_at) / 1000;
            let elapsed = (total_secs - remaining).max(0);
            let ratio = if total_secs > 0 {
                (elapsed as f64 / total_secs as f64).clamp(0.0, 1.0)
            } else {
                1.0
            };

            let gauge = Gauge::default()
                .ratio(ratio)
                .gauge_style(Style::default().fg(Color::Cyan))
                .label(format!(
                    "ready in {:02}:{:02}",
                    remaining / 60,
                    remaining % 60
                ))
                .block(Block::default().borders(Borders::ALL).title(" Countdown "));
            frame.render_widget(gauge, area);
        }
        OrderStatus::Pending => {
            frame.render_widget(
                Paragraph::new("Waiting for the barista to pick this up…"),
                area,
            );
        }
        OrderStatus::Completed => {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Ready! Enjoy your coffee.",
                    Style::default().fg(Color::Green),
                )),
                area,
            );
        }
        OrderStatus::Cancelled => {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "This order was cancelled.",
                    Style::default().fg(Color::Red),
                )),
                area,
            );
        }
    }
}

fn draw_items(frame: &mut Frame, area: Rect, order: &Order) {
    let mut lines: Vec<Line> = order
        .items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::raw(format!("×{} {}", item.quantity, item.name)),
                Span::styled(
                    format!(
                        "  {}",
                        format_price(item.unit_price * item.quantity as i64)
                    ),
                    Style::default().fg(Color::Green),
                ),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("Total {}", format_price(order.total)),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Items ")),
        area,
    );
}
