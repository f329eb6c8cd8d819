//! Cart screen

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};
use shared::util::format_price;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let [table_area, totals_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    let block = Block::default().borders(Borders::ALL).title(" Cart ");
    if app.cart.is_empty() {
        frame.render_widget(
            Paragraph::new("Your cart is empty. Browse the menu to add something.").block(block),
            table_area,
        );
    } else {
        let rows: Vec<Row> = app
            .cart
            .lines()
            .iter()
            .map(|line| {
                Row::new(vec![
                    line.name.clone(),
                    format!("×{}", line.quantity),
                    format_price(line.unit_price),
                    format_price(line.line_total()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(20),
                Constraint::Length(6),
                Constraint::Length(12),
                Constraint::Length(12),
            ],
        )
        .header(
            Row::new(vec!["Item", "Qty", "Unit", "Total"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .block(block);
        let mut state = TableState::default().with_selected(Some(app.cart_selected));
        frame.render_stateful_widget(table, table_area, &mut state);
    }

    let totals = Paragraph::new(Line::from(vec![
        Span::raw(format!("{} items · ", app.cart.total_item_count())),
        Span::styled(
            format_price(app.cart.total_price()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Total "));
    frame.render_widget(totals, totals_area);
}
