//! Checkout screen

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use shared::models::ServiceType;
use shared::util::format_price;
use tui_input::Input;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let [summary_area, form_area] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);

    draw_summary(frame, summary_area, app);
    draw_form(frame, form_area, app);
}

fn draw_summary(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = app
        .cart
        .lines()
        .iter()
        .map(|line| {
            Line::from(vec![
                Span::raw(format!("×{} {}", line.quantity, line.name)),
                Span::styled(
                    format!("  {}", format_price(line.line_total())),
                    Style::default().fg(Color::Green),
                ),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("Total {}", format_price(app.cart.total_price())),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Order ")),
        area,
    );
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(" Details ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [service_area, table_area, note_area, hint_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(inner);

    let service_label = match app.checkout.service {
        ServiceType::Takeaway => "Takeaway",
        ServiceType::DineIn => "Dine-in",
    };
    let service = Paragraph::new(Line::from(vec![
        Span::raw("◂ "),
        Span::styled(service_label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ▸"),
    ]))
    .block(field_block(" Service ", app.checkout.focus == 0));
    frame.render_widget(service, service_area);

    draw_input(
        frame,
        table_area,
        " Table (dine-in) ",
        &app.checkout.table,
        app.checkout.focus == 1,
        false,
    );
    draw_input(
        frame,
        note_area,
        " Note ",
        &app.checkout.note,
        app.checkout.focus == 2,
        false,
    );

    if app.busy {
        frame.render_widget(Paragraph::new("Placing order…"), hint_area);
    }
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

/// Render a single-line text input, masking the value when asked and
/// placing the cursor when focused
pub(crate) fn draw_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &Input,
    focused: bool,
    masked: bool,
) {
    let width = area.width.max(3) - 3;
    let scroll = input.visual_scroll(width as usize);
    let value = if masked {
        "*".repeat(input.value().chars().count())
    } else {
        input.value().to_string()
    };

    let widget = Paragraph::new(value)
        .scroll((0, scroll as u16))
        .block(field_block(title, focused));
    frame.render_widget(widget, area);

    if focused {
        frame.set_cursor_position((
            area.x + (input.visual_cursor().max(scroll) - scroll) as u16 + 1,
            area.y + 1,
        ));
    }
}
