//! Menu and category browser

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use shared::util::format_price;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let [categories_area, items_area] =
        Layout::horizontal([Constraint::Length(24), Constraint::Min(0)]).areas(area);

    draw_categories(frame, categories_area, app);
    draw_items(frame, items_area, app);
}

fn draw_categories(frame: &mut Frame, area: Rect, app: &App) {
    let mut entries = vec![ListItem::new("All")];
    entries.extend(
        app.menu
            .categories
            .iter()
            .map(|c| ListItem::new(c.name.clone())),
    );

    let list = List::new(entries)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("» ")
        .block(Block::default().borders(Borders::ALL).title(" Categories "));
    let mut state = ListState::default().with_selected(Some(app.menu.selected_category));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_items(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(" Menu ");

    if app.menu.loading {
        frame.render_widget(Paragraph::new("Loading menu…").block(block), area);
        return;
    }

    let items = app.menu.visible_items();
    if items.is_empty() {
        frame.render_widget(
            Paragraph::new("Nothing here yet. Press r to reload.").block(block),
            area,
        );
        return;
    }

    let entries: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    item.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format_price(item.price),
                    Style::default().fg(Color::Green),
                ),
            ])];
            if let Some(ref description) = item.description {
                lines.push(Line::from(Span::styled(
                    format!("  {}", description),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(entries)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ")
        .block(block);
    let mut state = ListState::default().with_selected(Some(app.menu.selected_item));
    frame.render_stateful_widget(list, area, &mut state);
}
