//! Landing screen

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const LOGO: &str = r#"
  _  __            _
 | |/ /___  _ __  (_)
 | ' // _ \| '_ \ | |
 | . \ (_) | |_) || |
 |_|\_\___/| .__/ |_|
           |_|
"#;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let greeting = match app.session.user() {
        Some(user) => format!("Selamat datang, {}!", user.name),
        None => "Fresh coffee, ordered from your terminal.".to_string(),
    };

    let mut lines: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Yellow))))
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        greeting,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    lines.push(Line::from("Press m to browse the menu."));
    if !app.session.is_signed_in() {
        lines.push(Line::from("Press s to sign in or create an account."));
    }

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, area);
}
