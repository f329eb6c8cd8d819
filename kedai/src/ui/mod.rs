//! Screen rendering
//!
//! Pure functions from app state to terminal frames. Each screen draws
//! into the body area; the chrome (tab bar, footer, log pane) is shared.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod dashboard;
pub mod home;
pub mod menu;
pub mod status;

use crate::app::App;
use crate::route::Route;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs};
use tui_logger::TuiLoggerWidget;

pub fn draw(frame: &mut Frame, app: &App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    draw_tabs(frame, header, app);

    match &app.route {
        Route::Home => home::draw(frame, body, app),
        Route::Menu => menu::draw(frame, body, app),
        Route::Cart => cart::draw(frame, body, app),
        Route::Checkout => checkout::draw(frame, body, app),
        Route::SignIn | Route::SignUp => auth::draw(frame, body, app),
        Route::Dashboard => dashboard::draw(frame, body, app),
        Route::OrderStatus { .. } => status::draw(frame, body, app),
    }

    draw_footer(frame, footer, app);

    if app.show_log {
        draw_log_pane(frame, app);
    }
}

fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let cart_label = if app.cart.is_empty() {
        "Cart".to_string()
    } else {
        format!("Cart ({})", app.cart.total_item_count())
    };
    let titles = vec![
        "Home".to_string(),
        "Menu".to_string(),
        cart_label,
        "My Orders".to_string(),
    ];
    let selected = match app.route {
        Route::Home => 0,
        Route::Menu => 1,
        Route::Cart | Route::Checkout => 2,
        Route::Dashboard | Route::OrderStatus { .. } => 3,
        Route::SignIn | Route::SignUp => 0,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" kedai · {} ", app.route.title())),
        );
    frame.render_widget(tabs, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let [message_area, hints_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    // inline dismissible error first, then transient notice
    let message = if let Some(ref error) = app.error {
        Line::from(vec![
            Span::styled(" ✗ ", Style::default().fg(Color::Red)),
            Span::styled(error.clone(), Style::default().fg(Color::Red)),
            Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
        ])
    } else if let Some(ref notice) = app.notice {
        Line::from(vec![
            Span::styled(" ✓ ", Style::default().fg(Color::Green)),
            Span::styled(notice.clone(), Style::default().fg(Color::Green)),
        ])
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(message), message_area);

    let hints = match app.route {
        Route::Home => "m menu · s sign in · 1-4 tabs · ^L log · q quit",
        Route::Menu => "↑↓ item · ←→ category · Enter add · c cart · r reload · Esc back",
        Route::Cart => "↑↓ select · +/- qty · d remove · x clear · Enter checkout · Esc back",
        Route::Checkout => "Tab field · Space service · Enter place order · Esc back",
        Route::SignIn | Route::SignUp => "Tab field · Enter submit · F2 switch · Esc back",
        Route::Dashboard => "↑↓ select · Enter open · r refresh · o sign out · Esc back",
        Route::OrderStatus { .. } => "r retry/refresh · Esc back · 1-4 tabs",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", hints),
            Style::default().fg(Color::DarkGray),
        ))),
        hints_area,
    );
}

fn draw_log_pane(frame: &mut Frame, _app: &App) {
    let area = centered_rect(80, 60, frame.area());
    frame.render_widget(Clear, area);
    let logs = TuiLoggerWidget::default()
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Green))
        .style_debug(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Log (^L to close) "),
        );
    frame.render_widget(logs, area);
}

/// Centered sub-rect by percentage, used for overlays and forms
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);
    let [_, horizontal, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(vertical);
    horizontal
}

/// Render a date from Unix millis for list display
pub(crate) fn format_date(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&chrono::Local).format("%d %b %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
