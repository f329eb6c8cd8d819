//! Sign-in and sign-up screens

use crate::app::App;
use crate::route::Route;
use crate::ui::checkout::draw_input;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let sign_up = app.route == Route::SignUp;
    let title = if sign_up { " Create account " } else { " Sign in " };

    let form_area = crate::ui::centered_rect(60, 80, area);
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let [username_area, password_area, name_area, email_area, hint_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(inner);

    draw_input(
        frame,
        username_area,
        " Username ",
        &app.auth_form.username,
        app.auth_form.focus == 0,
        false,
    );
    draw_input(
        frame,
        password_area,
        " Password ",
        &app.auth_form.password,
        app.auth_form.focus == 1,
        true,
    );

    if sign_up {
        draw_input(
            frame,
            name_area,
            " Name ",
            &app.auth_form.name,
            app.auth_form.focus == 2,
            false,
        );
        draw_input(
            frame,
            email_area,
            " Email (optional) ",
            &app.auth_form.email,
            app.auth_form.focus == 3,
            false,
        );
    }

    let hint = if app.busy {
        Line::from("Submitting…")
    } else if sign_up {
        Line::from(vec![
            Span::raw("Already have an account? "),
            Span::styled("F2 to sign in", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(vec![
            Span::raw("New here? "),
            Span::styled("F2 to create an account", Style::default().fg(Color::Yellow)),
        ])
    };
    frame.render_widget(Paragraph::new(hint), hint_area);
}
