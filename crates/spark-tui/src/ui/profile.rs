//! Profile page: user card, settings toggles, task history

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_user_column(frame, app, columns[0]);
    draw_history_column(frame, app, columns[1]);
}

fn draw_user_column(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(8)])
        .split(area);

    let user = &app.user;
    let card = Paragraph::new(vec![
        Line::styled(user.name, app.theme.base().add_modifier(Modifier::BOLD)),
        Line::styled(user.email, app.theme.muted()),
        Line::styled(user.avatar, app.theme.muted()),
        Line::raw(""),
        Line::from(vec![
            Span::styled(format!(" {} Plan ", user.plan), app.theme.accent()),
            Span::styled("  Upgrade to Premium", app.theme.muted()),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Profile")
            .border_style(app.theme.muted()),
    );
    frame.render_widget(card, chunks[0]);

    draw_settings(frame, app, chunks[1]);
}

fn draw_settings(frame: &mut Frame, app: &App, area: Rect) {
    let on_off = |on: bool| if on { "[on]" } else { "[off]" };

    let settings = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Dark Mode           ", app.theme.base()),
            Span::styled(on_off(app.config.ui.dark_mode), app.theme.accent()),
            Span::styled("  (d)", app.theme.muted()),
        ]),
        Line::from(vec![
            Span::styled("Notifications       ", app.theme.base()),
            Span::styled(on_off(app.settings.notifications), app.theme.accent()),
            Span::styled("  (n)", app.theme.muted()),
        ]),
        Line::from(vec![
            Span::styled("Remember prefs      ", app.theme.base()),
            Span::styled(on_off(app.settings.remember_preferences), app.theme.accent()),
            Span::styled("  (r)", app.theme.muted()),
        ]),
        Line::from(vec![
            Span::styled("Default Mode        ", app.theme.base()),
            Span::styled(
                format!("[{}]", app.settings.default_mode.as_str()),
                app.theme.accent(),
            ),
            Span::styled("  (m)", app.theme.muted()),
        ]),
        Line::raw(""),
        Line::styled(
            "Only Dark Mode is saved; other toggles are placeholders.",
            app.theme.muted(),
        ),
        Line::raw(""),
        Line::styled("Clear All Saved Chats", app.theme.badge(false)),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("⚙ Settings")
            .border_style(app.theme.muted()),
    );
    frame.render_widget(settings, area);
}

fn draw_history_column(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(6)])
        .split(area);

    let items: Vec<ListItem> = app
        .user
        .tasks
        .iter()
        .map(|task| {
            let badge_style = app.theme.badge(task.completed);
            ListItem::new(Text::from(vec![
                Line::styled(task.query, app.theme.base().add_modifier(Modifier::BOLD)),
                Line::from(vec![
                    Span::styled(format!("🕒 {}  ", task.date), app.theme.muted()),
                    Span::styled(format!("[{}]", task.badge()), badge_style),
                ]),
                Line::raw(""),
            ]))
        })
        .collect();

    let history = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("🗂 Task History")
            .border_style(app.theme.muted()),
    );
    frame.render_widget(history, chunks[0]);

    let memory = Paragraph::new(vec![
        Line::styled(
            "Manage what Spark remembers from your previous interactions.",
            app.theme.muted(),
        ),
        Line::from(vec![
            Span::styled("Remember my preferences  ", app.theme.base()),
            Span::styled(
                if app.settings.remember_preferences {
                    "[on]"
                } else {
                    "[off]"
                },
                app.theme.accent(),
            ),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Memory Management")
            .border_style(app.theme.muted()),
    );
    frame.render_widget(memory, chunks[1]);
}
