//! Contribute page: submission dashboard and new-agent form

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use spark_core::contribute::{Permission, SubmissionStatus, submitted_agents};

use crate::app::{App, FormField, InputMode};
use crate::ui::group_thousands;

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_dashboard(frame, app, columns[0]);
    draw_form_column(frame, app, columns[1]);
}

fn draw_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(8)])
        .split(area);

    let items: Vec<ListItem> = submitted_agents()
        .into_iter()
        .map(|agent| {
            let badge_style = match agent.status {
                SubmissionStatus::Approved => app.theme.badge(true),
                SubmissionStatus::Pending => app.theme.badge(false),
                SubmissionStatus::Rejected => {
                    app.theme.badge(false).add_modifier(Modifier::CROSSED_OUT)
                }
            };
            let mut lines = vec![
                Line::styled(
                    agent.name.to_string(),
                    app.theme.base().add_modifier(Modifier::BOLD),
                ),
                Line::styled(agent.description.to_string(), app.theme.muted()),
                Line::from(vec![
                    Span::styled(format!("[{}]", agent.status.badge()), badge_style),
                    Span::styled(
                        format!("  submitted {}", agent.submitted_at),
                        app.theme.muted(),
                    ),
                ]),
            ];
            if agent.status == SubmissionStatus::Approved {
                lines.push(Line::styled(
                    format!(
                        "{} uses  ★ {}",
                        group_thousands(agent.usage_count),
                        agent.rating
                    ),
                    app.theme.muted(),
                ));
            }
            lines.push(Line::raw(""));
            ListItem::new(Text::from(lines))
        })
        .collect();

    let dashboard = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Your Agents")
            .border_style(app.theme.muted()),
    );
    frame.render_widget(dashboard, chunks[0]);

    let process = Paragraph::new(vec![
        Line::styled("1. Code Review", app.theme.base()),
        Line::styled("   Our team reviews your code", app.theme.muted()),
        Line::styled("2. Security Check", app.theme.base()),
        Line::styled("   Permissions and compliance", app.theme.muted()),
        Line::styled("3. Publication", app.theme.base()),
        Line::styled("   Your agent goes live in the store", app.theme.muted()),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Verification Process")
            .border_style(app.theme.muted()),
    );
    frame.render_widget(process, chunks[1]);
}

fn draw_form_column(frame: &mut Frame, app: &App, area: Rect) {
    if app.form.submitted() {
        let banner = Paragraph::new(vec![
            Line::raw(""),
            Line::styled(
                "✔ Your agent has been submitted successfully and is pending review.",
                app.theme.badge(true),
            ),
            Line::raw(""),
            Line::styled("The form will clear in a moment.", app.theme.muted()),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Submit New Agent")
                .border_style(app.theme.muted()),
        );
        frame.render_widget(banner, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();

    for field in [FormField::Name, FormField::Description, FormField::Tasks] {
        let focused = app.input_mode == InputMode::Editing && app.form_field == field;
        let marker = if focused { "▸ " } else { "  " };
        let value = match field {
            FormField::Name => &app.form.name,
            FormField::Description => &app.form.description,
            FormField::Tasks => &app.form.tasks,
        };
        lines.push(Line::from(vec![
            Span::styled(marker, app.theme.accent()),
            Span::styled(
                field.label(),
                if focused {
                    app.theme.selection()
                } else {
                    app.theme.muted()
                },
            ),
        ]));
        lines.push(Line::styled(
            if value.is_empty() {
                "—".to_string()
            } else {
                value.clone()
            },
            app.theme.base(),
        ));
        lines.push(Line::raw(""));
    }

    lines.push(Line::styled("Required Permissions", app.theme.muted()));
    for (i, permission) in Permission::all().iter().enumerate() {
        let ticked = if app.form.has_permission(*permission) {
            "[x]"
        } else {
            "[ ]"
        };
        let style = if i == app.perm_cursor {
            app.theme.selection()
        } else {
            app.theme.base()
        };
        lines.push(Line::styled(
            format!("  {} {}", ticked, permission.label()),
            style,
        ));
    }

    if let Some(error) = &app.form_error {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("✘ {}", error),
            app.theme.badge(false).add_modifier(Modifier::BOLD),
        ));
    }

    let form = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Submit New Agent")
            .border_style(app.theme.muted()),
    );
    frame.render_widget(form, area);
}
