//! Home page: search input, suggestions, quick tasks, results panel

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap,
};

use spark_core::session::{Mode, Phase, QUICK_TASKS, RunResults};

use crate::app::{App, InputMode};

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect) {
    let suggestion_rows = if app.suggestions.is_empty() {
        0
    } else {
        app.suggestions.len() as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Heading
            Constraint::Length(3),               // Search input
            Constraint::Length(suggestion_rows), // Suggestions dropdown
            Constraint::Min(8),                  // Quick tasks or results
        ])
        .split(area);

    draw_heading(frame, app, chunks[0]);
    draw_input(frame, app, chunks[1]);
    if suggestion_rows > 0 {
        draw_suggestions(frame, app, chunks[2]);
    }

    match app.session.phase().clone() {
        Phase::Idle => draw_quick_tasks(frame, app, chunks[3]),
        Phase::Loading => draw_loading(frame, app, chunks[3]),
        Phase::Done(results) => draw_results(frame, app, chunks[3], &results),
    }
}

fn draw_heading(frame: &mut Frame, app: &App, area: Rect) {
    let heading = Paragraph::new(vec![
        Line::styled("Spark", app.theme.base().add_modifier(Modifier::BOLD)),
        Line::styled("Search or execute tasks with AI assistance", app.theme.muted()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, area);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let mode = app.session.mode();
    let mode_title = Line::from(vec![
        Span::styled(
            " 🔍 Search ",
            if mode == Mode::Search {
                app.theme.selection()
            } else {
                app.theme.muted()
            },
        ),
        Span::styled(
            " ⚡ Agent ",
            if mode == Mode::Agent {
                app.theme.selection()
            } else {
                app.theme.muted()
            },
        ),
    ]);

    let border_style = if app.input_mode == InputMode::Editing {
        app.theme.accent()
    } else {
        app.theme.muted()
    };

    let query = app.session.query();
    let content = if query.is_empty() {
        Line::styled(mode.placeholder(), app.theme.muted())
    } else {
        Line::styled(query.to_string(), app.theme.base())
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(mode_title),
    );
    frame.render_widget(input, area);
}

fn draw_suggestions(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .map(|s| ListItem::new(*s))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Suggestions")
                .border_style(app.theme.muted()),
        )
        .style(app.theme.base())
        .highlight_style(app.theme.selection())
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    state.select(app.suggestion_cursor);
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_quick_tasks(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Quick Tasks")
        .border_style(app.theme.muted());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, QUICK_TASKS.len() as u32);
            QUICK_TASKS.len()
        ])
        .split(inner);

    for (i, (shortcut, cell)) in QUICK_TASKS.iter().zip(columns.iter()).enumerate() {
        let style = if i == app.quick_cursor {
            app.theme.selection()
        } else {
            app.theme.muted()
        };
        let tile = Paragraph::new(vec![
            Line::raw(""),
            Line::raw(shortcut.icon),
            Line::styled(shortcut.label, style),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(tile, *cell);
    }
}

fn draw_loading(frame: &mut Frame, app: &App, area: Rect) {
    let mode = app.session.mode();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.muted());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let message = match mode {
        Mode::Search => "Searching for results...",
        Mode::Agent => "Running your task...",
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let spinner = Paragraph::new(message)
        .style(app.theme.accent())
        .alignment(Alignment::Center);
    frame.render_widget(spinner, chunks[0]);

    // Agent runs show the staged progress mock
    if mode == Mode::Agent {
        let stages: [(&str, &str, f64); 3] = [
            ("Selecting Agent", "Complete", 1.0),
            ("Fetching Data", "In Progress", 0.66),
            ("Completing Task", "Pending", 0.0),
        ];
        for ((label, status, ratio), chunk) in stages.iter().zip(chunks[1..4].iter()) {
            let gauge = Gauge::default()
                .block(
                    Block::default()
                        .borders(Borders::NONE)
                        .title(format!("{} — {}", label, status)),
                )
                .gauge_style(app.theme.accent())
                .ratio(*ratio)
                .label("");
            frame.render_widget(gauge, *chunk);
        }
    }
}

fn draw_results(frame: &mut Frame, app: &App, area: Rect, results: &RunResults) {
    match results {
        RunResults::Search(hits) => {
            let mut lines: Vec<Line> = vec![
                Line::styled("Here are the top results for your query", app.theme.muted()),
                Line::raw(""),
            ];
            for hit in hits {
                lines.push(Line::styled(
                    hit.title,
                    app.theme.accent().add_modifier(Modifier::BOLD),
                ));
                lines.push(Line::styled(hit.content, app.theme.base()));
                lines.push(Line::raw(""));
            }
            let panel = Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("🔍 Search Results")
                        .border_style(app.theme.muted()),
                );
            frame.render_widget(panel, area);
        }
        RunResults::Agent(runs) => {
            let mut lines: Vec<Line> = Vec::new();
            for run in runs {
                lines.push(Line::styled(
                    format!("Your task has been processed by the {}", run.agent),
                    app.theme.muted(),
                ));
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    run.task,
                    app.theme.base().add_modifier(Modifier::BOLD),
                ));
                lines.push(Line::styled(run.result, app.theme.base()));
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    format!("Status: {}", run.status.as_str()),
                    app.theme.badge(true),
                ));
            }
            let panel = Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("⚡ Task Completed")
                        .border_style(app.theme.muted()),
                );
            frame.render_widget(panel, area);
        }
    }
}
