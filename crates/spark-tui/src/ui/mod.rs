//! Frame rendering
//!
//! Layout chrome (nav header, content area, key-hint footer) plus one module
//! per page.

mod contribute;
mod home;
mod profile;
mod store;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use crate::app::{App, InputMode, Page};

/// Draw the whole frame
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(app.theme.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Page content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);

    match app.page {
        Page::Home => home::draw(frame, app, chunks[1]),
        Page::Store => store::draw(frame, app, chunks[1]),
        Page::Profile => profile::draw(frame, app, chunks[1]),
        Page::Contribute => contribute::draw(frame, app, chunks[1]),
    }

    draw_footer(frame, app, chunks[2]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = Page::all()
        .iter()
        .enumerate()
        .map(|(i, page)| format!("{} {}", i + 1, page.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("⚡ Spark")
                .border_style(app.theme.muted()),
        )
        .style(app.theme.muted())
        .highlight_style(app.theme.selection())
        .select(app.page.index());
    frame.render_widget(tabs, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match (app.input_mode, app.page) {
        (InputMode::Editing, Page::Home) => {
            "Esc: Done | Enter: Run | ↑/↓: Suggestions | type to edit query".to_string()
        }
        (InputMode::Editing, Page::Contribute) => {
            "Esc: Done | Tab: Next field | type to edit".to_string()
        }
        (InputMode::Editing, _) => "Esc: Done | type to edit".to_string(),
        (InputMode::Normal, Page::Home) => format!(
            "q: Quit | 1-4: Pages | /: Query | m: Mode | ←/→+Enter: Quick task | y: Copy | s: Save | f: {} | d: {}",
            app.export_format.name(),
            app.theme.toggle_label()
        ),
        (InputMode::Normal, Page::Store) => format!(
            "q: Quit | 1-4: Pages | /: Filter | ←/→: Category | ↑/↓: Agents | d: {}",
            app.theme.toggle_label()
        ),
        (InputMode::Normal, Page::Profile) => format!(
            "q: Quit | 1-4: Pages | n: Notifications | r: Remember | m: Default mode | d: {}",
            app.theme.toggle_label()
        ),
        (InputMode::Normal, Page::Contribute) => format!(
            "q: Quit | 1-4: Pages | /: Edit form | ↑/↓+Space: Permissions | Enter: Submit | d: {}",
            app.theme.toggle_label()
        ),
    };

    let text = match &app.status {
        Some(status) => format!("{}  —  {}", status, hints),
        None => hints,
    };

    let footer = Paragraph::new(text)
        .style(app.theme.muted())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Thousands separator for install counts
pub(crate) fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
