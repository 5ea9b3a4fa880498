//! Agent store page: filter input, category tabs, agent cards

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Tabs};

use spark_core::catalog::{CatalogAgent, CategoryFilter};

use crate::app::{App, InputMode};
use crate::ui::group_thousands;

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Length(3), // Filter input
            Constraint::Length(3), // Category tabs
            Constraint::Min(6),    // Agent cards
        ])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::styled("Agent Store", app.theme.base().add_modifier(Modifier::BOLD)),
        Line::styled(
            "Discover and install powerful agents to enhance your experience",
            app.theme.muted(),
        ),
    ]);
    frame.render_widget(heading, chunks[0]);

    draw_filter(frame, app, chunks[1]);
    draw_categories(frame, app, chunks[2]);
    draw_cards(frame, app, chunks[3]);
}

fn draw_filter(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.input_mode == InputMode::Editing {
        app.theme.accent()
    } else {
        app.theme.muted()
    };

    let content = if app.store_search.is_empty() {
        Line::styled("Search agents...", app.theme.muted())
    } else {
        Line::styled(app.store_search.clone(), app.theme.base())
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("🔍 Filter"),
    );
    frame.render_widget(input, area);
}

fn draw_categories(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = CategoryFilter::all()
        .iter()
        .map(|filter| capitalize(filter.as_str()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Categories")
                .border_style(app.theme.muted()),
        )
        .style(app.theme.muted())
        .highlight_style(app.theme.selection())
        .select(app.store_category);
    frame.render_widget(tabs, area);
}

fn draw_cards(frame: &mut Frame, app: &mut App, area: Rect) {
    let agents = app.filtered_agents();

    if agents.is_empty() {
        let empty = Paragraph::new("No agents match your filter.")
            .style(app.theme.muted())
            .block(Block::default().borders(Borders::ALL).title("Agents"));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = agents
        .iter()
        .copied()
        .map(|agent| card_item(app, agent))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Agents ({})", agents.len()))
                .border_style(app.theme.muted()),
        )
        .highlight_style(app.theme.selection())
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.store_list);
}

fn card_item<'a>(app: &App, agent: &'a CatalogAgent) -> ListItem<'a> {
    let header = Line::from(vec![
        Span::styled(
            format!("{} {}", agent.icon, agent.name),
            app.theme.base().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  by {}", agent.creator), app.theme.muted()),
        Span::styled(format!("  ★ {}", agent.rating), app.theme.badge(true)),
    ]);
    let description = Line::styled(agent.description, app.theme.base());
    let tasks = Line::styled(
        format!("Tasks: {}", agent.tasks.join(", ")),
        app.theme.muted(),
    );
    let installs = Line::styled(
        format!("{} installs", group_thousands(agent.installs)),
        app.theme.muted(),
    );

    ListItem::new(Text::from(vec![
        header,
        description,
        tasks,
        installs,
        Line::raw(""),
    ]))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("all"), "All");
        assert_eq!(capitalize("productivity"), "Productivity");
        assert_eq!(capitalize(""), "");
    }
}
