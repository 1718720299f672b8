//! Search bar and empty-state screen rendering
//!
//! The search bar appears in both render modes: alone (with the app title)
//! before any snapshot exists, and at the top of the dashboard afterwards.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Placeholder shown while the query text is empty
const PLACEHOLDER: &str = "Enter city name...";

/// Renders the search-only screen shown before the first successful lookup
pub fn render_search_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Center the search card vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let title_area = centered_column(60, chunks[1]);
    let input_area = centered_column(60, chunks[2]);
    let message_area = centered_column(60, chunks[3]);

    let title = Paragraph::new(Line::from(Span::styled(
        "Weather",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    render_search_bar(frame, app, input_area);
    render_status_line(frame, app, message_area);
}

/// Renders the search input box into the given area
pub fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let input_line = if app.query.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::raw(app.query.clone()),
            Span::styled("\u{2588}", Style::default().fg(Color::Cyan)),
        ])
    };

    let title = if app.is_loading() {
        " Search  [searching...] "
    } else {
        " Search  [Enter to go] "
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(input_line).block(block);
    frame.render_widget(paragraph, area);
}

/// Renders the inline error line (or nothing) into the given area
pub fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = app.error_message() {
        let error = Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(error, area);
    }
}

/// Helper to center a fixed-width column inside an area
fn centered_column(width: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);

    horizontal[1]
}
