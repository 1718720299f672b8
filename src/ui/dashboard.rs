//! Weather dashboard rendering
//!
//! Renders the full dashboard shown once a snapshot exists: the search bar,
//! an optional inline error, the main temperature card, and the detail
//! cards for feels-like, wind, humidity, pressure, and location. Cards are
//! direct renderings of snapshot fields; the dashboard appears or not as a
//! unit.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::WeatherSnapshot;
use crate::ui::search::{render_search_bar, render_status_line};
use crate::ui::theme::{icon_for, theme_for};

/// Renders the dashboard for the given snapshot
pub fn render(frame: &mut Frame, app: &App, snapshot: &WeatherSnapshot) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search bar
            Constraint::Length(1), // inline error
            Constraint::Length(8), // main temperature card
            Constraint::Length(5), // detail cards
            Constraint::Length(5), // location card
            Constraint::Min(0),
        ])
        .split(area);

    render_search_bar(frame, app, chunks[0]);
    render_status_line(frame, app, chunks[1]);
    render_temperature_card(frame, snapshot, chunks[2]);
    render_detail_cards(frame, snapshot, chunks[3]);
    render_location_card(frame, snapshot, chunks[4]);
}

/// Main card: location header, icon, rounded temperature, condition text
fn render_temperature_card(frame: &mut Frame, snapshot: &WeatherSnapshot, area: Rect) {
    let theme = theme_for(&snapshot.condition, snapshot.is_day);
    let icon = icon_for(&snapshot.condition);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                snapshot.city.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                snapshot.region.clone(),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(icon.glyph(), Style::default().fg(icon.color())),
            Span::raw("  "),
            Span::styled(
                format!("{}\u{B0}C", snapshot.display_temp()),
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(snapshot.condition.clone()),
    ];

    let block = Block::default()
        .title(" Now ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent()));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Row of four directly-mapped metric cards
fn render_detail_cards(frame: &mut Frame, snapshot: &WeatherSnapshot, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_metric_card(
        frame,
        columns[0],
        "Feels Like",
        format!("{}\u{B0}C", snapshot.display_feels_like()),
    );
    render_metric_card(
        frame,
        columns[1],
        "Wind",
        format!("{} km/h", snapshot.wind_speed),
    );
    render_metric_card(
        frame,
        columns[2],
        "Humidity",
        format!("{}%", snapshot.humidity),
    );
    render_metric_card(
        frame,
        columns[3],
        "Pressure",
        format!("{} mb", snapshot.pressure),
    );
}

/// A single labeled metric card
fn render_metric_card(frame: &mut Frame, area: Rect, label: &str, value: String) {
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL);

    let paragraph = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(paragraph, area);
}

/// Location card with country and region
fn render_location_card(frame: &mut Frame, snapshot: &WeatherSnapshot, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            snapshot.country.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            snapshot.region.clone(),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default().title(" Location ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
