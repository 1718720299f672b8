//! Presentation derivations for the dashboard
//!
//! Two pure mappings recomputed on every render: the weather icon category
//! and the background theme. Both match case-insensitive substrings of the
//! free-text condition with first-match-wins priority and a defined
//! fallback, so they never fail on unrecognized text.

use ratatui::style::Color;

/// Icon category derived from the condition text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Rain,
    Cloud,
    Sun,
}

/// Background theme derived from the condition text and day/night flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Night,
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Default,
}

/// Derives the icon category for a condition string.
///
/// Priority: rain/drizzle, then cloud, then sun/clear, then the cloud
/// fallback.
pub fn icon_for(condition: &str) -> IconKind {
    let c = condition.to_lowercase();

    if c.contains("rain") || c.contains("drizzle") {
        IconKind::Rain
    } else if c.contains("cloud") {
        IconKind::Cloud
    } else if c.contains("sun") || c.contains("clear") {
        IconKind::Sun
    } else {
        IconKind::Cloud
    }
}

/// Derives the background theme for a condition string.
///
/// Night wins unconditionally outside the day window; the condition text is
/// only consulted during the day.
pub fn theme_for(condition: &str, is_day: bool) -> Theme {
    if !is_day {
        return Theme::Night;
    }

    let c = condition.to_lowercase();

    if c.contains("sun") || c.contains("clear") {
        Theme::Sunny
    } else if c.contains("cloud") {
        Theme::Cloudy
    } else if c.contains("rain") || c.contains("drizzle") {
        Theme::Rainy
    } else if c.contains("snow") {
        Theme::Snowy
    } else {
        Theme::Default
    }
}

impl IconKind {
    /// Terminal glyph for this icon category
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::Rain => "\u{1F327}",  // 🌧
            IconKind::Cloud => "\u{2601}",  // ☁
            IconKind::Sun => "\u{2600}",    // ☀
        }
    }

    /// Color for this icon category
    pub fn color(&self) -> Color {
        match self {
            IconKind::Rain => Color::LightBlue,
            IconKind::Cloud => Color::Gray,
            IconKind::Sun => Color::Yellow,
        }
    }
}

impl Theme {
    /// Accent color used for the temperature card border and title
    pub fn accent(&self) -> Color {
        match self {
            Theme::Night => Color::Blue,
            Theme::Sunny => Color::Yellow,
            Theme::Cloudy => Color::Gray,
            Theme::Rainy => Color::Cyan,
            Theme::Snowy => Color::White,
            Theme::Default => Color::DarkGray,
        }
    }
}
