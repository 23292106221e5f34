use super::adapter::ColorConverter;
use crate::domain::{FreshnessStatus, ThemeMode};
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const DEFAULT_ACCENT: Color = Color::Green;

/// Resolved styles for one display mode and accent.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub mode: ThemeMode,
    pub accent: Color,
    pub base_style: Style,
    pub header_style: Style,
    pub border_style: Style,
    pub focused_border_style: Style,
    pub selection_style: Style,
    pub dimmed_style: Style,
    pub safe_style: Style,
    pub warning_style: Style,
    pub expired_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(ThemeMode::Light, DEFAULT_ACCENT)
    }
}

impl Theme {
    pub fn new(mode: ThemeMode, accent_color_str: &str) -> Self {
        Self::from_color(mode, parse_color(accent_color_str))
    }

    #[must_use]
    pub fn from_color(mode: ThemeMode, accent: Color) -> Self {
        let dark = mode.is_dark();
        let foreground = if dark { Color::Gray } else { Color::Black };
        let background = ColorConverter::shade(accent, 0.1, if dark { 0.08 } else { 0.97 });
        let header_bg = ColorConverter::shade(accent, 0.4, if dark { 0.18 } else { 0.85 });
        let selection_bg = ColorConverter::shade(accent, 0.3, if dark { 0.25 } else { 0.75 });

        let base_style = Style::default().fg(foreground).bg(background);

        Self {
            mode,
            accent,
            base_style,
            header_style: Style::default()
                .fg(foreground)
                .bg(header_bg)
                .add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(if dark {
                Color::DarkGray
            } else {
                Color::Gray
            }),
            focused_border_style: Style::default().fg(accent),
            selection_style: Style::default()
                .fg(foreground)
                .bg(selection_bg)
                .add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(if dark {
                Color::DarkGray
            } else {
                Color::Gray
            }),
            safe_style: status_tint(Color::Green, foreground, dark),
            warning_style: status_tint(Color::Yellow, foreground, dark),
            expired_style: status_tint(Color::Red, foreground, dark),
        }
    }

    /// Row style for a freshness status.
    #[must_use]
    pub const fn status_style(&self, status: FreshnessStatus) -> Style {
        match status {
            FreshnessStatus::Safe => self.safe_style,
            FreshnessStatus::Warning => self.warning_style,
            FreshnessStatus::Expired => self.expired_style,
        }
    }

    /// Returns the same accent in the other mode.
    #[must_use]
    pub fn with_mode(&self, mode: ThemeMode) -> Self {
        Self::from_color(mode, self.accent)
    }
}

fn status_tint(hue: Color, foreground: Color, dark: bool) -> Style {
    Style::default()
        .fg(foreground)
        .bg(ColorConverter::shade(hue, 0.45, if dark { 0.16 } else { 0.88 }))
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => DEFAULT_ACCENT,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();
    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => {
            let doubled = |i: usize| channel(&s[i..=i].repeat(2));
            Some((doubled(0)?, doubled(1)?, doubled(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Orange"), Color::Indexed(208));
        assert_eq!(parse_color("Invalid"), DEFAULT_ACCENT);
    }

    #[test]
    fn test_modes_differ_in_background() {
        let light = Theme::new(ThemeMode::Light, "Green");
        let dark = light.with_mode(ThemeMode::Dark);

        assert_ne!(light.base_style.bg, dark.base_style.bg);
        assert_eq!(dark.mode, ThemeMode::Dark);
        assert_eq!(dark.accent, light.accent);
    }

    #[test]
    fn test_status_rows_are_distinct() {
        let theme = Theme::default();
        let safe = theme.status_style(FreshnessStatus::Safe).bg;
        let warning = theme.status_style(FreshnessStatus::Warning).bg;
        let expired = theme.status_style(FreshnessStatus::Expired).bg;

        assert_ne!(safe, warning);
        assert_ne!(warning, expired);
        assert_ne!(safe, expired);
    }
}
