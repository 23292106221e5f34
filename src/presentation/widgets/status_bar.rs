//! Status line showing the current notice.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::{Notification, NotificationLevel};

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    const fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Warning => "!",
            Self::Error => "✗",
        }
    }
}

impl From<NotificationLevel> for StatusLevel {
    fn from(level: NotificationLevel) -> Self {
        match level {
            NotificationLevel::Info => Self::Info,
            NotificationLevel::Success => Self::Success,
            NotificationLevel::Warn => Self::Warning,
            NotificationLevel::Error => Self::Error,
        }
    }
}

/// Status bar widget.
#[derive(Debug, Clone)]
pub struct StatusBar {
    message: String,
    level: StatusLevel,
    base: Style,
}

impl StatusBar {
    /// Creates empty status bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: String::new(),
            level: StatusLevel::Info,
            base: Style::new(),
        }
    }

    /// Creates a status bar for `notification`, or an empty one.
    #[must_use]
    pub fn from_notification(notification: Option<&Notification>) -> Self {
        notification.map_or_else(Self::new, |n| Self {
            message: n.message.clone(),
            level: n.level.into(),
            base: Style::new(),
        })
    }

    /// Sets the background style.
    #[must_use]
    pub const fn base_style(mut self, style: Style) -> Self {
        self.base = style;
        self
    }

    /// Sets status level.
    #[must_use]
    pub const fn level(mut self, level: StatusLevel) -> Self {
        self.level = level;
        self
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.base);

        if self.message.is_empty() {
            return;
        }

        let style = self
            .base
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);

        let line = Line::from(vec![
            Span::styled(format!(" {} ", self.level.icon()), style),
            Span::styled(self.message.as_str(), style),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_notification() {
        let notice = Notification::warn("Please fill all fields");
        let bar = StatusBar::from_notification(Some(&notice));

        assert_eq!(bar.message(), "Please fill all fields");
        assert_eq!(bar.level, StatusLevel::Warning);
        assert!(StatusBar::from_notification(None).message().is_empty());
    }

    #[test]
    fn test_renders_message() {
        let bar = StatusBar::from_notification(Some(&Notification::error("Could not save")));
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);

        (&bar).render(area, &mut buf);

        let text: String = (0..30).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(text.contains("✗ Could not save"));
        assert_eq!(buf[(3, 0)].fg, Color::Red);
    }
}
