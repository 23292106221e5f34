use crate::domain::ThemeMode;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Icon of the mode a toggle would switch to.
const fn toggle_icon(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "☀",
        ThemeMode::Light => "☾",
    }
}

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub selector: Style,
    pub toggle: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            background: theme.header_style,
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            version: theme.header_style.remove_modifier(Modifier::BOLD),
            selector: theme.header_style,
            toggle: theme.header_style.fg(theme.accent),
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Title row with the active filter, sort order and theme toggle.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    filter: &'a str,
    sort: &'a str,
    mode: ThemeMode,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            filter: "",
            sort: "",
            mode: ThemeMode::default(),
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn selectors(mut self, filter: &'a str, sort: &'a str) -> Self {
        self.filter = filter;
        self.sort = sort;
        self
    }

    #[must_use]
    pub const fn mode(mut self, mode: ThemeMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn right_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        if !self.filter.is_empty() {
            spans.push(Span::styled(format!(" [{}] ", self.filter), self.style.selector));
        }
        if !self.sort.is_empty() {
            spans.push(Span::styled(format!(" [{}] ", self.sort), self.style.selector));
        }
        spans.push(Span::styled(
            format!(" {} ", toggle_icon(self.mode)),
            self.style.toggle,
        ));
        spans
    }
}

impl Widget for HeaderBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        buf.set_style(Rect::new(area.x, area.y, area.width, 1), self.style.background);

        let left_line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.app_name.to_uppercase()),
                self.style.app_name,
            ),
            Span::raw(" "),
            Span::styled(format!(" v{} ", self.version), self.style.version),
        ]);
        let left_width = left_line.width() as u16;
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let right_line = Line::from(self.right_spans());
        let right_width = right_line.width() as u16;

        if right_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            Paragraph::new(right_line).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_line(header: HeaderBar<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 1)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(header, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..70).map(|x| buffer[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_toggle_icon_shows_target_mode() {
        assert_eq!(toggle_icon(ThemeMode::Dark), "☀");
        assert_eq!(toggle_icon(ThemeMode::Light), "☾");
    }

    #[test]
    fn test_renders_title_and_selectors() {
        let line = render_line(
            HeaderBar::new("shelfwatch", "0.1.0")
                .selectors("Dairy", "Expiry ↑")
                .mode(ThemeMode::Dark),
        );

        assert!(line.contains("SHELFWATCH"));
        assert!(line.contains("v0.1.0"));
        assert!(line.contains("[Dairy]"));
        assert!(line.contains("☀"));
    }
}
