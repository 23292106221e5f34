//! Summary counters above the table.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::application::services::DashboardCounts;
use crate::presentation::theme::Theme;

/// Four counter tiles: total, safe, warning, expired.
pub struct Dashboard<'a> {
    counts: DashboardCounts,
    theme: &'a Theme,
}

impl<'a> Dashboard<'a> {
    #[must_use]
    pub const fn new(counts: DashboardCounts, theme: &'a Theme) -> Self {
        Self { counts, theme }
    }

    fn tiles(&self) -> [(&'static str, usize, Style); 4] {
        let theme = self.theme;
        [
            ("Total Items", self.counts.total, theme.base_style),
            ("Safe", self.counts.safe, theme.safe_style),
            ("Expiring Soon", self.counts.warning, theme.warning_style),
            ("Expired", self.counts.expired, theme.expired_style),
        ]
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

        for ((title, value, style), tile) in self.tiles().into_iter().zip(areas.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border_style)
                .style(style)
                .title(Span::styled(title, style));

            Paragraph::new(Line::from(Span::styled(
                value.to_string(),
                style.add_modifier(Modifier::BOLD),
            )))
            .centered()
            .block(block)
            .render(*tile, buf);
        }
    }
}
