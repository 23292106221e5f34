use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::utils::centered_rect;
use crate::presentation::theme::Theme;

pub const DELETE_PROMPT: &str = "Delete this item?";

const DIALOG_WIDTH: u16 = 40;
const DIALOG_HEIGHT: u16 = 6;

/// Modal asking to confirm a delete.
pub struct ConfirmDialog<'a> {
    subject: &'a str,
    theme: &'a Theme,
}

impl<'a> ConfirmDialog<'a> {
    #[must_use]
    pub const fn new(subject: &'a str, theme: &'a Theme) -> Self {
        Self { subject, theme }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .style(self.theme.base_style)
            .title(" Confirm ");

        let lines = vec![
            Line::from(Span::styled(
                DELETE_PROMPT,
                self.theme.base_style.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.subject, self.theme.dimmed_style)),
            Line::default(),
            Line::from(Span::styled("[y] Yes   [n] No", self.theme.dimmed_style)),
        ];

        Clear.render(popup, buf);
        Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true })
            .block(block)
            .render(popup, buf);
    }
}
