//! Inventory table with rows tinted by freshness.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::application::services::ViewRow;
use crate::presentation::theme::Theme;

const HEADERS: [&str; 6] = ["Name", "Category", "Qty", "Expiry", "Days Left", "Status"];

pub struct RecordTable<'a> {
    rows: &'a [ViewRow],
    theme: &'a Theme,
    focused: bool,
}

impl<'a> RecordTable<'a> {
    #[must_use]
    pub const fn new(rows: &'a [ViewRow], theme: &'a Theme) -> Self {
        Self {
            rows,
            theme,
            focused: false,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(if self.focused {
                self.theme.focused_border_style
            } else {
                self.theme.border_style
            })
            .style(self.theme.base_style)
            .title(" Inventory ")
    }
}

impl StatefulWidget for RecordTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if self.rows.is_empty() {
            let empty = Line::styled("No items", self.theme.dimmed_style).centered();
            let block = self.block();
            let inner = block.inner(area);
            block.render(area, buf);
            empty.render(inner, buf);
            return;
        }

        let header = Row::new(HEADERS.map(Cell::from))
            .style(self.theme.header_style)
            .bottom_margin(0);

        let rows = self.rows.iter().map(|row| {
            Row::new([
                Cell::from(row.name.as_str()),
                Cell::from(row.category.as_str()),
                Cell::from(row.quantity.as_str()),
                Cell::from(row.expiry.as_str()),
                Cell::from(row.days_label.as_str()),
                Cell::from(row.status.label()),
            ])
            .style(self.theme.status_style(row.status))
        });

        let widths = [
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(7),
        ];

        let highlight = if self.focused {
            self.theme.selection_style
        } else {
            self.theme.selection_style.remove_modifier(Modifier::BOLD)
        };

        let table = Table::new(rows, widths)
            .header(header)
            .block(self.block())
            .column_spacing(1)
            .row_highlight_style(highlight)
            .highlight_symbol("▶ ");

        StatefulWidget::render(table, area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FreshnessStatus, RecordId};

    fn row(name: &str, status: FreshnessStatus) -> ViewRow {
        ViewRow {
            id: RecordId(1),
            name: name.to_string(),
            category: "Dairy".to_string(),
            quantity: "2".to_string(),
            expiry: "2024-03-01".to_string(),
            days_label: "3 days".to_string(),
            status,
        }
    }

    fn render(rows: &[ViewRow]) -> Buffer {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 6);
        let mut buf = Buffer::empty(area);
        let mut state = TableState::default();
        RecordTable::new(rows, &theme).render(area, &mut buf, &mut state);
        buf
    }

    fn line(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_rows_show_label_and_status() {
        let buf = render(&[row("Milk", FreshnessStatus::Warning)]);

        assert!(line(&buf, 1).contains("Days Left"));
        let milk = line(&buf, 2);
        assert!(milk.contains("Milk"));
        assert!(milk.contains("3 days"));
        assert!(milk.contains("WARNING"));
    }

    #[test]
    fn test_rows_are_tinted_by_status() {
        let theme = Theme::default();
        let buf = render(&[
            row("Milk", FreshnessStatus::Warning),
            row("Bread", FreshnessStatus::Expired),
        ]);

        assert_eq!(buf[(2, 2)].bg, theme.warning_style.bg.unwrap());
        assert_eq!(buf[(2, 3)].bg, theme.expired_style.bg.unwrap());
    }

    #[test]
    fn test_empty_table_placeholder() {
        let buf = render(&[]);
        assert!((0..6).any(|y| line(&buf, y).contains("No items")));
    }
}
