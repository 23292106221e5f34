use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Centers a fixed-size box inside `r`, shrinking it to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(r.height))])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Length(width.min(r.width))])
        .flex(Flex::Center)
        .areas(row);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = centered_rect(20, 5, Rect::new(0, 0, 80, 25));
        assert_eq!(area, Rect::new(30, 10, 20, 5));
    }

    #[test]
    fn test_centered_rect_clamps_to_parent() {
        let area = centered_rect(100, 50, Rect::new(0, 0, 40, 10));
        assert_eq!(area, Rect::new(0, 0, 40, 10));
    }
}
