use crate::consts;
use ratatui::layout::{Flex, Layout, Rect};

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    let [display] = Layout::horizontal([consts::DISPLAY_SIZE.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([consts::DISPLAY_SIZE.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

/// Return a `Rect` of at most `width` columns and one row, centered
/// horizontally in `area` at row offset `dy`
pub(crate) fn center_line(area: Rect, width: u16, dy: u16) -> Rect {
    let [line] = Layout::horizontal([width.min(area.width)])
        .flex(Flex::Center)
        .areas(area);
    Rect {
        y: area.y.saturating_add(dy),
        height: u16::from(dy < area.height),
        ..line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 82, 30), Rect::new(0, 0, 82, 30))]
    #[case(Rect::new(0, 0, 100, 40), Rect::new(9, 5, 82, 30))]
    fn test_get_display_area(#[case] area: Rect, #[case] display: Rect) {
        assert_eq!(get_display_area(area), display);
    }

    #[rstest]
    #[case(Rect::new(0, 0, 82, 30), 10, 14, Rect::new(36, 14, 10, 1))]
    #[case(Rect::new(5, 2, 20, 4), 30, 1, Rect::new(5, 3, 20, 1))]
    #[case(Rect::new(5, 2, 20, 4), 4, 4, Rect::new(13, 6, 4, 0))]
    fn test_center_line(
        #[case] area: Rect,
        #[case] width: u16,
        #[case] dy: u16,
        #[case] line: Rect,
    ) {
        assert_eq!(center_line(area, width, dy), line);
    }
}
