use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a `Rect` of the given size centered within `area`, shrunk to fit
/// if necessary
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [r] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [r] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(r);
    r
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}
