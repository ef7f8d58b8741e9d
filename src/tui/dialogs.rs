//! Modal overlays drawn on top of the task table.

mod edit;
mod message;
mod priority;

use ratatui::layout::Rect;

pub use edit::EditDialog;
pub use message::MessageDialog;
pub use priority::PriorityDialog;

pub enum DialogResult<T> {
    Continue,
    Cancel,
    Submit(T),
}

pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(area, 40, 6), Rect::new(20, 9, 40, 6));
        assert_eq!(centered_rect(Rect::new(2, 1, 10, 4), 40, 6), Rect::new(2, 1, 10, 4));
    }
}
