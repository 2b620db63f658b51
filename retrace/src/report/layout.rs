//! fixed geometry of the bar chart report, in pixels.

pub const HEADER_HEIGHT: u32 = 160;
pub const ROW_HEIGHT: u32 = 60;
pub const TITLE_FONT_SIZE: f32 = 60.0;
pub const BODY_FONT_SIZE: f32 = 40.0;
pub const TITLE_Y: i32 = 10;
pub const SUMMARY_Y: i32 = 90;
pub const HEADER_TEXT_X: i32 = 20;
pub const LOGO_SIZE: u32 = 160;

/// count text starts this far from the right edge
pub const COUNT_INSET: u32 = 100;
/// labels must end this far from the right edge
pub const LABEL_INSET: u32 = 110;

pub const BADGE_X: i32 = 10;
pub const ICON_PITCH: i32 = 60;
pub const ROUTE_CHIP_PITCH: i32 = 76;
pub const ROUTE_CHIP_WIDTH: u32 = 72;
pub const ROUTE_CHIP_HEIGHT: u32 = 54;
/// centre of the route number inside its chip, relative to the chip origin
pub const ROUTE_CHIP_TEXT_CENTRE: (i32, i32) = (37, 25);

pub const LABEL_X: i32 = 10;
pub const LABEL_X_AFTER_BADGES: i32 = 20;

/// upper bound on width × height of a report canvas, about 256 MB of RGBA
pub const MAX_CANVAS_PIXELS: u64 = 64 * 1024 * 1024;

pub fn canvas_height(requested_rows: usize, entry_count: usize) -> u64 {
    let rows = requested_rows.min(entry_count) as u64;
    (HEADER_HEIGHT as u64).saturating_add((ROW_HEIGHT as u64).saturating_mul(rows))
}

/// top edge of the 0-based row `index`
pub fn row_top(index: usize) -> i32 {
    HEADER_HEIGHT as i32 + ROW_HEIGHT as i32 * index as i32
}

pub fn header_text_x(has_logo: bool) -> i32 {
    if has_logo {
        HEADER_TEXT_X + LOGO_SIZE as i32
    } else {
        HEADER_TEXT_X
    }
}

/// bar length for `count` against the chart maximum. a zero maximum gives
/// zero-width bars.
pub fn bar_width(count: u64, max_count: u64, width: u32) -> u32 {
    if max_count == 0 {
        return 0;
    }
    let scaled = (count as f64 / max_count as f64 * width as f64).round();
    (scaled as u32).min(width)
}

#[cfg(test)]
mod test {
    use super::{bar_width, canvas_height, header_text_x, row_top};

    #[test]
    fn test_canvas_height() {
        assert_eq!(canvas_height(14, 2), 280);
        assert_eq!(canvas_height(14, 30), 160 + 14 * 60);
        assert_eq!(canvas_height(14, 0), 160);
        assert_eq!(canvas_height(usize::MAX, usize::MAX), u64::MAX);
    }

    #[test]
    fn test_rows_and_header() {
        assert_eq!(row_top(0), 160);
        assert_eq!(row_top(2), 280);
        assert_eq!(header_text_x(false), 20);
        assert_eq!(header_text_x(true), 180);
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(9, 9, 1000), 1000);
        assert_eq!(bar_width(3, 9, 900), 300);
        assert_eq!(bar_width(0, 9, 900), 0);
        assert_eq!(bar_width(5, 0, 900), 0);
    }
}
