use crate::content::{visible_width, ContentLine};

/// Horizontal padding added to the widest line (border plus one space each side).
pub const HORIZONTAL_PADDING: i32 = 4;

/// Vertical padding added to the line count (top and bottom border).
pub const VERTICAL_PADDING: i32 = 2;

/// Cell rectangle of the content box, centered in the terminal.
///
/// Recomputed every frame from the current lines and terminal size.
/// Coordinates are signed: when the terminal is smaller than the content the
/// box extends past the screen edges and drawing is clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxGeometry {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl BoxGeometry {
    /// Center a box sized for `lines` in a `term_width` × `term_height` terminal.
    ///
    /// An empty line list yields a box made of padding only.
    pub fn compute(lines: &[ContentLine], term_width: u16, term_height: u16) -> Self {
        let widest = lines.iter().map(visible_width).max().unwrap_or(0);
        let content_width = saturating_i32(widest).saturating_add(HORIZONTAL_PADDING);
        let content_height = saturating_i32(lines.len()).saturating_add(VERTICAL_PADDING);

        let top = (i32::from(term_height) - content_height).div_euclid(2);
        let left = (i32::from(term_width) - content_width).div_euclid(2);

        Self {
            top,
            left,
            bottom: top + content_height,
            right: left + content_width,
        }
    }

    pub fn content_width(&self) -> i32 {
        self.right - self.left
    }

    pub fn content_height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Column every line is centered around.
    pub fn center_x(&self) -> i32 {
        self.left + self.content_width().div_euclid(2)
    }

    /// Top-left cell of content line `index` that is `width` cells wide.
    pub fn line_origin(&self, index: usize, width: usize) -> (i32, i32) {
        let col = self.center_x() - saturating_i32(width).div_euclid(2);
        let row = self.top + 1 + saturating_i32(index);
        (col, row)
    }
}

fn saturating_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
