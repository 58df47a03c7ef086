use ratatui::{
    buffer::{Buffer, Cell},
    style::{Color, Style},
};
use unicode_width::UnicodeWidthChar;

/// A grid of styled cells that frames are drawn onto.
///
/// Coordinates are signed: a box larger than the terminal produces negative
/// or out-of-range positions, and implementations must skip those cells
/// rather than fail.
pub trait Surface {
    /// Visible size as `(width, height)` in cells.
    fn dimensions(&self) -> (u16, u16);

    /// Paint every cell of `row` blank with background `color`.
    fn fill_row(&mut self, row: i32, color: Color);

    /// Write `text` starting at `(col, row)`, patching each cell with `style`.
    fn write_at(&mut self, col: i32, row: i32, text: &str, style: Style);
}

/// Look up a cell by area-relative coordinates, `None` when clipped.
fn cell_at(buf: &mut Buffer, col: i32, row: i32) -> Option<&mut Cell> {
    let x = u16::try_from(i32::from(buf.area.x) + col).ok()?;
    let y = u16::try_from(i32::from(buf.area.y) + row).ok()?;
    buf.cell_mut((x, y))
}

impl Surface for Buffer {
    fn dimensions(&self) -> (u16, u16) {
        (self.area.width, self.area.height)
    }

    fn fill_row(&mut self, row: i32, color: Color) {
        for col in 0..i32::from(self.area.width) {
            if let Some(cell) = cell_at(self, col, row) {
                cell.reset();
                cell.set_bg(color);
            }
        }
    }

    fn write_at(&mut self, col: i32, row: i32, text: &str, style: Style) {
        let mut col = col;
        // Column of the last base glyph, for combining marks.
        let mut last: Option<i32> = None;
        for ch in text.chars() {
            let width = match ch.width() {
                None => continue,
                Some(0) => {
                    if let Some(prev) = last {
                        if let Some(cell) = cell_at(self, prev, row) {
                            let mut symbol = cell.symbol().to_owned();
                            symbol.push(ch);
                            cell.set_symbol(&symbol);
                        }
                    }
                    continue;
                }
                Some(w) => w as i32,
            };
            last = Some(col);
            if let Some(cell) = cell_at(self, col, row) {
                cell.set_char(ch).set_style(style);
            }
            // Trailing half of a wide glyph.
            for pad in 1..width {
                if let Some(cell) = cell_at(self, col + pad, row) {
                    cell.set_char(' ').set_style(style);
                }
            }
            col += width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn dimensions_match_area() {
        let buf = Buffer::empty(Rect::new(0, 0, 12, 5));
        assert_eq!(buf.dimensions(), (12, 5));
    }

    #[test]
    fn write_at_places_text_and_style() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
        let style = Style::default().fg(Color::Rgb(255, 78, 0));
        buf.write_at(2, 1, "abc", style);
        assert_eq!(row_text(&buf, 1), "  abc     ");
        assert_eq!(buf[(2, 1)].fg, Color::Rgb(255, 78, 0));
    }

    #[test]
    fn write_at_keeps_existing_background() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        buf.fill_row(0, Color::Rgb(0, 0, 0));
        buf.write_at(0, 0, "x", Style::default().fg(Color::White));
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(0, 0, 0));
        assert_eq!(buf[(0, 0)].fg, Color::White);
    }

    #[test]
    fn write_at_clips_negative_columns() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        buf.write_at(-2, 0, "abcdef", Style::default());
        assert_eq!(row_text(&buf, 0), "cdef");
    }

    #[test]
    fn write_at_clips_past_right_edge() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        buf.write_at(2, 0, "abcdef", Style::default());
        assert_eq!(row_text(&buf, 0), "  ab");
    }

    #[test]
    fn combining_marks_join_the_previous_cell() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        buf.write_at(0, 0, "e\u{301}x", Style::default());
        assert_eq!(buf[(0, 0)].symbol(), "e\u{301}");
        assert_eq!(buf[(1, 0)].symbol(), "x");
        assert_eq!(buf[(2, 0)].symbol(), " ");
    }

    #[test]
    fn leading_combining_mark_is_dropped() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 2, 1));
        buf.write_at(0, 0, "\u{301}a", Style::default());
        assert_eq!(row_text(&buf, 0), "a ");
    }

    #[test]
    fn out_of_range_rows_are_noops() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        buf.write_at(0, -1, "abcd", Style::default());
        buf.write_at(0, 2, "abcd", Style::default());
        buf.fill_row(-1, Color::Red);
        buf.fill_row(5, Color::Red);
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 4, 2)));
    }

    #[test]
    fn fill_row_sets_background_across_width() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 2));
        buf.fill_row(1, Color::Rgb(204, 62, 0));
        for x in 0..3 {
            assert_eq!(buf[(x, 1)].bg, Color::Rgb(204, 62, 0));
            assert_eq!(buf[(x, 0)].bg, Color::Reset);
        }
    }

    #[test]
    fn offset_area_uses_relative_coordinates() {
        let mut buf = Buffer::empty(Rect::new(5, 3, 4, 2));
        buf.write_at(0, 0, "hi", Style::default());
        assert_eq!(buf[(5, 3)].symbol(), "h");
        assert_eq!(buf[(6, 3)].symbol(), "i");
    }
}
