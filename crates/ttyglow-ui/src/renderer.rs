/// Frame compositing for the dashboard.
///
/// Draw order: breathing background over the whole surface, solid box, border,
/// then the centered content lines on top.
use ratatui::{
    style::{Color, Style},
    symbols::border,
};

use ttyglow_core::{assets::Assets, clock, snapshot::Snapshot};

use crate::content::{dashboard_lines, visible_width, ContentLine, ACCENT_RGB, NEUTRAL};
use crate::layout::BoxGeometry;
use crate::surface::Surface;

/// Interior of the content box.
pub const BOX_FILL: Color = Color::Rgb(0, 0, 0);

/// Colour of the rounded border.
pub const BORDER_COLOR: Color = NEUTRAL;

/// Scale an RGB colour by `brightness`, truncating each channel.
pub fn dimmed(rgb: (u8, u8, u8), brightness: f64) -> Color {
    let scale = |channel: u8| (f64::from(channel) * brightness) as u8;
    Color::Rgb(scale(rgb.0), scale(rgb.1), scale(rgb.2))
}

/// Render one complete frame and return the geometry it used.
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    snap: &Snapshot,
    frame: u64,
    assets: &Assets,
) -> BoxGeometry {
    let lines = dashboard_lines(snap, assets);
    let background = dimmed(ACCENT_RGB, clock::brightness(frame));

    let (width, height) = surface.dimensions();
    for row in 0..i32::from(height) {
        surface.fill_row(row, background);
    }

    let geom = BoxGeometry::compute(&lines, width, height);
    paint_box(surface, &geom);
    paint_border(surface, &geom);
    paint_lines(surface, &geom, &lines);
    geom
}

/// Blank out `top..=bottom` × `left..=right`.
fn paint_box<S: Surface + ?Sized>(surface: &mut S, geom: &BoxGeometry) {
    let blank = " ".repeat((geom.right - geom.left + 1).max(0) as usize);
    let style = Style::default().bg(BOX_FILL);
    for row in geom.top..=geom.bottom {
        surface.write_at(geom.left, row, &blank, style);
    }
}

fn paint_border<S: Surface + ?Sized>(surface: &mut S, geom: &BoxGeometry) {
    let style = Style::default().fg(BORDER_COLOR).bg(BOX_FILL);
    let glyphs = border::ROUNDED;

    surface.write_at(geom.left, geom.top, glyphs.top_left, style);
    surface.write_at(geom.right, geom.top, glyphs.top_right, style);
    surface.write_at(geom.left, geom.bottom, glyphs.bottom_left, style);
    surface.write_at(geom.right, geom.bottom, glyphs.bottom_right, style);

    for col in geom.left + 1..geom.right {
        surface.write_at(col, geom.top, glyphs.horizontal_top, style);
        surface.write_at(col, geom.bottom, glyphs.horizontal_bottom, style);
    }
    for row in geom.top + 1..geom.bottom {
        surface.write_at(geom.left, row, glyphs.vertical_left, style);
        surface.write_at(geom.right, row, glyphs.vertical_right, style);
    }
}

fn paint_lines<S: Surface + ?Sized>(surface: &mut S, geom: &BoxGeometry, lines: &[ContentLine]) {
    for (index, line) in lines.iter().enumerate() {
        let (mut col, row) = geom.line_origin(index, visible_width(line));
        for span in &line.spans {
            surface.write_at(col, row, &span.content, span.style);
            col += span.width() as i32;
        }
    }
}
