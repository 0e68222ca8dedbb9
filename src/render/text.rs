//! Minimal bitmap text for tick labels
//!
//! Embedded 5×7 glyphs for the characters a numeric label can contain.
//! Each lit glyph cell is filled as a square block on the pixmap.

use tiny_skia::{Paint, Pixmap, Rect, Transform};

use crate::config::{FontSpec, ShapeColor};

const CHAR_WIDTH: usize = 5;
const CHAR_HEIGHT: usize = 7;

/// Pixels per glyph cell for a font size
pub fn cell_scale(font: &FontSpec) -> f32 {
    (font.size_px / CHAR_HEIGHT as f32).round().max(1.0)
}

/// Width of `text` in pixels, including one cell of spacing between glyphs
pub fn text_width(text: &str, font: &FontSpec) -> f32 {
    let chars = text.chars().count();
    if chars == 0 {
        return 0.0;
    }
    let scale = cell_scale(font);
    (chars * CHAR_WIDTH + (chars - 1)) as f32 * scale
}

/// Draw `text` with its top-right corner at (`right`, `top`)
pub fn draw_text_right_top(
    pixmap: &mut Pixmap,
    right: f32,
    top: f32,
    text: &str,
    color: ShapeColor,
    font: &FontSpec,
) {
    let scale = cell_scale(font);
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = false;

    let mut cursor_x = right - text_width(text, font);
    for ch in text.chars() {
        if let Some(glyph) = glyph_for(ch) {
            draw_glyph(pixmap, cursor_x, top, glyph, &paint, scale);
        }
        cursor_x += (CHAR_WIDTH + 1) as f32 * scale;
    }
}

fn draw_glyph(
    pixmap: &mut Pixmap,
    x: f32,
    y: f32,
    glyph: &[u8; CHAR_HEIGHT],
    paint: &Paint,
    scale: f32,
) {
    for (row, &bits) in glyph.iter().enumerate() {
        for col in 0..CHAR_WIDTH {
            if bits & (1 << (CHAR_WIDTH - 1 - col)) == 0 {
                continue;
            }
            let px = x + col as f32 * scale;
            let py = y + row as f32 * scale;
            if let Some(rect) = Rect::from_xywh(px, py, scale, scale) {
                pixmap.fill_rect(rect, paint, Transform::identity(), None);
            }
        }
    }
}

fn glyph_for(ch: char) -> Option<&'static [u8; CHAR_HEIGHT]> {
    let idx = match ch {
        '0'..='9' => ch as usize - '0' as usize,
        '-' => 10,
        '.' => 11,
        'e' => 12,
        '+' => 13,
        _ => return None,
    };
    Some(&GLYPHS[idx])
}

/// Digits, then '-', '.', 'e', '+'. Bits 4-0 are the five columns.
#[rustfmt::skip]
static GLYPHS: [[u8; CHAR_HEIGHT]; 14] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111], // 2
    [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
    [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000], // -
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100], // .
    [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110], // e
    [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000], // +
];
