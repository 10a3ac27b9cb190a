//! Font loading and text rasterization for the base icon.
//!
//! A bold TrueType font is preferred; when none of the candidate files can be
//! loaded, rendering falls back to a built-in 5×7 bitmap font. The fallback
//! triggers on any load failure, not just a missing file, so a corrupt font
//! file degrades the same way an absent one does.

use image::{Rgb, RgbImage};
use rusttype::{point, Font, Scale};
use std::fs;

/// Point size used when rendering with a TrueType font.
const FONT_SIZE: f32 = 700.0;

/// Candidate bold fonts, tried in order. The DejaVu path is the primary one;
/// the rest cover other common install locations.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Integer upscale factor applied to the 5×7 bitmap glyphs.
const BITMAP_SCALE: u32 = 64;

/// Glyph columns in the bitmap font.
const BITMAP_WIDTH: u32 = 5;

/// Glyph rows in the bitmap font.
const BITMAP_HEIGHT: u32 = 7;

/// Bounding box of laid-out text, relative to the layout origin passed to
/// [`IconFont::draw`].
#[derive(Debug, Clone, Copy)]
pub struct TextBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub width: u32,
    pub height: u32,
}

/// A font usable for the icon overlay: either a loaded TrueType face or the
/// built-in bitmap font.
pub enum IconFont {
    Truetype(Font<'static>),
    Bitmap,
}

impl IconFont {
    /// Try each candidate font file; fall back to the bitmap font when none
    /// loads. The bitmap font is pure data and cannot fail.
    pub fn load() -> Self {
        for path in FONT_CANDIDATES {
            if let Ok(data) = fs::read(path) {
                if let Some(font) = Font::try_from_vec(data) {
                    return IconFont::Truetype(font);
                }
            }
        }
        IconFont::Bitmap
    }

    /// Measure the glyph bounding box of `text`, relative to the layout
    /// origin used by [`IconFont::draw`].
    pub fn measure(&self, text: &str) -> TextBounds {
        match self {
            IconFont::Truetype(font) => truetype_bounds(font, text),
            IconFont::Bitmap => bitmap_bounds(text),
        }
    }

    /// Render `text` onto `img` with its layout origin at `(x, y)`.
    pub fn draw(&self, img: &mut RgbImage, text: &str, x: i32, y: i32, color: Rgb<u8>) {
        match self {
            IconFont::Truetype(font) => draw_truetype(img, font, text, x, y, color),
            IconFont::Bitmap => draw_bitmap(img, text, x, y, color),
        }
    }
}

fn truetype_bounds(font: &Font, text: &str) -> TextBounds {
    let scale = Scale::uniform(FONT_SIZE);
    let ascent = font.v_metrics(scale).ascent;

    let mut min_x = i32::MAX;
    let mut min_y = i32::MAX;
    let mut max_x = i32::MIN;
    let mut max_y = i32::MIN;

    for bb in font
        .layout(text, scale, point(0.0, ascent))
        .filter_map(|g| g.pixel_bounding_box())
    {
        min_x = min_x.min(bb.min.x);
        min_y = min_y.min(bb.min.y);
        max_x = max_x.max(bb.max.x);
        max_y = max_y.max(bb.max.y);
    }

    if min_x > max_x {
        // Nothing produced a visible glyph (e.g. all-whitespace text).
        return TextBounds {
            min_x: 0,
            min_y: 0,
            width: 0,
            height: 0,
        };
    }

    TextBounds {
        min_x,
        min_y,
        width: (max_x - min_x) as u32,
        height: (max_y - min_y) as u32,
    }
}

fn draw_truetype(img: &mut RgbImage, font: &Font, text: &str, x: i32, y: i32, color: Rgb<u8>) {
    let scale = Scale::uniform(FONT_SIZE);
    let ascent = font.v_metrics(scale).ascent;

    for glyph in font.layout(text, scale, point(x as f32, y as f32 + ascent)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                blend_pixel(img, px, py, color, coverage);
            });
        }
    }
}

/// Alpha blend `color` over the existing pixel with the given coverage.
fn blend_pixel(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
        return;
    }
    let pixel = img.get_pixel_mut(x as u32, y as u32);
    for c in 0..3 {
        let bg = pixel[c] as f32;
        pixel[c] = (bg + (color[c] as f32 - bg) * coverage) as u8;
    }
}

fn bitmap_bounds(text: &str) -> TextBounds {
    let chars = text.chars().count() as u32;
    let width = if chars == 0 {
        0
    } else {
        // Glyph columns plus one column of spacing between glyphs.
        (chars * (BITMAP_WIDTH + 1) - 1) * BITMAP_SCALE
    };

    TextBounds {
        min_x: 0,
        min_y: 0,
        width,
        height: BITMAP_HEIGHT * BITMAP_SCALE,
    }
}

fn draw_bitmap(img: &mut RgbImage, text: &str, x: i32, y: i32, color: Rgb<u8>) {
    let advance = ((BITMAP_WIDTH + 1) * BITMAP_SCALE) as i32;

    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = bitmap_glyph(ch) else {
            // Unknown characters advance the pen without drawing.
            continue;
        };
        let glyph_x = x + i as i32 * advance;

        for (row, bits) in rows.iter().enumerate() {
            for col in 0..BITMAP_WIDTH {
                if bits & (0b10000 >> col) == 0 {
                    continue;
                }
                fill_cell(
                    img,
                    glyph_x + (col * BITMAP_SCALE) as i32,
                    y + (row as u32 * BITMAP_SCALE) as i32,
                    color,
                );
            }
        }
    }
}

/// Fill one scaled-up bitmap cell with a solid color, clipped to the image.
fn fill_cell(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    for dy in 0..BITMAP_SCALE as i32 {
        for dx in 0..BITMAP_SCALE as i32 {
            blend_pixel(img, x + dx, y + dy, color, 1.0);
        }
    }
}

/// 5×7 glyph rows for the built-in font; bit 4 is the leftmost column.
fn bitmap_glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch.to_ascii_uppercase() {
        ' ' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        _ => return None,
    };
    Some(rows)
}
