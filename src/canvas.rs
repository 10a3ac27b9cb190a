//! Draws the full-resolution base icon: a vertical blue-to-green gradient
//! with centered "TP" text.

use image::{Rgb, RgbImage};

use crate::font::IconFont;

/// Edge length of the square base icon in pixels.
pub const ICON_SIZE: u32 = 1024;

/// Gradient color at row 0 (#4084f0).
pub const GRADIENT_START: Rgb<u8> = Rgb([64, 132, 240]);

/// Gradient color approached at the last row (#40e8a0).
pub const GRADIENT_END: Rgb<u8> = Rgb([64, 232, 160]);

const OVERLAY_TEXT: &str = "TP";
const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Build the in-memory base icon. Nothing is written to disk here.
pub fn build_base_icon() -> RgbImage {
    let mut img = RgbImage::new(ICON_SIZE, ICON_SIZE);

    // Each row is a single interpolated color; the gradient runs top to bottom.
    for y in 0..ICON_SIZE {
        let color = gradient_row_color(y);
        for x in 0..ICON_SIZE {
            img.put_pixel(x, y, color);
        }
    }

    let font = IconFont::load();
    draw_centered_text(&mut img, &font, OVERLAY_TEXT);

    img
}

/// Linear interpolation between the gradient endpoints as a function of
/// `y / ICON_SIZE`, truncated per channel.
pub fn gradient_row_color(y: u32) -> Rgb<u8> {
    let t = y as f32 / ICON_SIZE as f32;
    let channel = |start: u8, end: u8| (start as f32 + (end as f32 - start as f32) * t) as u8;

    Rgb([
        channel(GRADIENT_START[0], GRADIENT_END[0]),
        channel(GRADIENT_START[1], GRADIENT_END[1]),
        channel(GRADIENT_START[2], GRADIENT_END[2]),
    ])
}

/// Center the glyph bounding box on the canvas in both axes. The draw origin
/// compensates for the box's own offset from the layout origin, not just its
/// width and height.
fn draw_centered_text(img: &mut RgbImage, font: &IconFont, text: &str) {
    let bounds = font.measure(text);

    let x = (ICON_SIZE as i32 - bounds.width as i32) / 2 - bounds.min_x;
    let y = (ICON_SIZE as i32 - bounds.height as i32) / 2 - bounds.min_y;

    font.draw(img, text, x, y, TEXT_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_starts_at_start_color() {
        assert_eq!(gradient_row_color(0), GRADIENT_START);
    }

    #[test]
    fn gradient_approaches_end_color() {
        let last = gradient_row_color(ICON_SIZE - 1);
        assert_eq!(last[0], 64);
        assert!(last[1] >= 230, "green should approach 232, got {}", last[1]);
        assert!(last[2] <= 161, "blue should approach 160, got {}", last[2]);
    }

    #[test]
    fn gradient_green_is_monotonic() {
        let mut prev = gradient_row_color(0)[1];
        for y in 1..ICON_SIZE {
            let g = gradient_row_color(y)[1];
            assert!(g >= prev, "green decreased at row {y}");
            prev = g;
        }
    }
}
