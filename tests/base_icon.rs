use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn icon_gen_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_android-icon-gen"))
}

fn generate_source_icon(out: &std::path::Path) -> image::DynamicImage {
    let output = Command::new(icon_gen_binary())
        .arg("-o")
        .arg(out)
        .output()
        .expect("Failed to run android-icon-gen");
    assert!(
        output.status.success(),
        "android-icon-gen failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    image::open(out.join("source_icon.png")).expect("source_icon.png should exist")
}

/// Rows outside the text area hold a single color each; the top row is the
/// gradient start color and the bottom row approaches the end color.
#[test]
fn test_gradient_rows_are_uniform_with_expected_endpoints() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let icon = generate_source_icon(temp_dir.path());
    let rgb = icon.to_rgb8();

    // The overlay text occupies roughly the middle half of the canvas; these
    // rows sit well clear of it.
    for y in [0u32, 64, 128, 900, 1023] {
        let first = rgb.get_pixel(0, y);
        for x in 1..1024 {
            assert_eq!(rgb.get_pixel(x, y), first, "row {y} not uniform at x={x}");
        }
    }

    assert_eq!(rgb.get_pixel(0, 0), &image::Rgb([64, 132, 240]));

    let bottom = rgb.get_pixel(0, 1023);
    assert_eq!(bottom[0], 64);
    assert!(bottom[1] >= 230, "bottom green {} should approach 232", bottom[1]);
    assert!(bottom[2] <= 161, "bottom blue {} should approach 160", bottom[2]);
}

/// The white overlay text is centered: the bounding box of strongly covered
/// pixels has its midpoints within ~2 px of the canvas center.
#[test]
fn test_overlay_text_is_centered() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let icon = generate_source_icon(temp_dir.path());
    let rgb = icon.to_rgb8();

    // The gradient keeps the red channel at 64 everywhere, so red well above
    // that marks text coverage.
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    for (x, y, pixel) in rgb.enumerate_pixels() {
        if pixel[0] >= 160 {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }
    assert!(min_x <= max_x, "no text pixels found");

    let center = (icon.width() - 1) as f32 / 2.0;
    let mid_x = (min_x + max_x) as f32 / 2.0;
    let mid_y = (min_y + max_y) as f32 / 2.0;

    assert!(
        (mid_x - center).abs() <= 2.0,
        "text not horizontally centered: midpoint {mid_x}, center {center}"
    );
    assert!(
        (mid_y - center).abs() <= 2.0,
        "text not vertically centered: midpoint {mid_y}, center {center}"
    );
}
