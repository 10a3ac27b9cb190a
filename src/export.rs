//! Resizes the base icon into the Android launcher densities and writes the
//! mipmap directory tree.

use anyhow::{Context, Result};
use image::{imageops::FilterType, DynamicImage};
use std::fs::{create_dir_all, File};
use std::path::Path;

/// Android density buckets and their launcher icon edge lengths in pixels.
pub const DENSITIES: [(&str, u32); 5] = [
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

/// Write `ic_launcher.png` and `ic_launcher_round.png` for every density
/// under `res_dir`, creating `mipmap-{density}` directories as needed.
/// Existing files are overwritten. The two files per density come from the
/// same resize, so their bytes are identical.
pub fn generate_launcher_icons(source: &DynamicImage, res_dir: &Path) -> Result<()> {
    for (density, size) in DENSITIES {
        let mipmap_dir = res_dir.join(format!("mipmap-{density}"));
        create_dir_all(&mipmap_dir)
            .with_context(|| format!("Can't create {}", mipmap_dir.display()))?;

        let resized = source.resize_exact(size, size, FilterType::Lanczos3);

        save_png(&resized, &mipmap_dir.join("ic_launcher.png"))?;
        save_png(&resized, &mipmap_dir.join("ic_launcher_round.png"))?;

        println!("  ✓ Created icons for {density}: {size}x{size}");
    }

    Ok(())
}

pub fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    image
        .write_to(&mut file, image::ImageOutputFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
