use anyhow::Result;
use clap::Parser;
use image::DynamicImage;
use std::path::PathBuf;

mod canvas;
mod export;
mod font;

#[derive(Debug, Parser)]
#[clap(
    name = "android-icon-gen",
    about = "Generate Android launcher icons from a procedurally drawn gradient canvas"
)]
struct Args {
    /// Directory that receives source_icon.png and the app/src/main/res tree.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Creating base icon...");
    let base_icon = DynamicImage::ImageRgb8(canvas::build_base_icon());

    std::fs::create_dir_all(&args.output)?;
    export::save_png(&base_icon, &args.output.join("source_icon.png"))?;
    println!("Saved source_icon.png");

    let res_dir = args.output.join("app/src/main/res");
    println!("\nGenerating launcher icons in {}...", res_dir.display());
    export::generate_launcher_icons(&base_icon, &res_dir)?;

    println!("\n✓ All icons generated successfully!");
    Ok(())
}
