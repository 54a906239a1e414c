use crate::{font::FontFace, gradient::Palette};
use anyhow::{Context, Result};
use image::{ImageOutputFormat, Rgb, RgbImage};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Sizes of the manifest icons, in pixels
pub const ICON_SIZES: [u32; 2] = [192, 512];

/// Letter drawn on every icon
pub const LETTER: &str = "T";

/// Font requested when none is given on the command line
pub const DEFAULT_FONT: &str = "arial.ttf";

const FONT_SCALE: f32 = 0.6;
const VERTICAL_BIAS: f32 = 0.05;
const SHADOW_SCALE: f32 = 0.02;

// Black at 50/255 alpha, but the canvas is RGB: only glyph coverage blends,
// so the shadow comes out opaque near-black
const SHADOW_INK: Rgb<u8> = Rgb([0, 0, 0]);
const LETTER_INK: Rgb<u8> = Rgb([255, 255, 255]);

#[derive(Debug)]
pub struct Args {
    pub output: PathBuf,
    pub font: String,
}

pub fn generate_icons(args: Args) -> Result<()> {
    // Ensure the output directory exists
    create_dir_all(&args.output).context("Can't create output directory")?;

    println!("Generating manifest icons...");
    for size in ICON_SIZES {
        let output_path = args.output.join(icon_file_name(size));
        render_icon_with_font(size, &output_path, &args.font)?;
    }

    Ok(())
}

/// `icon-<size>.png`
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}.png")
}

/// Render a `size × size` icon with the default font and write it as PNG.
pub fn render_icon(size: u32, output_path: &Path) -> Result<()> {
    render_icon_with_font(size, output_path, DEFAULT_FONT)
}

pub fn render_icon_with_font(size: u32, output_path: &Path, font: &str) -> Result<()> {
    anyhow::ensure!(size > 0, "Icon size must be positive");

    let canvas = render_canvas(size, font);
    save_png(&canvas, output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("✓ Generated {}", output_path.display());
    Ok(())
}

/// Compose the icon in memory: gradient background, shadow, then the letter.
pub fn render_canvas(size: u32, font: &str) -> RgbImage {
    let palette = Palette::default();

    let mut canvas = RgbImage::from_pixel(size, size, palette.start);
    crate::gradient::fill_diagonal(&mut canvas, &palette);

    let face = FontFace::resolve(font, font_size(size));
    let (x, y) = letter_origin(&face, size);

    let offset = shadow_offset(size) as f32;
    face.draw_text(&mut canvas, x + offset, y + offset, LETTER, SHADOW_INK);
    face.draw_text(&mut canvas, x, y, LETTER, LETTER_INK);

    canvas
}

/// Requested em size of the letter for an icon of `size` pixels
pub fn font_size(size: u32) -> u32 {
    (size as f32 * FONT_SCALE) as u32
}

/// Distance of the drop shadow from the letter, along both axes
pub fn shadow_offset(size: u32) -> u32 {
    (size as f32 * SHADOW_SCALE).round() as u32
}

/// Where to draw the letter so that its inked box is centered horizontally and
/// sits slightly above the vertical center.
pub fn letter_origin(face: &FontFace, size: u32) -> (f32, f32) {
    let bbox = face.text_box(LETTER);
    let size = size as f32;

    let x = (size - bbox.width() as f32) / 2.0 - bbox.left as f32;
    let y = (size - bbox.height() as f32) / 2.0 - bbox.top as f32 - size * VERTICAL_BIAS;
    (x, y)
}

fn save_png(canvas: &RgbImage, path: &Path) -> Result<()> {
    let file = File::create(path).context("Failed to create PNG file")?;
    let mut writer = BufWriter::new(file);
    canvas
        .write_to(&mut writer, ImageOutputFormat::Png)
        .context("Failed to write PNG")?;
    writer.flush().context("Failed to write PNG")?;
    Ok(())
}
