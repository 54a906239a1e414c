//! Font resolution, text measurement and glyph compositing.
//!
//! A [`FontFace`] is either a TrueType font rasterized by `rusttype` or the
//! built-in [`BitmapFont`]. [`FontFace::resolve`] never fails: any problem
//! loading the requested font yields the bitmap face instead.

use crate::bitmap_font::{self, BitmapFont};
use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use rusttype::{point, Font, Scale};
use std::{
    env,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

/// Extensions tried for a font name given without one
const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// Pixel bounds of rendered text. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    fn union(self, other: TextBox) -> TextBox {
        TextBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// A font ready to measure and draw text at a fixed size.
pub enum FontFace {
    Outline { font: Font<'static>, scale: Scale },
    Bitmap(&'static BitmapFont),
}

impl FontFace {
    /// Load `name` at an em size of `px` pixels, or fall back to the
    /// built-in bitmap face.
    pub fn resolve(name: &str, px: u32) -> FontFace {
        load_outline(name, px).unwrap_or(FontFace::Bitmap(&bitmap_font::DEFAULT))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FontFace::Bitmap(_))
    }

    /// Bounding box of `text` drawn with the top of its line at the origin.
    /// Text that inks nothing yields an empty box at the origin.
    pub fn text_box(&self, text: &str) -> TextBox {
        let mut boxes: Box<dyn Iterator<Item = TextBox> + '_> = match self {
            FontFace::Outline { font, scale } => {
                let ascent = font.v_metrics(*scale).ascent;
                Box::new(
                    font.layout(text, *scale, point(0.0, ascent))
                        .filter_map(|glyph| glyph.pixel_bounding_box())
                        .map(|bb| TextBox {
                            left: bb.min.x,
                            top: bb.min.y,
                            right: bb.max.x,
                            bottom: bb.max.y,
                        }),
                )
            }
            FontFace::Bitmap(bitmap) => {
                Box::new(bitmap.pixels(text).map(|(x, y)| TextBox {
                    left: x as i32,
                    top: y as i32,
                    right: x as i32 + 1,
                    bottom: y as i32 + 1,
                }))
            }
        };

        match boxes.next() {
            Some(first) => boxes.fold(first, TextBox::union),
            None => TextBox::default(),
        }
    }

    /// Composite `text` onto `canvas` with the top-left of its line at
    /// `(x, y)`. Glyph coverage blends `ink` over the existing pixels;
    /// anything outside the canvas is clipped.
    pub fn draw_text(&self, canvas: &mut RgbImage, x: f32, y: f32, text: &str, ink: Rgb<u8>) {
        match self {
            FontFace::Outline { font, scale } => {
                let ascent = font.v_metrics(*scale).ascent;
                for glyph in font.layout(text, *scale, point(x, y + ascent)) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        glyph.draw(|gx, gy, v| {
                            let coverage = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
                            blend_pixel(
                                canvas,
                                bb.min.x as i64 + gx as i64,
                                bb.min.y as i64 + gy as i64,
                                ink,
                                coverage,
                            );
                        });
                    }
                }
            }
            FontFace::Bitmap(bitmap) => {
                let (ox, oy) = (x.floor() as i64, y.floor() as i64);
                for (px, py) in bitmap.pixels(text) {
                    blend_pixel(canvas, ox + px as i64, oy + py as i64, ink, u8::MAX);
                }
            }
        }
    }
}

fn load_outline(name: &str, px: u32) -> Result<FontFace> {
    anyhow::ensure!(px > 0, "Font size must be at least one pixel");

    let path = locate_font(name).with_context(|| format!("Font not found: {name}"))?;
    let data =
        fs::read(&path).with_context(|| format!("Failed to read font: {}", path.display()))?;
    let font = Font::try_from_vec(data)
        .with_context(|| format!("Unsupported font file: {}", path.display()))?;

    // rusttype scales by line height (ascent - descent); TrueType sizes are em sizes
    let unscaled = font.v_metrics_unscaled();
    let units_per_em = font.units_per_em().max(1) as f32;
    let height = px as f32 * (unscaled.ascent - unscaled.descent) / units_per_em;

    Ok(FontFace::Outline {
        font,
        scale: Scale::uniform(height),
    })
}

/// Find a font file by path or by file name in the platform font directories.
pub fn locate_font(name: &str) -> Option<PathBuf> {
    let candidates = candidate_names(name);

    for candidate in &candidates {
        let path = Path::new(candidate);
        if path.is_file() {
            return Some(path.to_path_buf());
        }
    }

    // Only bare file names are searched for
    if Path::new(name).components().count() != 1 {
        return None;
    }

    font_dirs()
        .iter()
        .find_map(|dir| candidates.iter().find_map(|c| find_file(dir, OsStr::new(c))))
}

fn candidate_names(name: &str) -> Vec<String> {
    let mut names = vec![name.to_string()];
    if Path::new(name).extension().is_none() {
        names.extend(FONT_EXTENSIONS.iter().map(|ext| format!("{name}.{ext}")));
    }
    names
}

fn font_dirs() -> Vec<PathBuf> {
    let home = env::var_os("HOME").map(PathBuf::from);
    let mut dirs = Vec::new();

    if let Some(windir) = env::var_os("WINDIR") {
        dirs.push(PathBuf::from(windir).join("Fonts"));
    }

    let data_home = env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| home.as_ref().map(|h| h.join(".local/share")));
    dirs.extend(data_home.map(|d| d.join("fonts")));

    let data_dirs = env::var("XDG_DATA_DIRS")
        .ok()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "/usr/local/share:/usr/share".to_string());
    dirs.extend(
        data_dirs
            .split(':')
            .filter(|d| !d.is_empty())
            .map(|d| Path::new(d).join("fonts")),
    );

    if let Some(home) = &home {
        dirs.push(home.join(".fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    dirs.push(PathBuf::from("/Library/Fonts"));
    dirs.push(PathBuf::from("/System/Library/Fonts"));

    dirs
}

/// Depth-first search for a file called `file_name` below `dir`.
fn find_file(dir: &Path, file_name: &OsStr) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    let mut subdirs = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        match entry.file_type() {
            Ok(kind) if kind.is_dir() => subdirs.push(path),
            Ok(_) if path.file_name() == Some(file_name) => return Some(path),
            _ => {}
        }
    }

    subdirs.sort();
    subdirs.iter().find_map(|sub| find_file(sub, file_name))
}

/// Blend `ink` over the pixel at `(x, y)` with the given coverage.
fn blend_pixel(canvas: &mut RgbImage, x: i64, y: i64, ink: Rgb<u8>, coverage: u8) {
    if x < 0 || y < 0 || x >= canvas.width() as i64 || y >= canvas.height() as i64 {
        return;
    }

    let a = coverage as u32;
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    for (dst, &src) in pixel.0.iter_mut().zip(ink.0.iter()) {
        *dst = ((src as u32 * a + *dst as u32 * (255 - a) + 127) / 255) as u8;
    }
}
