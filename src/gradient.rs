//! Diagonal two-color gradient fill.

use image::{Rgb, RgbImage};

/// Endpoint colors of the background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color at the top-left corner
    pub start: Rgb<u8>,
    /// Color approached toward the bottom-right corner
    pub end: Rgb<u8>,
}

impl Palette {
    /// Indigo (#6366f1) to violet (#8b5cf6)
    pub const INDIGO_VIOLET: Palette = Palette {
        start: Rgb([99, 102, 241]),
        end: Rgb([139, 92, 246]),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Palette::INDIGO_VIOLET
    }
}

/// Color of the pixel at `(x, y)` on a `size × size` canvas.
///
/// The interpolation fraction is `(x + y) / (2 * size)`, so the bottom-right
/// pixel stops one step short of `end`.
pub fn gradient_color(palette: &Palette, x: u32, y: u32, size: u32) -> Rgb<u8> {
    let p = (x + y) as f64 / (size as f64 * 2.0);

    let mut color = palette.start;
    for (channel, (&start, &end)) in color
        .0
        .iter_mut()
        .zip(palette.start.0.iter().zip(palette.end.0.iter()))
    {
        // `as u8` truncates toward zero
        *channel = (start as f64 + (end as f64 - start as f64) * p) as u8;
    }
    color
}

/// Overwrite every pixel of a square canvas with the diagonal gradient.
pub fn fill_diagonal(canvas: &mut RgbImage, palette: &Palette) {
    let size = canvas.width();
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        *pixel = gradient_color(palette, x, y, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_left_is_start_color() {
        let palette = Palette::default();
        assert_eq!(gradient_color(&palette, 0, 0, 192), palette.start);
    }

    #[test]
    fn bottom_right_stops_short_of_end_color() {
        let palette = Palette::default();
        // p = 382 / 384
        assert_eq!(gradient_color(&palette, 191, 191, 192), Rgb([138, 92, 245]));
        assert_ne!(gradient_color(&palette, 191, 191, 192), palette.end);
    }

    #[test]
    fn fill_stays_within_endpoints_and_is_monotonic() {
        let palette = Palette::default();
        let size = 64;
        let mut canvas = RgbImage::from_pixel(size, size, palette.start);
        fill_diagonal(&mut canvas, &palette);

        for (x, y, pixel) in canvas.enumerate_pixels() {
            for c in 0..3 {
                let lo = palette.start[c].min(palette.end[c]);
                let hi = palette.start[c].max(palette.end[c]);
                assert!(
                    (lo..=hi).contains(&pixel[c]),
                    "channel {} of ({}, {}) out of range: {}",
                    c,
                    x,
                    y,
                    pixel[c]
                );
            }
        }

        // Walk the main diagonal; red and blue rise, green falls
        for i in 1..size {
            let prev = canvas.get_pixel(i - 1, i - 1);
            let cur = canvas.get_pixel(i, i);
            assert!(cur[0] >= prev[0]);
            assert!(cur[1] <= prev[1]);
            assert!(cur[2] >= prev[2]);
        }
    }

    #[test]
    fn single_pixel_canvas_is_start_color() {
        let palette = Palette::default();
        let mut canvas = RgbImage::new(1, 1);
        fill_diagonal(&mut canvas, &palette);
        assert_eq!(*canvas.get_pixel(0, 0), palette.start);
    }
}
