//! Raster Canvas
//!
//! Thin drawing layer over an RGB pixel buffer: clipped pixel writes,
//! axis-aligned lines and rectangles, filled disc markers, and bitmap text.
//! All coordinates are signed; drawing outside the canvas is silently
//! clipped so callers never have to pre-clamp.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::error::Result;
use crate::plot::font::{self, GLYPH_HEIGHT, GLYPH_SPACING, GLYPH_WIDTH};

/// Fixed-size RGB drawing surface.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with a background color.
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Set one pixel; out-of-bounds coordinates are ignored.
    pub fn put(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height()
        {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Horizontal line from `x0` to `x1` inclusive at row `y`.
    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb<u8>) {
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in lo..=hi {
            self.put(x, y, color);
        }
    }

    /// Vertical line from `y0` to `y1` inclusive at column `x`.
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Rgb<u8>) {
        let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        for y in lo..=hi {
            self.put(x, y, color);
        }
    }

    /// Filled axis-aligned rectangle.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb<u8>) {
        for row in y..y + h.max(0) {
            self.hline(x, x + w - 1, row, color);
        }
    }

    /// One-pixel rectangle outline.
    pub fn rect_outline(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb<u8>) {
        if w <= 0 || h <= 0 {
            return;
        }
        self.hline(x, x + w - 1, y, color);
        self.hline(x, x + w - 1, y + h - 1, color);
        self.vline(x, y, y + h - 1, color);
        self.vline(x + w - 1, y, y + h - 1, color);
    }

    /// Filled disc marker centered at (`cx`, `cy`).
    pub fn disc(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb<u8>) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Draw a string with its top-left corner at (`x`, `y`).
    ///
    /// `scale` multiplies the 5x7 glyph size; each glyph advances the pen by
    /// `(GLYPH_WIDTH + GLYPH_SPACING) * scale` pixels.
    pub fn text(&mut self, x: i32, y: i32, s: &str, scale: i32, color: Rgb<u8>) {
        let advance = (GLYPH_WIDTH + GLYPH_SPACING) as i32 * scale;
        let mut pen_x = x;

        for c in s.chars() {
            let rows = font::glyph(c);
            for (row_idx, &row) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if row & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        // Scale each font pixel into a scale x scale block
                        for sy in 0..scale {
                            for sx in 0..scale {
                                self.put(
                                    pen_x + col as i32 * scale + sx,
                                    y + row_idx as i32 * scale + sy,
                                    color,
                                );
                            }
                        }
                    }
                }
            }
            pen_x += advance;
        }
    }

    /// Rendered width of a string in pixels at the given scale.
    pub fn text_width(s: &str, scale: i32) -> i32 {
        let n = s.chars().count() as i32;
        if n == 0 {
            return 0;
        }
        n * (GLYPH_WIDTH + GLYPH_SPACING) as i32 * scale - GLYPH_SPACING as i32 * scale
    }

    /// Rendered height of a line of text in pixels at the given scale.
    pub fn text_height(scale: i32) -> i32 {
        GLYPH_HEIGHT as i32 * scale
    }

    /// Encode the canvas as PNG at `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.image.save(path)?;
        Ok(())
    }

    /// Consume the canvas, returning the pixel buffer.
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}
