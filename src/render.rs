// DigitAtlas
// copyright zipxing@hotmail.com 2022～2025

//! Offscreen rendering of the digit atlas.
//!
//! ```text
//! ┌──────────────┐   draw_glyph   ┌───────────────────────────────┐
//! │ AtlasConfig  │ ─────────────► │ GlyphRasterizer               │
//! │  slots 0..9  │                │  - FontdueRasterizer          │
//! └──────────────┘                └───────────────┬───────────────┘
//!                                                 │ blend_coverage
//!                                                 ▼
//!                                 ┌───────────────────────────────┐
//!                                 │ AtlasCanvas (RgbaImage)       │
//!                                 │  filled with background color │
//!                                 └───────────────────────────────┘
//! ```

use crate::{
    color::Color,
    error::AtlasError,
    layout::{AtlasConfig, GlyphSlot},
};
use fontdue::Font;
use image::{ImageBuffer, RgbaImage};
use log::{debug, info};

/// Largest texture edge accepted, in pixels
pub const MAX_TEXTURE_SIZE: u32 = 16384;

/// Render target of the atlas
pub struct AtlasCanvas {
    image: RgbaImage,
}

impl AtlasCanvas {
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, AtlasError> {
        if width == 0 || height == 0 {
            return Err(AtlasError::TextureCreation(format!(
                "zero sized texture {}x{}",
                width, height
            )));
        }
        if width > MAX_TEXTURE_SIZE || height > MAX_TEXTURE_SIZE {
            return Err(AtlasError::TextureCreation(format!(
                "texture {}x{} exceeds the {} pixel limit",
                width, height, MAX_TEXTURE_SIZE
            )));
        }
        Ok(Self {
            image: ImageBuffer::from_pixel(width, height, background.to_rgba()),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Source-over composite of color at (x, y), with alpha scaled by coverage.
    /// Pixels outside the canvas are clipped.
    pub fn blend_coverage(&mut self, x: i32, y: i32, coverage: u8, color: Color) {
        if coverage == 0 || x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width() || y >= self.height() {
            return;
        }

        let sa = (coverage as f32 / 255.0) * (color.a as f32 / 255.0);
        if sa <= 0.0 {
            return;
        }
        let dst = self.image.get_pixel_mut(x, y);
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);

        let src = [color.r, color.g, color.b];
        for c in 0..3 {
            let v = (src[c] as f32 * sa + dst[c] as f32 * da * (1.0 - sa)) / out_a;
            dst[c] = v.round().clamp(0.0, 255.0) as u8;
        }
        dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

/// Draws one character into its slot on the canvas
pub trait GlyphRasterizer {
    /// ch is centred horizontally on the slot and vertically on the canvas
    fn draw_glyph(&self, canvas: &mut AtlasCanvas, ch: char, slot: &GlyphSlot, color: Color);
}

/// Glyph rasterizer backed by fontdue
pub struct FontdueRasterizer {
    font: Font,
    font_size: f32,
}

impl FontdueRasterizer {
    pub fn new(font: Font, font_size: f32) -> Self {
        Self { font, font_size }
    }

    /// (ascent, descent) of the font line box; descent is negative
    fn line_box(&self) -> (f32, f32) {
        match self.font.horizontal_line_metrics(self.font_size) {
            Some(m) => (m.ascent, m.descent),
            None => (self.font_size * 0.8, -self.font_size * 0.2),
        }
    }
}

impl GlyphRasterizer for FontdueRasterizer {
    fn draw_glyph(&self, canvas: &mut AtlasCanvas, ch: char, slot: &GlyphSlot, color: Color) {
        let (metrics, bitmap) = self.font.rasterize(ch, self.font_size);
        if bitmap.is_empty() || metrics.width == 0 || metrics.height == 0 {
            return;
        }

        let (ascent, descent) = self.line_box();
        let baseline = (canvas.height() as f32 - (ascent - descent)) / 2.0 + ascent;

        // bitmap origin, y grows downwards
        let left = (slot.center() - metrics.advance_width / 2.0 + metrics.xmin as f32).round() as i32;
        let top = (baseline - (metrics.height as i32 + metrics.ymin) as f32).round() as i32;
        debug!(
            "'{}' {}x{} at ({}, {}) advance {:.1}",
            ch, metrics.width, metrics.height, left, top, metrics.advance_width
        );

        for (gy, row) in bitmap.chunks(metrics.width).enumerate() {
            for (gx, &alpha) in row.iter().enumerate() {
                canvas.blend_coverage(left + gx as i32, top + gy as i32, alpha, color);
            }
        }
    }
}

/// Render all digits. Returns the atlas image and the slots used.
pub fn render_atlas<R: GlyphRasterizer + ?Sized>(
    config: &AtlasConfig,
    rasterizer: &R,
    text_color: Color,
    background: Color,
) -> Result<(RgbaImage, Vec<GlyphSlot>), AtlasError> {
    config.validate()?;

    let width = config.final_width();
    let mut canvas = AtlasCanvas::new(width, config.height, background)?;
    let slots = config.slots();

    for slot in &slots {
        rasterizer.draw_glyph(&mut canvas, slot.ch(), slot, text_color);
    }
    info!("Rendered {} glyphs into {}x{}", slots.len(), width, config.height);

    Ok((canvas.into_image(), slots))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{find_system_font, load_font, FontSource};
    use image::Rgba;

    /// Fills the whole slot rect with full coverage
    struct BoxRasterizer;

    impl GlyphRasterizer for BoxRasterizer {
        fn draw_glyph(&self, canvas: &mut AtlasCanvas, _ch: char, slot: &GlyphSlot, color: Color) {
            let x0 = slot.x.round() as i32;
            let x1 = slot.right().round() as i32;
            for y in 0..canvas.height() as i32 {
                for x in x0..x1 {
                    canvas.blend_coverage(x, y, 255, color);
                }
            }
        }
    }

    #[test]
    fn test_canvas_background() {
        let canvas = AtlasCanvas::new(4, 2, Color::rgb(1, 2, 3)).unwrap();
        assert!(canvas.image().pixels().all(|p| *p == Rgba([1, 2, 3, 255])));
    }

    #[test]
    fn test_canvas_creation_failure() {
        assert!(matches!(
            AtlasCanvas::new(0, 10, Color::CLEAR),
            Err(AtlasError::TextureCreation(_))
        ));
        assert!(matches!(
            AtlasCanvas::new(MAX_TEXTURE_SIZE + 1, 10, Color::CLEAR),
            Err(AtlasError::TextureCreation(_))
        ));
    }

    #[test]
    fn test_blend() {
        let mut canvas = AtlasCanvas::new(3, 1, Color::CLEAR).unwrap();
        canvas.blend_coverage(0, 0, 255, Color::WHITE);
        canvas.blend_coverage(1, 0, 0, Color::WHITE);
        canvas.blend_coverage(2, 0, 128, Color::WHITE);
        // clipped
        canvas.blend_coverage(-1, 0, 255, Color::WHITE);
        canvas.blend_coverage(3, 0, 255, Color::WHITE);

        let img = canvas.image();
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(*img.get_pixel(1, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*img.get_pixel(2, 0), Rgba([255, 255, 255, 128]));
    }

    #[test]
    fn test_blend_over_opaque() {
        let mut canvas = AtlasCanvas::new(1, 1, Color::BLACK).unwrap();
        canvas.blend_coverage(0, 0, 255, Color::rgba(255, 0, 0, 0));
        assert_eq!(*canvas.image().get_pixel(0, 0), Rgba([0, 0, 0, 255]));

        canvas.blend_coverage(0, 0, 255, Color::rgba(200, 100, 50, 255));
        assert_eq!(*canvas.image().get_pixel(0, 0), Rgba([200, 100, 50, 255]));
    }

    #[test]
    fn test_render_atlas_slots() {
        let cfg = AtlasConfig::new(100, 8, 2);
        let (img, slots) = render_atlas(&cfg, &BoxRasterizer, Color::WHITE, Color::CLEAR).unwrap();
        assert_eq!(img.dimensions(), (140, 8));
        assert_eq!(slots.len(), 10);

        for slot in &slots {
            let cx = slot.center() as u32;
            assert_eq!(*img.get_pixel(cx, 4), Rgba([255, 255, 255, 255]));
            // padding on both sides stays background
            assert_eq!(*img.get_pixel(slot.x as u32 - 1, 4), Rgba([0, 0, 0, 0]));
            assert_eq!(*img.get_pixel(slot.right() as u32, 4), Rgba([0, 0, 0, 0]));
        }
    }

    #[test]
    fn test_render_atlas_rejects_config() {
        let cfg = AtlasConfig::new(100, 0, 0);
        assert!(matches!(
            render_atlas(&cfg, &BoxRasterizer, Color::WHITE, Color::CLEAR),
            Err(AtlasError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_fontdue_digits() {
        let Some(path) = find_system_font(None) else {
            return;
        };
        let font = load_font(&FontSource::Path(path), 0).unwrap();
        let rasterizer = FontdueRasterizer::new(font.font, 24.0);
        let cfg = AtlasConfig::new(320, 32, 1);
        let (img, slots) = render_atlas(&cfg, &rasterizer, Color::WHITE, Color::CLEAR).unwrap();
        assert_eq!(img.dimensions(), (340, 32));

        // every slot received ink
        for slot in &slots {
            let x0 = slot.x.floor() as u32;
            let x1 = (slot.right().ceil() as u32).min(img.width());
            let inked = (x0..x1)
                .flat_map(|x| (0..img.height()).map(move |y| (x, y)))
                .any(|(x, y)| img.get_pixel(x, y)[3] > 0);
            assert!(inked, "slot {} is empty", slot.index);
        }

        // top and bottom rows stay clear at this size
        assert!((0..img.width()).all(|x| img.get_pixel(x, 0)[3] == 0));
        assert!((0..img.width()).all(|x| img.get_pixel(x, 31)[3] == 0));
    }
}
