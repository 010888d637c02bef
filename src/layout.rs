// DigitAtlas
// copyright zipxing@hotmail.com 2022～2025

//! Slot layout of the digit atlas.
//!
//! All slots lie on one row and share the same width. Each slot carries
//! `spacing` pixels of padding on its left and right side:
//!
//! ```text
//! x(i)        = i * (slot_width + 2 * spacing) + spacing
//! slot_width  = base_width / 10
//! final_width = base_width + spacing * 10 * 2
//! ```

use crate::{error::AtlasError, NUM_CHARACTERS, SPACING_SIDES};

/// Atlas geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasConfig {
    pub base_width: u32,
    pub height: u32,
    pub spacing: u32,
    pub glyph_count: u32,
}

/// Horizontal region reserved for one digit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphSlot {
    pub index: u32,
    pub x: f32,
    pub width: f32,
}

impl GlyphSlot {
    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// The digit rendered in this slot
    pub fn ch(&self) -> char {
        char::from_digit(self.index, 10).unwrap_or('0')
    }
}

impl AtlasConfig {
    pub fn new(base_width: u32, height: u32, spacing: u32) -> Self {
        Self {
            base_width,
            height,
            spacing,
            glyph_count: NUM_CHARACTERS,
        }
    }

    /// Zero sizes are rejected rather than clamped, and every slot must be
    /// at least one pixel wide.
    pub fn validate(&self) -> Result<(), AtlasError> {
        if self.glyph_count != NUM_CHARACTERS {
            return Err(AtlasError::InvalidConfig(format!(
                "glyph count must be {}, got {}",
                NUM_CHARACTERS, self.glyph_count
            )));
        }
        if self.base_width == 0 {
            return Err(AtlasError::InvalidConfig(
                "base texture width must be greater than 0".to_string(),
            ));
        }
        if self.height == 0 {
            return Err(AtlasError::InvalidConfig(
                "texture height must be greater than 0".to_string(),
            ));
        }
        if self.base_width < self.glyph_count {
            return Err(AtlasError::InvalidConfig(format!(
                "base texture width {} is too small for {} glyphs",
                self.base_width, self.glyph_count
            )));
        }
        self.checked_final_width().map(|_| ())
    }

    fn checked_final_width(&self) -> Result<u32, AtlasError> {
        self.spacing
            .checked_mul(self.glyph_count * SPACING_SIDES)
            .and_then(|pad| self.base_width.checked_add(pad))
            .ok_or_else(|| {
                AtlasError::InvalidConfig(format!(
                    "spacing {} overflows the texture width",
                    self.spacing
                ))
            })
    }

    /// base_width + spacing * glyph_count * 2, saturating when validate() would fail
    pub fn final_width(&self) -> u32 {
        self.checked_final_width().unwrap_or(u32::MAX)
    }

    pub fn slot_width(&self) -> f32 {
        self.base_width as f32 / self.glyph_count as f32
    }

    pub fn slot(&self, index: u32) -> Option<GlyphSlot> {
        if index >= self.glyph_count {
            return None;
        }
        let width = self.slot_width();
        let stride = width + self.spacing as f32 * SPACING_SIDES as f32;
        Some(GlyphSlot {
            index,
            x: index as f32 * stride + self.spacing as f32,
            width,
        })
    }

    /// All slots in index order
    pub fn slots(&self) -> Vec<GlyphSlot> {
        (0..self.glyph_count).filter_map(|i| self.slot(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let cfg = AtlasConfig::new(1280, 256, 0);
        assert_eq!(cfg.final_width(), 1280);
        assert_eq!(cfg.slot_width(), 128.0);

        let slots = cfg.slots();
        assert_eq!(slots.len(), 10);
        assert!((slots[0].center() - 64.0).abs() < 0.0001);
        assert!((slots[9].center() - 1216.0).abs() < 0.0001);
        assert!((slots[9].right() - 1280.0).abs() < 0.0001);
    }

    #[test]
    fn test_final_width_with_spacing() {
        for s in [0u32, 1, 3, 16, 50] {
            let cfg = AtlasConfig::new(1000, 100, s);
            assert_eq!(cfg.final_width(), 1000 + 20 * s);
        }
    }

    #[test]
    fn test_slot_centers() {
        let (w, s) = (1280u32, 6u32);
        let cfg = AtlasConfig::new(w, 64, s);
        for slot in cfg.slots() {
            let i = slot.index as f32;
            let expected = i * (w as f32 / 10.0 + 2.0 * s as f32) + s as f32 + w as f32 / 20.0;
            assert!((slot.center() - expected).abs() < 0.001);
        }
    }

    #[test]
    fn test_slots_cover_atlas() {
        let cfg = AtlasConfig::new(640, 64, 5);
        let slots = cfg.slots();

        // left padding of the first slot, right padding of the last one
        assert!((slots[0].x - 5.0).abs() < 0.0001);
        assert!((cfg.final_width() as f32 - slots[9].right() - 5.0).abs() < 0.0001);

        for pair in slots.windows(2) {
            assert!(pair[0].center() < pair[1].center());
            assert!(pair[0].right() <= pair[1].x);
            // two paddings between neighbours
            assert!((pair[1].x - pair[0].right() - 10.0).abs() < 0.0001);
        }
    }

    #[test]
    fn test_slot_chars() {
        let cfg = AtlasConfig::new(100, 10, 0);
        let chars: String = cfg.slots().iter().map(|s| s.ch()).collect();
        assert_eq!(chars, "0123456789");
        assert!(cfg.slot(10).is_none());
    }

    #[test]
    fn test_validate() {
        assert!(AtlasConfig::new(1280, 256, 0).validate().is_ok());
        assert!(matches!(
            AtlasConfig::new(0, 256, 0).validate(),
            Err(AtlasError::InvalidConfig(_))
        ));
        assert!(matches!(
            AtlasConfig::new(1280, 0, 0).validate(),
            Err(AtlasError::InvalidConfig(_))
        ));
        assert!(AtlasConfig::new(9, 10, 0).validate().is_err());
        assert!(AtlasConfig::new(10, 10, 0).validate().is_ok());
        assert!(AtlasConfig::new(1280, 256, u32::MAX / 4).validate().is_err());
    }

    #[test]
    fn test_glyph_count_fixed() {
        for n in [0u32, 9, 11] {
            let mut cfg = AtlasConfig::new(1280, 256, 0);
            cfg.glyph_count = n;
            assert!(matches!(cfg.validate(), Err(AtlasError::InvalidConfig(_))));
        }
    }
}
