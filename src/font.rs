// DigitAtlas
// copyright zipxing@hotmail.com 2022～2025

//! Font loading.
//!
//! A font comes either from an in-memory asset (takes priority) or from a
//! path on disk. The bytes are parsed with fontdue for rasterization and
//! inspected with ttf-parser to report digits the face has no glyph for.

use crate::{error::AtlasError, util::expand_home};
use fontdue::{Font, FontSettings};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use ttf_parser::Face;

/// Fallback font locations, searched in order
const SYSTEM_FONT_PATHS: &[&str] = &[
    // User fonts
    "$HOME/.local/share/fonts/DejaVuSans.ttf",
    "$HOME/Library/Fonts/DejaVuSans.ttf",
    // System fonts (Linux)
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    // System fonts (macOS)
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Monaco.ttf",
    // System fonts (Windows)
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
];

/// Where the font bytes come from
#[derive(Debug, Clone)]
pub enum FontSource {
    Asset { name: String, data: Vec<u8> },
    Path(PathBuf),
}

impl FontSource {
    /// Returns a display name and the raw font bytes
    pub fn resolve(&self) -> Result<(String, Vec<u8>), AtlasError> {
        match self {
            FontSource::Asset { name, data } => Ok((name.clone(), data.clone())),
            FontSource::Path(path) => {
                if !path.is_file() {
                    return Err(AtlasError::FontNotFound(path.clone()));
                }
                let data = std::fs::read(path)?;
                Ok((path.display().to_string(), data))
            }
        }
    }
}

/// A parsed font ready for rasterization
pub struct LoadedFont {
    pub name: String,
    pub font: Font,
    missing: Vec<char>,
}

impl LoadedFont {
    /// Digits the face maps to no glyph, these render as notdef
    pub fn missing_digits(&self) -> &[char] {
        &self.missing
    }
}

pub fn load_font(source: &FontSource, collection_index: u32) -> Result<LoadedFont, AtlasError> {
    let (name, data) = source.resolve()?;
    let missing = missing_digits(&data, collection_index)?;

    let settings = FontSettings {
        collection_index,
        ..FontSettings::default()
    };
    let font = Font::from_bytes(data, settings)
        .map_err(|e| AtlasError::FontParse(format!("{}: {}", name, e)))?;

    info!("Font loaded: {} ({} glyphs)", name, font.glyph_count());
    for ch in &missing {
        warn!("Font {} has no glyph for '{}'", name, ch);
    }

    Ok(LoadedFont {
        name,
        font,
        missing,
    })
}

/// Check the cmap for every digit
fn missing_digits(data: &[u8], collection_index: u32) -> Result<Vec<char>, AtlasError> {
    let face = Face::parse(data, collection_index)
        .map_err(|e| AtlasError::FontParse(e.to_string()))?;
    debug!("Face has {} glyphs", face.number_of_glyphs());

    Ok(('0'..='9')
        .filter(|&ch| face.glyph_index(ch).map_or(true, |g| g.0 == 0))
        .collect())
}

/// Find a usable font, trying custom first and then the system locations
pub fn find_system_font(custom: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = custom {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
    }

    SYSTEM_FONT_PATHS
        .iter()
        .map(|p| PathBuf::from(expand_home(p)))
        .find(|p| p.is_file())
}
