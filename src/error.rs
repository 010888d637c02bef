// DigitAtlas
// copyright zipxing@hotmail.com 2022～2025

//! Error type shared by every stage of atlas generation.
//! All failures are terminal for the invocation that raised them.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    #[error("font file not found: {}", .0.display())]
    FontNotFound(PathBuf),

    #[error("failed to load font: {0}")]
    FontParse(String),

    #[error("failed to create texture: {0}")]
    TextureCreation(String),

    #[error("invalid atlas configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid settings file: {0}")]
    Settings(String),

    #[error("failed to init log: {0}")]
    Log(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl AtlasError {
    /// true for the font-not-found failure kind (missing file or unreadable font)
    pub fn is_font_error(&self) -> bool {
        matches!(self, AtlasError::FontNotFound(_) | AtlasError::FontParse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = AtlasError::FontNotFound(PathBuf::from("Assets/Fonts/None.ttf"));
        assert_eq!(e.to_string(), "font file not found: Assets/Fonts/None.ttf");
        assert!(e.is_font_error());

        let e = AtlasError::TextureCreation("0x256".into());
        assert_eq!(e.to_string(), "failed to create texture: 0x256");
        assert!(!e.is_font_error());

        let e = AtlasError::Log("no appender".into());
        assert_eq!(e.to_string(), "failed to init log: no appender");
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e: AtlasError = io.into();
        assert!(matches!(e, AtlasError::Io(_)));
    }
}
