// DigitAtlas
// copyright zipxing@hotmail.com 2022～2025

//! Generator settings, loadable from a TOML file.
//!
//! ```toml
//! font_path = "Assets/Fonts/Digits.ttf"
//! font_size = 96
//! text_color = "#FFFFFFFF"
//! background_color = "clear"
//! character_spacing = 4
//! base_texture_width = 1280
//! texture_height = 256
//! output_folder_path = "Assets/Textures"
//! output_file_name = "NumberTexture"
//! ```
//!
//! Missing keys take their default value.

use crate::{
    asset::output_path, color::Color, error::AtlasError, layout::AtlasConfig,
    render::MAX_TEXTURE_SIZE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    // font
    pub font_path: PathBuf,
    pub font_size: u32,
    pub collection_index: u32,
    pub text_color: Color,
    pub background_color: Color,

    // spacing
    pub character_spacing: u32,

    // texture
    pub base_texture_width: u32,
    pub texture_height: u32,

    // output
    pub output_folder_path: PathBuf,
    pub output_file_name: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from("Assets/Fonts/YourFont.ttf"),
            font_size: 128,
            collection_index: 0,
            text_color: Color::WHITE,
            background_color: Color::CLEAR,
            character_spacing: 0,
            base_texture_width: 1280,
            texture_height: 256,
            output_folder_path: PathBuf::from("Assets/Textures"),
            output_file_name: "NumberTexture".to_string(),
        }
    }
}

impl GeneratorSettings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AtlasError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, AtlasError> {
        toml::from_str(content).map_err(|e| AtlasError::Settings(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, AtlasError> {
        toml::to_string(self).map_err(|e| AtlasError::Settings(e.to_string()))
    }

    pub fn atlas_config(&self) -> AtlasConfig {
        AtlasConfig::new(
            self.base_texture_width,
            self.texture_height,
            self.character_spacing,
        )
    }

    /// `<output_folder_path>/<output_file_name>.png`
    pub fn full_output_path(&self) -> PathBuf {
        output_path(&self.output_folder_path, &self.output_file_name)
    }

    pub fn validate(&self) -> Result<(), AtlasError> {
        if self.font_size == 0 {
            return Err(AtlasError::InvalidConfig(
                "font size must be greater than 0".to_string(),
            ));
        }
        // a glyph never fits in a bitmap larger than the biggest texture
        if self.font_size > MAX_TEXTURE_SIZE {
            return Err(AtlasError::InvalidConfig(format!(
                "font size {} exceeds the {} pixel texture limit",
                self.font_size, MAX_TEXTURE_SIZE
            )));
        }
        if self.output_file_name.trim().is_empty() {
            return Err(AtlasError::InvalidConfig(
                "output file name is empty".to_string(),
            ));
        }
        self.atlas_config().validate()
    }
}
