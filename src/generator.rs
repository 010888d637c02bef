// DigitAtlas
// copyright zipxing@hotmail.com 2022～2025

//! FontTextureGenerator runs the whole pipeline for one set of settings:
//!
//! 1. load the font (asset bytes first, then font_path)
//! 2. lay out ten slots and rasterize the digits offscreen
//! 3. write `<output_folder_path>/<output_file_name>.png` through an AssetStore
//! 4. refresh the store and keep the texture for preview
//!
//! Any failure is logged and aborts the invocation.

use crate::{
    asset::AssetStore,
    config::GeneratorSettings,
    error::AtlasError,
    font::{load_font, FontSource},
    layout::GlyphSlot,
    render::{render_atlas, FontdueRasterizer},
};
use image::RgbaImage;
use log::{error, info, warn};
use std::path::{Path, PathBuf};

/// Result of the last successful generation
#[derive(Debug, Clone)]
pub struct GeneratedAtlas {
    pub image: RgbaImage,
    pub slots: Vec<GlyphSlot>,
    pub output_path: PathBuf,
}

pub struct FontTextureGenerator {
    settings: GeneratorSettings,
    font_asset: Option<(String, Vec<u8>)>,
    generated: Option<GeneratedAtlas>,
}

impl FontTextureGenerator {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self {
            settings,
            font_asset: None,
            generated: None,
        }
    }

    /// Use in-memory font bytes instead of font_path
    pub fn with_font_asset(mut self, name: &str, data: Vec<u8>) -> Self {
        self.set_font_asset(name, data);
        self
    }

    pub fn set_font_asset(&mut self, name: &str, data: Vec<u8>) {
        self.font_asset = Some((name.to_string(), data));
    }

    pub fn clear_font_asset(&mut self) {
        self.font_asset = None;
    }

    pub fn font_asset_name(&self) -> Option<&str> {
        self.font_asset.as_ref().map(|(n, _)| n.as_str())
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut GeneratorSettings {
        &mut self.settings
    }

    pub fn font_path(&self) -> &Path {
        &self.settings.font_path
    }

    pub fn set_font_path<P: Into<PathBuf>>(&mut self, path: P) {
        self.settings.font_path = path.into();
    }

    pub fn output_folder_path(&self) -> &Path {
        &self.settings.output_folder_path
    }

    pub fn set_output_folder_path<P: Into<PathBuf>>(&mut self, path: P) {
        self.settings.output_folder_path = path.into();
    }

    /// Pick an output folder; folders the store rejects leave the current one unchanged
    pub fn set_output_folder<S: AssetStore + ?Sized>(&mut self, store: &S, folder: &Path) -> bool {
        if !store.is_valid_folder(folder) {
            warn!("Invalid folder {}, please select a valid folder", folder.display());
            return false;
        }
        self.settings.output_folder_path = folder.to_path_buf();
        true
    }

    pub fn generated_texture(&self) -> Option<&GeneratedAtlas> {
        self.generated.as_ref()
    }

    fn font_source(&self) -> FontSource {
        match &self.font_asset {
            Some((name, data)) => FontSource::Asset {
                name: name.clone(),
                data: data.clone(),
            },
            None => FontSource::Path(self.settings.font_path.clone()),
        }
    }

    pub fn generate_number_texture<S: AssetStore + ?Sized>(
        &mut self,
        store: &mut S,
    ) -> Result<&GeneratedAtlas, AtlasError> {
        match self.generate(store) {
            Ok(atlas) => {
                info!(
                    "Number texture generated successfully at: {}",
                    atlas.output_path.display()
                );
                let atlas = self.generated.insert(atlas);
                Ok(&*atlas)
            }
            Err(e) => {
                if e.is_font_error() {
                    error!("Failed to load font from: {}", self.font_source_label());
                }
                error!("Failed to generate number texture: {}", e);
                Err(e)
            }
        }
    }

    fn font_source_label(&self) -> String {
        match &self.font_asset {
            Some((name, _)) => name.clone(),
            None => self.settings.font_path.display().to_string(),
        }
    }

    fn generate<S: AssetStore + ?Sized>(&self, store: &mut S) -> Result<GeneratedAtlas, AtlasError> {
        let s = &self.settings;
        s.validate()?;

        let font = load_font(&self.font_source(), s.collection_index)?;
        let rasterizer = FontdueRasterizer::new(font.font, s.font_size as f32);
        let (image, slots) = render_atlas(
            &s.atlas_config(),
            &rasterizer,
            s.text_color,
            s.background_color,
        )?;

        let output_path = s.full_output_path();
        store.write_png(&output_path, &image)?;
        store.refresh();

        Ok(GeneratedAtlas {
            image,
            slots,
            output_path,
        })
    }
}
