// DigitAtlas
// copyright zipxing@hotmail.com 2022～2025

//! DigitAtlas rasterizes the ten decimal digits (0-9) of a TrueType/OpenType font
//! into a single horizontal texture atlas and writes it to disk as a PNG.
//!
//! The atlas is a single row. Every digit gets a slot of `base_width / 10` pixels,
//! padded by `spacing` pixels on both sides, so the final texture is
//! `base_width + spacing * 20` pixels wide:
//!
//! ```text
//! |sp| 0 |sp|sp| 1 |sp|sp| 2 |sp| ... |sp| 9 |sp|
//! ```
//!
//! Generation is one synchronous call:
//! font loading -> slot layout -> offscreen rasterization -> PNG encoding -> asset refresh.
//!
//! ```no_run
//! use digit_atlas::{asset::FileAssetStore, config::GeneratorSettings, FontTextureGenerator};
//!
//! let mut settings = GeneratorSettings::default();
//! settings.font_path = "assets/fonts/Digits.ttf".into();
//! settings.character_spacing = 4;
//! let mut generator = FontTextureGenerator::new(settings);
//! let mut store = FileAssetStore::new();
//! let atlas = generator.generate_number_texture(&mut store).unwrap();
//! println!("{}x{}", atlas.image.width(), atlas.image.height());
//! ```

/// number of glyphs in the atlas, the decimal digits
pub const NUM_CHARACTERS: u32 = 10;

/// every glyph is padded by spacing on the left and on the right
pub const SPACING_SIDES: u32 = 2;

pub mod asset;
pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod generator;
pub mod inspector;
pub mod layout;
pub mod log;
pub mod render;
pub mod util;

pub use color::Color;
pub use error::AtlasError;
pub use generator::{FontTextureGenerator, GeneratedAtlas};
pub use layout::{AtlasConfig, GlyphSlot};
