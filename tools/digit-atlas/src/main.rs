// DigitAtlas
// copyright zipxing@hotmail.com 2022～2025

//! digit-atlas: render the digits 0-9 of a font into a single-row PNG atlas
//!
//! Usage:
//! digit-atlas generate --font Digits.ttf
//! digit-atlas generate --config atlas.toml --spacing 4
//! digit-atlas generate --system-font --output-folder out --output-name Numbers
//! digit-atlas inspect --config atlas.toml
//!
//! Flags override values loaded from --config.

use clap::{Args, Parser, Subcommand};
use digit_atlas::{
    asset::FileAssetStore,
    config::GeneratorSettings,
    font::find_system_font,
    inspector::Inspector,
    log::init_log,
    AtlasError, Color, FontTextureGenerator,
};
use log::{info, LevelFilter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "digit-atlas", version, about = "Render the digits of a font into a PNG texture atlas")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the number texture
    Generate(SettingsArgs),
    /// Show the generator settings
    Inspect(SettingsArgs),
}

#[derive(Args, Debug)]
struct SettingsArgs {
    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Font file (.ttf / .otf / .ttc)
    #[arg(short, long)]
    font: Option<PathBuf>,
    /// Fall back to a system font when the font file does not exist
    #[arg(long)]
    system_font: bool,
    /// Face index inside a font collection
    #[arg(long)]
    collection_index: Option<u32>,
    /// Font size in pixels
    #[arg(short = 's', long)]
    font_size: Option<u32>,
    /// Spacing in pixels on both sides of every digit
    #[arg(long)]
    spacing: Option<u32>,
    /// Texture width before spacing is added
    #[arg(short = 'w', long)]
    base_width: Option<u32>,
    /// Texture height
    #[arg(short = 'H', long)]
    height: Option<u32>,
    /// Digit colour, #RRGGBB, #RRGGBBAA or a name
    #[arg(long)]
    text_color: Option<Color>,
    /// Background colour, #RRGGBB, #RRGGBBAA or a name
    #[arg(long)]
    background_color: Option<Color>,
    /// Output folder
    #[arg(short, long)]
    output_folder: Option<PathBuf>,
    /// Output file name without extension
    #[arg(short = 'n', long)]
    output_name: Option<String>,
    /// off, error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
    /// Also write log messages to this file
    #[arg(long)]
    log_file: Option<String>,
}

impl SettingsArgs {
    fn settings(&self) -> Result<GeneratorSettings, AtlasError> {
        let mut s = match &self.config {
            Some(path) => GeneratorSettings::load(path)?,
            None => GeneratorSettings::default(),
        };
        if let Some(v) = &self.font {
            s.font_path = v.clone();
        }
        if let Some(v) = self.collection_index {
            s.collection_index = v;
        }
        if let Some(v) = self.font_size {
            s.font_size = v;
        }
        if let Some(v) = self.spacing {
            s.character_spacing = v;
        }
        if let Some(v) = self.base_width {
            s.base_texture_width = v;
        }
        if let Some(v) = self.height {
            s.texture_height = v;
        }
        if let Some(v) = self.text_color {
            s.text_color = v;
        }
        if let Some(v) = self.background_color {
            s.background_color = v;
        }
        if let Some(v) = &self.output_folder {
            s.output_folder_path = v.clone();
        }
        if let Some(v) = &self.output_name {
            s.output_file_name = v.clone();
        }
        if self.system_font && !s.font_path.is_file() {
            if let Some(found) = find_system_font(None) {
                info!("Using system font {}", found.display());
                s.font_path = found;
            }
        }
        Ok(s)
    }
}

fn generate(args: &SettingsArgs) -> Result<(), AtlasError> {
    let settings = args.settings()?;
    let cfg = settings.atlas_config();

    println!("{}", "=".repeat(70));
    println!("Generating {} digit atlas", settings.full_output_path().display());
    println!("{}", "=".repeat(70));
    println!("  Font: {}", settings.font_path.display());
    println!("  Font size: {}", settings.font_size);
    println!("  Character spacing: {}", settings.character_spacing);
    println!(
        "  Texture: {}x{} (base width {})",
        cfg.final_width(),
        cfg.height,
        cfg.base_width
    );

    let mut generator = FontTextureGenerator::new(settings);
    let mut store = FileAssetStore::new();
    let atlas = generator.generate_number_texture(&mut store)?;

    println!("\nSlots:");
    for slot in &atlas.slots {
        println!(
            "  '{}'  x={:<9.2} width={:<8.2} center={:.2}",
            slot.ch(),
            slot.x,
            slot.width,
            slot.center()
        );
    }
    println!("\n✅ Saved texture to: {}", atlas.output_path.display());
    Ok(())
}

fn inspect(args: &SettingsArgs) -> Result<(), AtlasError> {
    let generator = FontTextureGenerator::new(args.settings()?);
    print!("{}", Inspector::new(&generator).render());
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let args = match &cli.command {
        Commands::Generate(a) | Commands::Inspect(a) => a,
    };

    if let Err(e) = init_log(args.log_level, args.log_file.as_deref()) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }

    let result = match &cli.command {
        Commands::Generate(a) => generate(a),
        Commands::Inspect(a) => inspect(a),
    };
    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}
