// DigitAtlas
// copyright zipxing@hotmail.com 2022～2025

//! Text inspector for a FontTextureGenerator.
//!
//! Shows the settings grouped by section, warnings for a missing font,
//! the computed final width and output path, and the preview size of the
//! last generated texture.

use crate::generator::FontTextureGenerator;
use std::fmt::Write;

const TITLE: &str = "Font Texture Generator";
const WIDTH: usize = 70;

/// Message severity of a help box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Field(&'static str, String),
    Help(MessageType, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub lines: Vec<Line>,
}

pub struct Inspector<'a> {
    generator: &'a FontTextureGenerator,
}

impl<'a> Inspector<'a> {
    pub fn new(generator: &'a FontTextureGenerator) -> Self {
        Self { generator }
    }

    pub fn sections(&self) -> Vec<Section> {
        vec![
            self.font_settings(),
            self.spacing_settings(),
            self.texture_settings(),
            self.output_settings(),
            self.preview(),
        ]
    }

    fn font_settings(&self) -> Section {
        let g = self.generator;
        let s = g.settings();
        let mut lines = vec![];

        match g.font_asset_name() {
            Some(name) => lines.push(Line::Field("Target Font", name.to_string())),
            None => {
                lines.push(Line::Field("Font Path", s.font_path.display().to_string()));
                if !s.font_path.is_file() {
                    lines.push(Line::Help(
                        MessageType::Warning,
                        "Please add a font file to your project and assign it here.".to_string(),
                    ));
                }
            }
        }
        lines.push(Line::Field("Font Size", s.font_size.to_string()));
        lines.push(Line::Field("Text Color", s.text_color.to_string()));
        lines.push(Line::Field("Background Color", s.background_color.to_string()));

        Section {
            title: "Font Settings",
            lines,
        }
    }

    fn spacing_settings(&self) -> Section {
        let s = self.generator.settings();
        Section {
            title: "Spacing Settings",
            lines: vec![Line::Field(
                "Character Spacing (px)",
                s.character_spacing.to_string(),
            )],
        }
    }

    fn texture_settings(&self) -> Section {
        let s = self.generator.settings();
        let cfg = s.atlas_config();
        let mut lines = vec![
            Line::Field("Width", s.base_texture_width.to_string()),
            Line::Field("Height", s.texture_height.to_string()),
        ];
        match cfg.validate() {
            Ok(()) => lines.push(Line::Field("Final Width", cfg.final_width().to_string())),
            Err(e) => lines.push(Line::Help(MessageType::Warning, e.to_string())),
        }
        Section {
            title: "Texture Settings",
            lines,
        }
    }

    fn output_settings(&self) -> Section {
        let s = self.generator.settings();
        let folder = s.output_folder_path.display().to_string();
        let mut lines = vec![
            Line::Field("Output Folder", folder.clone()),
            Line::Field("File Name", s.output_file_name.clone()),
        ];
        if !folder.is_empty() && !s.output_file_name.is_empty() {
            lines.push(Line::Field(
                "Full Output Path",
                s.full_output_path().display().to_string(),
            ));
        }
        Section {
            title: "Output Settings",
            lines,
        }
    }

    fn preview(&self) -> Section {
        let line = match self.generator.generated_texture() {
            Some(atlas) => Line::Field(
                "Size",
                format!("{} x {}", atlas.image.width(), atlas.image.height()),
            ),
            None => Line::Help(
                MessageType::Info,
                "No texture generated yet. Run 'generate' to create texture.".to_string(),
            ),
        };
        Section {
            title: "Preview",
            lines: vec![line],
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "=".repeat(WIDTH));
        let _ = writeln!(out, "{:^width$}", TITLE, width = WIDTH);
        let _ = writeln!(out, "{}", "=".repeat(WIDTH));

        for section in self.sections() {
            let _ = writeln!(out, "\n▌ {}", section.title);
            for line in &section.lines {
                match line {
                    Line::Field(label, value) => {
                        let _ = writeln!(out, "    {:<24}{}", label, value);
                    }
                    Line::Help(MessageType::Warning, msg) => {
                        let _ = writeln!(out, "    ⚠ {}", msg);
                    }
                    Line::Help(MessageType::Info, msg) => {
                        let _ = writeln!(out, "    ℹ {}", msg);
                    }
                }
            }
        }
        out
    }
}
