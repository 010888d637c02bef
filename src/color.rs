// DigitAtlas
// copyright zipxing@hotmail.com 2022～2025

//! Straight (non-premultiplied) RGBA8 colour used for glyphs and background.
//!
//! Accepted text forms: `#RRGGBB`, `#RRGGBBAA` (leading `#` optional) and a
//! few names: white, black, clear, red, green, blue, gray, yellow, cyan, magenta.

use image::Rgba;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const CLEAR: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }

    pub fn from_rgba(p: Rgba<u8>) -> Self {
        Self::rgba(p[0], p[1], p[2], p[3])
    }

    fn from_name(name: &str) -> Option<Self> {
        let c = match name {
            "white" => Color::WHITE,
            "black" => Color::BLACK,
            "clear" | "transparent" => Color::CLEAR,
            "red" => Color::rgb(255, 0, 0),
            "green" => Color::rgb(0, 255, 0),
            "blue" => Color::rgb(0, 0, 255),
            "gray" | "grey" => Color::rgb(128, 128, 128),
            "yellow" => Color::rgb(255, 235, 4),
            "cyan" => Color::rgb(0, 255, 255),
            "magenta" => Color::rgb(255, 0, 255),
            _ => return None,
        };
        Some(c)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, a))
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        if let Some(c) = Color::from_name(&lower) {
            return Ok(c);
        }
        Color::from_hex(lower.strip_prefix('#').unwrap_or(&lower))
            .ok_or_else(|| format!("invalid color '{}', use #RRGGBB, #RRGGBBAA or a name", s))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("white".parse::<Color>(), Ok(Color::WHITE));
        assert_eq!("Clear".parse::<Color>(), Ok(Color::CLEAR));
        assert_eq!(" grey ".parse::<Color>(), Ok(Color::rgb(128, 128, 128)));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#B82C2C".parse::<Color>(), Ok(Color::rgb(0xB8, 0x2C, 0x2C)));
        assert_eq!("4a4a4a80".parse::<Color>(), Ok(Color::rgba(0x4A, 0x4A, 0x4A, 0x80)));
        assert!("#12345".parse::<Color>().is_err());
        assert!("#GG0000".parse::<Color>().is_err());
        assert!("not-a-color".parse::<Color>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::WHITE.to_string(), "#FFFFFFFF");
        assert_eq!(Color::CLEAR.to_string(), "#00000000");
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(c.to_string().parse::<Color>(), Ok(c));
    }

    #[test]
    fn test_image_pixel() {
        let c = Color::rgba(10, 20, 30, 40);
        assert_eq!(c.to_rgba(), Rgba([10, 20, 30, 40]));
        assert_eq!(Color::from_rgba(c.to_rgba()), c);
    }
}
