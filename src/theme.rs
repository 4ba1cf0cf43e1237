//! Colors for the mention field
//!
//! Color strings arrive from the embedding host as `#RRGGBB`, `#AARRGGBB`
//! or a small set of color names. Parsing never fails outward: callers use
//! [`Color::parse_or`] and get the documented default back.

/// Default color of plain text
pub const DEFAULT_TEXT_COLOR: Color = Color::rgb(0xEA, 0xEA, 0xEA);
/// Default color of mention tokens
pub const DEFAULT_MENTION_COLOR: Color = Color::rgb(0x00, 0x95, 0xFF);
/// Default field background
pub const DEFAULT_BACKGROUND_COLOR: Color = Color::rgb(0x1E, 0x1E, 0x1E);
/// Hint (placeholder) text color
pub const HINT_COLOR: Color = Color::rgb(0x88, 0x88, 0x88);

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("darkgray", Color::rgb(0x44, 0x44, 0x44)),
    ("darkgrey", Color::rgb(0x44, 0x44, 0x44)),
    ("gray", Color::rgb(0x88, 0x88, 0x88)),
    ("grey", Color::rgb(0x88, 0x88, 0x88)),
    ("lightgray", Color::rgb(0xCC, 0xCC, 0xCC)),
    ("lightgrey", Color::rgb(0xCC, 0xCC, 0xCC)),
    ("white", Color::rgb(0xFF, 0xFF, 0xFF)),
    ("red", Color::rgb(0xFF, 0x00, 0x00)),
    ("green", Color::rgb(0x00, 0xFF, 0x00)),
    ("blue", Color::rgb(0x00, 0x00, 0xFF)),
    ("yellow", Color::rgb(0xFF, 0xFF, 0x00)),
    ("cyan", Color::rgb(0x00, 0xFF, 0xFF)),
    ("magenta", Color::rgb(0xFF, 0x00, 0xFF)),
    ("aqua", Color::rgb(0x00, 0xFF, 0xFF)),
    ("fuchsia", Color::rgb(0xFF, 0x00, 0xFF)),
    ("lime", Color::rgb(0x00, 0xFF, 0x00)),
    ("maroon", Color::rgb(0x80, 0x00, 0x00)),
    ("navy", Color::rgb(0x00, 0x00, 0x80)),
    ("olive", Color::rgb(0x80, 0x80, 0x00)),
    ("purple", Color::rgb(0x80, 0x00, 0x80)),
    ("silver", Color::rgb(0xC0, 0xC0, 0xC0)),
    ("teal", Color::rgb(0x00, 0x80, 0x80)),
];

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack as ARGB u32 (the layout most host toolkits take)
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Format as `#RRGGBB`, or `#AARRGGBB` when not fully opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }

    /// Parse from "#RRGGBB", "#AARRGGBB" or a color name
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let Some(hex) = s.strip_prefix('#') else {
            let lower = s.to_ascii_lowercase();
            return NAMED_COLORS
                .iter()
                .find(|(name, _)| *name == lower)
                .map(|(_, color)| *color)
                .ok_or_else(|| format!("Unknown color: {}", s));
        };

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid color format: {}", s));
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        match hex.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::rgba(channel(2)?, channel(4)?, channel(6)?, channel(0)?)),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// Parse a color, falling back to `default` when the string is unusable
    pub fn parse_or(s: &str, default: Color) -> Color {
        match Self::parse(s) {
            Ok(color) => color,
            Err(e) => {
                tracing::debug!("{}, using {}", e, default.to_hex());
                default
            }
        }
    }
}
