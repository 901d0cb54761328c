//! Color handling for Scrawl diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, plus the named color presets that can be written
//! inline in a diagram (`cRED`, `cBLU`, ...).

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{AlphaColor, DynamicColor, Srgb};

/// Named presets usable in color tokens, with their sRGB values.
pub const PRESETS: [(&str, [u8; 3]); 6] = [
    ("GRE", [0x99, 0xDD, 0x99]),
    ("BLU", [0x55, 0x55, 0xBB]),
    ("PNK", [0xFF, 0xAA, 0xAA]),
    ("RED", [0xEE, 0x33, 0x22]),
    ("YEL", [0xFF, 0xFF, 0x33]),
    ("BLK", [0x00, 0x00, 0x00]),
];

/// Channels above this value make a color count as light.
const DARK_THRESHOLD: u8 = 200;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#ff0000"` or `"red"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrawl_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Create an opaque color from 8-bit sRGB channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: DynamicColor::from_alpha_color(AlphaColor::<Srgb>::from_rgb8(r, g, b)),
        }
    }

    /// Looks up a named preset (`GRE`, `BLU`, `PNK`, `RED`, `YEL`, `BLK`).
    pub fn preset(name: &str) -> Option<Self> {
        PRESETS
            .iter()
            .find(|(preset, _)| *preset == name)
            .map(|(_, [r, g, b])| Self::from_rgb8(*r, *g, *b))
    }

    /// Decodes the three-digit hex form of a color token.
    ///
    /// Each digit is one channel scaled by 17, so `F` maps to 255.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrawl_core::color::Color;
    ///
    /// let color = Color::from_short_hex("F80").unwrap();
    /// assert_eq!(color.to_rgb8(), [255, 136, 0]);
    /// assert!(Color::from_short_hex("FG0").is_none());
    /// ```
    pub fn from_short_hex(digits: &str) -> Option<Self> {
        let mut channels = [0u8; 3];
        let mut chars = digits.chars();
        for channel in &mut channels {
            let value = chars.next()?.to_digit(16)?;
            *channel = u8::try_from(value * 17).ok()?;
        }
        if chars.next().is_some() {
            return None;
        }
        let [r, g, b] = channels;
        Some(Self::from_rgb8(r, g, b))
    }

    /// Resolves either a preset name or a three-digit hex code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::preset(code).or_else(|| Self::from_short_hex(code))
    }

    /// Returns the 8-bit sRGB channels of this color.
    pub fn to_rgb8(self) -> [u8; 3] {
        let [r, g, b, _] = self.color.to_alpha_color::<Srgb>().components;
        [r, g, b].map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Returns true when text drawn on top of this color should be light.
    ///
    /// A color is dark when none of its channels reaches 200.
    pub fn is_dark(self) -> bool {
        self.to_rgb8()
            .into_iter()
            .all(|channel| channel < DARK_THRESHOLD)
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from_rgb8(0, 0, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_default_is_black() {
        assert_eq!(Color::default().to_rgb8(), [0, 0, 0]);
    }

    #[test]
    fn test_color_presets() {
        assert_eq!(Color::preset("GRE").unwrap().to_rgb8(), [0x99, 0xDD, 0x99]);
        assert_eq!(Color::preset("RED").unwrap().to_string(), "#ee3322");
        assert!(Color::preset("ORA").is_none());
    }

    #[test]
    fn test_color_short_hex() {
        assert_eq!(Color::from_short_hex("000").unwrap().to_rgb8(), [0, 0, 0]);
        assert_eq!(
            Color::from_short_hex("1A3").unwrap().to_rgb8(),
            [17, 170, 51]
        );
        assert!(Color::from_short_hex("12").is_none());
        assert!(Color::from_short_hex("1234").is_none());
    }

    #[test]
    fn test_color_from_code_prefers_presets() {
        assert_eq!(
            Color::from_code("BLK").unwrap(),
            Color::preset("BLK").unwrap()
        );
        assert_eq!(Color::from_code("FFF").unwrap().to_rgb8(), [255, 255, 255]);
    }

    #[test]
    fn test_color_is_dark() {
        assert!(Color::preset("BLU").unwrap().is_dark());
        assert!(Color::preset("BLK").unwrap().is_dark());
        assert!(!Color::preset("YEL").unwrap().is_dark());
        assert!(!Color::preset("GRE").unwrap().is_dark());
    }

    #[test]
    fn test_color_to_svg_value() {
        let color = Color::from_rgb8(255, 128, 0);
        let value: svg::node::Value = (&color).into();
        assert_eq!(value.to_string(), "#ff8000");
    }
}
