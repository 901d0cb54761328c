//! Stroke definitions for traced outlines.
//!
//! A line drawn with any dash-style character (`: ~ =`) is dashed as a
//! whole; everything else is solid. [`StrokeDefinition`] bundles the style
//! with the color and width the exporter applies.

use std::str::FromStr;

use crate::color::Color;

/// The line pattern of a traced shape.
///
/// # SVG Mapping
///
/// - `Solid`: No dasharray attribute
/// - `Dashed`: "5,5"
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line with equal dash and gap lengths
    Dashed,
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            _ => Err(format!("unknown stroke style `{s}`")),
        }
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5"),
        }
    }

    pub fn is_dashed(self) -> bool {
        self == Self::Dashed
    }
}

/// Color, width and pattern of an outline.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

impl StrokeDefinition {
    /// Creates a solid stroke
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Returns a copy of this stroke using `style`
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }
}

/// Applies the stroke attributes of a [`StrokeDefinition`] to an SVG element.
///
/// ```
/// use scrawl_core::{apply_stroke, stroke::StrokeDefinition};
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::default();
/// let path = apply_stroke!(svg_element::Path::new(), &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke: &$crate::stroke::StrokeDefinition = $stroke;
        let element = $element
            .set("stroke", &stroke.color())
            .set("stroke-width", stroke.width());
        match stroke.style().to_svg_value() {
            Some(dasharray) => element.set("stroke-dasharray", dasharray),
            None => element,
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_style_from_str() {
        assert_eq!("solid".parse::<StrokeStyle>(), Ok(StrokeStyle::Solid));
        assert_eq!("dashed".parse::<StrokeStyle>(), Ok(StrokeStyle::Dashed));
        assert!("dotted".parse::<StrokeStyle>().is_err());
    }

    #[test]
    fn test_stroke_style_svg_value() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value(), Some("5,5"));
    }

    #[test]
    fn test_stroke_definition_with_style() {
        let stroke = StrokeDefinition::new(Color::default(), 2.0).with_style(StrokeStyle::Dashed);
        assert_eq!(stroke.width(), 2.0);
        assert!(stroke.style().is_dashed());
    }
}
