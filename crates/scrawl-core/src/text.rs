//! Text blocks found between the lines of a diagram.

use crate::{cell::Cell, color::Color, geometry::Bounds};

/// Which edge of its bounds a text is anchored to.
///
/// Labels that end in the same column as other labels are right aligned, so
/// a proportional font keeps their right edges lined up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAlignment {
    #[default]
    Left,
    Right,
}

/// A run of characters that is not part of any outline.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramText {
    text: String,
    cell: Cell,
    bounds: Bounds,
    color: Color,
    alignment: TextAlignment,
}

impl DiagramText {
    /// Creates a text block starting at `cell`, drawn in black.
    pub fn new(text: impl Into<String>, cell: Cell, bounds: Bounds) -> Self {
        Self {
            text: text.into(),
            cell,
            bounds,
            color: Color::default(),
            alignment: TextAlignment::default(),
        }
    }

    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The grid cell of the first character
    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }
}
