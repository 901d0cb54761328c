//! Scrawl Grid - recognition of boxes, lines and text in ASCII line-art.
//!
//! The engine works on a rectangular [`Grid`] of characters. Every cell is
//! classified by its 3×3 neighborhood, boundary cells are grouped into
//! candidate outlines, redundant candidates are reduced away, and the
//! remaining sets are traced into the vector shapes of a
//! [`scrawl_core::diagram::Diagram`].
//!
//! [`recognize`] runs the whole pipeline; the individual stages are public
//! for callers that need only part of it.

pub mod abstraction;
pub mod boundary;
pub mod cell_set;
pub mod chars;
pub mod classify;
pub mod decoration;
pub mod follow;
pub mod markup;
pub mod normalize;
pub mod pattern;
pub mod preprocess;
pub mod reduce;
pub mod text;
pub mod trace;

mod diagram;
mod error;
mod grid;

pub use cell_set::CellSet;
pub use diagram::recognize;
pub use error::GridError;
pub use grid::Grid;

use scrawl_core::geometry::CellSize;

/// Options that change how a grid is read.
///
/// # Examples
///
/// ```
/// # use scrawl_core::geometry::CellSize;
/// # use scrawl_grid::RecognitionConfig;
/// let config = RecognitionConfig::default()
///     .with_cell_size(CellSize::new(8.0, 16.0))
///     .with_round_corners(true);
///
/// assert_eq!(config.tab_size(), 8);
/// assert!(config.round_corners());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionConfig {
    cell_size: CellSize,
    tab_size: usize,
    round_corners: bool,
    custom_tags: Vec<String>,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            cell_size: CellSize::default(),
            tab_size: 8,
            round_corners: false,
            custom_tags: Vec::new(),
        }
    }
}

impl RecognitionConfig {
    /// Device-space size of one grid cell
    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    /// Tab stops are placed every `tab_size` columns
    pub fn tab_size(&self) -> usize {
        self.tab_size
    }

    /// Whether every corner is drawn round
    pub fn round_corners(&self) -> bool {
        self.round_corners
    }

    /// Tag names accepted in addition to the presets
    pub fn custom_tags(&self) -> &[String] {
        &self.custom_tags
    }

    pub fn with_cell_size(mut self, cell_size: CellSize) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    pub fn with_round_corners(mut self, round_corners: bool) -> Self {
        self.round_corners = round_corners;
        self
    }

    pub fn with_custom_tags(mut self, custom_tags: Vec<String>) -> Self {
        self.custom_tags = custom_tags;
        self
    }
}
