//! Configuration types for Scrawl diagram recognition and rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every field is optional and falls back to its default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining grid and style settings.
//! - [`GridConfig`] - How the character grid is read.
//! - [`StyleConfig`] - How the recognized diagram is drawn.
//!
//! # Example
//!
//! ```
//! # use scrawl::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [grid]
//!     round_corners = true
//!     custom_tags = ["cloud"]
//!
//!     [style]
//!     stroke_color = "navy"
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.grid().round_corners());
//! assert_eq!(config.grid().tab_size(), 8);
//! assert!(config.style().stroke_color().is_ok());
//! ```

use serde::Deserialize;

use scrawl_core::{color::Color, geometry::CellSize};
use scrawl_grid::RecognitionConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Grid reading section.
    #[serde(default)]
    grid: GridConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its two sections.
    pub fn new(grid: GridConfig, style: StyleConfig) -> Self {
        Self { grid, style }
    }

    /// Returns the grid configuration.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Projects the `[grid]` section onto the recognizer's options.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured cell size is not positive.
    pub fn recognition_config(&self) -> Result<RecognitionConfig, String> {
        Ok(RecognitionConfig::default()
            .with_cell_size(self.grid.cell_size()?)
            .with_tab_size(self.grid.tab_size)
            .with_round_corners(self.grid.round_corners)
            .with_custom_tags(self.grid.custom_tags.clone()))
    }
}

/// Options controlling how the character grid is read.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Width of one character cell in device pixels.
    cell_width: f32,
    /// Height of one character cell in device pixels.
    cell_height: f32,
    /// Tab stops are placed every `tab_size` columns.
    tab_size: usize,
    /// Draw every corner round, not only `/` and `\` corners.
    round_corners: bool,
    /// Tag names accepted inside `{...}` in addition to the presets.
    custom_tags: Vec<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_width: 10.0,
            cell_height: 14.0,
            tab_size: 8,
            round_corners: false,
            custom_tags: Vec::new(),
        }
    }
}

impl GridConfig {
    /// Returns the configured cell size.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is not a positive number.
    pub fn cell_size(&self) -> Result<CellSize, String> {
        let valid = |value: f32| value.is_finite() && value > 0.0;
        if valid(self.cell_width) && valid(self.cell_height) {
            Ok(CellSize::new(self.cell_width, self.cell_height))
        } else {
            Err(format!(
                "Invalid cell size in config: {}x{}",
                self.cell_width, self.cell_height
            ))
        }
    }

    /// Returns the distance between tab stops.
    pub fn tab_size(&self) -> usize {
        self.tab_size
    }

    /// Returns true if every corner is drawn round.
    pub fn round_corners(&self) -> bool {
        self.round_corners
    }

    /// Returns the tag names accepted on top of the preset vocabulary.
    pub fn custom_tags(&self) -> &[String] {
        &self.custom_tags
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Colors are kept as strings and parsed on access, so a bad color is
/// reported when rendering rather than when the file is read.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: String,
    stroke_color: String,
    stroke_width: f32,
    font_family: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "white".to_string(),
            stroke_color: "black".to_string(),
            stroke_width: 1.0,
            font_family: "monospace".to_string(),
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        Color::new(&self.background_color)
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed stroke [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn stroke_color(&self) -> Result<Color, String> {
        Color::new(&self.stroke_color).map_err(|err| format!("Invalid stroke color in config: {err}"))
    }

    /// Returns the outline width in device pixels.
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Returns the font family used for text.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }
}
