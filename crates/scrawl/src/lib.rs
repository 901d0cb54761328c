//! Scrawl - turn ASCII line-art into vector diagrams.
//!
//! Boxes, lines, arrows and labels drawn with plain characters are
//! recognized into a [`Diagram`] and rendered as SVG.

pub mod config;

mod error;
mod export;

pub use scrawl_core::{color, diagram, geometry, shape, text};

pub use error::ScrawlError;

use log::{debug, info};

use scrawl_core::diagram::Diagram;

use config::AppConfig;
use export::{Exporter, svg::SvgExporter};

/// Builder for recognizing and rendering Scrawl diagrams.
///
/// # Examples
///
/// ```rust
/// use scrawl::{DiagramBuilder, config::AppConfig};
///
/// let source = "+-----+\n| app |\n+-----+\n";
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// let diagram = builder.parse(source)
///     .expect("Failed to parse");
///
/// let svg = builder.render_svg(&diagram)
///     .expect("Failed to render");
/// assert!(svg.contains("<svg"));
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including grid and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Recognize the shapes and text drawn in `source`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrawlError::Config`] if the grid settings are invalid and
    /// [`ScrawlError::Grid`] if the text cannot be read as a grid.
    pub fn parse(&self, source: &str) -> Result<Diagram, ScrawlError> {
        info!("Recognizing diagram");

        let recognition_config = self
            .config
            .recognition_config()
            .map_err(ScrawlError::Config)?;
        let diagram = scrawl_grid::recognize(source, &recognition_config)?;

        debug!(
            columns = diagram.columns(),
            rows = diagram.rows();
            "Diagram recognized successfully"
        );
        Ok(diagram)
    }

    /// Render a recognized diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`ScrawlError::Export`] if the style settings are invalid.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, ScrawlError> {
        let exporter = SvgExporter::new(self.config.style())?;
        let svg = exporter.export_diagram(diagram)?;

        info!(shapes = diagram.shapes().len(); "SVG rendered successfully");
        Ok(svg)
    }
}
