//! Export functionality for Scrawl diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a recognized [`Diagram`] into an output format. It is the final
//! stage in the Scrawl processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ load, strip markup, normalize
//! Character Grid
//!     ↓ find boundaries, reduce, trace
//! Diagram
//!     ↓ export (this module)
//! Output Document
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgExporter`]

/// SVG export backend.
pub mod svg;

use scrawl_core::diagram::Diagram;

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Renders `diagram` into the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the diagram cannot be converted.
    fn export_diagram(&self, diagram: &Diagram) -> Result<String, Error>;
}

/// Errors that can occur during diagram export.
///
/// Converted into [`ScrawlError::Export`] at the crate boundary.
///
/// [`ScrawlError::Export`]: crate::ScrawlError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
