//! Library side of the `scrawl` command line tool.
//!
//! The binary in `main.rs` only parses [`Args`] and sets up logging; reading
//! the drawing, loading the configuration and writing the SVG happen in
//! [`run`] so they can be driven from tests.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use scrawl::{DiagramBuilder, ScrawlError};

/// Converts the drawing named by `args.input` into an SVG at `args.output`.
///
/// The configuration comes from `args.config` when given, otherwise from
/// the usual search locations (see `config::load_config`).
///
/// # Errors
///
/// Returns [`ScrawlError`] when:
/// - the input cannot be read or the output cannot be written
/// - the configuration file is missing or cannot be parsed
/// - a configured cell size or color is invalid
/// - the drawing cannot be read as a character grid
pub fn run(args: &Args) -> Result<(), ScrawlError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let source = fs::read_to_string(&args.input)?;

    // Recognize, then render with the same configuration
    let builder = DiagramBuilder::new(app_config);
    let diagram = builder.parse(&source)?;
    let svg = builder.render_svg(&diagram)?;

    fs::write(&args.output, svg)?;
    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
