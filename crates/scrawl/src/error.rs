//! Error types for Scrawl operations.
//!
//! This module provides the main error type [`ScrawlError`] which wraps
//! the failures of each processing stage.

use std::io;

use thiserror::Error;

use scrawl_grid::GridError;

/// The main error type for Scrawl operations.
#[derive(Debug, Error)]
pub enum ScrawlError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Recognition error: {0}")]
    Grid(#[from] GridError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl From<crate::export::Error> for ScrawlError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(error.to_string())
    }
}
