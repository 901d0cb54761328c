//! Error types for grid recognition.

use thiserror::Error;

use scrawl_core::cell::Cell;

/// Errors raised while building or walking a character grid.
///
/// None of these are transient: they describe either malformed input at the
/// construction boundary or a cell the line grammar has no rule for.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A cell reached during tracing matched no classifier template.
    #[error("cannot determine how to follow cell {cell}:\n{window}")]
    UnclassifiableCell { cell: Cell, window: String },

    /// A flood fill was seeded outside the buffer.
    #[error("fill seed {0} lies outside the grid")]
    SeedOutOfBounds(Cell),

    /// Rows handed to [`crate::Grid::from_rows`] differ in length.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A row replacement targeted a row that does not exist.
    #[error("row {0} is out of bounds")]
    RowOutOfBounds(usize),
}
