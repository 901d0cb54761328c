//! Discovery of candidate boundary sets.

use log::{debug, trace};

use scrawl_core::cell::Cell;

use crate::{
    abstraction::{AbstractionGrid, INK, SCALE},
    cell_set::CellSet,
    error::GridError,
    grid::Grid,
};

/// Finds every candidate boundary in `grid`.
///
/// The boundary cells are first split into separate shapes at three times
/// the resolution. Each shape is then rendered alone and flood-filled from
/// every region it divides the buffer into; the ink met by each fill is one
/// candidate. The same boundary is usually reached from both sides, so the
/// result contains duplicates for the caller to remove.
///
/// # Errors
///
/// Propagates [`GridError`] from the flood fills.
///
/// # Examples
///
/// ```
/// # use scrawl_grid::{Grid, boundary::find_boundaries};
/// let grid = Grid::from_rows(&["      ", " +--+ ", " |  | ", " +--+ ", "      "]).unwrap();
/// let candidates = find_boundaries(&grid).unwrap();
/// // The inside view repeats the outside one and is skipped.
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].len(), 10);
/// ```
pub fn find_boundaries(grid: &Grid) -> Result<Vec<CellSet>, GridError> {
    let shapes = AbstractionGrid::new(grid, &grid.all_boundaries()).distinct_shapes()?;
    debug!(shapes = shapes.len(); "Split boundaries into distinct shapes");

    let mut candidates = Vec::new();
    for shape in &shapes {
        let mut scratch = AbstractionGrid::new(grid, shape).into_buffer();
        let mut seen = Grid::blank(scratch.width(), scratch.height());
        let mut previous: Option<CellSet> = None;

        for y in 0..scratch.height() as i32 {
            for x in 0..scratch.width() as i32 {
                let location = Cell::new(x, y);
                if !seen.is_blank(location) {
                    continue;
                }

                // A fill only rewrites its interior, so putting those cells
                // back leaves the buffer as rendered for the next seed.
                let original = scratch.get(location);
                let (interior, boundary) = scratch.find_boundaries_and_fill_internal(location, INK)?;
                scratch.fill_cells(interior.iter(), original);
                seen.fill_cells(interior.iter(), INK);
                seen.fill_cells(boundary.iter(), INK);

                if boundary.is_empty() {
                    continue;
                }
                let candidate = boundary.scaled_down(SCALE);
                if previous.as_ref() != Some(&candidate) {
                    trace!(cells = candidate.len(); "Found candidate boundary\n{}", candidate.to_grid_string());
                    candidates.push(candidate.clone());
                    previous = Some(candidate);
                }
            }
        }
    }

    debug!(candidates = candidates.len(); "Found candidate boundaries");
    Ok(candidates)
}
