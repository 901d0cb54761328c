//! Folding text and point markers that sit on lines back into line
//! characters.
//!
//! Each pass decides every replacement against an unchanged grid and only
//! then writes, so no decision depends on the scan order.

use log::debug;

use scrawl_core::cell::Cell;

use crate::{cell_set::CellSet, chars, grid::Grid};

/// Rewrites `grid` in place and returns the point-marker cells found on
/// lines.
///
/// # Examples
///
/// ```
/// # use scrawl_core::cell::Cell;
/// # use scrawl_grid::{Grid, normalize::normalize};
/// let mut grid = Grid::from_rows(&["--*--", "-a---", "-bc--"]).unwrap();
/// let markers = normalize(&mut grid);
///
/// assert!(markers.contains(Cell::new(2, 0)));
/// assert_eq!(grid.row(0).unwrap(), "-----");
/// assert_eq!(grid.row(1).unwrap(), "-----");
/// assert_eq!(grid.row(2).unwrap(), "-bc--");
/// ```
pub fn normalize(grid: &mut Grid) -> CellSet {
    replace_type_on_line(grid);
    let markers = replace_point_markers(grid);

    debug!(point_markers = markers.len(); "Normalized lines");
    markers
}

fn replace_type_on_line(grid: &mut Grid) {
    let replacements: Vec<(Cell, char)> = grid
        .cells()
        .filter(|&cell| grid.get(cell).is_alphanumeric())
        .filter_map(|cell| {
            let horizontal = chars::is_horizontal_line(grid.get(cell.west()))
                && chars::is_horizontal_line(grid.get(cell.east()));
            let vertical = chars::is_vertical_line(grid.get(cell.north()))
                && chars::is_vertical_line(grid.get(cell.south()));
            line_char(horizontal, vertical).map(|c| (cell, c))
        })
        .collect();

    for (cell, c) in replacements {
        grid.set(cell, c);
    }
}

/// A marker is folded only when a plain line character (`- =` or `| :`)
/// touches it. Corners and slashes next to a `*` do not count.
fn replace_point_markers(grid: &mut Grid) -> CellSet {
    let replacements: Vec<(Cell, char)> = grid
        .cells()
        .filter(|&cell| chars::is_point_marker(grid.get(cell)) && grid.is_star_on_line(cell))
        .filter_map(|cell| {
            let horizontal = chars::is_horizontal_line(grid.get(cell.west()))
                || chars::is_horizontal_line(grid.get(cell.east()));
            let vertical = chars::is_vertical_line(grid.get(cell.north()))
                || chars::is_vertical_line(grid.get(cell.south()));
            line_char(horizontal, vertical).map(|c| (cell, c))
        })
        .collect();

    let mut markers = CellSet::new();
    for (cell, c) in replacements {
        grid.set(cell, c);
        markers.add(cell);
    }
    markers
}

fn line_char(horizontal: bool, vertical: bool) -> Option<char> {
    match (horizontal, vertical) {
        (true, true) => Some('+'),
        (true, false) => Some('-'),
        (false, true) => Some('|'),
        (false, false) => None,
    }
}
