//! Naming the geometric role of a cell from its neighborhood.
//!
//! A cell can satisfy templates of several categories at once. The first
//! category that matches wins, checked in this order: intersection, corner,
//! line, stub, cross-on-line, star-on-line. That order is the
//! disambiguation rule and must not change.
//!
//! Every line-end template has a `-` or `|` at its center, so a line end is
//! always classified as a [`CellRole::Line`] first. Line ends are not a role
//! of their own; they are queried with [`is_lines_end`].

use scrawl_core::cell::Cell;

use crate::{
    cell_set::CellSet,
    chars,
    grid::Grid,
    pattern::{self, EntryPoint, Pattern, Window, matches_any},
};

/// The shape of a junction where three or four lines meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Junction {
    /// Lines in all four directions
    Cross,
    /// North, east and south
    K,
    /// West, east and south
    T,
    /// North, west and south
    InverseK,
    /// West, east and north
    InverseT,
}

/// Which corner of a rectangle a corner cell sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerPosition {
    /// Arms to the east and south
    TopLeft,
    /// Arms to the west and south
    TopRight,
    /// Arms to the west and north
    BottomRight,
    /// Arms to the east and north
    BottomLeft,
}

/// A corner cell, drawn with `+` or as a rounded `/` or `\`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
    pub position: CornerPosition,
    pub round: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// The geometric role of a non-blank cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    Intersection(Junction),
    Corner(Corner),
    Line(Axis),
    Stub,
    CrossOnLine(Axis),
    StarOnLine,
}

const JUNCTIONS: [(Junction, Pattern); 5] = [
    (Junction::Cross, pattern::CROSS),
    (Junction::K, pattern::K),
    (Junction::T, pattern::T),
    (Junction::InverseK, pattern::INVERSE_K),
    (Junction::InverseT, pattern::INVERSE_T),
];

const CORNERS: [(CornerPosition, Pattern, Pattern); 4] = [
    (
        CornerPosition::TopLeft,
        pattern::NORMAL_CORNER_1,
        pattern::ROUND_CORNER_1,
    ),
    (
        CornerPosition::TopRight,
        pattern::NORMAL_CORNER_2,
        pattern::ROUND_CORNER_2,
    ),
    (
        CornerPosition::BottomRight,
        pattern::NORMAL_CORNER_3,
        pattern::ROUND_CORNER_3,
    ),
    (
        CornerPosition::BottomLeft,
        pattern::NORMAL_CORNER_4,
        pattern::ROUND_CORNER_4,
    ),
];

pub fn junction(window: &Window) -> Option<Junction> {
    JUNCTIONS
        .iter()
        .find(|(_, pattern)| pattern.matches(window))
        .map(|(junction, _)| *junction)
}

pub fn corner(window: &Window) -> Option<Corner> {
    CORNERS.iter().find_map(|(position, normal, round)| {
        if normal.matches(window) {
            Some(Corner {
                position: *position,
                round: false,
            })
        } else if round.matches(window) {
            Some(Corner {
                position: *position,
                round: true,
            })
        } else {
            None
        }
    })
}

pub fn line(window: &Window) -> Option<Axis> {
    let c = window.center();
    if chars::is_horizontal_line(c) {
        Some(Axis::Horizontal)
    } else if chars::is_vertical_line(c) {
        Some(Axis::Vertical)
    } else {
        None
    }
}

pub fn is_stub(window: &Window) -> bool {
    matches_any(&pattern::STUBS, window)
}

pub fn cross_on_line(window: &Window) -> Option<Axis> {
    if pattern::HORIZONTAL_CROSS_ON_LINE.matches(window) {
        Some(Axis::Horizontal)
    } else if pattern::VERTICAL_CROSS_ON_LINE.matches(window) {
        Some(Axis::Vertical)
    } else {
        None
    }
}

pub fn is_star_on_line(window: &Window) -> bool {
    matches_any(&pattern::STARS_ON_LINE, window)
}

/// Stubs count as line ends as well.
pub fn is_lines_end(window: &Window) -> bool {
    is_stub(window) || matches_any(&pattern::LINE_ENDS, window)
}

/// Classifies the center of `window`, or returns `None` if no template
/// matches.
///
/// # Examples
///
/// ```
/// # use scrawl_grid::classify::{classify, Axis, CellRole, Junction};
/// # use scrawl_grid::pattern::Window;
/// let t = Window::from_strs(["   ", "-+-", " | "]);
/// assert_eq!(classify(&t), Some(CellRole::Intersection(Junction::T)));
///
/// let line = Window::from_strs(["   ", "---", "   "]);
/// assert_eq!(classify(&line), Some(CellRole::Line(Axis::Horizontal)));
/// ```
pub fn classify(window: &Window) -> Option<CellRole> {
    if chars::is_blank(window.center()) {
        return None;
    }
    if let Some(junction) = junction(window) {
        return Some(CellRole::Intersection(junction));
    }
    if let Some(corner) = corner(window) {
        return Some(CellRole::Corner(corner));
    }
    if let Some(axis) = line(window) {
        return Some(CellRole::Line(axis));
    }
    if is_stub(window) {
        return Some(CellRole::Stub);
    }
    if let Some(axis) = cross_on_line(window) {
        return Some(CellRole::CrossOnLine(axis));
    }
    if is_star_on_line(window) {
        return Some(CellRole::StarOnLine);
    }
    None
}

impl Grid {
    /// Returns the 3×3 neighborhood of `cell`.
    pub fn window(&self, cell: Cell) -> Window {
        let mut rows = [[chars::OUTSIDE; 3]; 3];
        for (dy, row) in rows.iter_mut().enumerate() {
            for (dx, slot) in row.iter_mut().enumerate() {
                *slot = self.get(cell.translate(dx as i32 - 1, dy as i32 - 1));
            }
        }
        Window::new(rows)
    }

    /// Classifies `cell` against this grid.
    pub fn role(&self, cell: Cell) -> Option<CellRole> {
        classify(&self.window(cell))
    }

    pub fn is_intersection(&self, cell: Cell) -> bool {
        junction(&self.window(cell)).is_some()
    }

    pub fn is_corner(&self, cell: Cell) -> bool {
        corner(&self.window(cell)).is_some()
    }

    pub fn is_round_corner(&self, cell: Cell) -> bool {
        corner(&self.window(cell)).is_some_and(|corner| corner.round)
    }

    pub fn is_stub(&self, cell: Cell) -> bool {
        is_stub(&self.window(cell))
    }

    pub fn is_cross_on_line(&self, cell: Cell) -> bool {
        cross_on_line(&self.window(cell)).is_some()
    }

    pub fn is_star_on_line(&self, cell: Cell) -> bool {
        is_star_on_line(&self.window(cell))
    }

    pub fn is_lines_end(&self, cell: Cell) -> bool {
        is_lines_end(&self.window(cell))
    }

    /// Corners, intersections, stubs and line ends become vertices of traced
    /// shapes.
    pub fn is_point_cell(&self, cell: Cell) -> bool {
        let window = self.window(cell);
        corner(&window).is_some()
            || junction(&window).is_some()
            || is_lines_end(&window)
    }

    /// Returns true if `cell` can carry a line entering through `entry`.
    pub fn has_entry_point(&self, cell: Cell, entry: EntryPoint) -> bool {
        let c = self.get(cell);
        c != chars::OUTSIDE && entry.accepts(c)
    }

    /// Returns true if `cell` is part of some outline.
    ///
    /// Line characters always are. Corner characters (`+ / \`) only count
    /// when their neighborhood makes them a junction, corner, stub or a
    /// crossing on a line.
    pub fn is_boundary(&self, cell: Cell) -> bool {
        let c = self.get(cell);
        if c == chars::OUTSIDE {
            return false;
        }
        if chars::is_corner_char(c) {
            let window = self.window(cell);
            return junction(&window).is_some()
                || corner(&window).is_some()
                || is_stub(&window)
                || cross_on_line(&window).is_some();
        }
        chars::is_boundary_char(c)
    }

    /// Returns every boundary cell in row-major order.
    pub fn all_boundaries(&self) -> CellSet {
        self.cells().filter(|&cell| self.is_boundary(cell)).collect()
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn line_art_grid_strategy() -> impl Strategy<Value = Grid> {
        let alphabet = prop::sample::select(vec![' ', ' ', '-', '|', '+', '/', '\\', '*', '=', ':', 'a']);
        prop::collection::vec(prop::collection::vec(alphabet, 6), 1..6).prop_map(|rows| {
            let rows: Vec<String> = rows.into_iter().map(String::from_iter).collect();
            Grid::from_rows(&rows).unwrap()
        })
    }

    // ===================
    // Property Test Functions
    // ===================

    /// A cell's role depends only on its window and never on earlier queries.
    fn check_classification_is_pure(grid: Grid) -> Result<(), TestCaseError> {
        let snapshot = grid.clone();
        for cell in grid.cells() {
            let role = grid.role(cell);
            prop_assert_eq!(role, classify(&grid.window(cell)));
            prop_assert_eq!(role, grid.role(cell));
            prop_assert_eq!(grid.is_boundary(cell), snapshot.is_boundary(cell));
        }
        prop_assert_eq!(grid.all_boundaries(), snapshot.all_boundaries());
        prop_assert_eq!(grid, snapshot);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn classification_is_pure(grid in line_art_grid_strategy()) {
            check_classification_is_pure(grid)?;
        }
    }
}
