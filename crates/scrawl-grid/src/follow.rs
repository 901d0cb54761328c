//! Continuation rules: given a boundary cell, which neighbors does the line
//! run on to.

use log::trace;

use scrawl_core::cell::Cell;

use crate::{
    classify::{Axis, CellRole, CornerPosition},
    error::GridError,
    grid::Grid,
    pattern::EntryPoint,
};

impl Grid {
    /// Returns the cells a line drawn through `cell` continues into, leaving
    /// out `blocked` (normally the cell the walk came from).
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnclassifiableCell`] if `cell` is not an
    /// intersection, corner, line, stub or crossing on a line.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scrawl_core::cell::Cell;
    /// # use scrawl_grid::Grid;
    /// let grid = Grid::from_rows(&["+-+", "| |", "+-+"]).unwrap();
    /// let next = grid.follow_cell(Cell::new(0, 0), Some(Cell::new(1, 0))).unwrap();
    /// assert_eq!(next, vec![Cell::new(0, 1)]);
    /// ```
    pub fn follow_cell(&self, cell: Cell, blocked: Option<Cell>) -> Result<Vec<Cell>, GridError> {
        let Some(role) = self.role(cell) else {
            return Err(self.unclassifiable(cell));
        };

        let mut next = match role {
            CellRole::Intersection(_) => self.follow_intersection(cell),
            CellRole::Corner(corner) => match corner.position {
                CornerPosition::TopLeft => vec![cell.south(), cell.east()],
                CornerPosition::TopRight => vec![cell.south(), cell.west()],
                CornerPosition::BottomRight => vec![cell.north(), cell.west()],
                CornerPosition::BottomLeft => vec![cell.north(), cell.east()],
            },
            CellRole::Line(axis) => self.follow_line(cell, axis),
            CellRole::Stub => self.follow_stub(cell),
            CellRole::CrossOnLine(Axis::Horizontal) => vec![cell.east(), cell.west()],
            CellRole::CrossOnLine(Axis::Vertical) => vec![cell.north(), cell.south()],
            CellRole::StarOnLine => {
                return Err(self.unclassifiable(cell));
            }
        };

        if let Some(blocked) = blocked {
            next.retain(|&candidate| candidate != blocked);
        }
        trace!(cell:%, role:?, next:?; "Followed cell");
        Ok(next)
    }

    fn follow_intersection(&self, cell: Cell) -> Vec<Cell> {
        [
            (cell.north(), EntryPoint::South),
            (cell.south(), EntryPoint::North),
            (cell.east(), EntryPoint::West),
            (cell.west(), EntryPoint::East),
        ]
        .into_iter()
        .filter(|&(neighbor, entry)| self.has_entry_point(neighbor, entry))
        .map(|(neighbor, _)| neighbor)
        .collect()
    }

    fn follow_line(&self, cell: Cell, axis: Axis) -> Vec<Cell> {
        let candidates = match axis {
            Axis::Horizontal => [cell.east(), cell.west()],
            Axis::Vertical => [cell.north(), cell.south()],
        };
        candidates
            .into_iter()
            .filter(|&neighbor| self.is_boundary(neighbor))
            .collect()
    }

    fn follow_stub(&self, cell: Cell) -> Vec<Cell> {
        [cell.east(), cell.west(), cell.north(), cell.south()]
            .into_iter()
            .find(|&neighbor| self.is_boundary(neighbor))
            .into_iter()
            .collect()
    }

    fn unclassifiable(&self, cell: Cell) -> GridError {
        GridError::UnclassifiableCell {
            cell,
            window: self.window(cell).render(),
        }
    }
}
