//! A 3×-resolution rendering of line-art cells.
//!
//! Each boundary cell is replaced by a 3×3 block of ink that draws its role:
//! a horizontal line becomes a bar through the middle row, a corner becomes
//! an L, and so on. At this resolution diagonally touching but unconnected
//! lines no longer touch, so 4-connected flood fills separate them cleanly.

use scrawl_core::cell::Cell;

use crate::{
    cell_set::CellSet,
    classify::{Axis, CellRole, CornerPosition, Junction},
    error::GridError,
    grid::Grid,
};

/// Character used for ink in the abstraction buffer.
pub const INK: char = '*';

/// Upscaling factor between the source grid and the abstraction buffer.
pub const SCALE: i32 = 3;

/// A 3×3 ink template, `rows[y][x]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbstractCell {
    rows: [[bool; 3]; 3],
}

impl AbstractCell {
    const fn parse(rows: [&str; 3]) -> Self {
        let mut ink = [[false; 3]; 3];
        let mut y = 0;
        while y < 3 {
            let bits = rows[y].as_bytes();
            let mut x = 0;
            while x < 3 {
                ink[y][x] = bits[x] == b'1';
                x += 1;
            }
            y += 1;
        }
        Self { rows: ink }
    }

    /// Returns true if the template inks position `(x, y)`.
    pub fn is_ink(&self, x: usize, y: usize) -> bool {
        self.rows[y][x]
    }

    pub const VERTICAL_LINE: Self = Self::parse(["010", "010", "010"]);
    pub const HORIZONTAL_LINE: Self = Self::parse(["000", "111", "000"]);
    pub const CORNER_TOP_LEFT: Self = Self::parse(["000", "011", "010"]);
    pub const CORNER_TOP_RIGHT: Self = Self::parse(["000", "110", "010"]);
    pub const CORNER_BOTTOM_RIGHT: Self = Self::parse(["010", "110", "000"]);
    pub const CORNER_BOTTOM_LEFT: Self = Self::parse(["010", "011", "000"]);
    pub const T: Self = Self::parse(["000", "111", "010"]);
    pub const INVERSE_T: Self = Self::parse(["010", "111", "000"]);
    pub const K: Self = Self::parse(["010", "011", "010"]);
    pub const INVERSE_K: Self = Self::parse(["010", "110", "010"]);
    pub const CROSS: Self = Self::parse(["010", "111", "010"]);
    pub const STAR: Self = Self::parse(["111", "111", "111"]);

    /// Picks the template for a role. Stubs get none.
    pub fn for_role(role: CellRole) -> Option<Self> {
        let template = match role {
            CellRole::Intersection(junction) => match junction {
                Junction::Cross => Self::CROSS,
                Junction::K => Self::K,
                Junction::T => Self::T,
                Junction::InverseK => Self::INVERSE_K,
                Junction::InverseT => Self::INVERSE_T,
            },
            CellRole::Corner(corner) => match corner.position {
                CornerPosition::TopLeft => Self::CORNER_TOP_LEFT,
                CornerPosition::TopRight => Self::CORNER_TOP_RIGHT,
                CornerPosition::BottomRight => Self::CORNER_BOTTOM_RIGHT,
                CornerPosition::BottomLeft => Self::CORNER_BOTTOM_LEFT,
            },
            CellRole::Line(Axis::Horizontal) => Self::HORIZONTAL_LINE,
            CellRole::Line(Axis::Vertical) => Self::VERTICAL_LINE,
            CellRole::CrossOnLine(_) => Self::CROSS,
            CellRole::StarOnLine => Self::STAR,
            CellRole::Stub => return None,
        };
        Some(template)
    }
}

/// The upscaled ink rendering of a set of cells.
#[derive(Debug, Clone)]
pub struct AbstractionGrid {
    buffer: Grid,
}

impl AbstractionGrid {
    /// Renders `cells` at three times the resolution of `grid`.
    ///
    /// Cells are classified against the whole of `grid`, so a cell keeps its
    /// role even when its neighbors are not part of `cells`.
    pub fn new(grid: &Grid, cells: &CellSet) -> Self {
        let mut buffer = Grid::blank(grid.width() * 3, grid.height() * 3);
        for cell in cells {
            let Some(template) = grid.role(cell).and_then(AbstractCell::for_role) else {
                continue;
            };
            for y in 0..3 {
                for x in 0..3 {
                    if template.is_ink(x, y) {
                        let target = Cell::new(cell.x() * SCALE + x as i32, cell.y() * SCALE + y as i32);
                        buffer.set(target, INK);
                    }
                }
            }
        }
        Self { buffer }
    }

    pub fn buffer(&self) -> &Grid {
        &self.buffer
    }

    pub fn into_buffer(self) -> Grid {
        self.buffer
    }

    /// Splits the ink into 4-connected components and maps each back to
    /// source cells.
    ///
    /// # Errors
    ///
    /// Propagates fill errors, which cannot occur for seeds taken from the
    /// buffer itself.
    pub fn distinct_shapes(&self) -> Result<Vec<CellSet>, GridError> {
        let mut work = self.buffer.clone();
        let mut shapes = Vec::new();
        for cell in self.buffer.cells() {
            if work.get(cell) == INK {
                let component = work.fill_continuous_area(cell, ' ')?;
                shapes.push(component.scaled_down(SCALE));
            }
        }
        Ok(shapes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_templates() {
        assert!(AbstractCell::CORNER_TOP_LEFT.is_ink(2, 1));
        assert!(AbstractCell::CORNER_TOP_LEFT.is_ink(1, 2));
        assert!(!AbstractCell::CORNER_TOP_LEFT.is_ink(0, 1));
        assert!(AbstractCell::STAR.is_ink(0, 0));
        assert_eq!(AbstractCell::for_role(CellRole::Stub), None);
    }

    #[test]
    fn test_render_box() {
        let g = grid(&["+-+", "| |", "+-+"]);
        let abstraction = AbstractionGrid::new(&g, &g.all_boundaries());
        let expected = [
            "         ",
            " ******* ",
            " *     * ",
            " *     * ",
            " *     * ",
            " *     * ",
            " *     * ",
            " ******* ",
            "         ",
        ]
        .join("\n");
        assert_eq!(abstraction.buffer().to_string(), expected);
    }

    #[test]
    fn test_diagonal_lines_stay_apart() {
        let g = grid(&["|  ", " - "]);
        let shapes = AbstractionGrid::new(&g, &g.all_boundaries())
            .distinct_shapes()
            .unwrap();
        assert_eq!(shapes.len(), 2);
    }

    #[test]
    fn test_distinct_shapes_separates_boxes() {
        let g = grid(&[
            "+-+ +-+",
            "| | | |",
            "+-+ +-+",
        ]);
        let shapes = AbstractionGrid::new(&g, &g.all_boundaries())
            .distinct_shapes()
            .unwrap();

        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].len(), 8);
        assert!(shapes[1].contains(Cell::new(4, 0)));
    }

    #[test]
    fn test_only_given_cells_are_stamped() {
        let g = grid(&["---"]);
        let cells: CellSet = [Cell::new(0, 0)].into_iter().collect();
        let buffer = AbstractionGrid::new(&g, &cells).into_buffer();
        assert_eq!(buffer.row(1).unwrap(), "***      ");
    }
}
