//! A mutable rectangular buffer of characters.
//!
//! Reads outside the buffer return [`OUTSIDE`] instead of failing, and writes
//! outside it are ignored, so pattern windows and neighbor lookups never need
//! bounds checks of their own.

use std::fmt;

use scrawl_core::cell::Cell;

use crate::{
    cell_set::CellSet,
    chars::{self, BLANK, OUTSIDE},
    error::GridError,
};

/// Character used to mark cells visited by the internal flood fill.
const VISITED: char = '\u{1}';

/// A rectangular character buffer addressed by [`Cell`].
///
/// # Examples
///
/// ```
/// # use scrawl_core::cell::Cell;
/// # use scrawl_grid::Grid;
/// let mut grid = Grid::from_rows(&["+-+", "| |", "+-+"]).unwrap();
/// assert_eq!(grid.get(Cell::new(1, 0)), '-');
/// assert_eq!(grid.get(Cell::new(9, 9)), '\0');
///
/// let filled = grid.fill_continuous_area(Cell::new(1, 1), '#').unwrap();
/// assert_eq!(filled.len(), 1);
/// assert_eq!(grid.get(Cell::new(1, 1)), '#');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates a grid filled with blanks.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            cells: vec![BLANK; width * height],
            width,
            height,
        }
    }

    /// Builds a grid from rows of equal length.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedRow`] if any row's character count differs
    /// from the first row's.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (index, row) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(row.as_ref().chars());
            let found = cells.len() - before;
            if found != width {
                return Err(GridError::RaggedRow {
                    row: index,
                    expected: width,
                    found,
                });
            }
        }
        Ok(Self {
            cells,
            width,
            height: rows.len(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if `cell` lies inside the buffer.
    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let x = usize::try_from(cell.x()).ok()?;
        let y = usize::try_from(cell.y()).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Reads a cell, returning [`OUTSIDE`] beyond the buffer.
    pub fn get(&self, cell: Cell) -> char {
        self.index(cell).map_or(OUTSIDE, |index| self.cells[index])
    }

    /// Writes a cell; writes beyond the buffer are dropped.
    pub fn set(&mut self, cell: Cell, c: char) {
        if let Some(index) = self.index(cell) {
            self.cells[index] = c;
        }
    }

    /// Returns true if the cell holds a blank. Cells outside the buffer are
    /// not blank.
    pub fn is_blank(&self, cell: Cell) -> bool {
        chars::is_blank(self.get(cell))
    }

    /// Returns true if any cell in the buffer is blank.
    pub fn has_blank_cells(&self) -> bool {
        self.cells.iter().any(|&c| chars::is_blank(c))
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }

    /// Returns row `y` as a string.
    pub fn row(&self, y: usize) -> Option<String> {
        (y < self.height).then(|| {
            self.cells[y * self.width..(y + 1) * self.width]
                .iter()
                .collect()
        })
    }

    /// Iterates over all rows as strings.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().collect())
    }

    /// Overwrites row `y` with `row`, padding with blanks or truncating to
    /// the grid width.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RowOutOfBounds`] if the row does not exist.
    pub fn replace_row(&mut self, y: usize, row: &str) -> Result<(), GridError> {
        if y >= self.height {
            return Err(GridError::RowOutOfBounds(y));
        }
        let mut chars = row.chars();
        for slot in &mut self.cells[y * self.width..(y + 1) * self.width] {
            *slot = chars.next().unwrap_or(BLANK);
        }
        Ok(())
    }

    /// Copies a `width` by `height` region whose top-left corner is
    /// `origin`. Parts of the region beyond this grid read as [`OUTSIDE`].
    pub fn sub_grid(&self, origin: Cell, width: usize, height: usize) -> Grid {
        let mut sub = Grid::blank(width, height);
        for cell in sub.cells() {
            let c = self.get(cell.translate(origin.x(), origin.y()));
            sub.set(cell, c);
        }
        sub
    }

    /// Returns a same-sized grid holding only the characters of `cells`.
    pub fn isolate(&self, cells: &CellSet) -> Grid {
        let mut isolated = Grid::blank(self.width, self.height);
        for cell in cells {
            isolated.set(cell, self.get(cell));
        }
        isolated
    }

    /// Writes `c` into every given cell.
    pub fn fill_cells(&mut self, cells: impl IntoIterator<Item = Cell>, c: char) {
        for cell in cells {
            self.set(cell, c);
        }
    }

    /// Returns every non-blank cell inside the buffer.
    pub fn all_non_blank(&self) -> CellSet {
        self.cells()
            .filter(|&cell| !chars::is_blank(self.get(cell)))
            .collect()
    }

    /// Replaces the 4-connected region of cells sharing the seed's character
    /// with `new_char`, returning the replaced cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SeedOutOfBounds`] if the seed lies outside the
    /// buffer.
    pub fn fill_continuous_area(&mut self, seed: Cell, new_char: char) -> Result<CellSet, GridError> {
        if !self.contains(seed) {
            return Err(GridError::SeedOutOfBounds(seed));
        }
        let old_char = self.get(seed);
        let mut filled = CellSet::new();
        if old_char == new_char {
            return Ok(filled);
        }

        let mut stack = vec![seed];
        self.set(seed, new_char);
        while let Some(cell) = stack.pop() {
            filled.add(cell);
            for neighbor in cell.orthogonal_neighbors() {
                if self.get(neighbor) == old_char {
                    self.set(neighbor, new_char);
                    stack.push(neighbor);
                }
            }
        }
        Ok(filled)
    }

    /// Fills the region around `seed` and reports what encloses it.
    ///
    /// Cells holding the seed's character are visited through their four
    /// neighbors and marked; any neighbor holding `boundary_char` instead is
    /// collected as part of the enclosing boundary. Returns
    /// `(interior, boundary)`, where the interior includes the seed.
    ///
    /// If the seed itself holds `boundary_char`, the whole connected run of
    /// boundary characters becomes the interior and the boundary is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SeedOutOfBounds`] if the seed lies outside the
    /// buffer.
    pub fn find_boundaries_and_fill_internal(
        &mut self,
        seed: Cell,
        boundary_char: char,
    ) -> Result<(CellSet, CellSet), GridError> {
        if !self.contains(seed) {
            return Err(GridError::SeedOutOfBounds(seed));
        }
        let old_char = self.get(seed);
        let mut interior = CellSet::new();
        let mut boundary = CellSet::new();

        let mut stack = vec![seed];
        self.set(seed, VISITED);
        while let Some(cell) = stack.pop() {
            interior.add(cell);
            for neighbor in cell.orthogonal_neighbors() {
                let c = self.get(neighbor);
                if c == old_char {
                    self.set(neighbor, VISITED);
                    stack.push(neighbor);
                } else if c == boundary_char {
                    boundary.add(neighbor);
                }
            }
        }
        Ok((interior, boundary))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            f.write_str(&row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let err = Grid::from_rows(&["abc", "ab"]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_get_out_of_bounds_returns_sentinel() {
        let g = grid(&["ab"]);
        assert_eq!(g.get(Cell::new(-1, 0)), OUTSIDE);
        assert_eq!(g.get(Cell::new(2, 0)), OUTSIDE);
        assert_eq!(g.get(Cell::new(0, 1)), OUTSIDE);
        assert!(!g.is_blank(Cell::new(5, 5)));
    }

    #[test]
    fn test_set_out_of_bounds_is_ignored() {
        let mut g = grid(&["ab"]);
        g.set(Cell::new(4, 0), 'x');
        assert_eq!(g.to_string(), "ab");
    }

    #[test]
    fn test_replace_row() {
        let mut g = grid(&["abc", "def"]);
        g.replace_row(1, "x").unwrap();
        assert_eq!(g.row(1).unwrap(), "x  ");
        assert_eq!(g.replace_row(2, "x"), Err(GridError::RowOutOfBounds(2)));
    }

    #[test]
    fn test_sub_grid_pads_with_sentinel() {
        let g = grid(&["ab", "cd"]);
        let sub = g.sub_grid(Cell::new(-1, 0), 3, 1);
        assert_eq!(sub.get(Cell::new(0, 0)), OUTSIDE);
        assert_eq!(sub.get(Cell::new(1, 0)), 'a');
        assert_eq!(sub.get(Cell::new(2, 0)), 'b');
    }

    #[test]
    fn test_isolate_keeps_only_given_cells() {
        let g = grid(&["abc"]);
        let cells: CellSet = [Cell::new(1, 0)].into_iter().collect();
        assert_eq!(g.isolate(&cells).to_string(), " b ");
    }

    #[test]
    fn test_fill_continuous_area_stays_in_region() {
        let mut g = grid(&["     ", " +-+ ", " | | ", " +-+ "]);
        let filled = g.fill_continuous_area(Cell::new(2, 2), '#').unwrap();

        assert_eq!(filled.len(), 1);
        assert_eq!(g.get(Cell::new(0, 0)), ' ');
    }

    #[test]
    fn test_fill_continuous_area_same_char_is_noop() {
        let mut g = grid(&["  "]);
        assert!(g.fill_continuous_area(Cell::new(0, 0), ' ').unwrap().is_empty());
    }

    #[test]
    fn test_fill_continuous_area_rejects_outside_seed() {
        let mut g = grid(&["  "]);
        assert_eq!(
            g.fill_continuous_area(Cell::new(3, 0), '#'),
            Err(GridError::SeedOutOfBounds(Cell::new(3, 0)))
        );
    }

    #[test]
    fn test_find_boundaries_and_fill_internal() {
        let mut g = grid(&["*****", "*   *", "*****"]);
        let (interior, boundary) = g
            .find_boundaries_and_fill_internal(Cell::new(2, 1), '*')
            .unwrap();

        assert_eq!(interior.len(), 3);
        // Three cells above, three below, one on each side.
        assert_eq!(boundary.len(), 8);
        assert!(!boundary.contains(Cell::new(0, 0)));
    }

    #[test]
    fn test_find_boundaries_from_ink_has_no_boundary() {
        let mut g = grid(&["**", "  "]);
        let (interior, boundary) = g
            .find_boundaries_and_fill_internal(Cell::new(0, 0), '*')
            .unwrap();

        assert_eq!(interior.len(), 2);
        assert!(boundary.is_empty());
    }

    #[test]
    fn test_all_non_blank_is_row_major() {
        let g = grid(&[" a", "b "]);
        let cells: Vec<_> = g.all_non_blank().iter().collect();
        assert_eq!(cells, vec![Cell::new(1, 0), Cell::new(0, 1)]);
    }
}
