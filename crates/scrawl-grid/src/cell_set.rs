//! Sets of grid cells and the set algebra used on candidate boundaries.
//!
//! A [`CellSet`] keeps insertion order. Membership and equality ignore that
//! order, but every walk over a set (picking a trace start, choosing the
//! largest set in a group, splitting into components) follows it, which keeps
//! tie-breaks reproducible from run to run.
//!
//! The grid-dependent parts of the set API (open/closed classification and
//! the filled equivalent) live in [`crate::reduce`].

use std::fmt::Write as _;

use indexmap::IndexSet;

use scrawl_core::cell::Cell;

/// Inclusive cell extents of a non-empty [`CellSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl CellBounds {
    /// Number of columns covered
    pub fn width(self) -> usize {
        (self.max_x - self.min_x + 1) as usize
    }

    /// Number of rows covered
    pub fn height(self) -> usize {
        (self.max_y - self.min_y + 1) as usize
    }
}

/// An insertion-ordered set of unique cells.
///
/// Two sets are equal when they hold exactly the same cells, regardless of
/// the order those cells were added in.
///
/// # Examples
///
/// ```
/// # use scrawl_core::cell::Cell;
/// # use scrawl_grid::CellSet;
/// let mut a: CellSet = [Cell::new(0, 0), Cell::new(1, 0)].into_iter().collect();
/// let b: CellSet = [Cell::new(1, 0), Cell::new(0, 0)].into_iter().collect();
/// assert_eq!(a, b);
///
/// a.subtract_set(&[Cell::new(0, 0)].into_iter().collect());
/// assert_eq!(a.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellSet {
    cells: IndexSet<Cell>,
}

impl CellSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cell, returning false if it was already present.
    pub fn add(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Adds every cell of `other` (set union).
    pub fn add_all(&mut self, other: &CellSet) {
        self.cells.extend(other.iter());
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Removes a cell, keeping the order of the remaining cells.
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.cells.shift_remove(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The first cell in insertion order
    pub fn first(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Removes every cell that also belongs to `other`.
    pub fn subtract_set(&mut self, other: &CellSet) {
        self.cells.retain(|cell| !other.contains(*cell));
    }

    /// Returns true if the two sets share at least one cell.
    pub fn has_common_cells(&self, other: &CellSet) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().any(|cell| large.contains(cell))
    }

    /// Returns the inclusive extents, or `None` for an empty set.
    pub fn bounds(&self) -> Option<CellBounds> {
        let first = self.first()?;
        let mut bounds = CellBounds {
            min_x: first.x(),
            min_y: first.y(),
            max_x: first.x(),
            max_y: first.y(),
        };
        for cell in self.iter() {
            bounds.min_x = bounds.min_x.min(cell.x());
            bounds.min_y = bounds.min_y.min(cell.y());
            bounds.max_x = bounds.max_x.max(cell.x());
            bounds.max_y = bounds.max_y.max(cell.y());
        }
        Some(bounds)
    }

    /// Returns a copy with every cell moved by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> CellSet {
        self.iter().map(|cell| cell.translate(dx, dy)).collect()
    }

    /// Maps cells of an upscaled buffer back to grid cells.
    ///
    /// A grid cell is a member if any cell of its `factor` by `factor` block
    /// is. Order follows the first block cell seen for each grid cell.
    pub fn scaled_down(&self, factor: i32) -> CellSet {
        self.iter()
            .map(|cell| Cell::new(cell.x().div_euclid(factor), cell.y().div_euclid(factor)))
            .collect()
    }

    /// Splits the set into components connected through any of the eight
    /// neighbors.
    ///
    /// Components come out in the order of their first cell, and each
    /// component lists cells in discovery order.
    pub fn break_into_distinct_boundaries(&self) -> Vec<CellSet> {
        let mut assigned = CellSet::new();
        let mut components = Vec::new();

        for seed in self.iter() {
            if assigned.contains(seed) {
                continue;
            }
            let mut component = CellSet::new();
            let mut stack = vec![seed];
            assigned.add(seed);
            while let Some(cell) = stack.pop() {
                component.add(cell);
                for neighbor in cell.all_neighbors() {
                    if self.contains(neighbor) && assigned.add(neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
            components.push(component);
        }

        components
    }

    /// Keeps the first occurrence of every distinct set.
    ///
    /// The result is idempotent: deduplicating it again changes nothing.
    pub fn remove_duplicate_sets(sets: Vec<CellSet>) -> Vec<CellSet> {
        let mut unique: Vec<CellSet> = Vec::with_capacity(sets.len());
        for set in sets {
            if !unique.contains(&set) {
                unique.push(set);
            }
        }
        unique
    }

    /// Renders the set as a small text picture, for trace logging.
    pub fn to_grid_string(&self) -> String {
        let Some(bounds) = self.bounds() else {
            return String::new();
        };
        let mut out = String::new();
        for y in bounds.min_y..=bounds.max_y {
            for x in bounds.min_x..=bounds.max_x {
                out.push(if self.contains(Cell::new(x, y)) { '*' } else { '.' });
            }
            if y < bounds.max_y {
                out.push('\n');
            }
        }
        let _ = write!(out, " @ {}", Cell::new(bounds.min_x, bounds.min_y));
        out
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for CellSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = Cell;
    type IntoIter = std::iter::Copied<indexmap::set::Iter<'a, Cell>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().copied()
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn cell_set_strategy() -> impl Strategy<Value = CellSet> {
        prop::collection::vec((0i32..12, 0i32..12), 0..40)
            .prop_map(|cells| cells.into_iter().map(|(x, y)| Cell::new(x, y)).collect())
    }

    fn cell_sets_strategy() -> impl Strategy<Value = Vec<CellSet>> {
        prop::collection::vec(
            prop::collection::vec((0i32..3, 0i32..3), 0..4).prop_map(|cells| {
                cells
                    .into_iter()
                    .map(|(x, y)| Cell::new(x, y))
                    .collect::<CellSet>()
            }),
            0..12,
        )
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Deduplicating twice gives the same result as deduplicating once.
    fn check_remove_duplicates_idempotent(sets: Vec<CellSet>) -> Result<(), TestCaseError> {
        let once = CellSet::remove_duplicate_sets(sets);
        let twice = CellSet::remove_duplicate_sets(once.clone());
        prop_assert_eq!(once, twice);
        Ok(())
    }

    /// The survivors are the first occurrences, in their original order.
    fn check_remove_duplicates_keeps_first_occurrences(
        sets: Vec<CellSet>,
    ) -> Result<(), TestCaseError> {
        let unique = CellSet::remove_duplicate_sets(sets.clone());
        let expected: Vec<CellSet> = sets
            .iter()
            .enumerate()
            .filter(|(i, set)| !sets[..*i].contains(set))
            .map(|(_, set)| set.clone())
            .collect();
        prop_assert_eq!(unique, expected);
        Ok(())
    }

    /// Components partition the set: disjoint, non-empty, and covering it.
    fn check_components_partition(cells: CellSet) -> Result<(), TestCaseError> {
        let parts = cells.break_into_distinct_boundaries();
        let mut union = CellSet::new();
        for part in &parts {
            prop_assert!(!part.is_empty());
            prop_assert!(!union.has_common_cells(part));
            union.add_all(part);
        }
        prop_assert_eq!(union, cells);
        Ok(())
    }

    /// Splitting an already connected component returns it unchanged.
    fn check_component_split_is_stable(cells: CellSet) -> Result<(), TestCaseError> {
        for part in cells.break_into_distinct_boundaries() {
            prop_assert_eq!(part.break_into_distinct_boundaries(), vec![part.clone()]);
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn remove_duplicates_idempotent(sets in cell_sets_strategy()) {
            check_remove_duplicates_idempotent(sets)?;
        }

        #[test]
        fn remove_duplicates_keeps_first_occurrences(sets in cell_sets_strategy()) {
            check_remove_duplicates_keeps_first_occurrences(sets)?;
        }

        #[test]
        fn components_partition(cells in cell_set_strategy()) {
            check_components_partition(cells)?;
        }

        #[test]
        fn component_split_is_stable(cells in cell_set_strategy()) {
            check_component_split_is_stable(cells)?;
        }
    }
}
