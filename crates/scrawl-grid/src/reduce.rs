//! Classification and reduction of candidate boundary sets.
//!
//! Boundary discovery produces overlapping candidates: duplicates reached
//! from both sides of an outline, sets mixing a loop with dangling lines,
//! and outlines that are only the union of smaller neighbouring boxes. This
//! module sorts the candidates into open and closed sets and removes the
//! redundant ones.

use log::{debug, trace, warn};

use scrawl_core::cell::Cell;

use crate::{
    abstraction::{AbstractionGrid, INK},
    cell_set::CellSet,
    error::GridError,
    grid::Grid,
};

/// Loop structure of a boundary set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryType {
    /// Lines without any loop
    Open,
    /// One or more complete loops and nothing else
    Closed,
    /// A loop with dangling lines attached
    Mixed,
}

/// Candidates left after reduction, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReducedBoundaries {
    pub open: Vec<CellSet>,
    pub closed: Vec<CellSet>,
}

impl CellSet {
    /// Copies the set into a blank grid with a one-cell margin on every side.
    ///
    /// Returns the local grid together with the translated set.
    fn localize(&self, grid: &Grid) -> Option<(Grid, CellSet)> {
        let bounds = self.bounds()?;
        let (dx, dy) = (1 - bounds.min_x, 1 - bounds.min_y);
        let mut local = Grid::blank(bounds.width() + 2, bounds.height() + 2);
        for cell in self {
            local.set(cell.translate(dx, dy), grid.get(cell));
        }
        Some((local, self.translated(dx, dy)))
    }

    /// Returns true if the outline of this set separates some blank area
    /// from the outside.
    fn encloses_area(&self, grid: &Grid) -> Result<bool, GridError> {
        let Some((local, translated)) = self.localize(grid) else {
            return Ok(false);
        };
        let mut buffer = AbstractionGrid::new(&local, &translated).into_buffer();
        buffer.fill_continuous_area(Cell::new(0, 0), INK)?;
        Ok(buffer.has_blank_cells())
    }

    /// Classifies the set by walking its outline on a grid that holds only
    /// its own cells.
    ///
    /// The walk starts at the first line end, or at the first cell if there
    /// is none. Returning to the start without meeting a branch makes the
    /// set closed; any branch or dead end in a set that encloses an area
    /// makes it mixed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scrawl_grid::{Grid, reduce::BoundaryType};
    /// let grid = Grid::from_rows(&["     ", " +-+ ", " | | ", " +-+ ", "     "]).unwrap();
    /// let outline = grid.all_boundaries();
    /// assert_eq!(outline.boundary_type(&grid), BoundaryType::Closed);
    /// ```
    pub fn boundary_type(&self, grid: &Grid) -> BoundaryType {
        if self.len() <= 1 {
            return BoundaryType::Open;
        }
        match self.encloses_area(grid) {
            Ok(true) => {}
            Ok(false) => return BoundaryType::Open,
            Err(err) => {
                debug!(err:%; "Could not test enclosure, treating set as open");
                return BoundaryType::Open;
            }
        }

        let isolated = grid.isolate(self);
        match self.trace_loop(&isolated) {
            Ok(BoundaryType::Closed) => BoundaryType::Closed,
            Ok(_) => BoundaryType::Mixed,
            Err(err) => {
                debug!(err:%; "Loop walk failed");
                BoundaryType::Mixed
            }
        }
    }

    fn trace_loop(&self, isolated: &Grid) -> Result<BoundaryType, GridError> {
        let Some(start) = self
            .iter()
            .find(|&cell| isolated.is_lines_end(cell))
            .or_else(|| self.first())
        else {
            return Ok(BoundaryType::Open);
        };

        let Some(&first) = isolated.follow_cell(start, None)?.first() else {
            return Ok(BoundaryType::Open);
        };

        let limit = self.len() * 4;
        let mut previous = start;
        let mut current = first;
        for _ in 0..limit {
            if current == start {
                return Ok(BoundaryType::Closed);
            }
            let next = isolated.follow_cell(current, Some(previous))?;
            match next.as_slice() {
                [] => return Ok(BoundaryType::Open),
                [single] => {
                    previous = current;
                    current = *single;
                }
                _ => return Ok(BoundaryType::Mixed),
            }
        }
        Ok(BoundaryType::Mixed)
    }

    /// Returns the outline together with the area it encloses.
    ///
    /// Returns `None` when the fill escapes to the edge of the working
    /// buffer, meaning the interior could not be determined. A set with no
    /// interior cell to seed from is returned unchanged.
    pub fn filled_equivalent(&self) -> Option<CellSet> {
        let bounds = self.bounds()?;
        let (dx, dy) = (1 - bounds.min_x, 1 - bounds.min_y);
        let mut buffer = Grid::blank(bounds.width() + 2, bounds.height() + 2);
        buffer.fill_cells(self.translated(dx, dy).iter(), INK);

        let seed = buffer.cells().find(|&cell| {
            !buffer.is_blank(cell) && buffer.is_blank(cell.east()) && buffer.is_blank(cell.west())
        });
        let Some(seed) = seed else {
            return Some(self.clone());
        };

        let width = buffer.width() as i32;
        let height = buffer.height() as i32;
        let filled = buffer.fill_continuous_area(seed.east(), INK).ok()?;
        let escaped = filled
            .iter()
            .any(|cell| cell.x() == 0 || cell.y() == 0 || cell.x() == width - 1 || cell.y() == height - 1);
        if escaped {
            return None;
        }

        let mut result = self.clone();
        result.add_all(&filled.translated(-dx, -dy));
        Some(result)
    }

    /// Splits a set that mixes loops and lines without any separable closed
    /// part.
    ///
    /// From every line end, the single-continuation run is walked until it
    /// reaches a branching cell (left out) or another line end (taken in).
    /// Each run becomes a piece; whatever remains forms the last piece.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnclassifiableCell`] if a walk meets a cell it
    /// cannot follow.
    pub fn break_truly_mixed_boundaries(&self, grid: &Grid) -> Result<Vec<CellSet>, GridError> {
        let isolated = grid.isolate(self);
        let mut visited = CellSet::new();
        let mut pieces = Vec::new();
        let mut taken = CellSet::new();

        for start in self {
            if visited.contains(start) || !isolated.is_lines_end(start) {
                continue;
            }
            visited.add(start);

            let mut piece = CellSet::new();
            piece.add(start);
            let mut previous = None;
            let mut current = start;
            loop {
                let next = isolated.follow_cell(current, previous)?;
                let [candidate] = next.as_slice() else {
                    break;
                };
                let candidate = *candidate;
                if piece.contains(candidate) {
                    break;
                }
                if isolated.follow_cell(candidate, Some(current))?.len() > 1 {
                    break;
                }
                piece.add(candidate);
                if isolated.is_lines_end(candidate) {
                    visited.add(candidate);
                    break;
                }
                previous = Some(current);
                current = candidate;
            }

            taken.add_all(&piece);
            pieces.push(piece);
        }

        let mut rest = self.clone();
        rest.subtract_set(&taken);
        if !rest.is_empty() {
            pieces.push(rest);
        }
        Ok(pieces)
    }
}

/// Drops closed sets whose filled area is exactly the union of the filled
/// areas of the smaller sets overlapping them.
///
/// Only groups of three or more overlapping sets are considered. If the
/// filled area of any set cannot be determined, nothing is removed. Returns
/// true if at least one set was removed.
pub fn remove_obsolete_sets(sets: &mut Vec<CellSet>) -> bool {
    let Some(filled) = sets
        .iter()
        .map(CellSet::filled_equivalent)
        .collect::<Option<Vec<_>>>()
    else {
        debug!("Filled area undecidable, keeping every closed set");
        return false;
    };

    let mut obsolete = vec![false; sets.len()];
    for set in &filled {
        let group: Vec<usize> = filled
            .iter()
            .enumerate()
            .filter(|(_, other)| set.has_common_cells(other))
            .map(|(index, _)| index)
            .collect();
        if group.len() <= 2 {
            continue;
        }

        let mut largest = group[0];
        for &index in &group[1..] {
            if filled[index].len() > filled[largest].len() {
                largest = index;
            }
        }

        let mut others = CellSet::new();
        for &index in group.iter().filter(|&&index| index != largest) {
            others.add_all(&filled[index]);
        }
        if others == filled[largest] {
            obsolete[largest] = true;
        }
    }

    let before = sets.len();
    let mut flags = obsolete.into_iter();
    sets.retain(|_| !flags.next().unwrap_or(false));
    let removed = before - sets.len();
    if removed > 0 {
        debug!(removed; "Removed obsolete closed sets");
    }
    removed > 0
}

fn classify_all(grid: &Grid, sets: &[CellSet]) -> Vec<BoundaryType> {
    sets.iter().map(|set| set.boundary_type(grid)).collect()
}

/// Turns raw candidates into distinct open and closed boundaries.
///
/// Duplicates are removed first. Mixed sets are then resolved: when closed
/// sets exist they are subtracted from each mixed set, otherwise each mixed
/// set is broken apart at its branches. After a second round of
/// deduplication and classification, closed sets that merely repeat their
/// smaller neighbours are removed. Sets that are still mixed at the end are
/// dropped.
///
/// A mixed set that cannot be broken apart is logged and dropped.
pub fn reduce(grid: &Grid, candidates: Vec<CellSet>) -> ReducedBoundaries {
    let mut sets = CellSet::remove_duplicate_sets(candidates);
    let types = classify_all(grid, &sets);

    let closed: Vec<CellSet> = sets
        .iter()
        .zip(&types)
        .filter(|(_, kind)| **kind == BoundaryType::Closed)
        .map(|(set, _)| set.clone())
        .collect();
    let has_mixed = types.contains(&BoundaryType::Mixed);
    debug!(
        candidates = sets.len(),
        closed = closed.len(),
        mixed = types.iter().filter(|kind| **kind == BoundaryType::Mixed).count();
        "Classified candidate boundaries"
    );

    if has_mixed && !closed.is_empty() {
        let mut kept = Vec::with_capacity(sets.len());
        let mut appended = Vec::new();
        for (set, kind) in sets.into_iter().zip(types) {
            if kind != BoundaryType::Mixed {
                kept.push(set);
                continue;
            }
            let mut remainder = set;
            for closed_set in &closed {
                remainder.subtract_set(closed_set);
            }
            if remainder.boundary_type(grid) == BoundaryType::Open {
                appended.extend(remainder.break_into_distinct_boundaries());
            } else {
                kept.push(remainder);
            }
        }
        kept.extend(appended);
        sets = kept;
    } else if has_mixed {
        let mut kept = Vec::with_capacity(sets.len());
        let mut appended = Vec::new();
        for (set, kind) in sets.into_iter().zip(types) {
            if kind != BoundaryType::Mixed {
                kept.push(set);
                continue;
            }
            match set.break_truly_mixed_boundaries(grid) {
                Ok(pieces) => appended.extend(pieces),
                Err(err) => warn!(err:%; "Skipping mixed boundary that cannot be broken apart"),
            }
        }
        kept.extend(appended);
        sets = kept;
    }

    let sets: Vec<CellSet> = CellSet::remove_duplicate_sets(sets)
        .into_iter()
        .filter(|set| !set.is_empty())
        .collect();
    let mut reduced = ReducedBoundaries::default();
    for (set, kind) in sets.iter().zip(classify_all(grid, &sets)) {
        match kind {
            BoundaryType::Open => reduced.open.push(set.clone()),
            BoundaryType::Closed => reduced.closed.push(set.clone()),
            BoundaryType::Mixed => {
                trace!("Dropping unresolved mixed set\n{}", set.to_grid_string());
            }
        }
    }

    remove_obsolete_sets(&mut reduced.closed);
    debug!(open = reduced.open.len(), closed = reduced.closed.len(); "Reduced boundaries");
    reduced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::find_boundaries;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn set(cells: &[(i32, i32)]) -> CellSet {
        cells.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn test_boundary_type_open_line() {
        let g = grid(&["      ", " ---> ", "      "]);
        let line = set(&[(1, 1), (2, 1), (3, 1)]);
        assert_eq!(line.boundary_type(&g), BoundaryType::Open);
        assert_eq!(set(&[(1, 1)]).boundary_type(&g), BoundaryType::Open);
    }

    #[test]
    fn test_boundary_type_mixed() {
        let g = grid(&[
            "         ",
            " +--+    ",
            " |  +--- ",
            " +--+    ",
            "         ",
        ]);
        assert_eq!(g.all_boundaries().boundary_type(&g), BoundaryType::Mixed);
    }

    #[test]
    fn test_filled_equivalent_of_box() {
        let outline = set(&[
            (0, 0), (1, 0), (2, 0), (3, 0),
            (0, 1), (3, 1),
            (0, 2), (1, 2), (2, 2), (3, 2),
        ]);
        let filled = outline.filled_equivalent().unwrap();

        assert_eq!(filled.len(), 12);
        assert!(filled.contains(Cell::new(1, 1)));
        assert!(filled.contains(Cell::new(2, 1)));
    }

    #[test]
    fn test_filled_equivalent_escaping_fill_is_undecidable() {
        // A lone column has blanks on both sides, and the fill escapes.
        let column = set(&[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(column.filled_equivalent(), None);
    }

    #[test]
    fn test_filled_equivalent_without_seed() {
        let row = set(&[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(row.filled_equivalent(), Some(row.clone()));
    }

    #[test]
    fn test_remove_obsolete_sets_drops_outer_rectangle() {
        let g = grid(&[
            "             ",
            "  +---+---+  ",
            "  |   |   |  ",
            "  +---+---+  ",
            "             ",
        ]);
        let mut closed = CellSet::remove_duplicate_sets(find_boundaries(&g).unwrap());
        assert_eq!(closed.len(), 3);

        assert!(remove_obsolete_sets(&mut closed));
        assert_eq!(closed.len(), 2);
        assert!(closed.iter().all(|set| set.len() == 12));

        // Nothing more to remove on a second pass.
        assert!(!remove_obsolete_sets(&mut closed));
        assert_eq!(closed.len(), 2);
    }

    #[test]
    fn test_break_truly_mixed_boundaries() {
        let g = grid(&[
            "             ",
            "     +-----+ ",
            "  ---+--   | ",
            "     +-----+ ",
            "             ",
        ]);
        let all = g.all_boundaries();
        let pieces = all.break_truly_mixed_boundaries(&g).unwrap();

        let line = set(&[(2, 2), (3, 2), (4, 2)]);
        let inner = set(&[(6, 2), (7, 2)]);
        assert!(pieces.contains(&line));
        assert!(pieces.contains(&inner));

        let mut union = CellSet::new();
        let mut total = 0;
        for piece in &pieces {
            union.add_all(piece);
            total += piece.len();
        }
        assert_eq!(union, all);
        assert_eq!(total, all.len());
    }

    #[test]
    fn test_reduce_resolves_truly_mixed_set() {
        let g = grid(&[
            "             ",
            "     +-----+ ",
            "  ---+--   | ",
            "     +-----+ ",
            "             ",
        ]);
        let reduced = reduce(&g, find_boundaries(&g).unwrap());

        assert_eq!(reduced.closed.len(), 1);
        assert_eq!(reduced.closed[0].len(), 16);
        assert_eq!(reduced.open.len(), 2);
    }

    #[test]
    fn test_reduce_subtracts_closed_sets() {
        let g = grid(&[
            "               ",
            "     +-----+   ",
            "     |     |   ",
            "  ---+-----+-- ",
            "     |     |   ",
            "     +-----+   ",
            "               ",
        ]);
        let reduced = reduce(&g, find_boundaries(&g).unwrap());

        assert_eq!(reduced.closed.len(), 2);
        assert_eq!(reduced.open.len(), 2);
        assert!(reduced.open.iter().any(|set| set.contains(Cell::new(2, 3))));
        assert!(reduced.open.iter().any(|set| set.contains(Cell::new(13, 3))));
    }
}
