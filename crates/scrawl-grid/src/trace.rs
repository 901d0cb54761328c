//! Turning boundary sets into vector shapes.
//!
//! Closed sets are walked once around their loop. Open sets are walked from
//! a line end; at every branch the current segment ends and one new segment
//! starts per unvisited branch, so a network of lines becomes several
//! polylines grouped into one composite.

use log::{debug, warn};

use scrawl_core::{
    cell::{Cell, Direction},
    geometry::CellSize,
    shape::{DiagramComponent, DiagramShape, PointStyle, ShapePoint},
};

use crate::{
    cell_set::CellSet,
    chars,
    classify::CellRole,
    decoration::arrowhead_at,
    error::GridError,
    grid::Grid,
    reduce::BoundaryType,
};

/// One polyline of an open trace together with the cells it passed.
struct Segment {
    shape: DiagramShape,
    cells: Vec<Cell>,
}

/// Traces boundary sets of one work grid into device-space shapes.
#[derive(Debug, Clone, Copy)]
pub struct ShapeTracer<'a> {
    grid: &'a Grid,
    cell_size: CellSize,
    round_corners: bool,
}

impl<'a> ShapeTracer<'a> {
    /// Creates a tracer over the full, normalized work grid.
    pub fn new(grid: &'a Grid, cell_size: CellSize) -> Self {
        Self {
            grid,
            cell_size,
            round_corners: false,
        }
    }

    /// Draws every corner round, not only `/` and `\` corners.
    pub fn with_round_corners(mut self, round_corners: bool) -> Self {
        self.round_corners = round_corners;
        self
    }

    /// Traces a classified set.
    ///
    /// Closed sets and single-cell open sets yield a simple shape; longer open
    /// sets yield a composite. Mixed sets and sets that cannot be walked yield
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnclassifiableCell`] if the walk meets a cell the
    /// continuation rules do not cover.
    pub fn trace(&self, set: &CellSet, kind: BoundaryType) -> Result<Option<DiagramComponent>, GridError> {
        match kind {
            BoundaryType::Closed => Ok(self.trace_closed(set)?.map(DiagramComponent::Simple)),
            BoundaryType::Open if set.len() == 1 => Ok(set
                .first()
                .and_then(|cell| self.small_line(cell))
                .map(DiagramComponent::Simple)),
            BoundaryType::Open => {
                let segments = self.trace_open(set)?;
                Ok((!segments.is_empty()).then_some(DiagramComponent::Composite(segments)))
            }
            BoundaryType::Mixed => Ok(None),
        }
    }

    /// Walks a closed loop and returns it as a polygon with one point per
    /// corner, junction or line end.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnclassifiableCell`] if a loop cell cannot be
    /// followed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scrawl_core::geometry::CellSize;
    /// # use scrawl_grid::{Grid, trace::ShapeTracer};
    /// let grid = Grid::from_rows(&["      ", " +--+ ", " |  | ", " +--+ ", "      "]).unwrap();
    /// let tracer = ShapeTracer::new(&grid, CellSize::default());
    /// let shape = tracer.trace_closed(&grid.all_boundaries()).unwrap().unwrap();
    /// assert_eq!(shape.points().len(), 4);
    /// assert!(shape.is_closed());
    /// ```
    pub fn trace_closed(&self, set: &CellSet) -> Result<Option<DiagramShape>, GridError> {
        if set.len() < 2 {
            return Ok(None);
        }
        let isolated = self.grid.isolate(set);
        let dashed = set.iter().any(|cell| chars::is_dashed(isolated.get(cell)));

        let Some(start) = set.first() else {
            return Ok(None);
        };
        let mut points = Vec::new();
        if isolated.is_point_cell(start) {
            points.push(self.point_for(&isolated, start));
        }

        let Some(&first) = isolated.follow_cell(start, None)?.first() else {
            debug!(start:%; "Closed set has no way out of its start cell");
            return Ok(None);
        };

        let mut previous = start;
        let mut current = first;
        let mut closed = false;
        for _ in 0..set.len() * 4 {
            if current == start {
                closed = true;
                break;
            }
            if isolated.is_point_cell(current) {
                points.push(self.point_for(&isolated, current));
            }
            let next = isolated.follow_cell(current, Some(previous))?;
            let [single] = next.as_slice() else {
                debug!(cell:% = current, branches = next.len(); "Closed walk left the loop");
                return Ok(None);
            };
            previous = current;
            current = *single;
        }
        if !closed {
            debug!(start:%; "Closed walk did not return to its start");
            return Ok(None);
        }

        let mut shape = DiagramShape::closed(points);
        shape.set_dashed(dashed);
        Ok(Some(shape))
    }

    /// Walks an open set into one polyline per branch.
    ///
    /// Segment ends that stop at a line end are connected to what lies just
    /// beyond them in the work grid: an arrowhead flags the end, a corner or
    /// junction pulls the end onto it. If any segment is dashed, all are.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnclassifiableCell`] if a cell cannot be
    /// followed.
    pub fn trace_open(&self, set: &CellSet) -> Result<Vec<DiagramShape>, GridError> {
        let isolated = self.grid.isolate(set);
        let Some(start) = set.iter().find(|&cell| isolated.is_lines_end(cell)) else {
            debug!(cells = set.len(); "Open set has no line end to start from");
            return Ok(Vec::new());
        };
        let Some(&first) = isolated.follow_cell(start, None)?.first() else {
            return Ok(Vec::new());
        };

        let mut visited = CellSet::new();
        visited.add(start);
        let mut pending = vec![(first, start)];
        let mut segments = Vec::new();

        while let Some((cell, previous)) = pending.pop() {
            if visited.contains(cell) {
                continue;
            }
            let segment = self.grow_segment(&isolated, cell, previous, &mut visited, &mut pending)?;
            segments.push(segment);
        }

        let dashed = segments.iter().any(|segment| segment.shape.is_dashed());
        Ok(segments
            .into_iter()
            .map(|mut segment| {
                segment.shape.set_dashed(dashed);
                self.connect_ends(&isolated, &mut segment);
                segment.shape
            })
            .collect())
    }

    fn grow_segment(
        &self,
        isolated: &Grid,
        mut cell: Cell,
        mut previous: Cell,
        visited: &mut CellSet,
        pending: &mut Vec<(Cell, Cell)>,
    ) -> Result<Segment, GridError> {
        let mut shape = DiagramShape::open(vec![self.point_for(isolated, previous)]);
        let mut dashed = chars::is_dashed(isolated.get(previous));
        let mut cells = vec![previous];

        loop {
            cells.push(cell);
            if !visited.add(cell) {
                shape.push_point(self.point_for(isolated, cell));
                break;
            }
            if isolated.is_point_cell(cell) {
                shape.push_point(self.point_for(isolated, cell));
            }
            dashed |= chars::is_dashed(isolated.get(cell));
            if isolated.is_lines_end(cell) {
                break;
            }

            let next = isolated.follow_cell(cell, Some(previous))?;
            if let [single] = next.as_slice() {
                previous = cell;
                cell = *single;
                continue;
            }
            for &branch in next.iter().rev() {
                if !visited.contains(branch) {
                    pending.push((branch, cell));
                }
            }
            break;
        }

        shape.set_dashed(dashed);
        Ok(Segment { shape, cells })
    }

    /// Flags or moves the ends of a segment that stop at a line end.
    fn connect_ends(&self, isolated: &Grid, segment: &mut Segment) {
        let count = segment.cells.len();
        if count < 2 {
            return;
        }
        let points = segment.shape.points().len();
        if points == 0 {
            return;
        }
        let ends = [
            (segment.cells[0], segment.cells[1], 0),
            (segment.cells[count - 1], segment.cells[count - 2], points - 1),
        ];
        for (end, inner, index) in ends {
            if !isolated.is_lines_end(end) {
                continue;
            }
            let Some(heading) = inner.direction_to(end) else {
                continue;
            };
            if let Some(point) = segment.shape.points_mut().get_mut(index) {
                self.anchor(point, end, heading);
            }
        }
    }

    /// Looks one cell beyond `end` in `heading` and adjusts `point`.
    fn anchor(&self, point: &mut ShapePoint, end: Cell, heading: Direction) {
        let anchor = end.step(heading);
        if arrowhead_at(self.grid, anchor) == Some(heading) {
            point.set_arrowhead(Some(heading));
            return;
        }
        let joins = matches!(
            self.grid.role(anchor),
            Some(CellRole::Intersection(_) | CellRole::Corner(_) | CellRole::Stub | CellRole::CrossOnLine(_))
        );
        if joins {
            point.set_position(self.cell_size.center(anchor));
        }
    }

    /// Traces a lone `-` or `|` as a line across its cell.
    pub fn small_line(&self, cell: Cell) -> Option<DiagramShape> {
        let c = self.grid.get(cell);
        if chars::is_dashed(c) {
            return None;
        }
        let size = self.cell_size;
        let (mut from, mut to, headings) = if c == '-' {
            (
                ShapePoint::new(size.center(cell).with_x(size.min_x(cell)), PointStyle::Normal),
                ShapePoint::new(size.center(cell).with_x(size.max_x(cell)), PointStyle::Normal),
                (Direction::West, Direction::East),
            )
        } else if c == '|' {
            (
                ShapePoint::new(size.center(cell).with_y(size.min_y(cell)), PointStyle::Normal),
                ShapePoint::new(size.center(cell).with_y(size.max_y(cell)), PointStyle::Normal),
                (Direction::North, Direction::South),
            )
        } else {
            warn!(cell:%, character:? = c; "Single-cell set is not a line");
            return None;
        };
        self.anchor(&mut from, cell, headings.0);
        self.anchor(&mut to, cell, headings.1);
        Some(DiagramShape::open(vec![from, to]))
    }

    fn point_for(&self, isolated: &Grid, cell: Cell) -> ShapePoint {
        let round = (self.round_corners && isolated.is_corner(cell)) || isolated.is_round_corner(cell);
        let style = if round {
            PointStyle::Round
        } else {
            PointStyle::Normal
        };
        ShapePoint::new(self.cell_size.center(cell), style)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn cells(cells: &[(i32, i32)]) -> CellSet {
        cells.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn test_trace_closed_box() {
        let g = grid(&["       ", " +---+ ", " |   | ", " +---+ ", "       "]);
        let tracer = ShapeTracer::new(&g, CellSize::default());
        let shape = tracer.trace_closed(&g.all_boundaries()).unwrap().unwrap();

        assert_eq!(shape.points().len(), 4);
        assert!(!shape.is_dashed());
        assert!(shape.points().iter().all(|point| point.style() == PointStyle::Normal));
        assert_approx_eq!(f32, shape.area(), 40.0 * 28.0);
    }

    #[test]
    fn test_trace_closed_dashed_and_round() {
        let g = grid(&["       ", " /---\\ ", " :   | ", " \\---/ ", "       "]);
        let tracer = ShapeTracer::new(&g, CellSize::default());
        let shape = tracer.trace_closed(&g.all_boundaries()).unwrap().unwrap();

        assert!(shape.is_dashed());
        assert_eq!(shape.points().len(), 4);
        assert!(shape.points().iter().all(|point| point.style() == PointStyle::Round));
    }

    #[test]
    fn test_trace_closed_round_corners_option() {
        let g = grid(&["      ", " +--+ ", " |  | ", " +--+ ", "      "]);
        let tracer = ShapeTracer::new(&g, CellSize::default()).with_round_corners(true);
        let shape = tracer.trace_closed(&g.all_boundaries()).unwrap().unwrap();
        assert!(shape.points().iter().all(|point| point.style() == PointStyle::Round));
    }

    #[test]
    fn test_trace_open_arrow() {
        let g = grid(&["        ", "  ----> ", "        "]);
        let tracer = ShapeTracer::new(&g, CellSize::default());
        let segments = tracer
            .trace_open(&cells(&[(2, 1), (3, 1), (4, 1), (5, 1)]))
            .unwrap();

        assert_eq!(segments.len(), 1);
        let points = segments[0].points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].arrowhead(), None);
        assert_eq!(points[1].arrowhead(), Some(Direction::East));
        assert_approx_eq!(f32, points[1].x(), 55.0);
    }

    #[test]
    fn test_trace_open_branches() {
        let g = grid(&[
            "         ",
            "  --+--  ",
            "    |    ",
            "    |    ",
            "         ",
        ]);
        let tracer = ShapeTracer::new(&g, CellSize::default());
        let segments = tracer.trace_open(&g.all_boundaries()).unwrap();

        assert_eq!(segments.len(), 3);
        assert!(segments.iter().all(|segment| segment.points().len() == 2));
    }

    #[test]
    fn test_trace_open_dash_spreads_to_all_segments() {
        let g = grid(&[
            "         ",
            "  ==+--  ",
            "    |    ",
            "         ",
        ]);
        let tracer = ShapeTracer::new(&g, CellSize::default());
        let segments = tracer.trace_open(&g.all_boundaries()).unwrap();

        assert!(!segments.is_empty());
        assert!(segments.iter().all(DiagramShape::is_dashed));
    }

    #[test]
    fn test_small_line() {
        let g = grid(&["   ", " - ", "   "]);
        let tracer = ShapeTracer::new(&g, CellSize::default());
        let line = tracer.small_line(Cell::new(1, 1)).unwrap();

        assert_approx_eq!(f32, line.points()[0].x(), 10.0);
        assert_approx_eq!(f32, line.points()[1].x(), 20.0);
        assert_approx_eq!(f32, line.points()[0].y(), 21.0);
    }

    #[test]
    fn test_small_line_skips_dashed_cells() {
        let g = grid(&["   ", " = ", "   "]);
        let tracer = ShapeTracer::new(&g, CellSize::default());
        assert!(tracer.small_line(Cell::new(1, 1)).is_none());
    }

    #[test]
    fn test_trace_dispatch() {
        let g = grid(&["   ", " | ", "   "]);
        let tracer = ShapeTracer::new(&g, CellSize::default());
        let single = cells(&[(1, 1)]);

        assert!(matches!(
            tracer.trace(&single, BoundaryType::Open).unwrap(),
            Some(DiagramComponent::Simple(_))
        ));
        assert_eq!(tracer.trace(&single, BoundaryType::Mixed).unwrap(), None);
    }
}
