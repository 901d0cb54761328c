//! Arrowheads and point markers.

use scrawl_core::{
    cell::{Cell, Direction},
    color::Color,
    geometry::{CellSize, Point},
    shape::{DiagramShape, PointStyle, ShapeKind, ShapePoint},
};

use crate::{chars, grid::Grid};

/// Returns the heading of the arrowhead drawn at `cell`, if any.
///
/// An arrowhead character only counts when a line runs into it from behind:
/// `>` needs a line to its west, `v` a line to its north, and so on.
pub fn arrowhead_at(grid: &Grid, cell: Cell) -> Option<Direction> {
    let (heading, behind) = match grid.get(cell) {
        '>' => (Direction::East, cell.west()),
        '<' => (Direction::West, cell.east()),
        '^' => (Direction::North, cell.south()),
        'v' | 'V' => (Direction::South, cell.north()),
        _ => return None,
    };
    let c = grid.get(behind);
    let joined = if heading.is_horizontal() {
        chars::continues_horizontally(c)
    } else {
        chars::continues_vertically(c)
    };
    joined.then_some(heading)
}

/// Returns every arrowhead cell in row-major order.
pub fn find_arrowheads(grid: &Grid) -> Vec<(Cell, Direction)> {
    grid.cells()
        .filter_map(|cell| arrowhead_at(grid, cell).map(|heading| (cell, heading)))
        .collect()
}

/// Builds the filled triangle of an arrowhead spanning its cell.
pub fn arrowhead_shape(cell: Cell, heading: Direction, size: CellSize) -> DiagramShape {
    let (min_x, mid_x, max_x) = (size.min_x(cell), size.mid_x(cell), size.max_x(cell));
    let (min_y, mid_y, max_y) = (size.min_y(cell), size.mid_y(cell), size.max_y(cell));
    let corners = match heading {
        Direction::East => [(min_x, min_y), (max_x, mid_y), (min_x, max_y)],
        Direction::West => [(max_x, min_y), (min_x, mid_y), (max_x, max_y)],
        Direction::North => [(min_x, max_y), (mid_x, min_y), (max_x, max_y)],
        Direction::South => [(min_x, min_y), (mid_x, max_y), (max_x, min_y)],
    };
    let points = corners
        .into_iter()
        .map(|(x, y)| ShapePoint::new(Point::new(x, y), PointStyle::Normal))
        .collect();
    DiagramShape::closed(points)
        .with_kind(ShapeKind::Arrowhead)
        .with_fill_color(Color::default())
}

/// Builds the marker drawn for a `*` on a line: a single point at the cell
/// center.
pub fn point_marker_shape(cell: Cell, size: CellSize) -> DiagramShape {
    DiagramShape::closed(vec![ShapePoint::new(size.center(cell), PointStyle::Normal)])
        .with_kind(ShapeKind::PointMarker)
        .with_fill_color(Color::from_rgb8(255, 255, 255))
}
