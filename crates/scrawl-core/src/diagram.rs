//! The recognized diagram handed to renderers.

use crate::{
    geometry::{CellSize, Point},
    shape::{DiagramComponent, DiagramShape},
    text::DiagramText,
};

/// Everything recognized in one character grid.
///
/// Shapes are kept in the order they were produced: closed outlines first,
/// then single-cell lines, arrowheads and point markers. Composite line
/// networks are stored separately because they are only ever stroked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagram {
    columns: usize,
    rows: usize,
    cell_size: CellSize,
    shapes: Vec<DiagramShape>,
    composites: Vec<Vec<DiagramShape>>,
    texts: Vec<DiagramText>,
}

impl Diagram {
    /// Creates an empty diagram covering a `columns` by `rows` grid.
    pub fn new(columns: usize, rows: usize, cell_size: CellSize) -> Self {
        Self {
            columns,
            rows,
            cell_size,
            ..Self::default()
        }
    }

    /// Grid width in cells
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Grid height in cells
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    /// Width in device pixels
    pub fn width(&self) -> f32 {
        self.columns as f32 * self.cell_size.width()
    }

    /// Height in device pixels
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_size.height()
    }

    pub fn shapes(&self) -> &[DiagramShape] {
        &self.shapes
    }

    pub fn shapes_mut(&mut self) -> &mut [DiagramShape] {
        &mut self.shapes
    }

    pub fn composites(&self) -> &[Vec<DiagramShape>] {
        &self.composites
    }

    pub fn texts(&self) -> &[DiagramText] {
        &self.texts
    }

    pub fn add_shape(&mut self, shape: DiagramShape) {
        self.shapes.push(shape);
    }

    pub fn add_text(&mut self, text: DiagramText) {
        self.texts.push(text);
    }

    /// Stores a traced component under the matching collection.
    pub fn add_component(&mut self, component: DiagramComponent) {
        match component {
            DiagramComponent::Simple(shape) => self.shapes.push(shape),
            DiagramComponent::Composite(segments) => self.composites.push(segments),
        }
    }

    /// Returns the index of the smallest closed shape containing `point`.
    ///
    /// Only plain and tagged outlines take part; arrowheads and point markers
    /// never receive colors or tags. When two shapes have exactly the same
    /// area the first one wins.
    pub fn smallest_shape_containing(&self, point: Point) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (index, shape) in self.shapes.iter().enumerate() {
            if !is_fillable(shape) || !shape.contains(point) {
                continue;
            }
            let area = shape.area();
            if best.is_none_or(|(_, best_area)| area < best_area) {
                best = Some((index, area));
            }
        }
        best.map(|(index, _)| index)
    }
}

fn is_fillable(shape: &DiagramShape) -> bool {
    use crate::shape::ShapeKind;

    shape.is_closed() && !matches!(shape.kind(), ShapeKind::Arrowhead | ShapeKind::PointMarker)
}
