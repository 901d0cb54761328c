//! Traced vector shapes.
//!
//! A [`DiagramShape`] is an ordered list of [`ShapePoint`]s that forms either
//! a polygon (closed) or a polyline (open). An open line network with
//! branches is represented by several shapes grouped into a
//! [`DiagramComponent::Composite`].

use crate::{
    cell::Direction,
    color::Color,
    geometry::{Bounds, Point},
    stroke::StrokeStyle,
};

/// How the outline turns at a point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PointStyle {
    /// A sharp corner
    #[default]
    Normal,
    /// A rounded corner
    Round,
}

/// A vertex of a traced shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapePoint {
    position: Point,
    style: PointStyle,
    arrowhead: Option<Direction>,
}

impl ShapePoint {
    pub fn new(position: Point, style: PointStyle) -> Self {
        Self {
            position,
            style,
            arrowhead: None,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn x(&self) -> f32 {
        self.position.x()
    }

    pub fn y(&self) -> f32 {
        self.position.y()
    }

    pub fn style(&self) -> PointStyle {
        self.style
    }

    /// The heading of the arrowhead this line end points into, if any.
    pub fn arrowhead(&self) -> Option<Direction> {
        self.arrowhead
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn set_arrowhead(&mut self, heading: Option<Direction>) {
        self.arrowhead = heading;
    }
}

/// What a shape represents.
///
/// Tags written inside a shape (`{d}`, `{io}`, ...) select one of the
/// document kinds; the recognizer itself produces `Simple`, `Arrowhead` and
/// `PointMarker`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum ShapeKind {
    /// A plain outline
    #[default]
    Simple,
    Arrowhead,
    PointMarker,
    Document,
    Storage,
    Io,
    Decision,
    ManualOperation,
    Trapezoid,
    Ellipse,
    /// A user-defined tag name
    Custom(String),
}

impl ShapeKind {
    /// The tag names that map onto built-in kinds.
    pub const PRESET_TAGS: [&'static str; 7] = ["d", "s", "io", "c", "mo", "tr", "o"];

    /// Maps a tag name onto a shape kind.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scrawl_core::shape::ShapeKind;
    /// assert_eq!(ShapeKind::from_tag("io"), ShapeKind::Io);
    /// assert_eq!(ShapeKind::from_tag("cloud"), ShapeKind::Custom("cloud".to_string()));
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "d" => Self::Document,
            "s" => Self::Storage,
            "io" => Self::Io,
            "c" => Self::Decision,
            "mo" => Self::ManualOperation,
            "tr" => Self::Trapezoid,
            "o" => Self::Ellipse,
            custom => Self::Custom(custom.to_string()),
        }
    }

    /// Returns the name used for this kind in rendered output
    pub fn name(&self) -> &str {
        match self {
            Self::Simple => "simple",
            Self::Arrowhead => "arrowhead",
            Self::PointMarker => "point-marker",
            Self::Document => "document",
            Self::Storage => "storage",
            Self::Io => "io",
            Self::Decision => "decision",
            Self::ManualOperation => "manual-operation",
            Self::Trapezoid => "trapezoid",
            Self::Ellipse => "ellipse",
            Self::Custom(name) => name,
        }
    }
}

/// An ordered sequence of points forming a polygon or a polyline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagramShape {
    points: Vec<ShapePoint>,
    kind: ShapeKind,
    closed: bool,
    stroke_style: StrokeStyle,
    fill_color: Option<Color>,
}

impl DiagramShape {
    /// Creates an open polyline
    pub fn open(points: Vec<ShapePoint>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// Creates a closed polygon
    pub fn closed(points: Vec<ShapePoint>) -> Self {
        Self {
            points,
            closed: true,
            ..Self::default()
        }
    }

    pub fn points(&self) -> &[ShapePoint] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [ShapePoint] {
        &mut self.points
    }

    pub fn push_point(&mut self, point: ShapePoint) {
        self.points.push(point);
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn set_kind(&mut self, kind: ShapeKind) {
        self.kind = kind;
    }

    pub fn with_kind(mut self, kind: ShapeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        self.stroke_style
    }

    pub fn is_dashed(&self) -> bool {
        self.stroke_style.is_dashed()
    }

    pub fn set_dashed(&mut self, dashed: bool) {
        self.stroke_style = if dashed {
            StrokeStyle::Dashed
        } else {
            StrokeStyle::Solid
        };
    }

    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Returns the bounding box of all points, or `None` for an empty shape.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.points.iter().map(ShapePoint::position))
    }

    /// Returns the enclosed area using the shoelace formula.
    ///
    /// Open shapes enclose nothing and report zero.
    pub fn area(&self) -> f32 {
        if !self.closed || self.points.len() < 3 {
            return 0.0;
        }
        let doubled: f32 = self
            .edges()
            .map(|(a, b)| a.x() * b.y() - b.x() * a.y())
            .sum();
        doubled.abs() / 2.0
    }

    /// Returns true if `point` lies inside this closed shape.
    ///
    /// Uses an even-odd ray cast toward +X. Open shapes contain nothing.
    pub fn contains(&self, point: Point) -> bool {
        if !self.closed || self.points.len() < 3 {
            return false;
        }
        let mut inside = false;
        for (a, b) in self.edges() {
            let crosses = (a.y() > point.y()) != (b.y() > point.y());
            if crosses {
                let x_at = a.x() + (point.y() - a.y()) / (b.y() - a.y()) * (b.x() - a.x());
                if point.x() < x_at {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Iterates over consecutive point pairs, wrapping around to the start.
    fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let count = self.points.len();
        (0..count).map(move |i| {
            (
                self.points[i].position(),
                self.points[(i + 1) % count].position(),
            )
        })
    }
}

/// The result of tracing one boundary set.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagramComponent {
    /// A closed outline, or a single-cell open line
    Simple(DiagramShape),
    /// The segments of one open, possibly branching line network
    Composite(Vec<DiagramShape>),
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn point(x: f32, y: f32) -> ShapePoint {
        ShapePoint::new(Point::new(x, y), PointStyle::Normal)
    }

    fn square(min: f32, max: f32) -> DiagramShape {
        DiagramShape::closed(vec![
            point(min, min),
            point(max, min),
            point(max, max),
            point(min, max),
        ])
    }

    #[test]
    fn test_shape_area() {
        assert_approx_eq!(f32, square(0.0, 10.0).area(), 100.0);
        assert_approx_eq!(f32, DiagramShape::open(vec![point(0.0, 0.0)]).area(), 0.0);
    }

    #[test]
    fn test_shape_area_ignores_winding() {
        let mut points = square(0.0, 4.0).points().to_vec();
        points.reverse();
        assert_approx_eq!(f32, DiagramShape::closed(points).area(), 16.0);
    }

    #[test]
    fn test_shape_contains() {
        let shape = square(0.0, 10.0);
        assert!(shape.contains(Point::new(5.0, 5.0)));
        assert!(!shape.contains(Point::new(15.0, 5.0)));
        assert!(!shape.contains(Point::new(5.0, -1.0)));
    }

    #[test]
    fn test_open_shape_contains_nothing() {
        let shape = DiagramShape::open(square(0.0, 10.0).points().to_vec());
        assert!(!shape.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_shape_dashed_flag() {
        let mut shape = square(0.0, 1.0);
        assert!(!shape.is_dashed());
        shape.set_dashed(true);
        assert_eq!(shape.stroke_style(), StrokeStyle::Dashed);
    }

    #[test]
    fn test_shape_kind_from_preset_tags() {
        let kinds: Vec<_> = ShapeKind::PRESET_TAGS
            .iter()
            .map(|tag| ShapeKind::from_tag(tag))
            .collect();
        assert!(kinds.iter().all(|kind| !matches!(kind, ShapeKind::Custom(_))));
        assert_eq!(ShapeKind::from_tag("o"), ShapeKind::Ellipse);
    }

    #[test]
    fn test_shape_bounds() {
        let bounds = square(2.0, 6.0).bounds().unwrap();
        assert_eq!(bounds.min_x(), 2.0);
        assert_eq!(bounds.max_y(), 6.0);
        assert!(DiagramShape::default().bounds().is_none());
    }
}
