//! SVG rendering of recognized diagrams.

use std::fmt::Write as _;

use log::debug;
use svg::{self, Node, node::element as svg_element};

use scrawl_core::{
    apply_stroke,
    color::Color,
    diagram::Diagram,
    geometry::{Bounds, Point},
    shape::{DiagramShape, PointStyle, ShapeKind},
    stroke::StrokeDefinition,
    text::{DiagramText, TextAlignment},
};

use super::{Error, Exporter};
use crate::config::StyleConfig;

/// Renders a [`Diagram`] as an SVG document.
#[derive(Debug, Clone)]
pub struct SvgExporter {
    background: Color,
    stroke: StrokeDefinition,
    font_family: String,
}

impl SvgExporter {
    /// Creates an exporter using the colors and font of `style`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a configured color cannot be parsed.
    pub fn new(style: &StyleConfig) -> Result<Self, Error> {
        Ok(Self {
            background: style.background_color().map_err(Error::Render)?,
            stroke: StrokeDefinition::new(
                style.stroke_color().map_err(Error::Render)?,
                style.stroke_width(),
            ),
            font_family: style.font_family().to_string(),
        })
    }

    fn render_document(&self, diagram: &Diagram) -> svg::Document {
        let (width, height) = (diagram.width(), diagram.height());
        let mut doc = svg::Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height)
            .add(
                svg_element::Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", &self.background),
            );

        let radius = diagram.cell_size().width().min(diagram.cell_size().height()) / 2.0;

        // Larger outlines first so nested fills stay visible.
        let mut outlines: Vec<&DiagramShape> = diagram
            .shapes()
            .iter()
            .filter(|shape| !matches!(shape.kind(), ShapeKind::Arrowhead | ShapeKind::PointMarker))
            .collect();
        outlines.sort_by(|a, b| b.area().total_cmp(&a.area()));
        for shape in outlines {
            doc.append(self.render_outline(shape, radius));
        }

        for segments in diagram.composites() {
            let mut group = svg_element::Group::new().set("class", "line");
            for segment in segments {
                group.append(self.render_outline(segment, radius));
            }
            doc.append(group);
        }

        for shape in diagram.shapes() {
            match shape.kind() {
                ShapeKind::Arrowhead => doc.append(self.render_arrowhead(shape)),
                ShapeKind::PointMarker => doc.append(self.render_point_marker(shape, radius / 2.0)),
                _ => {}
            }
        }

        let font_size = diagram.cell_size().height();
        for text in diagram.texts() {
            doc.append(self.render_text(text, font_size));
        }

        doc
    }

    /// Draws a traced outline or line segment.
    ///
    /// Ellipse and decision shapes are drawn over their bounds instead of
    /// along their points.
    fn render_outline(&self, shape: &DiagramShape, radius: f32) -> Box<dyn Node> {
        let stroke = self.stroke.clone().with_style(shape.stroke_style());
        let fill = match (shape.is_closed(), shape.fill_color()) {
            (true, Some(color)) => color.to_string(),
            (true, None) => self.background.to_string(),
            (false, _) => "none".to_string(),
        };

        let bounds = shape.bounds().unwrap_or_default();
        match shape.kind() {
            ShapeKind::Ellipse if shape.is_closed() => {
                let center = bounds.center();
                let ellipse = svg_element::Ellipse::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("rx", bounds.width() / 2.0)
                    .set("ry", bounds.height() / 2.0)
                    .set("fill", fill);
                Box::new(apply_stroke!(ellipse, &stroke))
            }
            ShapeKind::Decision if shape.is_closed() => {
                let path = svg_element::Path::new()
                    .set("d", diamond_path_data(bounds))
                    .set("fill", fill)
                    .set("class", shape.kind().name());
                Box::new(apply_stroke!(path, &stroke))
            }
            kind => {
                let path = svg_element::Path::new()
                    .set("d", outline_path_data(shape, radius))
                    .set("fill", fill)
                    .set("class", kind.name());
                Box::new(apply_stroke!(path, &stroke))
            }
        }
    }

    fn render_arrowhead(&self, shape: &DiagramShape) -> svg_element::Path {
        svg_element::Path::new()
            .set("d", outline_path_data(shape, 0.0))
            .set("fill", &self.stroke.color())
            .set("stroke", "none")
    }

    fn render_point_marker(&self, shape: &DiagramShape, radius: f32) -> svg_element::Circle {
        let center = shape
            .points()
            .first()
            .map_or_else(Point::default, |point| point.position());
        let fill = shape.fill_color().unwrap_or(self.background);
        let circle = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", radius)
            .set("fill", &fill);
        apply_stroke!(circle, &self.stroke)
    }

    fn render_text(&self, text: &DiagramText, font_size: f32) -> svg_element::Text {
        let bounds = text.bounds();
        let (x, anchor) = match text.alignment() {
            TextAlignment::Left => (bounds.min_x(), "start"),
            TextAlignment::Right => (bounds.max_x(), "end"),
        };
        svg_element::Text::new(text.text())
            .set("x", x)
            .set("text-anchor", anchor)
            .set("y", bounds.center().y())
            .set("dominant-baseline", "central")
            .set("font-family", self.font_family.as_str())
            .set("font-size", font_size)
            .set("fill", &text.color())
            .set("xml:space", "preserve")
    }
}

impl Exporter for SvgExporter {
    fn export_diagram(&self, diagram: &Diagram) -> Result<String, Error> {
        let doc = self.render_document(diagram);
        let svg = doc.to_string();
        debug!(bytes = svg.len(); "SVG document rendered");
        Ok(svg)
    }
}

/// Builds path data through the points of `shape`.
///
/// A round point is replaced by a quadratic curve that starts and ends
/// `radius` away from it along its two edges. The end points of an open
/// shape are never rounded.
fn outline_path_data(shape: &DiagramShape, radius: f32) -> String {
    let points = shape.points();
    let count = points.len();
    let closed = shape.is_closed();
    let mut data = String::new();

    for (i, point) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        let is_end = !closed && (i == 0 || i + 1 == count);
        if point.style() != PointStyle::Round || is_end || count < 3 || radius <= 0.0 {
            let _ = write!(data, "{command} {} {} ", point.x(), point.y());
            continue;
        }

        let position = point.position();
        let previous = points[(i + count - 1) % count].position();
        let next = points[(i + 1) % count].position();
        let from = position.toward(previous, radius);
        let to = position.toward(next, radius);
        let _ = write!(
            data,
            "{command} {} {} Q {} {} {} {} ",
            from.x(),
            from.y(),
            position.x(),
            position.y(),
            to.x(),
            to.y()
        );
    }

    if closed {
        data.push('Z');
    }
    data.trim_end().to_string()
}

fn diamond_path_data(bounds: Bounds) -> String {
    let center = bounds.center();
    format!(
        "M {} {} L {} {} L {} {} L {} {} Z",
        center.x(),
        bounds.min_y(),
        bounds.max_x(),
        center.y(),
        center.x(),
        bounds.max_y(),
        bounds.min_x(),
        center.y()
    )
}
