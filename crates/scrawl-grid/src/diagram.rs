//! The recognition pipeline from source text to a [`Diagram`].

use log::{debug, info, warn};

use scrawl_core::{
    color::Color,
    diagram::Diagram,
    geometry::CellSize,
    shape::ShapeKind,
};

use crate::{
    RecognitionConfig,
    boundary::find_boundaries,
    decoration::{arrowhead_shape, find_arrowheads, point_marker_shape},
    error::GridError,
    markup::{Markup, TagVocabulary, strip_markup},
    normalize::normalize,
    preprocess,
    reduce::{BoundaryType, ReducedBoundaries, reduce},
    text::extract_texts,
    trace::ShapeTracer,
};

/// Recognizes the line art, decorations and text in `source`.
///
/// Boundary sets that cannot be traced are logged and skipped, so a
/// partly malformed drawing still yields every shape that could be read.
///
/// # Errors
///
/// Returns [`GridError`] only if the loaded text cannot be turned into a
/// grid or boundary discovery itself fails.
///
/// # Examples
///
/// ```
/// # use scrawl_grid::{RecognitionConfig, recognize};
/// let diagram = recognize("+---+\n| a |\n+---+\n", &RecognitionConfig::default()).unwrap();
///
/// assert_eq!(diagram.shapes().len(), 1);
/// assert_eq!(diagram.texts()[0].text(), "a");
/// ```
pub fn recognize(source: &str, config: &RecognitionConfig) -> Result<Diagram, GridError> {
    let cell_size = config.cell_size();

    let mut grid = preprocess::load(source, config.tab_size())?;
    let markup = strip_markup(&mut grid, &TagVocabulary::new(config.custom_tags()));
    let text_grid = grid.clone();
    let mut work = grid;
    let point_markers = normalize(&mut work);

    let reduced = reduce(&work, find_boundaries(&work)?);

    let mut diagram = Diagram::new(work.width(), work.height(), cell_size);
    let tracer = ShapeTracer::new(&work, cell_size).with_round_corners(config.round_corners());
    add_traced_sets(&mut diagram, &tracer, &reduced);

    apply_markup(&mut diagram, &markup, cell_size);

    for (cell, heading) in find_arrowheads(&work) {
        diagram.add_shape(arrowhead_shape(cell, heading, cell_size));
    }
    for cell in &point_markers {
        diagram.add_shape(point_marker_shape(cell, cell_size));
    }

    for mut text in extract_texts(&text_grid, cell_size) {
        let dark_fill = diagram
            .smallest_shape_containing(cell_size.center(text.cell()))
            .and_then(|index| diagram.shapes()[index].fill_color())
            .is_some_and(Color::is_dark);
        if dark_fill {
            text.set_color(Color::from_rgb8(255, 255, 255));
        }
        diagram.add_text(text);
    }

    info!(
        shapes = diagram.shapes().len(),
        composites = diagram.composites().len(),
        texts = diagram.texts().len();
        "Recognized diagram"
    );
    Ok(diagram)
}

/// Traces closed sets, then open ones. A set that fails is skipped.
fn add_traced_sets(diagram: &mut Diagram, tracer: &ShapeTracer<'_>, reduced: &ReducedBoundaries) {
    let sets = reduced
        .closed
        .iter()
        .map(|set| (set, BoundaryType::Closed))
        .chain(reduced.open.iter().map(|set| (set, BoundaryType::Open)));
    for (set, kind) in sets {
        match tracer.trace(set, kind) {
            Ok(Some(component)) => diagram.add_component(component),
            Ok(None) => debug!(cells = set.len(), kind:?; "Boundary set produced no shape"),
            Err(err) => warn!(err:%, cells = set.len(), kind:?; "Skipping boundary set"),
        }
    }
}

/// Hands each color and tag to the smallest closed shape around its cell.
fn apply_markup(diagram: &mut Diagram, markup: &Markup, cell_size: CellSize) {
    for (&cell, &color) in &markup.colors {
        match diagram.smallest_shape_containing(cell_size.center(cell)) {
            Some(index) => diagram.shapes_mut()[index].set_fill_color(Some(color)),
            None => debug!(cell:%, color:%; "Color token is not inside a shape"),
        }
    }
    for (&cell, tag) in &markup.tags {
        match diagram.smallest_shape_containing(cell_size.center(cell)) {
            Some(index) => diagram.shapes_mut()[index].set_kind(ShapeKind::from_tag(tag)),
            None => debug!(cell:%, tag = tag.as_str(); "Tag is not inside a shape"),
        }
    }
}
