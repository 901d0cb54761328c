//! Extracting the free text left around the line art.

use log::debug;

use scrawl_core::{
    cell::Cell,
    geometry::{Bounds, CellSize, Point},
    text::{DiagramText, TextAlignment},
};

use crate::{decoration::find_arrowheads, grid::Grid};

/// Splits every row into strings separated by at least two blanks.
///
/// Single blanks stay inside a string so that words of one label are kept
/// together. Trailing blanks are trimmed.
///
/// # Examples
///
/// ```
/// # use scrawl_core::cell::Cell;
/// # use scrawl_grid::{Grid, text::find_strings};
/// let grid = Grid::from_rows(&[" two words   apart "]).unwrap();
/// let strings = find_strings(&grid);
///
/// assert_eq!(strings[0], (Cell::new(1, 0), "two words".to_string()));
/// assert_eq!(strings[1], (Cell::new(13, 0), "apart".to_string()));
/// ```
pub fn find_strings(grid: &Grid) -> Vec<(Cell, String)> {
    let mut strings = Vec::new();
    for y in 0..grid.height() {
        let mut current: Option<(Cell, String)> = None;
        let mut blanks = 0;
        for x in 0..grid.width() {
            let cell = Cell::new(x as i32, y as i32);
            let c = grid.get(cell);
            if grid.is_blank(cell) {
                blanks += 1;
                if blanks >= 2 {
                    strings.extend(current.take().map(trim_end));
                } else if let Some((_, text)) = current.as_mut() {
                    text.push(' ');
                }
                continue;
            }
            blanks = 0;
            match current.as_mut() {
                Some((_, text)) => text.push(c),
                None => current = Some((cell, c.to_string())),
            }
        }
        strings.extend(current.take().map(trim_end));
    }
    strings
}

fn trim_end((cell, text): (Cell, String)) -> (Cell, String) {
    (cell, text.trim_end().to_string())
}

/// Blanks arrowheads and boundaries in a copy of `grid` and returns the
/// remaining strings as positioned texts.
///
/// Every text starts out black; callers recolor texts sitting on dark fills.
/// A text whose last character shares its column with more string ends than
/// its first character shares with string starts is right aligned.
pub fn extract_texts(grid: &Grid, cell_size: CellSize) -> Vec<DiagramText> {
    let mut stripped = grid.clone();
    for (cell, _) in find_arrowheads(grid) {
        stripped.set(cell, ' ');
    }
    let boundaries = stripped.all_boundaries();
    stripped.fill_cells(boundaries.iter(), ' ');

    let texts: Vec<DiagramText> = find_strings(&stripped)
        .into_iter()
        .map(|(start, text)| {
            let last = start.translate(text.chars().count() as i32 - 1, 0);
            let bounds = Bounds::new(
                Point::new(cell_size.min_x(start), cell_size.min_y(start)),
                Point::new(cell_size.max_x(last), cell_size.max_y(last)),
            );
            let alignment = alignment_of(&stripped, start, last);
            DiagramText::new(text, start, bounds).with_alignment(alignment)
        })
        .collect();

    debug!(
        texts = texts.len(),
        right_aligned = texts
            .iter()
            .filter(|text| text.alignment() == TextAlignment::Right)
            .count();
        "Extracted texts"
    );
    texts
}

fn alignment_of(grid: &Grid, start: Cell, last: Cell) -> TextAlignment {
    let other_ends = others_in_column(grid, last, is_string_end);
    let other_starts = others_in_column(grid, start, is_string_start);
    if other_ends > 0 && other_starts < other_ends {
        TextAlignment::Right
    } else {
        TextAlignment::Left
    }
}

/// Counts the cells in the column of `cell`, excluding it, that satisfy
/// `test`. Returns zero if `cell` itself does not.
fn others_in_column(grid: &Grid, cell: Cell, test: fn(&Grid, Cell) -> bool) -> usize {
    if !test(grid, cell) {
        return 0;
    }
    (0..grid.height() as i32)
        .map(|y| Cell::new(cell.x(), y))
        .filter(|&other| other != cell && test(grid, other))
        .count()
}

fn is_open(grid: &Grid, cell: Cell) -> bool {
    !grid.contains(cell) || grid.is_blank(cell)
}

fn is_string_start(grid: &Grid, cell: Cell) -> bool {
    !is_open(grid, cell) && is_open(grid, cell.west())
}

fn is_string_end(grid: &Grid, cell: Cell) -> bool {
    !is_open(grid, cell) && is_open(grid, cell.east())
}
