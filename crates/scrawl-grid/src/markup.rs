//! In-band markup tokens: fill colors (`cRED`, `cF80`) and shape tags
//! (`{d}`, `{io}`, ...).
//!
//! Tokens are parsed with winnow, recorded at their first cell and blanked
//! out of the grid before any geometry is recognized.

use indexmap::IndexMap;
use log::{debug, trace};
use winnow::{
    Parser as _,
    combinator::{alt, delimited, preceded},
    error::ModalResult,
    token::take_while,
};

use scrawl_core::{cell::Cell, color::Color, shape::ShapeKind};

use crate::grid::Grid;

/// Tokens found in a grid, keyed by the cell each token started at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Markup {
    pub colors: IndexMap<Cell, Color>,
    pub tags: IndexMap<Cell, String>,
}

/// Tag names recognized inside braces.
#[derive(Debug, Clone)]
pub struct TagVocabulary {
    custom: Vec<String>,
}

impl TagVocabulary {
    /// Creates a vocabulary of the preset tags plus `custom`.
    pub fn new(custom: &[String]) -> Self {
        Self {
            custom: custom.to_vec(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        ShapeKind::PRESET_TAGS.contains(&name) || self.custom.iter().any(|tag| tag == name)
    }
}

impl Default for TagVocabulary {
    fn default() -> Self {
        Self::new(&[])
    }
}

fn color_code<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    alt((
        "GRE",
        "BLU",
        "PNK",
        "RED",
        "YEL",
        "BLK",
        take_while(3, |c: char| c.is_ascii_digit() || ('A'..='F').contains(&c)),
    ))
    .parse_next(input)
}

/// Parses `c` followed by a preset name or three uppercase hex digits.
fn color_token(input: &mut &str) -> ModalResult<Color> {
    preceded('c', color_code)
        .verify_map(Color::from_code)
        .parse_next(input)
}

/// Parses `{name}` and returns the name.
fn tag_token<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    delimited(
        '{',
        take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
        '}',
    )
    .parse_next(input)
}

/// Finds and blanks every color and tag token in `grid`.
///
/// # Examples
///
/// ```
/// # use scrawl_core::cell::Cell;
/// # use scrawl_grid::{Grid, markup::{strip_markup, TagVocabulary}};
/// let mut grid = Grid::from_rows(&["| cRED {d} |"]).unwrap();
/// let markup = strip_markup(&mut grid, &TagVocabulary::default());
///
/// assert!(markup.colors.contains_key(&Cell::new(2, 0)));
/// assert_eq!(markup.tags.get(&Cell::new(7, 0)).map(String::as_str), Some("d"));
/// assert_eq!(grid.row(0).unwrap(), "|          |");
/// ```
pub fn strip_markup(grid: &mut Grid, vocabulary: &TagVocabulary) -> Markup {
    let mut markup = Markup::default();

    for y in 0..grid.height() {
        let Some(row) = grid.row(y) else {
            continue;
        };
        let offsets: Vec<usize> = row.char_indices().map(|(offset, _)| offset).collect();
        let mut column = 0;
        while column < offsets.len() {
            let rest = &row[offsets[column]..];
            let cell = Cell::new(column as i32, y as i32);

            let tag = tag_token
                .parse_peek(rest)
                .ok()
                .filter(|(_, name)| vocabulary.contains(name));
            let consumed = if let Ok((remaining, color)) = color_token.parse_peek(rest) {
                trace!(cell:%, color:%; "Found color token");
                markup.colors.insert(cell, color);
                rest.len() - remaining.len()
            } else if let Some((remaining, name)) = tag {
                trace!(cell:%, tag = name; "Found tag token");
                markup.tags.insert(cell, name.to_string());
                rest.len() - remaining.len()
            } else {
                column += 1;
                continue;
            };

            // Tokens are ASCII, so bytes and cells line up.
            for offset in 0..consumed {
                grid.set(cell.translate(offset as i32, 0), ' ');
            }
            column += consumed;
        }
    }

    debug!(colors = markup.colors.len(), tags = markup.tags.len(); "Stripped markup tokens");
    markup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_token() {
        let (rest, color) = color_token.parse_peek("cF80 text").unwrap();
        assert_eq!(rest, " text");
        assert_eq!(color.to_rgb8(), [255, 136, 0]);

        let (_, color) = color_token.parse_peek("cBLU").unwrap();
        assert_eq!(color.to_rgb8(), [0x55, 0x55, 0xBB]);

        assert!(color_token.parse_peek("cf80").is_err());
        assert!(color_token.parse_peek("cXYZ").is_err());
        assert!(color_token.parse_peek("c12").is_err());
    }

    #[test]
    fn test_tag_token() {
        assert_eq!(tag_token.parse_peek("{io} x").unwrap(), (" x", "io"));
        assert!(tag_token.parse_peek("{}").is_err());
        assert!(tag_token.parse_peek("{a b}").is_err());
    }

    #[test]
    fn test_unknown_tags_stay_as_text() {
        let mut grid = Grid::from_rows(&["{zz} {mo}"]).unwrap();
        let markup = strip_markup(&mut grid, &TagVocabulary::default());

        assert_eq!(markup.tags.len(), 1);
        assert_eq!(grid.row(0).unwrap(), "{zz}     ");
    }

    #[test]
    fn test_custom_tags() {
        let vocabulary = TagVocabulary::new(&["cloud".to_string()]);
        let mut grid = Grid::from_rows(&["{cloud}"]).unwrap();
        let markup = strip_markup(&mut grid, &vocabulary);

        assert_eq!(markup.tags.get(&Cell::new(0, 0)).map(String::as_str), Some("cloud"));
        assert_eq!(grid.row(0).unwrap(), "       ");
    }

    #[test]
    fn test_tokens_after_non_ascii_cells() {
        let mut grid = Grid::from_rows(&["\u{2022} cGRE"]).unwrap();
        let markup = strip_markup(&mut grid, &TagVocabulary::default());

        assert!(markup.colors.contains_key(&Cell::new(2, 0)));
        assert_eq!(grid.row(0).unwrap(), "\u{2022}     ");
    }
}
