//! Loading diagram text into a padded [`Grid`].

use log::debug;

use crate::{error::GridError, grid::Grid};

/// Blank cells added on every side of the loaded text.
pub const BORDER: usize = 2;

/// Character that replaces list bullets.
pub const BULLET: char = '\u{2022}';

/// Loads diagram text into a rectangular grid.
///
/// Trailing blank rows are dropped, tabs are expanded to the next multiple
/// of `tab_size`, list bullets are replaced so they are not read as point
/// markers, and the result is padded to a rectangle with a [`BORDER`]-cell
/// blank margin.
///
/// # Errors
///
/// Returns [`GridError::RaggedRow`] only if padding failed to square the
/// rows, which cannot happen for well-formed text.
///
/// # Examples
///
/// ```
/// # use scrawl_grid::preprocess::load;
/// let grid = load("+-+\n| |\n+-+\n\n", 8).unwrap();
/// assert_eq!(grid.width(), 7);
/// assert_eq!(grid.height(), 7);
/// ```
pub fn load(text: &str, tab_size: usize) -> Result<Grid, GridError> {
    let mut lines: Vec<Vec<char>> = text
        .lines()
        .map(|line| expand_tabs(line, tab_size))
        .collect();
    while lines
        .last()
        .is_some_and(|line| line.iter().all(|c| c.is_whitespace()))
    {
        lines.pop();
    }

    let width = lines.iter().map(Vec::len).max().unwrap_or(0);
    let padded_width = width + BORDER * 2;
    let blank_row = " ".repeat(padded_width);

    let mut rows = Vec::with_capacity(lines.len() + BORDER * 2);
    rows.extend(std::iter::repeat_n(blank_row.clone(), BORDER));
    for mut line in lines {
        replace_bullets(&mut line);
        line.resize(width, ' ');
        let mut row = " ".repeat(BORDER);
        row.extend(line);
        row.push_str(&" ".repeat(BORDER));
        rows.push(row);
    }
    rows.extend(std::iter::repeat_n(blank_row, BORDER));

    debug!(columns = padded_width, rows = rows.len(); "Loaded diagram text");
    Grid::from_rows(&rows)
}

fn expand_tabs(line: &str, tab_size: usize) -> Vec<char> {
    let tab_size = tab_size.max(1);
    let mut expanded = Vec::with_capacity(line.len());
    for c in line.chars() {
        if c == '\t' {
            let spaces = tab_size - expanded.len() % tab_size;
            expanded.extend(std::iter::repeat_n(' ', spaces));
        } else {
            expanded.push(c);
        }
    }
    expanded
}

/// Turns `o ` and `* ` into a bullet when they start a word run of text.
fn replace_bullets(line: &mut [char]) {
    for i in 0..line.len() {
        let starts_word = i == 0 || line[i - 1] == ' ';
        let is_marker = matches!(line[i], 'o' | '*');
        let followed_by_text = line.get(i + 1) == Some(&' ')
            && line
                .get(i + 2)
                .is_some_and(|c| !c.is_whitespace() && !c.is_ascii_punctuation());
        if starts_word && is_marker && followed_by_text {
            line[i] = ' ';
            line[i + 1] = BULLET;
        }
    }
}

#[cfg(test)]
mod tests {
    use scrawl_core::cell::Cell;

    use super::*;

    #[test]
    fn test_load_pads_and_borders() {
        let grid = load("ab\nc", 8).unwrap();
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.height(), 6);
        assert_eq!(grid.row(2).unwrap(), "  ab  ");
        assert_eq!(grid.row(3).unwrap(), "  c   ");
        assert_eq!(grid.row(0).unwrap(), "      ");
    }

    #[test]
    fn test_load_drops_trailing_blank_rows() {
        let grid = load("x\n   \n\t\n", 4).unwrap();
        assert_eq!(grid.height(), 5);
    }

    #[test]
    fn test_load_handles_crlf() {
        let grid = load("ab\r\ncd\r\n", 8).unwrap();
        assert_eq!(grid.row(3).unwrap(), "  cd  ");
    }

    #[test]
    fn test_expand_tabs() {
        let expanded: String = expand_tabs("a\tb", 4).into_iter().collect();
        assert_eq!(expanded, "a   b");
        let expanded: String = expand_tabs("\tb", 0).into_iter().collect();
        assert_eq!(expanded, " b");
    }

    #[test]
    fn test_replace_bullets() {
        let grid = load("* item\n  o other\no.k.\n*--", 8).unwrap();
        assert_eq!(grid.get(Cell::new(3, 2)), BULLET);
        assert_eq!(grid.get(Cell::new(2, 2)), ' ');
        assert_eq!(grid.get(Cell::new(5, 3)), BULLET);
        assert_eq!(grid.get(Cell::new(2, 4)), 'o');
        assert_eq!(grid.get(Cell::new(2, 5)), '*');
    }

    #[test]
    fn test_load_empty_text() {
        let grid = load("", 8).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 4);
    }
}
