//! The 3×3 pattern grammar used to classify cells.
//!
//! Every pattern is written as three rows of slot codes and compiled into a
//! [`Pattern`] at compile time by the `const fn` [`Pattern::parse`]. The
//! tables at the bottom of this module are plain constants.
//!
//! | Code | Slot matches |
//! |------|--------------|
//! | `.` `~` | any character |
//! | `[` | anything but a vertical line (`|` `:`) |
//! | `!` | anything that cannot draw a line (`- = / \ + | :` excluded) |
//! | `^` | a character that continues a line vertically (`| : + / \`) |
//! | `(` | a character that continues a line horizontally (`- = + / \`) |
//! | `-` | a horizontal line (`-` `=`) |
//! | `|` | a vertical line (`|` `:`) |
//! | `+` `*` `/` `\` | that literal character |
//! | `1`..`8` | a character accepted by that [`EntryPoint`] |
//! | `%1`..`%8` | a character *not* accepted by that entry point |

use crate::chars::{self, OUTSIDE};

/// The side of a neighbor cell through which a line enters it.
///
/// Numbered clockwise from the north-west corner. A west neighbor connects
/// through its east side, so it is tested against [`EntryPoint::East`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
}

impl EntryPoint {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            b'1' => Self::NorthWest,
            b'2' => Self::North,
            b'3' => Self::NorthEast,
            b'4' => Self::East,
            b'5' => Self::SouthEast,
            b'6' => Self::South,
            b'7' => Self::SouthWest,
            b'8' => Self::West,
            _ => panic!("entry points are numbered 1 to 8"),
        }
    }

    /// Returns true if `c` can carry a line through this side of its cell.
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::NorthWest | Self::SouthEast => c == '\\',
            Self::NorthEast | Self::SouthWest => c == '/',
            Self::North | Self::South => chars::continues_vertically(c),
            Self::East | Self::West => chars::continues_horizontally(c),
        }
    }
}

/// One position of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Any,
    Literal(char),
    HorizontalLine,
    VerticalLine,
    NotVerticalLine,
    NonLine,
    VerticalRun,
    HorizontalRun,
    Entry(EntryPoint),
    NotEntry(EntryPoint),
}

impl Slot {
    const fn from_code(code: u8) -> Self {
        match code {
            b'.' | b'~' => Self::Any,
            b'[' => Self::NotVerticalLine,
            b'!' => Self::NonLine,
            b'^' => Self::VerticalRun,
            b'(' => Self::HorizontalRun,
            b'-' => Self::HorizontalLine,
            b'|' => Self::VerticalLine,
            b'+' => Self::Literal('+'),
            b'*' => Self::Literal('*'),
            b'/' => Self::Literal('/'),
            b'\\' => Self::Literal('\\'),
            b'1'..=b'8' => Self::Entry(EntryPoint::from_digit(code)),
            _ => panic!("unknown pattern slot code"),
        }
    }

    /// Returns true if `c` satisfies this slot.
    pub fn matches(self, c: char) -> bool {
        match self {
            Self::Any => true,
            Self::Literal(expected) => c == expected,
            Self::HorizontalLine => chars::is_horizontal_line(c),
            Self::VerticalLine => chars::is_vertical_line(c),
            Self::NotVerticalLine => !chars::is_vertical_line(c),
            Self::NonLine => !chars::is_line_art(c),
            Self::VerticalRun => chars::continues_vertically(c),
            Self::HorizontalRun => chars::continues_horizontally(c),
            Self::Entry(entry) => entry.accepts(c),
            Self::NotEntry(entry) => !entry.accepts(c),
        }
    }
}

/// The 3×3 neighborhood of a cell, `rows[dy][dx]` with the cell at `[1][1]`.
///
/// Positions beyond the grid hold [`OUTSIDE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    rows: [[char; 3]; 3],
}

impl Window {
    pub fn new(rows: [[char; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Builds a window from three text rows, for tests and examples.
    ///
    /// Missing characters read as [`OUTSIDE`].
    pub fn from_strs(rows: [&str; 3]) -> Self {
        let mut window = [[OUTSIDE; 3]; 3];
        for (row, text) in window.iter_mut().zip(rows) {
            for (slot, c) in row.iter_mut().zip(text.chars()) {
                *slot = c;
            }
        }
        Self { rows: window }
    }

    pub fn center(&self) -> char {
        self.rows[1][1]
    }

    pub fn north(&self) -> char {
        self.rows[0][1]
    }

    pub fn south(&self) -> char {
        self.rows[2][1]
    }

    pub fn east(&self) -> char {
        self.rows[1][2]
    }

    pub fn west(&self) -> char {
        self.rows[1][0]
    }

    /// Renders the window as three lines, showing out-of-grid cells as blanks.
    pub fn render(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&c| if c == OUTSIDE { ' ' } else { c })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A compiled 3×3 template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    slots: [[Slot; 3]; 3],
}

impl Pattern {
    /// Compiles three rows of slot codes.
    ///
    /// Each row must describe exactly three slots; `%n` counts as one slot.
    /// Invalid codes fail at compile time when used in a constant.
    pub const fn parse(rows: [&str; 3]) -> Self {
        let mut slots = [[Slot::Any; 3]; 3];
        let mut y = 0;
        while y < 3 {
            let codes = rows[y].as_bytes();
            let mut i = 0;
            let mut x = 0;
            while i < codes.len() {
                if x == 3 {
                    panic!("pattern rows hold three slots");
                }
                if codes[i] == b'%' {
                    slots[y][x] = Slot::NotEntry(EntryPoint::from_digit(codes[i + 1]));
                    i += 2;
                } else {
                    slots[y][x] = Slot::from_code(codes[i]);
                    i += 1;
                }
                x += 1;
            }
            if x != 3 {
                panic!("pattern rows hold three slots");
            }
            y += 1;
        }
        Self { slots }
    }

    /// Returns true if every slot accepts the window character at its place.
    pub fn matches(&self, window: &Window) -> bool {
        self.slots
            .iter()
            .zip(window.rows.iter())
            .all(|(slots, chars)| slots.iter().zip(chars).all(|(slot, &c)| slot.matches(c)))
    }
}

/// Returns true if any pattern of the group matches.
pub fn matches_any(group: &[Pattern], window: &Window) -> bool {
    group.iter().any(|pattern| pattern.matches(window))
}

// =============================================================================
// Pattern tables
// =============================================================================

pub const CROSS: Pattern = Pattern::parse([".6.", "4+8", ".2."]);
pub const K: Pattern = Pattern::parse([".6.", "%4+8", ".2."]);
pub const T: Pattern = Pattern::parse([".%6.", "4+8", ".2."]);
pub const INVERSE_K: Pattern = Pattern::parse([".6.", "4+%8", ".2."]);
pub const INVERSE_T: Pattern = Pattern::parse([".6.", "4+8", ".%2."]);

pub const NORMAL_CORNER_1: Pattern = Pattern::parse([".[.", "~+(", ".^."]);
pub const NORMAL_CORNER_2: Pattern = Pattern::parse([".[.", "(+~", ".^."]);
pub const NORMAL_CORNER_3: Pattern = Pattern::parse([".^.", "(+~", ".[."]);
pub const NORMAL_CORNER_4: Pattern = Pattern::parse([".^.", "~+(", ".[."]);

pub const ROUND_CORNER_1: Pattern = Pattern::parse([".[.", "~/8", ".2."]);
pub const ROUND_CORNER_2: Pattern = Pattern::parse([".[.", "4\\~", ".2."]);
pub const ROUND_CORNER_3: Pattern = Pattern::parse([".6.", "4/~", ".[."]);
pub const ROUND_CORNER_4: Pattern = Pattern::parse([".6.", "~\\8", ".[."]);

/// Dead-end nubs: a corner character with exactly one arm.
pub const STUBS: [Pattern; 8] = [
    Pattern::parse(["!^!", "!+!", ".!."]),
    Pattern::parse(["!^!", "!+!", ".-."]),
    Pattern::parse(["!!.", "(+!", "!!."]),
    Pattern::parse(["!!.", "(+|", "!!."]),
    Pattern::parse([".!.", "!+!", "!^!"]),
    Pattern::parse([".-.", "!+!", "!^!"]),
    Pattern::parse([".!!", "!+(", ".!!"]),
    Pattern::parse([".!!", "|+(", ".!!"]),
];

/// Line cells whose run stops on one side.
pub const LINE_ENDS: [Pattern; 8] = [
    Pattern::parse(["...", "(-!", "..."]),
    Pattern::parse(["...", "(-|", "..."]),
    Pattern::parse(["...", "!-(", "..."]),
    Pattern::parse(["...", "|-(", "..."]),
    Pattern::parse([".^.", ".|.", ".!."]),
    Pattern::parse([".^.", ".|.", ".-."]),
    Pattern::parse([".!.", ".|.", ".^."]),
    Pattern::parse([".-.", ".|.", ".^."]),
];

pub const HORIZONTAL_CROSS_ON_LINE: Pattern = Pattern::parse(["...", "(+(", "..."]);
pub const VERTICAL_CROSS_ON_LINE: Pattern = Pattern::parse([".^.", ".+.", ".^."]);

pub const STARS_ON_LINE: [Pattern; 6] = [
    Pattern::parse(["...", "(*(", "..."]),
    Pattern::parse(["...", "!*(", "..."]),
    Pattern::parse(["...", "(*!", "..."]),
    Pattern::parse([".^.", ".*.", ".^."]),
    Pattern::parse([".!.", ".*.", ".^."]),
    Pattern::parse([".^.", ".*.", ".!."]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_points() {
        assert!(EntryPoint::South.accepts('|'));
        assert!(EntryPoint::South.accepts('+'));
        assert!(!EntryPoint::South.accepts('-'));
        assert!(EntryPoint::West.accepts('='));
        assert!(EntryPoint::NorthWest.accepts('\\'));
        assert!(!EntryPoint::NorthWest.accepts('/'));
    }

    #[test]
    fn test_parse_not_entry_counts_as_one_slot() {
        assert_eq!(T.slots[0][1], Slot::NotEntry(EntryPoint::South));
        assert_eq!(T.slots[0][2], Slot::Any);
    }

    #[test]
    fn test_cross_matches() {
        let window = Window::from_strs([" | ", "-+-", " | "]);
        assert!(CROSS.matches(&window));
        assert!(!T.matches(&window));
    }

    #[test]
    fn test_t_matches() {
        let window = Window::from_strs(["   ", "-+-", " | "]);
        assert!(T.matches(&window));
        assert!(!CROSS.matches(&window));
        assert!(!INVERSE_T.matches(&window));
    }

    #[test]
    fn test_corner_rejects_vertical_line_above() {
        let open_top = Window::from_strs(["   ", " +-", " | "]);
        let closed_top = Window::from_strs([" | ", " +-", " | "]);
        assert!(NORMAL_CORNER_1.matches(&open_top));
        assert!(!NORMAL_CORNER_1.matches(&closed_top));
    }

    #[test]
    fn test_round_corner() {
        let window = Window::from_strs(["   ", " /-", " | "]);
        assert!(ROUND_CORNER_1.matches(&window));
        assert!(!NORMAL_CORNER_1.matches(&window));
    }

    #[test]
    fn test_stub_and_line_end() {
        let stub = Window::from_strs(["   ", " +-", "   "]);
        assert!(matches_any(&STUBS, &stub));

        let end = Window::from_strs(["   ", "-- ", "   "]);
        assert!(matches_any(&LINE_ENDS, &end));

        let middle = Window::from_strs(["   ", "---", "   "]);
        assert!(!matches_any(&LINE_ENDS, &middle));
    }

    #[test]
    fn test_outside_reads_as_non_line() {
        assert!(Slot::NonLine.matches(OUTSIDE));

        let at_left_edge = Window::new([
            [OUTSIDE, ' ', ' '],
            [OUTSIDE, '-', '='],
            [OUTSIDE, ' ', ' '],
        ]);
        assert!(LINE_ENDS[2].matches(&at_left_edge));
    }

    #[test]
    fn test_window_render() {
        let window = Window::from_strs(["ab", "cde", "f"]);
        assert_eq!(window.render(), "ab \ncde\nf  ");
    }
}
