//! Character classes of the line-art alphabet.

/// An empty cell.
pub const BLANK: char = ' ';

/// Returned for reads outside the grid. It matches no line character, so the
/// edge of the buffer behaves like a blank that never equals a real blank.
pub const OUTSIDE: char = '\0';

/// Characters that can form part of a shape outline.
pub const BOUNDARY_CHARS: [char; 7] = ['/', '\\', '|', '-', '*', '=', ':'];

pub fn is_blank(c: char) -> bool {
    c == BLANK
}

pub fn is_boundary_char(c: char) -> bool {
    BOUNDARY_CHARS.contains(&c)
}

pub fn is_horizontal_line(c: char) -> bool {
    matches!(c, '-' | '=')
}

pub fn is_vertical_line(c: char) -> bool {
    matches!(c, '|' | ':')
}

pub fn is_line(c: char) -> bool {
    is_horizontal_line(c) || is_vertical_line(c)
}

pub fn is_corner_char(c: char) -> bool {
    matches!(c, '+' | '/' | '\\')
}

pub fn is_round_corner_char(c: char) -> bool {
    matches!(c, '/' | '\\')
}

pub fn is_point_marker(c: char) -> bool {
    c == '*'
}

/// Characters that make the whole line they belong to dashed.
pub fn is_dashed(c: char) -> bool {
    matches!(c, ':' | '~' | '=')
}

pub fn is_arrowhead(c: char) -> bool {
    matches!(c, '<' | '>' | '^' | 'v' | 'V')
}

/// Characters that may continue a line running north-south through a cell.
pub fn continues_vertically(c: char) -> bool {
    matches!(c, '|' | ':' | '+' | '/' | '\\')
}

/// Characters that may continue a line running east-west through a cell.
pub fn continues_horizontally(c: char) -> bool {
    matches!(c, '-' | '=' | '+' | '/' | '\\')
}

/// Any character that draws part of a line, junction or corner.
pub fn is_line_art(c: char) -> bool {
    is_line(c) || is_corner_char(c)
}
