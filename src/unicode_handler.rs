//! Unicode validation and width utilities

use unicode_width::UnicodeWidthStr;

/// Whether a single character can be shown as-is
///
/// Control characters, any whitespace other than a plain space (tabs, line
/// and paragraph separators, exotic spaces) and invisible format characters
/// are not printable.
pub fn is_printable_char(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !matches!(
        c,
        '\u{00AD}'
            | '\u{061C}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
    )
}

/// Whether every character of `s` is printable
pub fn is_printable(s: &str) -> bool {
    s.chars().all(is_printable_char)
}

/// Calculate the display width of a string
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Widest line of a block of text, in terminal columns
pub fn max_line_width(text: &str) -> usize {
    text.lines().map(display_width).max().unwrap_or(0)
}
