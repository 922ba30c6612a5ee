//! Terminal color palette and ANSI escape handling
//!
//! Wraps text in SGR foreground sequences, strips them again for plain
//! exports, and converts them to HTML spans.

use std::iter::Peekable;
use std::str::Chars;

use palette::{named, Srgb};
use serde::{Deserialize, Serialize};

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// The fixed color palette accepted for banner output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnsiColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    #[default]
    Cyan,
    White,
}

impl AnsiColor {
    pub const ALL: [AnsiColor; 7] = [
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Magenta,
        AnsiColor::Cyan,
        AnsiColor::White,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AnsiColor::Red => "red",
            AnsiColor::Green => "green",
            AnsiColor::Yellow => "yellow",
            AnsiColor::Blue => "blue",
            AnsiColor::Magenta => "magenta",
            AnsiColor::Cyan => "cyan",
            AnsiColor::White => "white",
        }
    }

    /// Look up a palette entry by name (case-insensitive, surrounding
    /// whitespace ignored)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// SGR foreground parameter (30-37)
    pub fn sgr_code(&self) -> u8 {
        match self {
            AnsiColor::Red => 31,
            AnsiColor::Green => 32,
            AnsiColor::Yellow => 33,
            AnsiColor::Blue => 34,
            AnsiColor::Magenta => 35,
            AnsiColor::Cyan => 36,
            AnsiColor::White => 37,
        }
    }

    fn from_sgr_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.sgr_code() == code)
    }

    /// Foreground escape sequence for this color
    pub fn fg_sequence(&self) -> String {
        format!("\x1b[{}m", self.sgr_code())
    }

    /// sRGB value used outside the terminal (HTML export)
    pub fn srgb(&self) -> Srgb<u8> {
        match self {
            AnsiColor::Red => named::RED,
            AnsiColor::Green => named::LIME,
            AnsiColor::Yellow => named::YELLOW,
            AnsiColor::Blue => named::DODGERBLUE,
            AnsiColor::Magenta => named::MAGENTA,
            AnsiColor::Cyan => named::CYAN,
            AnsiColor::White => named::WHITE,
        }
    }

    /// `#rrggbb` form of [`AnsiColor::srgb`]
    pub fn hex(&self) -> String {
        let c = self.srgb();
        format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
    }
}

impl std::fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Wrap text in the color's foreground sequence followed by a reset
pub fn colorize(text: &str, color: AnsiColor) -> String {
    let mut out = String::with_capacity(text.len() + 9);
    out.push_str(&color.fg_sequence());
    out.push_str(text);
    out.push_str(ANSI_RESET);
    out
}

/// One piece of ANSI-decorated text
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Char(char),
    /// `ESC [ params terminator`
    Csi { params: String, terminator: char },
    /// Any other escape sequence, or one cut off by the end of input
    Other,
}

/// Splits text into plain characters and escape sequences
struct Tokens<'a> {
    chars: Peekable<Chars<'a>>,
}

fn tokens(text: &str) -> Tokens<'_> {
    Tokens {
        chars: text.chars().peekable(),
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let c = self.chars.next()?;
        if c != '\x1b' {
            return Some(Token::Char(c));
        }

        if self.chars.peek() == Some(&'[') {
            self.chars.next();
            let mut params = String::new();
            for next in self.chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    return Some(Token::Csi {
                        params,
                        terminator: next,
                    });
                }
                params.push(next);
            }
            return Some(Token::Other);
        }

        // OSC and friends end at BEL or an alphabetic terminator
        for next in self.chars.by_ref() {
            if next == '\x07' || next.is_ascii_alphabetic() {
                break;
            }
        }
        Some(Token::Other)
    }
}

/// Strip ANSI escape codes from text
pub fn strip_ansi_codes(text: &str) -> String {
    tokens(text)
        .filter_map(|token| match token {
            Token::Char(c) => Some(c),
            _ => None,
        })
        .collect()
}

/// Split colored text into runs of (text, foreground color)
///
/// Only the palette's SGR codes are recognized; a reset (`0` or empty
/// parameter list) clears the color and other sequences are dropped.
pub fn color_runs(text: &str) -> Vec<(String, Option<AnsiColor>)> {
    let mut runs = Vec::new();
    let mut current = String::new();
    let mut fg: Option<AnsiColor> = None;

    for token in tokens(text) {
        let params = match token {
            Token::Char(c) => {
                current.push(c);
                continue;
            }
            Token::Csi {
                params,
                terminator: 'm',
            } => params,
            _ => continue,
        };

        let before = fg;
        apply_sgr(&params, &mut fg);
        if fg != before && !current.is_empty() {
            runs.push((std::mem::take(&mut current), before));
        }
    }

    if !current.is_empty() {
        runs.push((current, fg));
    }

    runs
}

fn apply_sgr(params: &str, fg: &mut Option<AnsiColor>) {
    if params.is_empty() {
        *fg = None;
        return;
    }
    for part in params.split(';') {
        match part.parse::<u8>() {
            Ok(0) | Ok(39) => *fg = None,
            Ok(code) => {
                if let Some(color) = AnsiColor::from_sgr_code(code) {
                    *fg = Some(color);
                }
            }
            Err(_) => {}
        }
    }
}

/// Escape the characters HTML treats specially
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Convert ANSI-colored text into HTML with `<span style="color:...">` runs
pub fn convert_ansi_to_html(text: &str) -> String {
    let mut html = String::with_capacity(text.len() * 2);
    for (run, fg) in color_runs(text) {
        match fg {
            Some(color) => {
                html.push_str(&format!("<span style=\"color:{}\">", color.hex()));
                html.push_str(&escape_html(&run));
                html.push_str("</span>");
            }
            None => html.push_str(&escape_html(&run)),
        }
    }
    html
}
