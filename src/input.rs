//! Input collection
//!
//! Blocking prompts that validate what the user types. Bad input never
//! fails: it is asked again or replaced by a default with a warning.

use std::io::{BufRead, Write};

use crate::color_space::AnsiColor;
use crate::console::Console;
use crate::error::Result;
use crate::render_engines::fonts::FontLibrary;
use crate::state::{GenerationMode, TextFormat};
use crate::unicode_handler::is_printable;

/// Sentinel line that ends multi-line input
pub const MULTILINE_SENTINEL: &str = "done";

/// How many font names are listed before the font prompt
const FONT_LISTING: usize = 10;

/// Ask custom / random / multiline; anything unrecognized means custom
pub fn collect_mode<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<GenerationMode> {
    let answer = console
        .ask("Do you want to generate custom ASCII art or random? (custom/random/multiline): ")?;
    Ok(GenerationMode::from_name(&answer))
}

/// Prompt until a non-empty, printable line is entered
pub fn collect_text<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<String> {
    loop {
        let answer = console.ask("Enter the text you want to convert to ASCII art: ")?;
        let text = answer.trim();
        if !text.is_empty() && is_printable(text) {
            return Ok(text.to_string());
        }
        console.say("Input cannot be empty or contain special characters. Please try again.")?;
    }
}

/// Read lines until the sentinel and join them with newlines
///
/// Asks again if nothing was entered before the sentinel.
pub fn collect_multiline_text<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<String> {
    loop {
        console.say(format!(
            "Enter the text you want to convert to ASCII art (type '{}' on a new line to finish):",
            MULTILINE_SENTINEL
        ))?;

        let mut lines = Vec::new();
        loop {
            let line = console.read_line()?;
            if line.eq_ignore_ascii_case(MULTILINE_SENTINEL) {
                break;
            }
            lines.push(line);
        }

        if lines.iter().any(|l| !l.trim().is_empty()) {
            return Ok(lines.join("\n"));
        }
        console.say("Input cannot be empty. Please try again.")?;
    }
}

/// Prompt for a font name out of `available`
///
/// Blank input selects `default`; a name that is not available also falls
/// back to `default` with a warning.
pub fn collect_font<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    available: &FontLibrary,
    default: &str,
) -> Result<String> {
    let listing: Vec<&str> = available.names().take(FONT_LISTING).collect();
    let more = if available.len() > FONT_LISTING { "..." } else { "" };
    console.say(format!("Available fonts: {}{}", listing.join(", "), more))?;

    let answer = console.ask(&format!(
        "Enter the font for your ASCII art (or press Enter for default '{}'): ",
        default
    ))?;
    let font = answer.trim();

    if font.is_empty() {
        return Ok(default.to_string());
    }
    if available.contains(font) {
        return Ok(font.to_string());
    }

    console.say(format!("Invalid font selected. Defaulting to '{}'.", default))?;
    Ok(default.to_string())
}

/// Prompt for a palette color, falling back to `default`
pub fn collect_color<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    default: AnsiColor,
) -> Result<AnsiColor> {
    let names: Vec<&str> = AnsiColor::ALL.iter().map(|c| c.name()).collect();
    let answer = console.ask(&format!(
        "Enter the color for your ASCII art ({}): ",
        names.join(", ")
    ))?;

    match AnsiColor::from_name(&answer) {
        Some(color) => Ok(color),
        None => {
            console.say(format!("Invalid color selected. Defaulting to '{}'.", default))?;
            Ok(default)
        }
    }
}

/// Prompt for a text export format, falling back to txt
pub fn collect_file_format<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<TextFormat> {
    let names: Vec<&str> = TextFormat::ALL.iter().map(|f| f.extension()).collect();
    let names = names.join(", ");
    console.say(format!("Available formats: {}", names))?;
    let answer = console.ask(&format!(
        "Enter the format for your ASCII art file ({}): ",
        names
    ))?;

    match TextFormat::from_name(&answer) {
        Some(format) => Ok(format),
        None => {
            let fallback = TextFormat::default();
            console.say(format!(
                "Invalid format selected. Defaulting to '{}'.",
                fallback.extension()
            ))?;
            Ok(fallback)
        }
    }
}
