//! Session data model
//!
//! All values here live for a single pass through the session loop.

use std::path::PathBuf;

use crate::color_space::{strip_ansi_codes, AnsiColor};

/// Phrases used by random generation
pub const SAMPLE_PHRASES: [&str; 5] = ["Hello", "World", "Python", "Coding", "ASCII Art"];

/// How the text of the next banner is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationMode {
    #[default]
    Custom,
    Multiline,
    Random,
}

impl GenerationMode {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "random" => GenerationMode::Random,
            "multiline" | "multi" => GenerationMode::Multiline,
            _ => GenerationMode::Custom,
        }
    }
}

/// Text, font and color for one banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub text: String,
    pub font: String,
    pub color: AnsiColor,
}

impl RenderRequest {
    pub fn new(text: impl Into<String>, font: impl Into<String>, color: AnsiColor) -> Self {
        Self {
            text: text.into(),
            font: font.into(),
            color,
        }
    }
}

/// A finished, colorized banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArt {
    request: RenderRequest,
    colored: String,
}

impl RenderedArt {
    pub(crate) fn new(request: RenderRequest, colored: String) -> Self {
        Self { request, colored }
    }

    pub fn request(&self) -> &RenderRequest {
        &self.request
    }

    /// The banner including terminal color sequences
    pub fn colored(&self) -> &str {
        &self.colored
    }

    /// The banner with all escape sequences removed
    pub fn plain(&self) -> String {
        strip_ansi_codes(&self.colored)
    }
}

impl std::fmt::Display for RenderedArt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.colored)
    }
}

/// Format of a text export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    #[default]
    Txt,
    Md,
    Html,
}

impl TextFormat {
    pub const ALL: [TextFormat; 3] = [TextFormat::Txt, TextFormat::Md, TextFormat::Html];

    pub fn extension(&self) -> &'static str {
        match self {
            TextFormat::Txt => "txt",
            TextFormat::Md => "md",
            TextFormat::Html => "html",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|f| f.extension() == name)
    }
}

/// Where and how a text export is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTarget {
    pub directory: PathBuf,
    pub filename: String,
    pub format: TextFormat,
}

impl SaveTarget {
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// Session loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Generating,
    Done,
}
