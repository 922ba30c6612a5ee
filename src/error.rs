//! Error types
//!
//! Most failures in an interactive session are recovered where they happen
//! (re-prompt, fallback, or a printed message). The variants here are what
//! the library hands back to the caller when it cannot recover by itself.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    /// Standard input reached end-of-file while a prompt was waiting
    #[error("input closed")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot load banner font '{name}': {reason}")]
    FontLoad { name: String, reason: String },

    #[error("invalid TrueType font {}", path.display())]
    InvalidFont { path: PathBuf },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("download failed: {0}")]
    Download(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;
