//! asciigen - interactive ASCII banner generator
//!
//! Renders text as colorized FIGlet banners, previews them in the console or
//! a full-screen terminal popup, and saves them as text or PNG. The
//! [`variants`] module backs the companion `imgvariants` tool.

pub mod color_space;
pub mod config;
pub mod console;
pub mod error;
pub mod export;
pub mod input;
pub mod render_engines;
pub mod session;
pub mod state;
pub mod ui;
pub mod unicode_handler;
pub mod variants;

// Re-export commonly used types
pub use config::Config;
pub use error::{GenError, Result};
pub use state::{RenderRequest, RenderedArt};
