//! Render engines module
//!
//! Banner text rendering backed by FIGlet fonts.

pub mod banner;
pub mod fonts;
