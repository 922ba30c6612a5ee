//! Banner text engine
//!
//! Turns plain text into FIGlet block letters and wraps the result in the
//! requested terminal color.

use figlet_rs::FIGfont;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;

use super::fonts::{FontLibrary, BUNDLED_FONT};
use crate::color_space::{colorize, AnsiColor};
use crate::error::Result;
use crate::state::{RenderRequest, RenderedArt, SAMPLE_PHRASES};

/// Render a request into colorized banner text
///
/// A font that cannot be loaded is replaced by the bundled font; the request
/// stored in the result still names the font that was asked for.
pub fn render(request: RenderRequest, library: &FontLibrary) -> Result<RenderedArt> {
    let font = match library.load(&request.font) {
        Ok(font) => font,
        Err(e) => {
            log::warn!("{}; using '{}'", e, BUNDLED_FONT);
            library.load(BUNDLED_FONT)?
        }
    };

    let banner = figlet_text(&font, &request.text);
    let colored = colorize(&banner, request.color);
    Ok(RenderedArt::new(request, colored))
}

/// Render a random sample phrase in a random font and color
pub fn render_random<R: Rng + ?Sized>(library: &FontLibrary, rng: &mut R) -> Result<RenderedArt> {
    let request = random_request(library, rng);
    render(request, library)
}

/// Pick text, font and color uniformly at random
pub fn random_request<R: Rng + ?Sized>(library: &FontLibrary, rng: &mut R) -> RenderRequest {
    let text = SAMPLE_PHRASES.choose(rng).copied().unwrap_or(SAMPLE_PHRASES[0]);
    let font = library.names().choose(rng).unwrap_or(BUNDLED_FONT);
    let color = AnsiColor::ALL.choose(rng).copied().unwrap_or_default();
    RenderRequest::new(text, font, color)
}

/// Render each input line separately and stack the results
///
/// Lines the font has no glyphs for are kept as they are.
fn figlet_text(font: &FIGfont, text: &str) -> String {
    let mut out = String::new();
    for line in text.split('\n') {
        match font.convert(line) {
            Some(figure) => out.push_str(&figure.to_string()),
            None => {
                out.push_str(line);
                out.push('\n');
            }
        }
    }
    out
}
