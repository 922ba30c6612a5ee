//! Cosmetic progress spinner

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

pub const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Time each spinner glyph stays on screen
pub const FRAME_INTERVAL: Duration = Duration::from_millis(200);

/// Spin in place for roughly `duration`, then print `Done!`
///
/// Purely decorative: it blocks the caller and has no effect on rendering.
pub fn show_progress_indicator<W: Write>(out: &mut W, duration: Duration) -> io::Result<()> {
    let frames = (duration.as_millis() / FRAME_INTERVAL.as_millis()) as usize;

    for symbol in SPINNER_FRAMES.iter().cycle().take(frames) {
        write!(out, "\rGenerating ASCII Art... {}", symbol)?;
        out.flush()?;
        thread::sleep(FRAME_INTERVAL);
    }

    writeln!(out, "\rDone!                            ")?;
    out.flush()
}
