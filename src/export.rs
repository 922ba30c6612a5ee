//! Saving banners to disk
//!
//! Text exports (txt, md, html) and PNG rasterization, plus the prompts that
//! decide where a file goes.

use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use chrono::{DateTime, Local};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;

use crate::color_space::convert_ansi_to_html;
use crate::config::ExportPreferences;
use crate::console::Console;
use crate::error::{GenError, Result};
use crate::state::{RenderedArt, SaveTarget, TextFormat};

/// Top-left corner of the first text line on the PNG canvas
const IMAGE_MARGIN: i32 = 10;

/// `<prefix>_<YYYYMMDD_HHMMSS>`
pub fn default_stem(prefix: &str, now: &DateTime<Local>) -> String {
    format!("{}_{}", prefix, now.format("%Y%m%d_%H%M%S"))
}

/// Default file name for a text export
pub fn default_filename(prefix: &str, format: TextFormat, now: &DateTime<Local>) -> String {
    format!("{}.{}", default_stem(prefix, now), format.extension())
}

/// Turn what the user typed into a file name
///
/// Blank input gives the timestamped default; a name without an extension
/// gets the format's extension.
pub fn resolve_filename(
    input: &str,
    format: TextFormat,
    prefix: &str,
    now: &DateTime<Local>,
) -> String {
    let name = input.trim();
    if name.is_empty() {
        return default_filename(prefix, format, now);
    }
    if Path::new(name).extension().is_none() {
        return format!("{}.{}", name, format.extension());
    }
    name.to_string()
}

/// Ask which directory to save into
///
/// Blank input, or a path that is not an existing directory, falls back to
/// the current working directory.
pub fn resolve_save_directory<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<PathBuf> {
    console.say("\nYour ASCII art will be saved in the selected folder or current directory.")?;
    let answer = console.ask("Enter the folder to save in (or press Enter for current directory): ")?;
    let answer = answer.trim();

    if !answer.is_empty() {
        let dir = PathBuf::from(answer);
        if dir.is_dir() {
            return Ok(dir);
        }
        console.say(format!("'{}' is not a folder.", dir.display()))?;
    }

    console.say("No folder selected. Saving in the current directory.")?;
    Ok(std::env::current_dir()?)
}

/// Confirm before replacing an existing file
///
/// Returns true when `path` does not exist or the user agrees to overwrite.
pub fn check_overwrite<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    path: &Path,
) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    console.confirm(&format!("File {} already exists. Overwrite?", path.display()))
}

/// File contents for a text export
pub fn format_text(art: &RenderedArt, format: TextFormat) -> String {
    match format {
        TextFormat::Txt => art.plain(),
        TextFormat::Md => {
            let plain = art.plain();
            let newline = if plain.ends_with('\n') { "" } else { "\n" };
            format!("```text\n{}{}```\n", plain, newline)
        }
        TextFormat::Html => format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>ASCII Art</title>\n\
             </head>\n\
             <body style=\"background:#1e1e1e\">\n\
             <pre style=\"font-family:monospace;color:#ffffff\">\n\
             {}</pre>\n\
             </body>\n\
             </html>\n",
            convert_ansi_to_html(art.colored())
        ),
    }
}

/// Write the art to `target` in its format, replacing any existing file
pub fn save_text(art: &RenderedArt, target: &SaveTarget) -> Result<PathBuf> {
    let path = target.path();
    std::fs::write(&path, format_text(art, target.format))?;
    log::info!("wrote {}", path.display());
    Ok(path)
}

/// Rasterize the plain art onto a white canvas and write `<stem>.png`
pub fn save_image(art: &RenderedArt, stem: &Path, prefs: &ExportPreferences) -> Result<PathBuf> {
    let font_data = std::fs::read(&prefs.image_font)?;
    let font = FontVec::try_from_vec(font_data).map_err(|_| GenError::InvalidFont {
        path: prefs.image_font.clone(),
    })?;

    let image = rasterize(&art.plain(), &font, prefs);

    let mut name: OsString = stem.as_os_str().to_owned();
    name.push(".png");
    let path = PathBuf::from(name);
    image.save(&path)?;
    log::info!("wrote {}", path.display());
    Ok(path)
}

/// Draw text line by line in black, starting at the canvas margin
///
/// Lines that would start below the canvas are dropped.
pub fn rasterize<F: Font>(text: &str, font: &F, prefs: &ExportPreferences) -> RgbImage {
    let mut image = RgbImage::from_pixel(
        prefs.canvas_width,
        prefs.canvas_height,
        Rgb([255, 255, 255]),
    );

    let scale = PxScale::from(prefs.font_size);
    let scaled = font.as_scaled(scale);
    let line_height = (scaled.height() + scaled.line_gap()).ceil().max(1.0) as i32;

    let mut y = IMAGE_MARGIN;
    for line in text.lines() {
        if y >= prefs.canvas_height as i32 {
            break;
        }
        if !line.trim().is_empty() {
            draw_text_mut(&mut image, Rgb([0, 0, 0]), IMAGE_MARGIN, y, scale, font, line);
        }
        y += line_height;
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_space::AnsiColor;
    use crate::render_engines::banner::render;
    use crate::render_engines::fonts::FontLibrary;
    use crate::state::RenderRequest;
    use chrono::TimeZone;
    use std::io::Cursor;

    fn art() -> RenderedArt {
        render(
            RenderRequest::new("Hi", "standard", AnsiColor::Cyan),
            &FontLibrary::bundled(),
        )
        .unwrap()
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).unwrap()
    }

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_default_filename_shape() {
        let now = fixed_time();
        assert_eq!(default_filename("dimas", TextFormat::Txt, &now), "dimas_20240309_070502.txt");
        assert_eq!(default_filename("dimas", TextFormat::Html, &now), "dimas_20240309_070502.html");
    }

    #[test]
    fn test_resolve_filename() {
        let now = fixed_time();
        assert_eq!(resolve_filename("  ", TextFormat::Md, "dimas", &now), "dimas_20240309_070502.md");
        assert_eq!(resolve_filename("banner", TextFormat::Md, "dimas", &now), "banner.md");
        assert_eq!(resolve_filename("banner.txt", TextFormat::Md, "dimas", &now), "banner.txt");
    }

    #[test]
    fn test_format_txt_strips_color() {
        let art = art();
        let text = format_text(&art, TextFormat::Txt);
        assert!(!text.contains('\x1b'));
        assert_eq!(text, art.plain());
    }

    #[test]
    fn test_format_md_fences_art() {
        let art = art();
        let md = format_text(&art, TextFormat::Md);
        assert!(md.starts_with("```text\n"));
        assert!(md.ends_with("\n```\n"));
        assert!(md.contains(&art.plain()));
    }

    #[test]
    fn test_format_html_colors_art() {
        let html = format_text(&art(), TextFormat::Html);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<span style=\"color:#00ffff\">"));
        assert!(!html.contains('\x1b'));
    }

    #[test]
    fn test_check_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");

        let mut c = console("");
        assert!(check_overwrite(&mut c, &path).unwrap());

        std::fs::write(&path, "x").unwrap();
        let mut c = console("no\n");
        assert!(!check_overwrite(&mut c, &path).unwrap());
        let mut c = console("yes\n");
        assert!(check_overwrite(&mut c, &path).unwrap());
    }

    #[test]
    fn test_resolve_save_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = console(&format!("{}\n", dir.path().display()));
        assert_eq!(resolve_save_directory(&mut c).unwrap(), dir.path());

        let mut c = console("\n");
        assert_eq!(
            resolve_save_directory(&mut c).unwrap(),
            std::env::current_dir().unwrap()
        );

        let missing = dir.path().join("missing");
        let mut c = console(&format!("{}\n", missing.display()));
        assert_eq!(
            resolve_save_directory(&mut c).unwrap(),
            std::env::current_dir().unwrap()
        );
    }

    #[test]
    fn test_save_text_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = SaveTarget {
            directory: dir.path().to_path_buf(),
            filename: "hi.txt".to_string(),
            format: TextFormat::Txt,
        };
        let art = art();
        let path = save_text(&art, &target).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), art.plain());
    }

    #[test]
    fn test_save_text_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = SaveTarget {
            directory: dir.path().join("nope"),
            filename: "hi.txt".to_string(),
            format: TextFormat::Txt,
        };
        assert!(matches!(save_text(&art(), &target), Err(GenError::Io(_))));
    }

    #[test]
    fn test_save_image_missing_font() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = ExportPreferences {
            image_font: dir.path().join("no-such-font.ttf"),
            ..ExportPreferences::default()
        };
        let stem = dir.path().join("dimas_x");
        assert!(matches!(save_image(&art(), &stem, &prefs), Err(GenError::Io(_))));
        assert!(!dir.path().join("dimas_x.png").exists());
    }

    #[test]
    fn test_save_image_invalid_font() {
        let dir = tempfile::tempdir().unwrap();
        let font_path = dir.path().join("broken.ttf");
        std::fs::write(&font_path, b"not a font").unwrap();
        let prefs = ExportPreferences {
            image_font: font_path,
            ..ExportPreferences::default()
        };
        let result = save_image(&art(), &dir.path().join("dimas_y"), &prefs);
        assert!(matches!(result, Err(GenError::InvalidFont { .. })));
    }

    #[test]
    fn test_save_image_with_system_font() {
        let prefs = ExportPreferences::default();
        if !prefs.image_font.exists() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let path = save_image(&art(), &dir.path().join("dimas_z"), &prefs).unwrap();
        assert_eq!(path, dir.path().join("dimas_z.png"));

        let image = image::open(&path).unwrap().to_rgb8();
        assert_eq!(image.dimensions(), (600, 400));
        assert!(image.pixels().any(|p| p.0 == [0, 0, 0]));
        assert_eq!(image.get_pixel(599, 399).0, [255, 255, 255]);
    }
}
