//! FIGlet font discovery and loading

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figlet_rs::FIGfont;

use crate::error::{GenError, Result};

/// Font that ships inside the `figlet-rs` crate and is always available
pub const BUNDLED_FONT: &str = "standard";

/// Slanted font compiled into the binary; the default banner font
pub const SLANT_FONT: &str = "slant";

const SLANT_FLF: &str = include_str!("slant.flf");

/// Where a font's glyph data comes from
#[derive(Debug, Clone, PartialEq, Eq)]
enum FontSource {
    /// The `standard` font inside `figlet-rs`
    Standard,
    /// `.flf` contents embedded at compile time
    Embedded(&'static str),
    /// An installed `.flf` file
    File(PathBuf),
}

/// The set of banner fonts that can be rendered on this machine
#[derive(Debug, Clone)]
pub struct FontLibrary {
    fonts: BTreeMap<String, FontSource>,
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::bundled()
    }
}

impl FontLibrary {
    /// Library holding only the fonts compiled into the binary
    pub fn bundled() -> Self {
        let mut fonts = BTreeMap::new();
        fonts.insert(BUNDLED_FONT.to_string(), FontSource::Standard);
        fonts.insert(SLANT_FONT.to_string(), FontSource::Embedded(SLANT_FLF));
        Self { fonts }
    }

    /// Bundled fonts plus every `*.flf` file found in `dirs`
    ///
    /// Missing or unreadable directories are skipped. Bundled fonts are never
    /// replaced, and when two directories provide the same name the first
    /// one wins.
    pub fn discover(dirs: &[PathBuf]) -> Self {
        let mut library = Self::bundled();
        for dir in dirs {
            library.scan_dir(dir);
        }
        log::debug!("{} banner fonts available", library.len());
        library
    }

    fn scan_dir(&mut self, dir: &Path) {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("skipping font dir {}: {}", dir.display(), e);
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("flf") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                self.fonts
                    .entry(stem.to_string())
                    .or_insert_with(|| FontSource::File(path.clone()));
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    /// Font names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fonts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Parse the named font
    pub fn load(&self, name: &str) -> Result<FIGfont> {
        let loaded = match self.fonts.get(name) {
            Some(FontSource::Standard) => FIGfont::standard(),
            Some(FontSource::Embedded(contents)) => FIGfont::from_content(contents),
            Some(FontSource::File(path)) => FIGfont::from_file(&path.to_string_lossy()),
            None => Err("not installed".to_string()),
        };
        loaded.map_err(|reason| GenError::FontLoad {
            name: name.to_string(),
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_library() {
        let library = FontLibrary::bundled();
        assert!(library.contains(BUNDLED_FONT));
        assert!(library.contains(SLANT_FONT));
        assert_eq!(library.len(), 2);
        assert!(library.load(BUNDLED_FONT).is_ok());
        assert!(library.load(SLANT_FONT).is_ok());
    }

    #[test]
    fn test_slant_covers_printable_ascii() {
        let font = FontLibrary::bundled().load(SLANT_FONT).unwrap();
        assert_eq!(font.header_line.height, 6);
        for code in 32u32..=126 {
            let glyph = font.fonts.get(&code).unwrap();
            assert_eq!(glyph.characters.len(), 6, "{:?}", char::from_u32(code));
            assert!(
                glyph.characters.iter().all(|row| row.len() == glyph.width as usize),
                "ragged glyph {:?}",
                char::from_u32(code)
            );
        }
    }

    #[test]
    fn test_slant_differs_from_standard() {
        let library = FontLibrary::bundled();
        let slant = library.load(SLANT_FONT).unwrap().convert("Hello").unwrap().to_string();
        let standard = library.load(BUNDLED_FONT).unwrap().convert("Hello").unwrap().to_string();
        assert_ne!(slant, standard);
        assert!(slant.lines().next().unwrap().starts_with("    __  __"));
    }

    #[test]
    fn test_discover_flf_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("slant.flf"), "").unwrap();
        std::fs::write(dir.path().join("big.flf"), "").unwrap();
        std::fs::write(dir.path().join("readme.txt"), "").unwrap();

        let library = FontLibrary::discover(&[
            dir.path().to_path_buf(),
            PathBuf::from("/definitely/not/a/font/dir"),
        ]);

        let names: Vec<&str> = library.names().collect();
        assert_eq!(names, vec!["big", "slant", "standard"]);
        assert!(!library.contains("readme"));

        // the embedded slant is kept over the empty file on disk
        assert!(library.load(SLANT_FONT).is_ok());
        assert!(library.load("big").is_err());
    }

    #[test]
    fn test_load_unknown_font() {
        let library = FontLibrary::bundled();
        let err = library.load("banner3").unwrap_err();
        assert!(matches!(err, GenError::FontLoad { ref name, .. } if name == "banner3"));
    }
}
