//! Configuration management
//!
//! Load user preferences from a TOML config file.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::color_space::AnsiColor;

/// Environment variable that points at an explicit config file
pub const CONFIG_ENV: &str = "ASCIIGEN_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderPreferences,
    pub export: ExportPreferences,
    pub variants: VariantPreferences,
}

impl Config {
    /// Load configuration from file, or defaults when there is none
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            log::debug!("loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        if let Some(proj_dirs) = ProjectDirs::from("com", "asciigen", "asciigen") {
            Ok(proj_dirs.config_dir().join("config.toml"))
        } else {
            // Fallback to current directory
            Ok(PathBuf::from("asciigen.toml"))
        }
    }
}

/// Banner rendering preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderPreferences {
    pub default_font: String,
    pub default_color: AnsiColor,
    /// Directories scanned for `*.flf` FIGlet fonts
    pub font_dirs: Vec<PathBuf>,
    /// How long the progress spinner runs, in milliseconds
    pub spinner_ms: u64,
}

impl RenderPreferences {
    pub fn spinner_duration(&self) -> Duration {
        Duration::from_millis(self.spinner_ms)
    }
}

impl Default for RenderPreferences {
    fn default() -> Self {
        Self {
            default_font: "slant".to_string(),
            default_color: AnsiColor::Cyan,
            font_dirs: vec![
                PathBuf::from("/usr/share/figlet"),
                PathBuf::from("/usr/local/share/figlet"),
                PathBuf::from("/usr/share/figlet/fonts"),
            ],
            spinner_ms: 8000,
        }
    }
}

/// File and image export preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportPreferences {
    pub filename_prefix: String,
    pub image_font: PathBuf,
    pub font_size: f32,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl Default for ExportPreferences {
    fn default() -> Self {
        Self {
            filename_prefix: "dimas".to_string(),
            image_font: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
            font_size: 20.0,
            canvas_width: 600,
            canvas_height: 400,
        }
    }
}

/// Image variant pipeline preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantPreferences {
    pub resize_width: u32,
    /// Counter-clockwise rotation
    pub rotate_degrees: f32,
    /// Crop box as `[left, top, right, bottom]`
    pub crop: [u32; 4],
    pub output_dir: PathBuf,
}

impl Default for VariantPreferences {
    fn default() -> Self {
        Self {
            resize_width: 800,
            rotate_degrees: 45.0,
            crop: [100, 100, 300, 300],
            output_dir: PathBuf::from("."),
        }
    }
}
