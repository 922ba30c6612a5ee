//! Download an image and save a fixed set of transformed copies

use anyhow::{bail, Context, Result};
use image::GenericImageView;
use std::io;

use asciigen::{
    config::Config,
    console::Console,
    variants::{build_variants, load_source, save_variants},
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let source = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut console = Console::new(io::stdin().lock(), io::stdout());
            console.ask("Enter the URL of the image: ")?.trim().to_string()
        }
    };
    if source.is_empty() {
        bail!("no image URL given");
    }

    let image = load_source(&source).with_context(|| format!("Failed to load image from {}", source))?;
    let (width, height) = image.dimensions();
    println!("Loaded {}x{} image", width, height);

    let prefs = &config.variants;
    let variants = build_variants(&image, prefs);
    let summary = save_variants(&variants, &prefs.output_dir);

    for path in &summary.saved {
        println!("Saved {}", path.display());
    }
    for (name, e) in &summary.failed {
        eprintln!("Failed to save {}: {}", name, e);
    }

    Ok(())
}
