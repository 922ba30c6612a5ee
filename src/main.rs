//! Main entry point for the interactive ASCII banner generator

use anyhow::Result;
use crossterm::{execute, terminal::{disable_raw_mode, LeaveAlternateScreen}};
use std::{io, panic};

use asciigen::{
    config::Config,
    console::Console,
    render_engines::fonts::FontLibrary,
    session::Session,
    ui::TerminalViewer,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Set up panic hook to restore terminal on panic inside the popup viewer
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let fonts = FontLibrary::discover(&config.render.font_dirs);
    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut viewer = TerminalViewer;

    let mut session = Session::new(console, &config, &fonts, &mut viewer);
    let report = session.run()?;
    log::info!(
        "session finished after {} banner(s), {} text file(s), {} image(s)",
        report.iterations,
        report.text_files.len(),
        report.images.len()
    );

    Ok(())
}
