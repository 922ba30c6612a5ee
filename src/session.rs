//! Interactive session loop
//!
//! One pass: produce a banner, show it, save it as text, optionally as a
//! PNG, then ask whether to go again.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::console::Console;
use crate::error::{GenError, Result};
use crate::export::{
    check_overwrite, default_stem, resolve_filename, resolve_save_directory, save_image, save_text,
};
use crate::input::{
    collect_color, collect_file_format, collect_font, collect_mode, collect_multiline_text,
    collect_text,
};
use crate::render_engines::banner::{render, render_random};
use crate::render_engines::fonts::FontLibrary;
use crate::state::{GenerationMode, RenderRequest, RenderedArt, SaveTarget, SessionState};
use crate::ui::{preview_console, spinner::show_progress_indicator, ArtViewer};

/// What a finished session produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub iterations: usize,
    pub text_files: Vec<PathBuf>,
    pub images: Vec<PathBuf>,
}

pub struct Session<'a, R, W> {
    console: Console<R, W>,
    config: &'a Config,
    fonts: &'a FontLibrary,
    viewer: &'a mut dyn ArtViewer,
    rng: StdRng,
    state: SessionState,
    report: SessionReport,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        console: Console<R, W>,
        config: &'a Config,
        fonts: &'a FontLibrary,
        viewer: &'a mut dyn ArtViewer,
    ) -> Self {
        Self {
            console,
            config,
            fonts,
            viewer,
            rng: StdRng::from_entropy(),
            state: SessionState::Generating,
            report: SessionReport::default(),
        }
    }

    /// Use a fixed random source for random banners
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Loop until the user declines another banner or input runs out
    pub fn run(&mut self) -> Result<SessionReport> {
        while self.state == SessionState::Generating {
            match self.iteration() {
                Ok(()) => {}
                Err(GenError::InputClosed) => {
                    log::info!("input closed, ending session");
                    self.state = SessionState::Done;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(std::mem::take(&mut self.report))
    }

    /// Hand back the console, e.g. to inspect scripted output
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn iteration(&mut self) -> Result<()> {
        let art = self.generate()?;
        self.report.iterations += 1;

        self.console.say(&art)?;
        preview_console(&mut self.console, &art)?;

        if self.console.confirm("Do you want to preview in pop-up?")? {
            if let Err(e) = self.viewer.show(&art) {
                self.console.say(format!("Error: unable to open preview: {}", e))?;
            }
        }

        let directory = self.save_to_file(&art)?;

        if self.console.confirm("Do you want to save as image?")? {
            self.save_as_image(&art, &directory)?;
        }

        if !self.console.confirm("Do you want to generate another ASCII art?")? {
            self.state = SessionState::Done;
        }
        Ok(())
    }

    fn generate(&mut self) -> Result<RenderedArt> {
        let text = match collect_mode(&mut self.console)? {
            GenerationMode::Random => {
                let art = render_random(self.fonts, &mut self.rng)?;
                let request = art.request();
                self.console.say(format!(
                    "Generating random ASCII art for text: {}, font: {}, color: {}",
                    request.text, request.font, request.color
                ))?;
                return Ok(art);
            }
            GenerationMode::Custom => collect_text(&mut self.console)?,
            GenerationMode::Multiline => collect_multiline_text(&mut self.console)?,
        };

        let render_prefs = &self.config.render;
        let font = collect_font(&mut self.console, self.fonts, &render_prefs.default_font)?;
        let color = collect_color(&mut self.console, render_prefs.default_color)?;

        show_progress_indicator(self.console.writer(), render_prefs.spinner_duration())?;

        render(RenderRequest::new(text, font, color), self.fonts)
    }

    /// Text export flow; returns the directory that was chosen
    fn save_to_file(&mut self, art: &RenderedArt) -> Result<PathBuf> {
        let format = collect_file_format(&mut self.console)?;
        let input = self
            .console
            .ask("Enter the filename (or press Enter to use default): ")?;
        let filename = resolve_filename(
            &input,
            format,
            &self.config.export.filename_prefix,
            &Local::now(),
        );
        let directory = resolve_save_directory(&mut self.console)?;

        let target = SaveTarget {
            directory,
            filename,
            format,
        };
        let path = target.path();

        if !check_overwrite(&mut self.console, &path)? {
            self.console.say("File not saved.")?;
            return Ok(target.directory);
        }

        self.console.say(format!("Saving to: {}...", path.display()))?;
        match save_text(art, &target) {
            Ok(path) => {
                self.console.say(format!("ASCII art saved to {}", path.display()))?;
                self.report.text_files.push(path);
            }
            Err(e) => {
                log::warn!("write to {} failed: {}", path.display(), e);
                self.console
                    .say("Error: Unable to write to file. Check permissions.")?;
            }
        }

        Ok(target.directory)
    }

    fn save_as_image(&mut self, art: &RenderedArt, directory: &Path) -> Result<()> {
        let stem = directory.join(default_stem(
            &self.config.export.filename_prefix,
            &Local::now(),
        ));

        match save_image(art, &stem, &self.config.export) {
            Ok(path) => {
                self.console.say(format!("Image saved as {}", path.display()))?;
                self.report.images.push(path);
            }
            Err(e) => self.console.say(format!("Error: {}", e))?,
        }
        Ok(())
    }
}
