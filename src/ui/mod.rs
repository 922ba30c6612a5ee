//! UI module
//!
//! Console preview, the cosmetic spinner, and the full-screen popup viewer
//! built on Ratatui.

mod preview;
pub mod spinner;

use std::io::{self, BufRead, Stdout, Write};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

pub use preview::{styled_lines, ViewerAction, ViewerState};

use crate::console::Console;
use crate::error::Result;
use crate::state::RenderedArt;

/// Something that can show a finished banner in a modal window
///
/// `show` blocks until the user closes the window.
pub trait ArtViewer {
    fn show(&mut self, art: &RenderedArt) -> Result<()>;
}

/// Print the art to the console if the user asks for it
pub fn preview_console<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    art: &RenderedArt,
) -> Result<()> {
    if console.confirm("Do you want to preview the ASCII art?")? {
        console.say("\nPreviewing ASCII Art...\n")?;
        console.say(art)?;
    } else {
        console.say("\nSkipping preview.\n")?;
    }
    Ok(())
}

/// Popup viewer that takes over the terminal's alternate screen
#[derive(Debug, Default)]
pub struct TerminalViewer;

impl ArtViewer for TerminalViewer {
    fn show(&mut self, art: &RenderedArt) -> Result<()> {
        let mut terminal = setup_terminal()?;
        let result = run_viewer(&mut terminal, art);
        cleanup_terminal(terminal)?;
        result
    }
}

/// Set up the terminal for TUI rendering
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore terminal to normal state
fn cleanup_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Event loop of the popup; returns once the user closes it
fn run_viewer(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    art: &RenderedArt,
) -> Result<()> {
    let mut state = ViewerState::new(art);

    loop {
        terminal.draw(|frame| render(frame, art, &mut state))?;

        // Resize and other events just trigger a redraw
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match state.handle_key(key) {
            ViewerAction::Close => break,
            ViewerAction::Copy => state.status = Some(copy_to_clipboard(art)),
            ViewerAction::None => {}
        }
    }

    Ok(())
}

/// Copy the plain art to the clipboard, returning a status message
fn copy_to_clipboard(art: &RenderedArt) -> String {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(art.plain()) {
            Ok(_) => "Copied to clipboard".to_string(),
            Err(e) => format!("Copy failed: {}", e),
        },
        Err(e) => format!("Clipboard unavailable: {}", e),
    }
}

/// Draw the whole popup: bordered art area and a key hint bar
fn render(frame: &mut Frame, art: &RenderedArt, state: &mut ViewerState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Art
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Preview ASCII Art ",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    preview::render_preview(frame, chunks[0], block, art, state);

    let key_style = Style::default().fg(Color::Green);
    let mut status = vec![
        Span::styled(" [↑↓←→]", key_style),
        Span::raw(" Scroll  "),
        Span::styled("[C]", key_style),
        Span::raw(" Copy  "),
        Span::styled("[Q/Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Close "),
    ];
    if let Some(ref message) = state.status {
        status.push(Span::raw("│ "));
        status.push(Span::styled(message.clone(), Style::default().fg(Color::Yellow)));
    }

    let status_widget = Paragraph::new(Line::from(status))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status_widget, chunks[1]);
}
