//! Preview area rendering

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::color_space::{color_runs, AnsiColor};
use crate::state::RenderedArt;
use crate::unicode_handler::max_line_width;

/// What the viewer loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    None,
    Copy,
    Close,
}

/// Scroll position and status line of the popup viewer
#[derive(Debug, Clone)]
pub struct ViewerState {
    total_lines: usize,
    content_width: usize,
    viewport: (usize, usize),
    pub scroll: usize,
    pub hscroll: usize,
    pub status: Option<String>,
}

impl ViewerState {
    pub fn new(art: &RenderedArt) -> Self {
        let plain = art.plain();
        Self {
            total_lines: plain.lines().count(),
            content_width: max_line_width(&plain),
            viewport: (80, 20),
            scroll: 0,
            hscroll: 0,
            status: None,
        }
    }

    /// Record the visible text area and keep the scroll offsets inside it
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width as usize, height as usize);
        self.scroll = self.scroll.min(self.max_scroll());
        self.hscroll = self.hscroll.min(self.max_hscroll());
    }

    fn max_scroll(&self) -> usize {
        self.total_lines.saturating_sub(self.viewport.1)
    }

    fn max_hscroll(&self) -> usize {
        self.content_width.saturating_sub(self.viewport.0)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ViewerAction {
        let page = self.viewport.1.max(1);
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return ViewerAction::Close,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return ViewerAction::Close
            }
            KeyCode::Char('c') | KeyCode::Char('C') => return ViewerAction::Copy,
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll += 1,
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(page),
            KeyCode::PageDown => self.scroll += page,
            KeyCode::Home => {
                self.scroll = 0;
                self.hscroll = 0;
            }
            KeyCode::End => self.scroll = self.max_scroll(),
            KeyCode::Left | KeyCode::Char('h') => self.hscroll = self.hscroll.saturating_sub(1),
            KeyCode::Right | KeyCode::Char('l') => self.hscroll += 1,
            _ => {}
        }
        self.scroll = self.scroll.min(self.max_scroll());
        self.hscroll = self.hscroll.min(self.max_hscroll());
        ViewerAction::None
    }
}

fn terminal_color(color: AnsiColor) -> Color {
    match color {
        AnsiColor::Red => Color::Red,
        AnsiColor::Green => Color::Green,
        AnsiColor::Yellow => Color::Yellow,
        AnsiColor::Blue => Color::Blue,
        AnsiColor::Magenta => Color::Magenta,
        AnsiColor::Cyan => Color::Cyan,
        AnsiColor::White => Color::White,
    }
}

/// Convert colored art into styled lines, carrying colors across line breaks
pub fn styled_lines(colored: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Vec<Span<'static>>> = vec![Vec::new()];

    for (run, fg) in color_runs(colored) {
        let style = fg
            .map(|c| Style::default().fg(terminal_color(c)))
            .unwrap_or_default();
        for (i, piece) in run.split('\n').enumerate() {
            if i > 0 {
                lines.push(Vec::new());
            }
            if !piece.is_empty() {
                if let Some(line) = lines.last_mut() {
                    line.push(Span::styled(piece.to_string(), style));
                }
            }
        }
    }

    // A trailing newline does not start a visible line
    if lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines.into_iter().map(Line::from).collect()
}

/// Render the art inside `block`, scrolled by the viewer state
pub fn render_preview(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    art: &RenderedArt,
    state: &mut ViewerState,
) {
    let inner = block.inner(area);
    frame.render_widget(block, area);
    state.set_viewport(inner.width, inner.height);

    let scroll = (
        state.scroll.min(u16::MAX as usize) as u16,
        state.hscroll.min(u16::MAX as usize) as u16,
    );
    let widget = Paragraph::new(styled_lines(art.colored())).scroll(scroll);
    frame.render_widget(widget, inner);

    let visible_lines = inner.height as usize;
    if state.total_lines > visible_lines {
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));

        let mut scrollbar_state = ScrollbarState::default()
            .content_length(state.total_lines)
            .position(state.scroll)
            .viewport_content_length(visible_lines);

        let scrollbar_area = Rect {
            x: inner.x + inner.width.saturating_sub(1),
            y: inner.y,
            width: 1,
            height: inner.height,
        };

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}
