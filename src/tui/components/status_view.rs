//! # Loading and Error Views
//!
//! Full-area placeholders shown instead of the list while the fetch is in
//! flight or after it failed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::Component;

pub const LOADING_TEXT: &str = "Loading exchange rates...";

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner plus the loading text, centered.
pub struct LoadingView {
    pub spinner_frame: usize,
}

impl LoadingView {
    pub fn new(spinner_frame: usize) -> Self {
        Self { spinner_frame }
    }
}

impl Component for LoadingView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let glyph = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
        let line = Line::from(vec![
            Span::styled(glyph, Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(LOADING_TEXT, Style::default().fg(Color::Gray)),
        ]);

        let [center] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), center);
    }
}

/// Bordered error panel: `Error: <message>`.
pub struct ErrorView<'a> {
    pub message: &'a str,
}

impl<'a> ErrorView<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Component for ErrorView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = Line::from(vec![
            Span::styled("Error: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(self.message),
        ]);
        let paragraph = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title("ERROR")
                    .border_style(Style::default().fg(Color::Red)),
            )
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }
}
