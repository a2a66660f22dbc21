//! # TitleBar Component
//!
//! Top status bar showing the screen title and what was loaded.
//!
//! Stateless: receives everything as props. The text depends on which
//! props are present:
//!
//! 1. **Metadata**: `"Currency Exchange Rates (USD, 2024-01-01, updated 00:00:01 UTC) | 161 currencies"`
//! 2. **Status only**: `"Currency Exchange Rates | Loading exchange rates..."`
//! 3. **Default**: `"Currency Exchange Rates"`

use crate::tui::component::Component;
use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub const TITLE: &str = "Currency Exchange Rates";

/// Top status bar component.
pub struct TitleBar {
    /// Base currency of the loaded table (e.g. "USD")
    pub base: Option<String>,
    /// Publication date of the loaded table
    pub date: Option<String>,
    /// Provider-side update time of the loaded table
    pub updated_at: Option<DateTime<Utc>>,
    /// Status message (e.g. "Loading exchange rates...", "161 currencies")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(base: Option<String>, date: Option<String>, status_message: String) -> Self {
        Self {
            base,
            date,
            updated_at: None,
            status_message,
        }
    }

    pub fn updated_at(mut self, updated_at: Option<DateTime<Utc>>) -> Self {
        self.updated_at = updated_at;
        self
    }

    fn text(&self) -> String {
        let mut text = String::from(TITLE);
        let updated = self
            .updated_at
            .map(|t| format!("updated {}", t.format("%H:%M:%S UTC")));
        let meta: Vec<&str> = [
            self.base.as_deref(),
            self.date.as_deref(),
            updated.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !meta.is_empty() {
            text.push_str(&format!(" ({})", meta.join(", ")));
        }
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(span, area);
    }
}
