//! # PageSizeSelector Component
//!
//! One-line selector for how many rates to show:
//!
//! ```text
//! Currencies per page:  [10]  20   50   100
//! ```
//!
//! Stateless: the current size is a prop from `App`. Key events are
//! translated into the size the user asked for; the parent turns that into
//! `Action::SetPageSize` so the change goes through `update()`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::rates::PageSize;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const LABEL: &str = "Currencies per page: ";

pub struct PageSizeSelector {
    /// Currently applied page size (Prop)
    pub current: PageSize,
}

impl PageSizeSelector {
    pub fn new(current: PageSize) -> Self {
        Self { current }
    }

    fn line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(LABEL, Style::default().fg(Color::Gray))];
        for size in PageSize::ALL {
            let span = if size == self.current {
                Span::styled(
                    format!("[{size}]"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!(" {size} "), Style::default().fg(Color::DarkGray))
            };
            spans.push(span);
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl EventHandler for PageSizeSelector {
    /// The page size the user picked.
    type Event = PageSize;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PageSize> {
        match event {
            TuiEvent::NextPageSize => Some(self.current.next()),
            TuiEvent::PrevPageSize => Some(self.current.prev()),
            TuiEvent::PickPageSize(index) => PageSize::ALL.get(*index).copied(),
            _ => None,
        }
    }
}

impl Component for PageSizeSelector {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_cycles_from_current() {
        let mut selector = PageSizeSelector::new(PageSize::Twenty);
        assert_eq!(selector.handle_event(&TuiEvent::NextPageSize), Some(PageSize::Fifty));
        assert_eq!(selector.handle_event(&TuiEvent::PrevPageSize), Some(PageSize::Ten));
    }

    #[test]
    fn test_pick_by_index() {
        let mut selector = PageSizeSelector::new(PageSize::Ten);
        assert_eq!(selector.handle_event(&TuiEvent::PickPageSize(3)), Some(PageSize::Hundred));
        assert_eq!(selector.handle_event(&TuiEvent::PickPageSize(7)), None);
    }

    #[test]
    fn test_ignores_unrelated_events() {
        let mut selector = PageSizeSelector::new(PageSize::Ten);
        assert_eq!(selector.handle_event(&TuiEvent::CursorDown), None);
    }

    #[test]
    fn test_render_marks_current_size() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut selector = PageSizeSelector::new(PageSize::Fifty);

        terminal
            .draw(|f| {
                selector.render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("Currencies per page:"));
        assert!(text.contains("[50]"));
        assert!(!text.contains("[10]"));
        assert!(text.contains("100"));
    }
}
