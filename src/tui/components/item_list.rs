//! # ItemList Component
//!
//! Generic list renderer: a slice of items plus a per-item display rule
//! becomes one row per item, same length, same order.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ItemListState` lives in `TuiState` (selection and scroll offset)
//! - `ItemList` is created each frame with borrowed state and props
//!
//! A row is identified by its position. `keys()` exposes those identifiers.

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Rows per page when the list has not been rendered yet.
const DEFAULT_PAGE_JUMP: usize = 10;

/// Selection and scroll state for an `ItemList`.
/// Must be persisted in the parent TuiState.
#[derive(Debug, Default)]
pub struct ItemListState {
    pub list_state: ListState,
    /// Item count seen at the last render
    len: usize,
    /// Rows visible at the last render (inside the border)
    viewport_height: u16,
}

impl ItemListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Keep the selection inside `0..len`. Called on every render since the
    /// visible slice shrinks when the page size does.
    pub fn sync_len(&mut self, len: usize) {
        self.len = len;
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            None => self.list_state.select(Some(0)),
            Some(idx) if idx >= len => self.list_state.select(Some(len - 1)),
            Some(_) => {}
        }
    }

    fn page_jump(&self) -> usize {
        if self.viewport_height == 0 {
            DEFAULT_PAGE_JUMP
        } else {
            self.viewport_height as usize
        }
    }
}

impl EventHandler for ItemListState {
    /// The newly selected row index.
    type Event = usize;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let last = self.len - 1;
        let current = self.list_state.selected().unwrap_or(0);
        let target = match event {
            TuiEvent::CursorUp => current.saturating_sub(1),
            TuiEvent::CursorDown => (current + 1).min(last),
            TuiEvent::PageUp => current.saturating_sub(self.page_jump()),
            TuiEvent::PageDown => (current + self.page_jump()).min(last),
            TuiEvent::Home => 0,
            TuiEvent::End => last,
            _ => return None,
        };
        if Some(target) == self.list_state.selected() {
            return None;
        }
        self.list_state.select(Some(target));
        Some(target)
    }
}

/// Transient render wrapper: `items` are props, `render_item` is the
/// display rule applied to each of them.
pub struct ItemList<'a, T, F>
where
    F: Fn(&'a T) -> Line<'a>,
{
    state: &'a mut ItemListState,
    items: &'a [T],
    render_item: F,
    title: Option<String>,
}

impl<'a, T, F> ItemList<'a, T, F>
where
    F: Fn(&'a T) -> Line<'a>,
{
    pub fn new(state: &'a mut ItemListState, items: &'a [T], render_item: F) -> Self {
        Self {
            state,
            items,
            render_item,
            title: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Per-row identifiers, one per item.
    pub fn keys(&self) -> Range<usize> {
        0..self.items.len()
    }

    /// One display row per item, in input order.
    pub fn rows(&self) -> Vec<ListItem<'a>> {
        let items = self.items;
        self.keys()
            .map(|key| ListItem::new((self.render_item)(&items[key])))
            .collect()
    }
}

impl<'a, T, F> Component for ItemList<'a, T, F>
where
    F: Fn(&'a T) -> Line<'a>,
{
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync_len(self.items.len());
        self.state.viewport_height = area.height.saturating_sub(2);

        let mut block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
        if let Some(title) = &self.title {
            block = block.title(title.clone());
        }

        let list = List::new(self.rows())
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
