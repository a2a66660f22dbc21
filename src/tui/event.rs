use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit, // Ctrl+C

    // Page size selector
    NextPageSize,
    PrevPageSize,
    PickPageSize(usize), // index into PageSize::ALL

    // List navigation (handled directly in TUI)
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    Home,
    End,

    Resize,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            translate_key(key_event)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::CursorUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::CursorDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Right) | (_, KeyCode::Tab) | (_, KeyCode::Char('+')) => {
            Some(TuiEvent::NextPageSize)
        }
        (_, KeyCode::Left) | (_, KeyCode::BackTab) | (_, KeyCode::Char('-')) => {
            Some(TuiEvent::PrevPageSize)
        }
        (_, KeyCode::Char(c @ '1'..='4')) => Some(TuiEvent::PickPageSize(c as usize - '1' as usize)),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
        (_, KeyCode::Home) => Some(TuiEvent::Home),
        (_, KeyCode::End) => Some(TuiEvent::End),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(translate(key(KeyCode::Char('q'))), Some(TuiEvent::Quit));
        assert_eq!(translate(key(KeyCode::Esc)), Some(TuiEvent::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(ctrl_c), Some(TuiEvent::ForceQuit));
    }

    #[test]
    fn test_page_size_keys() {
        assert_eq!(translate(key(KeyCode::Right)), Some(TuiEvent::NextPageSize));
        assert_eq!(translate(key(KeyCode::Tab)), Some(TuiEvent::NextPageSize));
        assert_eq!(translate(key(KeyCode::Left)), Some(TuiEvent::PrevPageSize));
        assert_eq!(translate(key(KeyCode::Char('1'))), Some(TuiEvent::PickPageSize(0)));
        assert_eq!(translate(key(KeyCode::Char('4'))), Some(TuiEvent::PickPageSize(3)));
        assert_eq!(translate(key(KeyCode::Char('5'))), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(translate(key(KeyCode::Up)), Some(TuiEvent::CursorUp));
        assert_eq!(translate(key(KeyCode::Char('j'))), Some(TuiEvent::CursorDown));
        assert_eq!(translate(key(KeyCode::PageDown)), Some(TuiEvent::PageDown));
        assert_eq!(translate(key(KeyCode::Home)), Some(TuiEvent::Home));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
