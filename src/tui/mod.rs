//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle** (ready or error): sleeps up to 500ms, only redraws on events,
//!   a terminal resize, or an action arriving from the fetch task.
//!
//! ## Fetch
//!
//! `Action::Start` is dispatched once before the loop. Its
//! `Effect::SpawnFetch` spawns a single tokio task that sends back
//! `RatesLoaded` or `FetchFailed` over an mpsc channel. There is no
//! cancellation; if the user quits first, the result is dropped.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Status};
use crate::rates::{ExchangeRateApiProvider, RateProvider};
use crate::tui::component::EventHandler;
use crate::tui::components::{ItemListState, PageSizeSelector};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    /// Selection and scroll position in the rate list
    pub rate_list: ItemListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Calls `restore` when dropped, so every exit path out of `run` (including
/// a failed draw) leaves the terminal usable.
struct RestoreOnDrop(fn());

impl Drop for RestoreOnDrop {
    fn drop(&mut self) {
        (self.0)();
    }
}

/// Build the rates provider for the resolved endpoint.
pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn RateProvider> {
    let provider = ExchangeRateApiProvider::new(Some(config.endpoint.clone()));
    info!("Rates endpoint: {}", provider.endpoint());
    Arc::new(provider)
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let provider = build_provider(&config);
    let mut app = App::from_config(provider, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    // Dropped in reverse order: terminal modes first, then raw mode.
    let _restore = RestoreOnDrop(ratatui::restore);
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from the fetch task
    let (tx, rx) = mpsc::channel();

    if update(&mut app, Action::Start) == Effect::SpawnFetch {
        spawn_fetch(&app, tx.clone());
    }

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&event, &app, &mut tui) {
                debug!("Dispatching {:?}", action);
                if update(&mut app, action) == Effect::Quit {
                    break 'event_loop;
                }
            }
        }

        // Handle actions from the fetch task
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => break 'event_loop,
                Effect::SpawnFetch => spawn_fetch(&app, tx.clone()),
                Effect::None => {}
            }
        }
    }

    info!("Shutting down");
    Ok(())
}

/// Turns a terminal event into a core action, handling presentation-only
/// events (list scrolling) in place.
///
/// Page-size keys only act while the selector is on screen (`Ready`).
fn route_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Resize => None,
        TuiEvent::NextPageSize | TuiEvent::PrevPageSize | TuiEvent::PickPageSize(_)
            if app.status != Status::Ready =>
        {
            debug!("Page size key ignored: rates not loaded");
            None
        }
        TuiEvent::NextPageSize | TuiEvent::PrevPageSize | TuiEvent::PickPageSize(_) => {
            PageSizeSelector::new(app.page_size)
                .handle_event(event)
                .map(Action::SetPageSize)
        }
        TuiEvent::CursorUp
        | TuiEvent::CursorDown
        | TuiEvent::PageUp
        | TuiEvent::PageDown
        | TuiEvent::Home
        | TuiEvent::End => {
            tui.rate_list.handle_event(event);
            None
        }
    }
}

fn spawn_fetch(app: &App, tx: mpsc::Sender<Action>) {
    info!("Spawning rates fetch via {}", app.provider.name());
    let provider = app.provider.clone();
    tokio::spawn(async move {
        let action = fetch_action(provider.as_ref()).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver fetch result: receiver dropped");
        }
    });
}

/// Runs the fetch and maps its outcome onto the action the loop applies.
pub async fn fetch_action(provider: &dyn RateProvider) -> Action {
    match provider.fetch_rates().await {
        Ok(table) => Action::RatesLoaded(table),
        Err(e) => {
            warn!("Rates fetch failed: {}", e);
            Action::FetchFailed(e.user_message())
        }
    }
}
