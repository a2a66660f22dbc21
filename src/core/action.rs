//! # Actions
//!
//! Everything that can happen in Ratelist becomes an `Action`.
//! The screen opens? That's `Action::Start`.
//! The rates arrive? That's `Action::RatesLoaded(table)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing any I/O the caller
//! should perform. No side effects here. I/O happens in the TUI adapter.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::{App, Status};
use crate::rates::{GENERIC_FETCH_ERROR, PageSize, RateTable};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Session start. Requests the one and only fetch.
    Start,
    /// The fetch completed with a payload.
    RatesLoaded(RateTable),
    /// The fetch failed; carries the user-facing message.
    FetchFailed(String),
    /// The user picked a page size.
    SetPageSize(PageSize),
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn the rates fetch on the runtime.
    SpawnFetch,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Start => {
            if app.fetch_issued {
                debug!("Start ignored: fetch already issued");
                return Effect::None;
            }
            app.fetch_issued = true;
            app.status = Status::Loading;
            app.status_message = String::from("Loading exchange rates...");
            Effect::SpawnFetch
        }
        Action::RatesLoaded(table) => {
            if !app.is_loading() {
                warn!("Rates arrived outside the loading state, discarding");
                return Effect::None;
            }
            let mut rates = table.rates;
            app.sort.apply(&mut rates);
            info!("Loaded {} rates ({:?} order)", rates.len(), app.sort);
            app.rates = rates;
            app.base = table.base;
            app.date = table.date;
            app.updated_at = table.updated_at;
            app.status = Status::Ready;
            app.status_message = match app.rates.len() {
                1 => String::from("1 currency"),
                n => format!("{n} currencies"),
            };
            Effect::None
        }
        Action::FetchFailed(message) => {
            if !app.is_loading() {
                warn!("Fetch failure arrived outside the loading state, discarding");
                return Effect::None;
            }
            let message = if message.trim().is_empty() {
                GENERIC_FETCH_ERROR.to_string()
            } else {
                message
            };
            warn!("Fetch failed: {}", message);
            app.status = Status::Error(message);
            app.status_message = String::from("Fetch failed");
            Effect::None
        }
        Action::SetPageSize(size) => {
            debug!("Page size: {} -> {}", app.page_size, size);
            app.page_size = size;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
