//! # Application State
//!
//! Core business state for Ratelist. Domain data only, no TUI-specific types.
//! Presentation state (scroll selection) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn RateProvider>  // where rates come from
//! ├── status: Status                   // Loading | Error(msg) | Ready
//! ├── rates: Vec<ExchangeRate>         // loaded rates, display order
//! ├── page_size: PageSize              // 10 | 20 | 50 | 100
//! ├── sort: SortOrder                  // applied once on load
//! ├── base / date / updated_at         // payload metadata, if sent
//! ├── fetch_issued: bool               // the one fetch has been requested
//! └── status_message: String           // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::core::config::ResolvedConfig;
use crate::rates::{ExchangeRate, PageSize, RateProvider, SortOrder};

/// Which of the three display conditions is active.
///
/// `Loading` is the initial state. `Error` and `Ready` are terminal for the
/// session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Loading,
    Error(String),
    Ready,
}

pub struct App {
    pub provider: Arc<dyn RateProvider>,
    pub status: Status,
    pub rates: Vec<ExchangeRate>,
    pub page_size: PageSize,
    pub sort: SortOrder,
    /// Base currency reported by the payload (e.g. "USD").
    pub base: Option<String>,
    /// Publication date reported by the payload.
    pub date: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Set once `Action::Start` has produced the fetch effect.
    pub fetch_issued: bool,
    pub status_message: String,
}

impl App {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self {
            provider,
            status: Status::Loading,
            rates: Vec::new(),
            page_size: PageSize::default(),
            sort: SortOrder::default(),
            base: None,
            date: None,
            updated_at: None,
            fetch_issued: false,
            status_message: String::new(),
        }
    }

    pub fn from_config(provider: Arc<dyn RateProvider>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(provider);
        app.page_size = config.page_size;
        app.sort = config.sort;
        app
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, Status::Loading)
    }

    /// The error message, only while in the error state.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// The first `page_size` rates, or all of them when there are fewer.
    pub fn visible_rates(&self) -> &[ExchangeRate] {
        let end = self.page_size.get().min(self.rates.len());
        &self.rates[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{numbered_rates, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status, Status::Loading);
        assert!(app.is_loading());
        assert!(app.error().is_none());
        assert!(app.rates.is_empty());
        assert_eq!(app.page_size, PageSize::Ten);
        assert_eq!(app.sort, SortOrder::Provider);
        assert!(!app.fetch_issued);
    }

    #[test]
    fn test_visible_rates_fewer_than_page() {
        let mut app = test_app();
        app.rates = numbered_rates(5);
        let visible = app.visible_rates();
        assert_eq!(visible.len(), 5);
        assert_eq!(visible, &app.rates[..]);
    }

    #[test]
    fn test_visible_rates_truncates_to_page() {
        let mut app = test_app();
        app.rates = numbered_rates(150);
        let visible = app.visible_rates();
        assert_eq!(visible.len(), 10);
        assert_eq!(visible, &app.rates[..10]);
    }

    #[test]
    fn test_visible_rates_len_is_min_for_every_size() {
        for count in [0, 1, 10, 35, 100, 150] {
            let mut app = test_app();
            app.rates = numbered_rates(count);
            for size in PageSize::ALL {
                app.page_size = size;
                assert_eq!(app.visible_rates().len(), size.get().min(count));
            }
        }
    }

    #[test]
    fn test_error_only_in_error_state() {
        let mut app = test_app();
        app.status = Status::Error("boom".to_string());
        assert_eq!(app.error(), Some("boom"));
        assert!(!app.is_loading());
        app.status = Status::Ready;
        assert!(app.error().is_none());
    }
}
