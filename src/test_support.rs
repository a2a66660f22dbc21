//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::rates::{ExchangeRate, RateError, RateProvider, RateTable};

/// A provider that answers with a canned result and counts its calls.
pub struct StaticProvider {
    result: Result<RateTable, RateError>,
    calls: AtomicUsize,
}

impl StaticProvider {
    pub fn ok(table: RateTable) -> Self {
        Self {
            result: Ok(table),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: RateError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_rates(&self) -> Result<RateTable, RateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// `count` rates named C000, C001, ... with rate equal to the index + 0.5.
pub fn numbered_rates(count: usize) -> Vec<ExchangeRate> {
    (0..count)
        .map(|i| ExchangeRate::new(format!("C{i:03}"), i as f64 + 0.5))
        .collect()
}

/// Creates a test App whose provider returns an empty table.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StaticProvider::ok(RateTable::from_rates(
        Vec::new(),
    ))))
}
