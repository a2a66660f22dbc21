use std::fmt;

use async_trait::async_trait;

use super::types::RateTable;

/// Shown when a failure carries no message of its own, and for every HTTP
/// status failure.
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch data";

/// Errors that can occur while fetching rates.
/// None of them are retried; any of them ends the session in the error view.
#[derive(Debug, Clone, PartialEq)]
pub enum RateError {
    /// The endpoint answered with a non-2xx status.
    Http { status: u16 },
    /// Transport failure (DNS, connection refused, body read aborted).
    Network(String),
    /// The body was not the JSON shape we expect.
    Parse(String),
}

impl RateError {
    /// The single string surfaced to the user. HTTP failures get the generic
    /// message; the other kinds show their own message when they have one.
    pub fn user_message(&self) -> String {
        match self {
            RateError::Http { .. } => GENERIC_FETCH_ERROR.to_string(),
            RateError::Network(msg) | RateError::Parse(msg) => {
                if msg.trim().is_empty() {
                    GENERIC_FETCH_ERROR.to_string()
                } else {
                    msg.clone()
                }
            }
        }
    }
}

impl fmt::Display for RateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateError::Http { status } => write!(f, "HTTP error (status {status})"),
            RateError::Network(msg) => write!(f, "network error: {msg}"),
            RateError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for RateError {}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Fetches the full rate table in one request.
    async fn fetch_rates(&self) -> Result<RateTable, RateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_uses_generic_message() {
        let err = RateError::Http { status: 503 };
        assert_eq!(err.user_message(), GENERIC_FETCH_ERROR);
        assert_eq!(err.to_string(), "HTTP error (status 503)");
    }

    #[test]
    fn test_network_error_shows_its_message() {
        let err = RateError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), "connection refused");
    }

    #[test]
    fn test_empty_message_falls_back_to_generic() {
        assert_eq!(
            RateError::Parse("  ".to_string()).user_message(),
            GENERIC_FETCH_ERROR
        );
        assert_eq!(
            RateError::Network(String::new()).user_message(),
            GENERIC_FETCH_ERROR
        );
    }
}
