pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{GENERIC_FETCH_ERROR, RateError, RateProvider};
pub use providers::{DEFAULT_ENDPOINT, ExchangeRateApiProvider};
pub use types::{ExchangeRate, PageSize, RateTable, SortOrder};
