use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Units of `currency` per one unit of the base currency.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    pub currency: String,
    pub rate: f64,
}

impl ExchangeRate {
    pub fn new(currency: impl Into<String>, rate: f64) -> Self {
        Self {
            currency: currency.into(),
            rate,
        }
    }
}

/// A parsed `latest` payload.
///
/// `rates` keeps the key order of the response body and is not sorted here.
/// A key sent twice yields one entry: the last value, at the first key's
/// position, as a JSON object lookup would see it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateTable {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(
        default,
        rename = "time_last_updated",
        deserialize_with = "chrono::serde::ts_seconds_option::deserialize"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "ordered_rates")]
    pub rates: Vec<ExchangeRate>,
}

impl RateTable {
    /// A table with only rates, as a provider without metadata would return.
    pub fn from_rates(rates: Vec<ExchangeRate>) -> Self {
        Self {
            base: None,
            date: None,
            updated_at: None,
            rates,
        }
    }
}

/// Reads a `{ "EUR": 0.92, ... }` object into a Vec in document order.
/// Repeated keys overwrite the earlier value in place.
fn ordered_rates<'de, D>(deserializer: D) -> Result<Vec<ExchangeRate>, D::Error>
where
    D: Deserializer<'de>,
{
    struct RatesVisitor;

    impl<'de> Visitor<'de> for RatesVisitor {
        type Value = Vec<ExchangeRate>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of currency codes to numeric rates")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut rates: Vec<ExchangeRate> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            let mut positions: HashMap<String, usize> = HashMap::new();
            while let Some((currency, rate)) = map.next_entry::<String, f64>()? {
                match positions.get(&currency) {
                    Some(&idx) => rates[idx].rate = rate,
                    None => {
                        positions.insert(currency.clone(), rates.len());
                        rates.push(ExchangeRate { currency, rate });
                    }
                }
            }
            Ok(rates)
        }
    }

    deserializer.deserialize_map(RatesVisitor)
}

// ============================================================================
// Page Size
// ============================================================================

/// Number of rates shown at once. Only the four listed sizes exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        match self {
            PageSize::Ten => 0,
            PageSize::Twenty => 1,
            PageSize::Fifty => 2,
            PageSize::Hundred => 3,
        }
    }

    /// Wraps around from 100 back to 10.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Wraps around from 10 to 100.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> usize {
        size.get()
    }
}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or_else(|| format!("page size must be one of 10, 20, 50, 100 (got {value})"))
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s
            .trim()
            .parse()
            .map_err(|_| format!("not a number: {s:?}"))?;
        PageSize::try_from(value)
    }
}

// ============================================================================
// Sort Order
// ============================================================================

/// How loaded rates are ordered before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Keep the order the provider sent.
    #[default]
    Provider,
    /// Alphabetical by currency code.
    Currency,
}

impl SortOrder {
    pub fn apply(self, rates: &mut [ExchangeRate]) {
        match self {
            SortOrder::Provider => {}
            SortOrder::Currency => rates.sort_by(|a, b| a.currency.cmp(&b.currency)),
        }
    }
}
