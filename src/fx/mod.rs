//! CAD/USD conversion driven by a Bank of Canada exchange-rate table

mod converter;
mod currency;
mod discover;
pub mod loader;

pub use converter::{convert_same_currency, RateConverter};
pub use currency::Currency;
pub use discover::{discover_rate_file, DEFAULT_RATE_FILE_PREFIX};
pub use loader::{load_latest_rate, RateLookup, RateSource, USD_CAD_COLUMN};
