//! CAD <-> USD conversion at the latest tabulated rate

use super::currency::Currency;
use super::loader::{load_latest_rate, RateSource, USD_CAD_COLUMN};
use crate::error::{non_negative, Error, Result};
use crate::rounding::{round_cents, round_cents_biased};
use log::debug;
use std::path::PathBuf;

/// Converts between CAD and USD using the last `USD/CAD` rate in a table
///
/// The rate (CAD per 1 USD) is read on the first cross-currency conversion
/// and kept for the lifetime of the converter. A failed read leaves nothing
/// cached, so the next conversion reads the source again.
#[derive(Debug, Clone)]
pub struct RateConverter {
    source: RateSource,
    cached_usd_cad: Option<f64>,
}

impl RateConverter {
    /// Converter over a CSV file; the file is not opened until a rate is needed
    pub fn new<P: Into<PathBuf>>(csv_path: P) -> Result<Self> {
        Ok(Self::with_source(RateSource::file(csv_path)?))
    }

    /// Converter over a table already held in memory
    pub fn from_table(label: impl Into<String>, data: impl Into<String>) -> Result<Self> {
        Ok(Self::with_source(RateSource::inline(label, data)?))
    }

    pub fn with_source(source: RateSource) -> Self {
        Self {
            source,
            cached_usd_cad: None,
        }
    }

    pub fn source(&self) -> &RateSource {
        &self.source
    }

    /// The memoized CAD per 1 USD, if a lookup has succeeded
    pub fn cached_rate(&self) -> Option<f64> {
        self.cached_usd_cad
    }

    /// CAD per 1 USD, reading the source on first use
    pub fn usd_cad(&mut self) -> Result<f64> {
        if let Some(rate) = self.cached_usd_cad {
            debug!("Reusing cached USD/CAD rate {}", rate);
            return Ok(rate);
        }

        let lookup = load_latest_rate(&self.source)?;
        self.cached_usd_cad = Some(lookup.rate);
        Ok(lookup.rate)
    }

    /// Convert `amount` between currency codes such as "usd" or " CAD "
    pub fn convert(&mut self, amount: f64, from_currency: &str, to_currency: &str) -> Result<f64> {
        let amount = non_negative("amount", amount)?;
        let from = Currency::parse_field("from_currency", from_currency)?;
        let to = Currency::parse_field("to_currency", to_currency)?;
        self.convert_currency(amount, from, to)
    }

    /// Convert `amount` from one currency to another, rounded to cents
    ///
    /// Same-currency requests never touch the rate source.
    pub fn convert_currency(&mut self, amount: f64, from: Currency, to: Currency) -> Result<f64> {
        let amount = non_negative("amount", amount)?;

        let converted = match (from, to) {
            (Currency::Usd, Currency::Cad) => amount * self.usd_cad()?,
            (Currency::Cad, Currency::Usd) => {
                let rate = self.usd_cad()?;
                if rate == 0.0 {
                    return Err(Error::ZeroRate {
                        column: USD_CAD_COLUMN,
                        source_location: self.source.to_string(),
                    });
                }
                amount / rate
            }
            _ => return convert_same_currency(amount),
        };

        Ok(round_cents_biased(converted))
    }
}

/// Same-currency conversion: the amount rounded to cents, no rate involved
pub fn convert_same_currency(amount: f64) -> Result<f64> {
    let amount = non_negative("amount", amount)?;
    Ok(round_cents(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, InvalidArgument};
    use approx::assert_abs_diff_eq;

    const TABLE: &str = "date,USD/CAD\n2024-01-01,\n2024-01-02,1.35\n2024-01-03,abc\n2024-01-04,1.37\n";

    fn converter() -> RateConverter {
        RateConverter::from_table("fixture", TABLE).unwrap()
    }

    #[test]
    fn test_usd_to_cad_and_back() {
        let mut fx = converter();

        assert_eq!(fx.convert(100_000.0, "USD", "CAD").unwrap(), 137_000.0);
        assert_eq!(fx.convert(137_000.0, "CAD", "USD").unwrap(), 100_000.0);
        assert_eq!(fx.convert(50.0, "CAD", "USD").unwrap(), 36.5);
        assert_eq!(fx.cached_rate(), Some(1.37));
    }

    #[test]
    fn test_round_trip_within_a_cent() {
        let mut fx = converter();
        for amount in [0.01, 1.0, 19.99, 1234.56, 987_654.32] {
            let cad = fx.convert(amount, "USD", "CAD").unwrap();
            let back = fx.convert(cad, "CAD", "USD").unwrap();
            assert_abs_diff_eq!(back, amount, epsilon = 0.01 + 1e-9);
        }
    }

    #[test]
    fn test_codes_are_normalized() {
        let mut fx = converter();
        let loose = fx.convert(100_000.0, "usd", " cad ").unwrap();
        let strict = fx.convert(100_000.0, "USD", "CAD").unwrap();
        assert_eq!(loose, strict);
    }

    #[test]
    fn test_same_currency_skips_lookup() {
        let mut fx = RateConverter::from_table("broken", "date,EUR/CAD\n2024-01-02,1.48\n").unwrap();

        assert_eq!(fx.convert(12.345, "CAD", "CAD").unwrap(), 12.35);
        assert_eq!(fx.convert(99.999, "usd", "USD").unwrap(), 100.0);
        assert_eq!(fx.cached_rate(), None);

        let err = fx.convert(10.0, "USD", "CAD").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceFormat);
        assert_eq!(fx.cached_rate(), None);
    }

    #[test]
    fn test_invalid_arguments_leave_no_cache() {
        let mut fx = converter();

        let err = fx.convert(-5.0, "USD", "CAD").unwrap_err();
        assert!(matches!(
            err.invalid_argument(),
            Some(InvalidArgument::Negative { field: "amount", .. })
        ));

        let err = fx.convert(f64::NAN, "USD", "CAD").unwrap_err();
        assert_eq!(
            err.invalid_argument(),
            Some(&InvalidArgument::NotANumber { field: "amount" })
        );

        let err = fx.convert(5.0, "EUR", "CAD").unwrap_err();
        assert!(matches!(
            err.invalid_argument(),
            Some(InvalidArgument::UnsupportedCurrency { field: "from_currency", .. })
        ));

        let err = fx.convert(5.0, "CAD", "EUR").unwrap_err();
        assert!(matches!(
            err.invalid_argument(),
            Some(InvalidArgument::UnsupportedCurrency { field: "to_currency", .. })
        ));

        assert_eq!(fx.cached_rate(), None);
    }

    #[test]
    fn test_no_numeric_rate() {
        let mut fx = RateConverter::from_table("empty", "date,USD/CAD\n2024-01-02,\n").unwrap();
        let err = fx.convert(1.0, "CAD", "USD").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceContent);
    }

    #[test]
    fn test_same_currency_without_converter() {
        assert_eq!(convert_same_currency(12.345).unwrap(), 12.35);
        assert_eq!(convert_same_currency(0.0).unwrap(), 0.0);
        let err = convert_same_currency(-1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_zero_latest_rate() {
        let table = "date,USD/CAD\n2024-01-02,1.35\n2024-01-03,0\n";
        let mut fx = RateConverter::from_table("zero", table).unwrap();

        let err = fx.convert(100.0, "CAD", "USD").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceContent);
        assert!(matches!(err, Error::ZeroRate { .. }));

        // The zero row is still the latest; no fallback to 1.35
        assert_eq!(fx.cached_rate(), Some(0.0));
        assert_eq!(fx.convert(100.0, "USD", "CAD").unwrap(), 0.0);
    }

    #[test]
    fn test_negative_latest_rate_used_as_is() {
        let table = "date,USD/CAD\n2024-01-02,1.35\n2024-01-03,-1.30\n";
        let mut fx = RateConverter::from_table("negative", table).unwrap();
        assert_eq!(fx.cached_rate(), None);
        assert_eq!(fx.usd_cad().unwrap(), -1.30);
    }

    #[test]
    fn test_typed_conversion() {
        let mut fx = converter();
        assert_eq!(
            fx.convert_currency(10.0, Currency::Usd, Currency::Cad).unwrap(),
            13.7
        );
        assert_eq!(fx.source().to_string(), "fixture");
    }
}
