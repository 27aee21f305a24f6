//! Payment frequencies offered on a Canadian mortgage

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a payment is made
///
/// The four base frequencies are priced with their own annuity factor; the two
/// rapid frequencies are fixed fractions of the monthly payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFrequency {
    Monthly,
    SemiMonthly,
    BiWeekly,
    Weekly,
    RapidBiWeekly,
    RapidWeekly,
}

impl PaymentFrequency {
    /// All frequencies in reporting order
    pub const ALL: [PaymentFrequency; 6] = [
        PaymentFrequency::Monthly,
        PaymentFrequency::SemiMonthly,
        PaymentFrequency::BiWeekly,
        PaymentFrequency::Weekly,
        PaymentFrequency::RapidBiWeekly,
        PaymentFrequency::RapidWeekly,
    ];

    /// Frequencies priced directly from the annuity formula
    pub const BASE: [PaymentFrequency; 4] = [
        PaymentFrequency::Monthly,
        PaymentFrequency::SemiMonthly,
        PaymentFrequency::BiWeekly,
        PaymentFrequency::Weekly,
    ];

    /// Number of payments made in a year
    pub fn periods_per_year(self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::SemiMonthly => 24,
            PaymentFrequency::BiWeekly | PaymentFrequency::RapidBiWeekly => 26,
            PaymentFrequency::Weekly | PaymentFrequency::RapidWeekly => 52,
        }
    }

    /// Divisor applied to the monthly payment, for rapid frequencies only
    pub fn rapid_divisor(self) -> Option<f64> {
        match self {
            PaymentFrequency::RapidBiWeekly => Some(2.0),
            PaymentFrequency::RapidWeekly => Some(4.0),
            _ => None,
        }
    }

    /// Human readable name, e.g. "Rapid Bi-weekly"
    pub fn label(self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "Monthly",
            PaymentFrequency::SemiMonthly => "Semi-monthly",
            PaymentFrequency::BiWeekly => "Bi-weekly",
            PaymentFrequency::Weekly => "Weekly",
            PaymentFrequency::RapidBiWeekly => "Rapid Bi-weekly",
            PaymentFrequency::RapidWeekly => "Rapid Weekly",
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_per_year() {
        let periods: Vec<u32> = PaymentFrequency::BASE
            .iter()
            .map(|f| f.periods_per_year())
            .collect();
        assert_eq!(periods, vec![12, 24, 26, 52]);
    }

    #[test]
    fn test_only_rapid_frequencies_have_divisors() {
        assert_eq!(PaymentFrequency::RapidBiWeekly.rapid_divisor(), Some(2.0));
        assert_eq!(PaymentFrequency::RapidWeekly.rapid_divisor(), Some(4.0));
        for f in PaymentFrequency::BASE {
            assert!(f.rapid_divisor().is_none());
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(PaymentFrequency::SemiMonthly.to_string(), "Semi-monthly");
        assert_eq!(PaymentFrequency::RapidWeekly.label(), "Rapid Weekly");
    }
}
