//! Level payment calculator for a fixed-rate mortgage

use super::frequency::PaymentFrequency;
use super::rates::{effective_to_periodic, pva, semi_annual_to_effective};
use crate::error::{non_negative, InvalidArgument, Result};
use crate::rounding::round_cents_biased;
use serde::Serialize;

pub const MIN_RATE_PERCENT: f64 = 0.0;
pub const MAX_RATE_PERCENT: f64 = 100.0;
pub const MIN_AMORT_YEARS: u32 = 1;
pub const MAX_AMORT_YEARS: u32 = 100;

/// Fixed-rate mortgage with a quoted semi-annual nominal rate
///
/// Fields are only written through the validating setters, so a constructed
/// calculator always holds a rate in [0, 100] percent and a term of 1 to 100
/// whole years.
#[derive(Debug, Clone, PartialEq)]
pub struct MortgagePayment {
    quoted_rate_pct: f64,
    amort_years: u32,
}

/// The six payment amounts, rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentSchedule {
    pub monthly: f64,
    pub semi_monthly: f64,
    pub bi_weekly: f64,
    pub weekly: f64,
    pub rapid_bi_weekly: f64,
    pub rapid_weekly: f64,
}

impl MortgagePayment {
    /// Create a calculator, validating both parameters
    ///
    /// `quoted_rate_pct` is a percentage (5.5 for 5.5%) compounded semi-annually.
    pub fn new(quoted_rate_pct: f64, amort_years: u32) -> Result<Self> {
        let mut mortgage = Self {
            quoted_rate_pct: 0.0,
            amort_years: MIN_AMORT_YEARS,
        };
        mortgage.set_rate_percent(quoted_rate_pct)?;
        mortgage.set_amort_years(amort_years)?;
        Ok(mortgage)
    }

    /// Convert a real-valued term to whole years, rejecting fractions
    ///
    /// Range checking is left to [`MortgagePayment::set_amort_years`].
    pub fn whole_years(value: f64) -> Result<u32> {
        let field = "amort_years";
        if !value.is_finite() {
            return Err(InvalidArgument::NotANumber { field }.into());
        }
        if value.fract() != 0.0 {
            return Err(InvalidArgument::NotWholeYears { field, value }.into());
        }
        if value < MIN_AMORT_YEARS as f64 || value > MAX_AMORT_YEARS as f64 {
            return Err(out_of_range_years(value));
        }
        Ok(value as u32)
    }

    pub fn set_rate_percent(&mut self, quoted_rate_pct: f64) -> Result<()> {
        let field = "quoted_rate_percent";
        if !quoted_rate_pct.is_finite() {
            return Err(InvalidArgument::NotANumber { field }.into());
        }
        if !(MIN_RATE_PERCENT..=MAX_RATE_PERCENT).contains(&quoted_rate_pct) {
            return Err(InvalidArgument::OutOfRange {
                field,
                value: quoted_rate_pct,
                min: MIN_RATE_PERCENT,
                max: MAX_RATE_PERCENT,
            }
            .into());
        }
        self.quoted_rate_pct = quoted_rate_pct;
        Ok(())
    }

    pub fn set_amort_years(&mut self, amort_years: u32) -> Result<()> {
        if !(MIN_AMORT_YEARS..=MAX_AMORT_YEARS).contains(&amort_years) {
            return Err(out_of_range_years(amort_years as f64));
        }
        self.amort_years = amort_years;
        Ok(())
    }

    pub fn rate_percent(&self) -> f64 {
        self.quoted_rate_pct
    }

    pub fn amort_years(&self) -> u32 {
        self.amort_years
    }

    /// Unrounded level payment for `periods_per_year` payments a year
    fn level_payment(&self, principal: f64, periods_per_year: u32) -> f64 {
        let nominal = self.quoted_rate_pct / 100.0;
        let effective = semi_annual_to_effective(nominal);
        let periodic = effective_to_periodic(effective, periods_per_year);
        let n_periods = periods_per_year * self.amort_years;
        principal / pva(periodic, n_periods)
    }

    /// Unrounded payment for one frequency; rapid frequencies divide the monthly amount
    fn unrounded_payment(&self, principal: f64, frequency: PaymentFrequency) -> f64 {
        match frequency.rapid_divisor() {
            Some(divisor) => self.level_payment(principal, 12) / divisor,
            None => self.level_payment(principal, frequency.periods_per_year()),
        }
    }

    /// Payment for a single frequency, rounded to cents
    pub fn payment(&self, principal: f64, frequency: PaymentFrequency) -> Result<f64> {
        let principal = non_negative("principal", principal)?;
        Ok(round_cents_biased(self.unrounded_payment(principal, frequency)))
    }

    /// All six payments for `principal`, rounded to cents
    pub fn payments(&self, principal: f64) -> Result<PaymentSchedule> {
        let principal = non_negative("principal", principal)?;

        let [monthly, semi_monthly, bi_weekly, weekly, rapid_bi_weekly, rapid_weekly] =
            PaymentFrequency::ALL
                .map(|frequency| round_cents_biased(self.unrounded_payment(principal, frequency)));

        Ok(PaymentSchedule {
            monthly,
            semi_monthly,
            bi_weekly,
            weekly,
            rapid_bi_weekly,
            rapid_weekly,
        })
    }
}

fn out_of_range_years(value: f64) -> crate::Error {
    InvalidArgument::OutOfRange {
        field: "amort_years",
        value,
        min: MIN_AMORT_YEARS as f64,
        max: MAX_AMORT_YEARS as f64,
    }
    .into()
}

impl PaymentSchedule {
    /// Amounts in reporting order: monthly, semi-monthly, bi-weekly, weekly,
    /// rapid bi-weekly, rapid weekly
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.monthly,
            self.semi_monthly,
            self.bi_weekly,
            self.weekly,
            self.rapid_bi_weekly,
            self.rapid_weekly,
        ]
    }

    pub fn get(&self, frequency: PaymentFrequency) -> f64 {
        match frequency {
            PaymentFrequency::Monthly => self.monthly,
            PaymentFrequency::SemiMonthly => self.semi_monthly,
            PaymentFrequency::BiWeekly => self.bi_weekly,
            PaymentFrequency::Weekly => self.weekly,
            PaymentFrequency::RapidBiWeekly => self.rapid_bi_weekly,
            PaymentFrequency::RapidWeekly => self.rapid_weekly,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PaymentFrequency, f64)> + '_ {
        PaymentFrequency::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}
