//! Interest rate conversions and the annuity factor
//!
//! Used to turn a quoted semi-annual nominal rate into a level periodic payment

/// Convert a nominal annual rate compounded semi-annually to an effective annual rate
///
/// `EAR = (1 + j/2)^2 - 1`
pub fn semi_annual_to_effective(nominal: f64) -> f64 {
    (1.0 + nominal / 2.0).powi(2) - 1.0
}

/// Convert an effective annual rate to the rate per period for `periods_per_year` payments
///
/// `r = (1 + EAR)^(1/m) - 1`
pub fn effective_to_periodic(effective_annual: f64, periods_per_year: u32) -> f64 {
    (1.0 + effective_annual).powf(1.0 / periods_per_year as f64) - 1.0
}

/// Present value of an ordinary annuity of 1 per period for `n_periods`
///
/// Payments at the end of each period. A zero rate degenerates to `n_periods`.
pub fn pva(periodic_rate: f64, n_periods: u32) -> f64 {
    if periodic_rate == 0.0 {
        return n_periods as f64;
    }

    (1.0 - (1.0 + periodic_rate).powi(-(n_periods as i32))) / periodic_rate
}
