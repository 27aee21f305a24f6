//! Canadian fixed-rate mortgage payments
//!
//! Quoted rates follow the Canadian convention of semi-annual compounding.
//! A quoted nominal rate `j` is converted to an effective annual rate, then
//! to the per-period rate of each payment frequency, and the level payment
//! is the principal divided by the present value of an ordinary annuity.

mod calculator;
mod frequency;
pub mod rates;

pub use calculator::{MortgagePayment, PaymentSchedule};
pub use frequency::PaymentFrequency;
