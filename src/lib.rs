//! Mortgage FX - Canadian mortgage payments and CAD/USD conversion
//!
//! This library provides:
//! - Level payments for monthly, semi-monthly, bi-weekly and weekly schedules
//!   under the Canadian semi-annual compounding convention, plus the rapid
//!   bi-weekly and rapid weekly variants
//! - CAD <-> USD conversion at the latest `USD/CAD` rate from a Bank of Canada
//!   CSV table, read lazily and cached per converter

pub mod config;
pub mod error;
pub mod fx;
pub mod mortgage;
pub mod report;
pub mod rounding;

// Re-export commonly used types
pub use error::{Error, ErrorKind, InvalidArgument, Result};
pub use fx::{Currency, RateConverter, RateSource};
pub use mortgage::{MortgagePayment, PaymentFrequency, PaymentSchedule};
