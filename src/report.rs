//! Plain-text and JSON rendering of results for the command-line driver

use crate::fx::Currency;
use crate::mortgage::PaymentSchedule;
use serde::Serialize;

/// A completed conversion, as reported to the user
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub amount: f64,
    pub from: Currency,
    pub to: Currency,
    /// CAD per 1 USD; absent for same-currency conversions
    pub usd_cad: Option<f64>,
    pub result: f64,
}

/// Format with two decimals and comma thousands separators, e.g. `1,234.50`
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, cents)
}

pub fn payments_text(schedule: &PaymentSchedule) -> String {
    schedule
        .iter()
        .map(|(frequency, amount)| format!("{} Payment: ${}", frequency, format_amount(amount)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn conversion_text(report: &ConversionReport) -> String {
    format!(
        "{} {} = {} {}",
        format_amount(report.amount),
        report.from,
        format_amount(report.result),
        report.to
    )
}
