//! The two currencies the converter understands

use crate::error::{Error, InvalidArgument};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Cad,
    Usd,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Cad => "CAD",
            Currency::Usd => "USD",
        }
    }

    /// Parse a user-supplied code, ignoring case and surrounding whitespace
    ///
    /// `field` names the argument in the error, e.g. "from_currency".
    pub fn parse_field(field: &'static str, code: &str) -> Result<Self, Error> {
        match code.trim().to_ascii_uppercase().as_str() {
            "CAD" => Ok(Currency::Cad),
            "USD" => Ok(Currency::Usd),
            _ => Err(InvalidArgument::UnsupportedCurrency {
                field,
                value: code.to_string(),
            }
            .into()),
        }
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_field("currency", s)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
