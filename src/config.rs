//! Runtime configuration for the command-line driver
//!
//! Defaults are overlaid by environment variables, which are in turn
//! overridden by command-line flags.

use crate::fx::DEFAULT_RATE_FILE_PREFIX;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_RATES_CSV: &str = "MORTGAGE_FX_RATES_CSV";
pub const ENV_RATES_DIR: &str = "MORTGAGE_FX_RATES_DIR";
pub const ENV_OUTPUT: &str = "MORTGAGE_FX_OUTPUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Labelled lines with thousands separators
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Explicit rate table; when unset the table is discovered in `rates_dir`
    pub rates_csv: Option<PathBuf>,
    pub rates_dir: PathBuf,
    pub rate_file_prefix: String,
    pub output: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rates_csv: None,
            rates_dir: PathBuf::from("."),
            rate_file_prefix: DEFAULT_RATE_FILE_PREFIX.to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with `MORTGAGE_FX_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; unparsable values keep the default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            rates_csv: non_blank(ENV_RATES_CSV).map(PathBuf::from),
            rates_dir: non_blank(ENV_RATES_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.rates_dir),
            rate_file_prefix: defaults.rate_file_prefix,
            output: lookup(ENV_OUTPUT)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.rate_file_prefix, "BankOfCanadaExchangeRates");
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_RATES_CSV, "/data/rates.csv"),
            (ENV_RATES_DIR, "/data"),
            (ENV_OUTPUT, "JSON"),
        ]));

        assert_eq!(config.rates_csv, Some(PathBuf::from("/data/rates.csv")));
        assert_eq!(config.rates_dir, PathBuf::from("/data"));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_RATES_CSV, "  "),
            (ENV_OUTPUT, "xml"),
        ]));

        assert_eq!(config.rates_csv, None);
        assert_eq!(config.output, OutputFormat::Text);
    }
}
