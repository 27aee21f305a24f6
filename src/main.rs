//! Mortgage FX CLI
//!
//! Prints the six mortgage payment amounts for a principal, or converts an
//! amount between CAD and USD at the latest Bank of Canada rate.
//!
//! ```bash
//! mortgage-fx payments --principal 500000 --rate 5.5 --years 25
//! mortgage-fx convert --amount 100000 --from USD --to CAD --rates BankOfCanadaExchangeRates.csv
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use mortgage_fx::config::{AppConfig, OutputFormat};
use mortgage_fx::fx::discover_rate_file;
use mortgage_fx::report::{self, ConversionReport};
use mortgage_fx::{Currency, MortgagePayment, RateConverter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mortgage-fx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format (overrides MORTGAGE_FX_OUTPUT)
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Monthly, semi-monthly, bi-weekly, weekly and rapid payments
    Payments {
        /// Amount borrowed
        #[arg(long, allow_negative_numbers = true)]
        principal: f64,

        /// Quoted annual rate in percent, compounded semi-annually (e.g. 5.5)
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,

        /// Amortization period in whole years
        #[arg(long, allow_negative_numbers = true)]
        years: f64,
    },

    /// Convert an amount between CAD and USD
    Convert {
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,

        /// Source currency (CAD or USD)
        #[arg(long)]
        from: String,

        /// Target currency (CAD or USD)
        #[arg(long)]
        to: String,

        /// Rate table with a USD/CAD column (overrides MORTGAGE_FX_RATES_CSV)
        #[arg(long)]
        rates: Option<PathBuf>,

        /// Directory searched for BankOfCanadaExchangeRates*.csv when no table is given
        #[arg(long)]
        rates_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    if let Some(format) = cli.format {
        config.output = format;
    }

    match cli.command {
        Command::Payments {
            principal,
            rate,
            years,
        } => run_payments(&config, principal, rate, years),
        Command::Convert {
            amount,
            from,
            to,
            rates,
            rates_dir,
        } => {
            if rates.is_some() {
                config.rates_csv = rates;
            }
            if let Some(dir) = rates_dir {
                config.rates_dir = dir;
            }
            run_convert(&config, amount, &from, &to)
        }
    }
}

fn run_payments(config: &AppConfig, principal: f64, rate: f64, years: f64) -> Result<()> {
    let years = MortgagePayment::whole_years(years).context("Invalid amortization period")?;
    let mortgage = MortgagePayment::new(rate, years).context("Invalid mortgage terms")?;
    let schedule = mortgage
        .payments(principal)
        .context("Failed to compute payments")?;

    match config.output {
        OutputFormat::Text => println!("{}", report::payments_text(&schedule)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&schedule)?),
    }
    Ok(())
}

fn run_convert(config: &AppConfig, amount: f64, from: &str, to: &str) -> Result<()> {
    let from = Currency::parse_field("from_currency", from)?;
    let to = Currency::parse_field("to_currency", to)?;

    let report = if from == to {
        // Same-currency conversions never need the table
        ConversionReport {
            amount,
            from,
            to,
            usd_cad: None,
            result: mortgage_fx::fx::convert_same_currency(amount)?,
        }
    } else {
        let rates_csv = resolve_rates_csv(config)?;
        info!("Using rate table {}", rates_csv.display());

        let mut converter = RateConverter::new(rates_csv)?;
        let result = converter
            .convert_currency(amount, from, to)
            .with_context(|| format!("Failed to convert {} to {}", from, to))?;

        ConversionReport {
            amount,
            from,
            to,
            usd_cad: converter.cached_rate(),
            result,
        }
    };

    match config.output {
        OutputFormat::Text => println!("{}", report::conversion_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn resolve_rates_csv(config: &AppConfig) -> Result<PathBuf> {
    if let Some(path) = &config.rates_csv {
        return Ok(path.clone());
    }

    discover_rate_file(&config.rates_dir, &config.rate_file_prefix)
        .with_context(|| format!("Failed to search {}", config.rates_dir.display()))?
        .ok_or_else(|| {
            anyhow!(
                "No {}*.csv found in {}; pass --rates",
                config.rate_file_prefix,
                config.rates_dir.display()
            )
        })
}
