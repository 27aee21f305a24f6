//! Read the latest USD/CAD rate from a Bank of Canada style CSV table

use crate::error::{Error, InvalidArgument, Result};
use csv::ReaderBuilder;
use log::{debug, info, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Header of the column holding CAD per 1 USD
pub const USD_CAD_COLUMN: &str = "USD/CAD";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Where a rate table lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateSource {
    File(PathBuf),
    /// Table already held in memory, named by `label` in messages
    Inline { label: String, data: String },
}

impl RateSource {
    /// A file-backed source; the path must not be blank
    pub fn file<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(InvalidArgument::EmptySourceLocation { field: "csv_path" }.into());
        }
        Ok(RateSource::File(path))
    }

    /// An in-memory source; the label must not be blank
    pub fn inline(label: impl Into<String>, data: impl Into<String>) -> Result<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(InvalidArgument::EmptySourceLocation { field: "label" }.into());
        }
        Ok(RateSource::Inline {
            label,
            data: data.into(),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            RateSource::File(path) => Some(path),
            RateSource::Inline { .. } => None,
        }
    }

    fn read(&self) -> Result<Vec<u8>> {
        match self {
            RateSource::File(path) => Ok(fs::read(path)?),
            RateSource::Inline { data, .. } => Ok(data.as_bytes().to_vec()),
        }
    }
}

impl fmt::Display for RateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateSource::File(path) => write!(f, "{}", path.display()),
            RateSource::Inline { label, .. } => f.write_str(label),
        }
    }
}

/// Outcome of scanning a rate table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLookup {
    /// CAD per 1 USD from the last parseable row
    pub rate: f64,
    /// 1-based data row the rate came from
    pub row: usize,
    /// Data rows whose cell was blank or not a usable number
    pub skipped: usize,
}

/// Scan `source` and return the rate from its last parseable row
pub fn load_latest_rate(source: &RateSource) -> Result<RateLookup> {
    debug!("Reading {} rates from {}", USD_CAD_COLUMN, source);
    let bytes = source.read()?;
    latest_rate_from_bytes(&bytes, &source.to_string())
}

/// Scan CSV bytes for the last usable value in the `USD/CAD` column
///
/// The first record is the header. A leading UTF-8 byte-order mark is ignored.
pub fn latest_rate_from_bytes(bytes: &[u8], location: &str) -> Result<RateLookup> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(bytes);

    let column = reader
        .headers()?
        .iter()
        .position(|h| h == USD_CAD_COLUMN)
        .ok_or_else(|| Error::MissingColumn {
            column: USD_CAD_COLUMN,
            source_location: location.to_string(),
        })?;

    let mut latest: Option<(f64, usize)> = None;
    let mut skipped = 0;

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = idx + 1;
        let cell = record.get(column).unwrap_or("").trim();

        match parse_rate(cell) {
            Some(rate) => latest = Some((rate, row)),
            None => {
                debug!("Skipping row {}: unusable {} value {:?}", row, USD_CAD_COLUMN, cell);
                skipped += 1;
            }
        }
    }

    match latest {
        Some((rate, row)) => {
            info!(
                "Latest {} rate {} from row {} of {} ({} rows skipped)",
                USD_CAD_COLUMN, rate, row, location, skipped
            );
            Ok(RateLookup { rate, row, skipped })
        }
        None => {
            warn!("No numeric {} values in {}", USD_CAD_COLUMN, location);
            Err(Error::NoNumericRate {
                column: USD_CAD_COLUMN,
                source_location: location.to_string(),
            })
        }
    }
}

/// Any finite number counts; NaN and infinity are treated as unparsable
fn parse_rate(cell: &str) -> Option<f64> {
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>().ok().filter(|rate| rate.is_finite())
}
