//! Locate a rate table in a directory

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name prefix of Bank of Canada exchange-rate downloads
pub const DEFAULT_RATE_FILE_PREFIX: &str = "BankOfCanadaExchangeRates";

/// Find `<prefix>*.csv` in `dir`, returning the lexicographically last match
///
/// Downloads of the same file pick up suffixes like `(1)`, `(2)`, so the last
/// name is usually the newest copy.
pub fn discover_rate_file(dir: &Path, prefix: &str) -> io::Result<Option<PathBuf>> {
    let mut matches = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with(prefix) && name.ends_with(".csv") {
            matches.push(entry.path());
        }
    }

    matches.sort();
    let found = matches.pop();
    debug!("Rate file discovery in {}: {:?}", dir.display(), found);
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_picks_last_matching_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "BankOfCanadaExchangeRates.csv",
            "BankOfCanadaExchangeRates (1).csv",
            "BankOfCanadaExchangeRates (6).csv",
            "BankOfCanadaExchangeRates.txt",
            "OtherRates.csv",
        ] {
            File::create(dir.path().join(name)).unwrap();
        }

        let found = discover_rate_file(dir.path(), DEFAULT_RATE_FILE_PREFIX).unwrap();
        assert_eq!(found, Some(dir.path().join("BankOfCanadaExchangeRates.csv")));
    }

    #[test]
    fn test_numbered_copies_sort_by_name() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("BankOfCanadaExchangeRates(1).csv")).unwrap();
        File::create(dir.path().join("BankOfCanadaExchangeRates(6).csv")).unwrap();

        let found = discover_rate_file(dir.path(), DEFAULT_RATE_FILE_PREFIX).unwrap();
        assert_eq!(found, Some(dir.path().join("BankOfCanadaExchangeRates(6).csv")));
    }

    #[test]
    fn test_ignores_directories_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("BankOfCanadaExchangeRates.csv")).unwrap();

        let found = discover_rate_file(dir.path(), DEFAULT_RATE_FILE_PREFIX).unwrap();
        assert_eq!(found, None);
    }
}
