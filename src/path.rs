//! Archive addressing
//!
//! Archives are stored one file per instrument-hour under
//! `{SYMBOL}/{YYYY}/{MM}/{DD}/{HH}h_ticks.bi5`, where `MM` counts months from
//! zero (January is `00`).

use crate::common::{Bi5Error, Bi5Result, PointValue};
use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use core::fmt;
use std::path::{Component, Path, PathBuf};

/// File name suffix following the two-digit hour
pub const FILE_SUFFIX: &str = "h_ticks.bi5";

/// Location of one hourly archive
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArchivePath {
    /// Instrument symbol, e.g. `EURUSD`
    pub symbol: String,
    /// Start of the hour covered by the archive
    pub hour_start: DateTime<Utc>,
}

impl ArchivePath {
    /// Create a path for `symbol` covering the hour that contains `time`.
    ///
    /// The symbol must be non-empty ASCII alphanumeric.
    pub fn new(symbol: impl Into<String>, time: DateTime<Utc>) -> Bi5Result<Self> {
        let symbol = symbol.into();
        if symbol.is_empty() || !symbol.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(Bi5Error::InvalidPath(format!("bad symbol '{}'", symbol)));
        }
        let hour_start = Utc
            .with_ymd_and_hms(time.year(), time.month(), time.day(), time.hour(), 0, 0)
            .single()
            .ok_or_else(|| Bi5Error::InvalidPath(format!("bad hour for {}", time)))?;
        Ok(Self { symbol, hour_start })
    }

    /// Parse the last five components of `path`.
    ///
    /// # Errors
    /// Returns `Bi5Error::InvalidPath` if the components do not follow the
    /// archive layout or name a date that does not exist.
    pub fn parse(path: &Path) -> Bi5Result<Self> {
        let invalid = || Bi5Error::InvalidPath(path.display().to_string());

        let parts: Vec<&str> = path
            .components()
            .rev()
            .take(5)
            .map(|c| match c {
                Component::Normal(part) => part.to_str().ok_or_else(invalid),
                _ => Err(invalid()),
            })
            .collect::<Bi5Result<_>>()?;
        let [file, day, month, year, symbol] = parts[..] else {
            return Err(invalid());
        };

        let hour: u32 = file
            .strip_suffix(FILE_SUFFIX)
            .filter(|h| h.len() == 2)
            .and_then(|h| h.parse().ok())
            .ok_or_else(invalid)?;
        let day: u32 = parse_fixed(day, 2).ok_or_else(invalid)?;
        let month0: u32 = parse_fixed(month, 2).ok_or_else(invalid)?;
        let year: i32 = parse_fixed(year, 4).ok_or_else(invalid)?;

        let hour_start = Utc
            .with_ymd_and_hms(year, month0 + 1, day, hour, 0, 0)
            .single()
            .ok_or_else(invalid)?;

        Self::new(symbol, hour_start).map_err(|_| invalid())
    }

    /// Relative path of this archive under a store root.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.to_string())
    }

    /// Price scale implied by the symbol's quote currency.
    pub fn point_value(&self) -> PointValue {
        PointValue::for_symbol(&self.symbol)
    }
}

impl fmt::Display for ArchivePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = &self.hour_start;
        write!(
            f,
            "{}/{:04}/{:02}/{:02}/{:02}{}",
            self.symbol,
            h.year(),
            h.month0(),
            h.day(),
            h.hour(),
            FILE_SUFFIX
        )
    }
}

fn parse_fixed<T: core::str::FromStr>(s: &str, width: usize) -> Option<T> {
    if s.len() == width && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}
