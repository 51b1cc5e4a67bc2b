//! Common types, enums, and constants used across the bi5 decoding pipeline
//!
//! This module defines the record geometry, price scale constants, byte order
//! selection and the crate-wide error type shared by every decoding stage.

use core::fmt;
use thiserror::Error;

// =============================================================================
// RECORD GEOMETRY
// =============================================================================

/// Size of one decompressed bi5 record in bytes
pub const ROW_SIZE: usize = 20;

/// Field offsets within a single record
pub mod field_offsets {
    /// u32: milliseconds since hour start
    pub const TIME_OFFSET: usize = 0;
    /// u32: ask price, pre-scale integer
    pub const ASK: usize = 4;
    /// u32: bid price, pre-scale integer
    pub const BID: usize = 8;
    /// f32: ask volume
    pub const ASK_VOLUME: usize = 12;
    /// f32: bid volume
    pub const BID_VOLUME: usize = 16;
}

// =============================================================================
// PRICE SCALE
// =============================================================================

/// Point value for yen-quoted pairs (3 decimal places)
pub const PV_YEN_PAIR: f64 = 0.001;
/// Point value for standard pairs (5 decimal places)
pub const PV_DOLLAR_PAIR: f64 = 0.00001;

/// Pip convention of a quoted instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointValue {
    /// Standard 5-digit pricing (0.00001)
    #[default]
    Dollar,
    /// Yen-quoted 3-digit pricing (0.001)
    Yen,
}

impl PointValue {
    /// Multiplier turning a raw integer price into a real price.
    pub const fn scale(self) -> f64 {
        match self {
            PointValue::Dollar => PV_DOLLAR_PAIR,
            PointValue::Yen => PV_YEN_PAIR,
        }
    }

    /// Pick the convention from an instrument symbol such as `GBPJPY`.
    ///
    /// Pairs quoted in yen use three decimals; everything else uses five.
    pub fn for_symbol(symbol: &str) -> Self {
        let symbol = symbol.trim();
        let quoted_in_yen = symbol.len() >= 3
            && symbol.is_char_boundary(symbol.len() - 3)
            && symbol[symbol.len() - 3..].eq_ignore_ascii_case("JPY");
        if quoted_in_yen {
            PointValue::Yen
        } else {
            PointValue::Dollar
        }
    }
}

/// Shorthand for `PointValue::for_symbol(symbol).scale()`
pub fn price_scale_for(symbol: &str) -> f64 {
    PointValue::for_symbol(symbol).scale()
}

// =============================================================================
// BYTE ORDER
// =============================================================================

/// Byte order of a fixed-width field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// First byte is the most significant
    BigEndian,
    /// First byte is the least significant
    LittleEndian,
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::BigEndian => write!(f, "big-endian"),
            ByteOrder::LittleEndian => write!(f, "little-endian"),
        }
    }
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

/// Error type for bi5 decoding and archive loading.
#[derive(Debug, Error)]
pub enum Bi5Error {
    /// A fixed-width read would run past the end of the buffer.
    #[error("Buffer too short: need {needed} bytes at offset {offset}, {available} available")]
    BufferTooShort {
        /// Offset the read started at.
        offset: usize,
        /// Width of the attempted read.
        needed: usize,
        /// Bytes remaining from `offset` (0 if the offset is past the end).
        available: usize,
    },
    /// The decompression step rejected the input.
    #[error("Decompression failed: {0}")]
    DecompressionFailed(String),
    /// An archive path does not follow the `SYMBOL/YYYY/MM/DD/HHh_ticks.bi5` layout.
    #[error("Invalid archive path: {0}")]
    InvalidPath(String),
    /// Reading the archive from storage failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Discriminant of a [`Bi5Error`], convenient for matching and comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BufferTooShort,
    DecompressionFailed,
    InvalidPath,
    Io,
}

impl Bi5Error {
    /// Get the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Bi5Error::BufferTooShort { .. } => ErrorKind::BufferTooShort,
            Bi5Error::DecompressionFailed(_) => ErrorKind::DecompressionFailed,
            Bi5Error::InvalidPath(_) => ErrorKind::InvalidPath,
            Bi5Error::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result alias used throughout the crate
pub type Bi5Result<T> = Result<T, Bi5Error>;
