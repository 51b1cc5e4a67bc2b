//! Buffer and archive decoding
//!
//! `decode_buffer` walks a decompressed buffer in [`ROW_SIZE`] strides.
//! `ArchiveDecoder` puts a [`Decompress`] step in front of it.

use crate::common::{Bi5Error, Bi5Result, ROW_SIZE};
use crate::tick::{decode_record, Tick};
use chrono::{DateTime, Utc};
use core::fmt;
use std::io::{BufReader, Cursor};

// =============================================================================
// BUFFER DECODING
// =============================================================================

/// Ticks decoded from a raw buffer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickData {
    /// Ticks in file order
    pub ticks: Vec<Tick>,
    /// Bytes covered by whole records (`ticks.len() * ROW_SIZE`)
    pub bytes_consumed: usize,
}

impl TickData {
    /// True if every byte of a buffer of `total_len` bytes was decoded.
    pub fn is_complete(&self, total_len: usize) -> bool {
        self.bytes_consumed == total_len
    }
}

/// Number of whole records in a buffer of `len` bytes.
#[inline]
pub const fn record_count(len: usize) -> usize {
    len / ROW_SIZE
}

/// Decode every whole record in `buffer`.
///
/// Trailing bytes that do not fill a record are left unread; compare
/// `bytes_consumed` with `buffer.len()` to detect truncation.
///
/// # Example
/// ```rust
/// use bi5::{decode_buffer, PV_DOLLAR_PAIR};
/// use chrono::{TimeZone, Utc};
///
/// let hour = Utc.with_ymd_and_hms(2012, 11, 3, 1, 0, 0).unwrap();
/// let data = decode_buffer(&[0u8; 7], hour, PV_DOLLAR_PAIR).unwrap();
/// assert!(data.ticks.is_empty());
/// assert_eq!(data.bytes_consumed, 0);
/// ```
pub fn decode_buffer(
    buffer: &[u8],
    hour_start: DateTime<Utc>,
    price_scale: f64,
) -> Bi5Result<TickData> {
    let count = record_count(buffer.len());
    let mut ticks = Vec::with_capacity(count);

    for row in buffer.chunks_exact(ROW_SIZE) {
        ticks.push(decode_record(row, 0, hour_start, price_scale)?);
    }

    Ok(TickData {
        ticks,
        bytes_consumed: count * ROW_SIZE,
    })
}

// =============================================================================
// DECOMPRESSION
// =============================================================================

/// Whole-buffer decompression step.
///
/// Implementations either return the complete decompressed buffer or fail;
/// there is no partial output.
pub trait Decompress {
    type Error: fmt::Display;

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>, Self::Error>;
}

impl<D: Decompress + ?Sized> Decompress for &D {
    type Error = D::Error;

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>, Self::Error> {
        (**self).decompress(compressed)
    }
}

/// LZMA-alone decompressor backed by `lzma-rs`
///
/// An empty input decompresses to an empty buffer: the archive store
/// publishes zero-length files for hours without quotes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lzma;

impl Decompress for Lzma {
    type Error = lzma_rs::error::Error;

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>, Self::Error> {
        if compressed.is_empty() {
            return Ok(Vec::new());
        }

        let mut decompressed = Vec::new();
        let mut reader = BufReader::new(Cursor::new(compressed));
        lzma_rs::lzma_decompress(&mut reader, &mut decompressed)?;
        Ok(decompressed)
    }
}

// =============================================================================
// ARCHIVE DECODING
// =============================================================================

/// Ticks decoded from a compressed archive
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArchiveData {
    /// Ticks in file order
    pub ticks: Vec<Tick>,
    /// Length of the decompressed buffer
    pub raw_size: usize,
}

impl ArchiveData {
    /// True if the tick count matches the whole records in the raw buffer.
    pub fn is_consistent(&self) -> bool {
        self.ticks.len() == record_count(self.raw_size)
    }

    /// True if the raw buffer held only whole records.
    pub fn is_aligned(&self) -> bool {
        self.raw_size % ROW_SIZE == 0
    }
}

/// Decompress-then-decode pipeline.
///
/// Holds no state between calls beyond the decompressor itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArchiveDecoder<D = Lzma> {
    decompressor: D,
}

impl<D: Decompress> ArchiveDecoder<D> {
    /// Create a decoder around a decompression step.
    pub fn new(decompressor: D) -> Self {
        Self { decompressor }
    }

    /// Decompress `compressed` and decode every whole record.
    ///
    /// # Errors
    /// Returns `Bi5Error::DecompressionFailed` if the decompressor rejects the
    /// input; no decoding is attempted in that case.
    pub fn decode(
        &self,
        compressed: &[u8],
        hour_start: DateTime<Utc>,
        price_scale: f64,
    ) -> Bi5Result<ArchiveData> {
        let raw = self
            .decompressor
            .decompress(compressed)
            .map_err(|e| Bi5Error::DecompressionFailed(e.to_string()))?;

        let TickData { ticks, .. } = decode_buffer(&raw, hour_start, price_scale)?;

        Ok(ArchiveData {
            ticks,
            raw_size: raw.len(),
        })
    }

    /// Get a reference to the decompressor.
    pub fn decompressor(&self) -> &D {
        &self.decompressor
    }
}

/// Decode an LZMA-compressed archive buffer.
///
/// Shorthand for `ArchiveDecoder::new(Lzma).decode(...)`.
pub fn decode_archive(
    compressed: &[u8],
    hour_start: DateTime<Utc>,
    price_scale: f64,
) -> Bi5Result<ArchiveData> {
    ArchiveDecoder::new(Lzma).decode(compressed, hour_start, price_scale)
}
