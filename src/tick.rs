//! bi5 tick record implementation
//!
//! A tick is one top-of-book quote observation: ask/bid prices and volumes at
//! a millisecond offset within the archive's hour.

use crate::bytes::read_be;
use crate::common::{field_offsets, Bi5Error, Bi5Result, ROW_SIZE};
use chrono::{DateTime, Duration, Utc};
use core::fmt;

/// Column header matching the [`Tick`] `Display` row format
pub const CSV_HEADER: &str = "time, bid, bid_vol, ask, ask_vol";

/// Decoded tick/quote record
///
/// Wire layout of the source record (20 bytes, big-endian):
/// | Field       | Offset | Size | Type  | Description                    |
/// |-------------|--------|------|-------|--------------------------------|
/// | Time offset | 0      | 4    | `u32` | Milliseconds since hour start  |
/// | Ask         | 4      | 4    | `u32` | Ask price, pre-scale integer   |
/// | Bid         | 8      | 4    | `u32` | Bid price, pre-scale integer   |
/// | Ask volume  | 12     | 4    | `f32` | Ask volume                     |
/// | Bid volume  | 16     | 4    | `f32` | Bid volume                     |
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick {
    /// Start of the hour covered by the archive
    pub hour_start: DateTime<Utc>,
    /// Milliseconds since `hour_start`
    pub offset_ms: u32,
    /// Scaled ask price
    pub ask: f64,
    /// Scaled bid price
    pub bid: f64,
    /// Ask volume, as stored
    pub ask_volume: f32,
    /// Bid volume, as stored
    pub bid_volume: f32,
}

impl Tick {
    /// Absolute event time (`hour_start + offset_ms`).
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.hour_start + Duration::milliseconds(i64::from(self.offset_ms))
    }

    /// Calculate mid price.
    pub fn mid_price(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }

    /// Calculate spread.
    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }

    /// Calculate total volume (bid + ask).
    pub fn total_volume(&self) -> f64 {
        f64::from(self.bid_volume) + f64::from(self.ask_volume)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}",
            self.timestamp().format("%Y-%m-%d %H:%M:%S%.3f"),
            self.bid,
            self.bid_volume,
            self.ask,
            self.ask_volume
        )
    }
}

/// Decode the record starting at `offset` in `buffer`.
///
/// Prices are multiplied by `price_scale`; volumes are returned as stored.
///
/// # Errors
/// Returns `Bi5Error::BufferTooShort` if fewer than [`ROW_SIZE`] bytes remain
/// from `offset`. The check happens before any field is read.
pub fn decode_record(
    buffer: &[u8],
    offset: usize,
    hour_start: DateTime<Utc>,
    price_scale: f64,
) -> Bi5Result<Tick> {
    let available = buffer.len().saturating_sub(offset);
    if available < ROW_SIZE {
        return Err(Bi5Error::BufferTooShort {
            offset,
            needed: ROW_SIZE,
            available,
        });
    }

    let offset_ms: u32 = read_be(buffer, offset + field_offsets::TIME_OFFSET)?;
    let raw_ask: u32 = read_be(buffer, offset + field_offsets::ASK)?;
    let raw_bid: u32 = read_be(buffer, offset + field_offsets::BID)?;
    let ask_volume: f32 = read_be(buffer, offset + field_offsets::ASK_VOLUME)?;
    let bid_volume: f32 = read_be(buffer, offset + field_offsets::BID_VOLUME)?;

    Ok(Tick {
        hour_start,
        offset_ms,
        ask: f64::from(raw_ask) * price_scale,
        bid: f64::from(raw_bid) * price_scale,
        ask_volume,
        bid_volume,
    })
}
