//! Shared fixtures for integration tests.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use std::io::BufReader;

/// One record's fields as stored on disk, before price scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRecord {
    pub offset_ms: u32,
    pub ask: u32,
    pub bid: u32,
    pub ask_volume: f32,
    pub bid_volume: f32,
}

impl RawRecord {
    pub fn new(offset_ms: u32, ask: u32, bid: u32, ask_volume: f32, bid_volume: f32) -> Self {
        Self {
            offset_ms,
            ask,
            bid,
            ask_volume,
            bid_volume,
        }
    }

    /// Encode into the 20-byte big-endian layout.
    pub fn encode(&self) -> [u8; 20] {
        let mut out = [0u8; 20];
        out[0..4].copy_from_slice(&self.offset_ms.to_be_bytes());
        out[4..8].copy_from_slice(&self.ask.to_be_bytes());
        out[8..12].copy_from_slice(&self.bid.to_be_bytes());
        out[12..16].copy_from_slice(&self.ask_volume.to_be_bytes());
        out[16..20].copy_from_slice(&self.bid_volume.to_be_bytes());
        out
    }
}

/// Concatenate encoded records.
pub fn encode_records(records: &[RawRecord]) -> Vec<u8> {
    records.iter().flat_map(|r| r.encode()).collect()
}

/// LZMA-compress a raw buffer the way archives are stored.
pub fn compress(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    lzma_rs::lzma_compress(&mut BufReader::new(raw), &mut out).unwrap();
    out
}

/// 2012-11-03 01:00:00 UTC
pub fn hour_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2012, 11, 3, 1, 0, 0).unwrap()
}

/// The two GBPJPY records used across the decoding tests.
pub fn gbpjpy_records() -> Vec<RawRecord> {
    vec![
        RawRecord::new(500, 11000, 10990, 1.5, 2.25),
        RawRecord::new(1250, 11002, 10991, 0.75, 3.0),
    ]
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
