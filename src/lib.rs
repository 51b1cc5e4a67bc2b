//! bi5 tick archive decoder
//!
//! Decodes hourly FX tick archives: LZMA-compressed files holding fixed-width
//! 20-byte big-endian quote records. Each archive covers one instrument for one
//! hour; record timestamps are millisecond offsets from the start of that hour.
//!
//! # Features
//! - `serde`: Derives `Serialize`/`Deserialize` for the public data types.
//! - `cli`: Builds the `bi5dump` binary.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bi5::{decode_archive, PV_YEN_PAIR};
//! use chrono::{TimeZone, Utc};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let compressed = std::fs::read("GBPJPY/2012/10/03/01h_ticks.bi5")?;
//! let hour_start = Utc.with_ymd_and_hms(2012, 11, 3, 1, 0, 0).unwrap();
//!
//! let data = decode_archive(&compressed, hour_start, PV_YEN_PAIR)?;
//! assert!(data.is_consistent());
//!
//! for tick in &data.ticks {
//!     println!("{}", tick);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_debug_implementations)]

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Fixed-width field extraction in an explicit byte order
pub mod bytes;
/// Record geometry, price scale constants, byte order and errors
pub mod common;
/// Buffer and archive decoding
pub mod decoder;
/// Archive loading from storage
pub mod loader;
/// Archive addressing (`SYMBOL/YYYY/MM/DD/HHh_ticks.bi5`)
pub mod path;
/// Tick record and single-record decoding (20 bytes)
pub mod tick;

// Re-export public API
pub use crate::bytes::{bytes_to, read_be, read_le, FromBytes};
pub use crate::common::*;
pub use crate::decoder::*;
pub use crate::loader::{read_archive, read_archive_at};
pub use crate::path::ArchivePath;
pub use crate::tick::*;

// =============================================================================
// LIBRARY VERSION AND METADATA
// =============================================================================

/// Library version
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build information
pub const BUILD_INFO: &str = concat!("bi5-rust v", env!("CARGO_PKG_VERSION"));

// =============================================================================
// CONVENIENCE FUNCTIONS
// =============================================================================

/// Size in bytes of a raw buffer holding `count` records
///
/// # Example
/// ```rust
/// use bi5::*;
///
/// assert_eq!(raw_size_for(0), 0);
/// assert_eq!(raw_size_for(3), 60);
/// ```
pub const fn raw_size_for(count: usize) -> usize {
    count * ROW_SIZE
}
