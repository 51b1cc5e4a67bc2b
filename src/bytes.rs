//! Fixed-width field extraction
//!
//! Reads integers and floats out of a byte buffer at a given offset in an
//! explicit byte order. Every read is bounds-checked against the buffer.

use crate::common::{Bi5Error, Bi5Result, ByteOrder};
use core::mem::size_of;

/// Numeric types that can be built from their raw byte representation.
pub trait FromBytes: Sized + Copy {
    /// Raw byte array of exactly `size_of::<Self>()` bytes
    type Bytes: for<'a> TryFrom<&'a [u8]>;

    /// Build from bytes with the most significant byte first.
    fn from_be(bytes: Self::Bytes) -> Self;
    /// Build from bytes with the least significant byte first.
    fn from_le(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_from_bytes {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromBytes for $t {
                type Bytes = [u8; size_of::<$t>()];

                #[inline]
                fn from_be(bytes: Self::Bytes) -> Self {
                    <$t>::from_be_bytes(bytes)
                }

                #[inline]
                fn from_le(bytes: Self::Bytes) -> Self {
                    <$t>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_from_bytes!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

/// Read a `T` from `buffer` starting at `offset` in the given byte order.
///
/// # Errors
/// Returns `Bi5Error::BufferTooShort` if fewer than `size_of::<T>()` bytes
/// remain from `offset`.
///
/// # Example
/// ```rust
/// use bi5::{bytes_to, ByteOrder};
///
/// let buffer = [0x00, 0x00, 0x01, 0xF4];
/// let be: u32 = bytes_to(&buffer, 0, ByteOrder::BigEndian).unwrap();
/// let le: u32 = bytes_to(&buffer, 0, ByteOrder::LittleEndian).unwrap();
/// assert_eq!(be, 500);
/// assert_eq!(le, 0xF401_0000);
/// ```
#[inline]
pub fn bytes_to<T: FromBytes>(buffer: &[u8], offset: usize, order: ByteOrder) -> Bi5Result<T> {
    let needed = size_of::<T>();
    let too_short = || Bi5Error::BufferTooShort {
        offset,
        needed,
        available: buffer.len().saturating_sub(offset),
    };

    let end = offset.checked_add(needed).ok_or_else(too_short)?;
    let field = buffer.get(offset..end).ok_or_else(too_short)?;
    let raw = <T::Bytes as TryFrom<&[u8]>>::try_from(field).map_err(|_| too_short())?;

    Ok(match order {
        ByteOrder::BigEndian => T::from_be(raw),
        ByteOrder::LittleEndian => T::from_le(raw),
    })
}

/// Big-endian shorthand for [`bytes_to`]
#[inline]
pub fn read_be<T: FromBytes>(buffer: &[u8], offset: usize) -> Bi5Result<T> {
    bytes_to(buffer, offset, ByteOrder::BigEndian)
}

/// Little-endian shorthand for [`bytes_to`]
#[inline]
pub fn read_le<T: FromBytes>(buffer: &[u8], offset: usize) -> Bi5Result<T> {
    bytes_to(buffer, offset, ByteOrder::LittleEndian)
}
