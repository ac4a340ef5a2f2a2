//! Varint reader and coordinate accumulation for flexible polylines.

use std::iter::Peekable;
use std::str::Chars;

use crate::{Point, Ring, RingError};

use super::error::PolylineError;

/// Payload bits carried by each symbol.
const PAYLOAD_MASK: u64 = 0x1F;
/// Continuation flag set on every symbol except the last of a varint.
const CONTINUATION_BIT: u8 = 0x20;
/// Bits contributed by one symbol.
const BITS_PER_SYMBOL: u32 = 5;

/// Meaning of the optional third dimension, as declared in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ThirdDimension {
    /// No third dimension present.
    Absent,
    /// Floor or level index.
    Level,
    /// Height above sea level.
    Altitude,
    /// Height above ground.
    Elevation,
    /// Reserved by the format.
    Reserved1,
    /// Reserved by the format.
    Reserved2,
    /// Application-defined value.
    Custom1,
    /// Application-defined value.
    Custom2,
}

impl ThirdDimension {
    /// Map the three-bit header field onto its named meaning.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw & 0x7 {
            0 => Self::Absent,
            1 => Self::Level,
            2 => Self::Altitude,
            3 => Self::Elevation,
            4 => Self::Reserved1,
            5 => Self::Reserved2,
            6 => Self::Custom1,
            _ => Self::Custom2,
        }
    }
}

/// Coordinates and header metadata recovered from a polyline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PolylineDecodeResult {
    /// Decoded coordinates in stream order.
    pub points: Vec<Point>,
    /// Whether each point carries a `z` value.
    pub has_third_dimension: bool,
    /// Raw three-bit third-dimension type from the header.
    pub third_dim_type: u8,
    /// Decimal places used for latitude and longitude.
    pub precision: u8,
    /// Decimal places used for the third dimension.
    pub third_dim_precision: u8,
}

impl PolylineDecodeResult {
    /// Named meaning of [`Self::third_dim_type`].
    #[must_use]
    pub const fn third_dimension(&self) -> ThirdDimension {
        ThirdDimension::from_raw(self.third_dim_type)
    }

    /// Validate the decoded points as a ring.
    ///
    /// # Errors
    ///
    /// Propagates [`RingError`] when the points do not form a valid ring.
    pub fn into_ring(self) -> Result<Ring, RingError> {
        Ring::new(self.points)
    }
}

/// Decode a flexible polyline.
///
/// # Errors
///
/// Returns [`PolylineError::InvalidCharacter`] for symbols outside the
/// alphabet, [`PolylineError::TruncatedVarint`] when the input stops inside a
/// varint (including empty input), and [`PolylineError::VarintOverflow`] when
/// a value exceeds 64 bits.
///
/// # Examples
/// ```
/// use isochrone_core::polyline::decode;
///
/// # fn main() -> Result<(), isochrone_core::polyline::PolylineError> {
/// let decoded = decode("BFoz5xJ67i1B1B7PzIhaxL7Y")?;
/// assert_eq!(decoded.points.len(), 4);
/// assert_eq!(decoded.points[0].lat, 50.10228);
/// assert_eq!(decoded.points[0].lng, 8.69821);
/// assert!(!decoded.has_third_dimension);
/// # Ok(())
/// # }
/// ```
pub fn decode(encoded: &str) -> Result<PolylineDecodeResult, PolylineError> {
    let mut reader = VarintReader::new(encoded);

    // The version is read so the header lines up; its value is not checked.
    reader.read_unsigned()?;
    let header = reader.read_unsigned()?;
    let precision = nibble(header, 0);
    let third_dim_precision = nibble(header, 4);
    let third_dim_type = ((header >> 8) & 0x7) as u8;
    let has_third_dimension = third_dim_type != 0;

    let multiplier = 10_f64.powi(i32::from(precision));
    let third_multiplier = 10_f64.powi(i32::from(third_dim_precision));

    let mut lat: i64 = 0;
    let mut lng: i64 = 0;
    let mut z: i64 = 0;
    let mut points = Vec::new();

    while !reader.is_exhausted() {
        lat = reader.accumulate(lat)?;
        if !reader.is_exhausted() {
            lng = reader.accumulate(lng)?;
        }
        if has_third_dimension && !reader.is_exhausted() {
            z = reader.accumulate(z)?;
        }
        let mut point = Point::new(lat as f64 / multiplier, lng as f64 / multiplier);
        if has_third_dimension {
            point.z = Some(z as f64 / third_multiplier);
        }
        points.push(point);
    }

    Ok(PolylineDecodeResult {
        points,
        has_third_dimension,
        third_dim_type,
        precision,
        third_dim_precision,
    })
}

/// Four-bit header field starting at `shift`.
const fn nibble(header: u64, shift: u32) -> u8 {
    ((header >> shift) & 0xF) as u8
}

/// Map a symbol onto its six-bit value.
const fn symbol_value(character: char) -> Option<u8> {
    let value = match character {
        'A'..='Z' => character as u32 - 'A' as u32,
        'a'..='z' => character as u32 - 'a' as u32 + 26,
        '0'..='9' => character as u32 - '0' as u32 + 52,
        '-' => 62,
        '_' => 63,
        _ => return None,
    };
    Some(value as u8)
}

struct VarintReader<'a> {
    chars: Peekable<Chars<'a>>,
    position: usize,
}

impl<'a> VarintReader<'a> {
    fn new(encoded: &'a str) -> Self {
        Self {
            chars: encoded.chars().peekable(),
            position: 0,
        }
    }

    fn is_exhausted(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn read_unsigned(&mut self) -> Result<u64, PolylineError> {
        let mut result: u64 = 0;
        let mut shift: u32 = 0;
        loop {
            let Some(character) = self.chars.next() else {
                return Err(PolylineError::TruncatedVarint {
                    position: self.position,
                });
            };
            let position = self.position;
            self.position += 1;

            let value = symbol_value(character)
                .ok_or(PolylineError::InvalidCharacter {
                    character,
                    position,
                })?;
            let payload = u64::from(value) & PAYLOAD_MASK;
            let shifted = payload
                .checked_shl(shift)
                .filter(|bits| bits >> shift == payload)
                .ok_or(PolylineError::VarintOverflow { position })?;
            result |= shifted;

            if value & CONTINUATION_BIT == 0 {
                return Ok(result);
            }
            shift += BITS_PER_SYMBOL;
        }
    }

    fn read_signed(&mut self) -> Result<i64, PolylineError> {
        let raw = self.read_unsigned()?;
        let magnitude = i64::try_from(raw >> 1).map_err(|_| PolylineError::VarintOverflow {
            position: self.position,
        })?;
        // Zig-zag: an odd raw value encodes the bitwise complement.
        Ok(if raw & 1 == 1 { !magnitude } else { magnitude })
    }

    fn accumulate(&mut self, total: i64) -> Result<i64, PolylineError> {
        let delta = self.read_signed()?;
        total
            .checked_add(delta)
            .ok_or(PolylineError::VarintOverflow {
                position: self.position,
            })
    }
}
