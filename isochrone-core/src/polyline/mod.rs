//! Decode flexible polylines returned by routing and isoline services.
//!
//! A flexible polyline is a string over a URL-safe 64-symbol alphabet. Each
//! symbol carries five payload bits and a continuation flag. The stream holds
//! a version varint, a header varint describing precision and an optional
//! third dimension, then zig-zag encoded coordinate deltas.
//!
//! Malformed input is reported as a [`PolylineError`]; the decoder never
//! returns a partial result.

mod decode;
mod error;

pub use decode::{PolylineDecodeResult, ThirdDimension, decode};
pub use error::PolylineError;
