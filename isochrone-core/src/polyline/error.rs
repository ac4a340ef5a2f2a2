use thiserror::Error;

/// Errors from [`crate::polyline::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolylineError {
    /// A character outside the polyline alphabet was found.
    #[error("invalid polyline character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character offset.
        position: usize,
    },
    /// The input ended before a varint's terminating symbol.
    ///
    /// Empty input also reports this error since the version varint cannot
    /// be read.
    #[error("polyline ended mid-varint at position {position}")]
    TruncatedVarint {
        /// Number of characters consumed when the input ran out.
        position: usize,
    },
    /// A varint or accumulated coordinate exceeded 64 bits.
    #[error("polyline value overflows 64 bits at position {position}")]
    VarintOverflow {
        /// Character offset where the overflow was detected.
        position: usize,
    },
}
