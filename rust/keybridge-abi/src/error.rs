//! Errors that can occur while encoding a tuple.

use thiserror::Error;

use crate::value::WORD_SIZE;

/// Failed to encode a tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// An unsigned integer wider than its word slot. Integers are never
    /// silently truncated to fit.
    #[error("integer of {width} bytes does not fit a {WORD_SIZE}-byte word")]
    ValueTooWide {
        /// Byte width of the rejected integer.
        width: usize,
    },
}
