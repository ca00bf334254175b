//! Values that can appear in an encoded tuple.

/// Width in bytes of every slot in the encoding.
pub const WORD_SIZE: usize = 32;

/// A single value within a contract-call tuple.
///
/// Static values occupy their word slots in the head directly; dynamic
/// values are referenced from the head by offset and carry their data in
/// the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// A dynamic byte string, length-prefixed in the tail.
    Bytes(&'a [u8]),
    /// A dynamic UTF-8 string, length-prefixed in the tail. Its length
    /// word counts bytes, not characters.
    Str(&'a str),
    /// A single byte, left-aligned in its word.
    Byte(u8),
    /// An unsigned big-endian integer up to one word wide, right-aligned.
    Uint(&'a [u8]),
    /// Two unsigned integers in consecutive word slots.
    UintPair([&'a [u8]; 2]),
}

impl Value<'_> {
    /// The number of words this value occupies in the head.
    #[must_use]
    pub const fn head_words(&self) -> usize {
        match self {
            Value::UintPair(_) => 2,
            _ => 1,
        }
    }
}
