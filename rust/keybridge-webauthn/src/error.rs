//! Errors raised by the payload pipeline.
//!
//! Each pipeline stage has its own error type so a failure names the
//! transformation that rejected the input. [`PayloadError`] wraps them
//! all for the assembly entry points.

use thiserror::Error;

/// Failed to split a DER-encoded ECDSA signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A tag byte did not match the signature grammar.
    #[error("unexpected tag: expected {expected:#04x}, found {found:#04x}")]
    UnexpectedTag {
        /// The tag the grammar requires at this position.
        expected: u8,
        /// The tag actually read.
        found: u8,
    },
    /// The buffer ended before a declared field was complete.
    #[error("signature truncated")]
    Truncated,
    /// A length byte in the long form, which a P-256 signature never
    /// needs.
    #[error("unsupported long-form length byte {0:#04x}")]
    LongFormLength(u8),
    /// An integer length that cannot hold a P-256 scalar.
    #[error("invalid scalar length {0}")]
    InvalidScalarLength(usize),
    /// A 33-byte integer whose leading byte is not the zero sign-padding
    /// byte.
    #[error("sign padding byte is not zero")]
    InvalidPadding,
}

/// The client data does not contain a challenge key token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("challenge key not found in client data")]
pub struct OffsetNotFoundError;

/// Failed to extract public key coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyFormatError {
    /// The container is not the size of an uncompressed P-256 subject
    /// public key info.
    #[error("expected a {expected}-byte public key container, found {found} bytes")]
    UnexpectedLength {
        /// The only container size the extractor accepts.
        expected: usize,
        /// The size actually provided.
        found: usize,
    },
    /// The container header does not describe an uncompressed P-256 key.
    #[error("public key container is not an uncompressed P-256 key")]
    UnsupportedKeyType,
    /// The embedded point is not a valid point on the P-256 curve.
    #[error("public key is not a valid P-256 point")]
    InvalidPoint,
}

/// Failed to assemble a verify-call payload.
///
/// No partial payload is ever produced; the first stage to reject its
/// input aborts the assembly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// An artifact was not valid base64 in either alphabet.
    #[error("invalid artifact encoding: {0}")]
    Transport(#[from] base64::DecodeError),
    /// The DER signature could not be split into scalars.
    #[error("invalid signature: {0}")]
    Signature(#[from] DecodeError),
    /// The challenge could not be located in the client data.
    #[error("invalid client data: {0}")]
    Challenge(#[from] OffsetNotFoundError),
    /// The public key container could not be parsed.
    #[error("invalid public key: {0}")]
    Key(#[from] KeyFormatError),
    /// A transformed field could not occupy its tuple slot.
    #[error("payload encoding failed: {0}")]
    Encoding(#[from] keybridge_abi::EncodingError),
}
