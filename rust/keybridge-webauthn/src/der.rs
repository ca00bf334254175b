//! DER signature decomposition.
//!
//! Authenticators emit ECDSA signatures in the DER form
//! `SEQUENCE { r INTEGER, s INTEGER }`, a variable-width encoding: each
//! integer is stripped to its minimal big-endian bytes and regains a
//! leading zero byte when its high bit is set. The verifying contract
//! instead takes the two scalars at a fixed width, so this module
//! re-inflates them to exactly [`SCALAR_LENGTH`] bytes each.

use crate::error::DecodeError;

/// Byte width of a P-256 scalar.
pub const SCALAR_LENGTH: usize = 32;

/// DER tag of an ASN.1 SEQUENCE.
const SEQUENCE_TAG: u8 = 0x30;

/// DER tag of an ASN.1 INTEGER.
const INTEGER_TAG: u8 = 0x02;

/// The two scalars of an ECDSA signature, at fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureComponents {
    /// The r scalar, unsigned big-endian.
    pub r: [u8; SCALAR_LENGTH],
    /// The s scalar, unsigned big-endian.
    pub s: [u8; SCALAR_LENGTH],
}

impl SignatureComponents {
    /// Split a DER-encoded ECDSA signature into fixed-width scalars.
    ///
    /// Integers shorter than [`SCALAR_LENGTH`] bytes are left-padded with
    /// zeros; a 33-byte integer sheds its zero sign-padding byte. Bytes
    /// after the second integer are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when a tag or length field does not
    /// match the signature grammar or the buffer ends early. No partial
    /// scalars are produced.
    pub fn from_der(der: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = Reader {
            buffer: der,
            position: 0,
        };

        reader.expect_tag(SEQUENCE_TAG)?;
        let body_length = reader.read_length()?;
        if body_length > reader.remaining() {
            return Err(DecodeError::Truncated);
        }

        let r = reader.read_integer()?;
        let s = reader.read_integer()?;
        Ok(Self { r, s })
    }
}

/// Bounds-checked cursor over a DER buffer.
struct Reader<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> Reader<'a> {
    fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let byte = *self
            .buffer
            .get(self.position)
            .ok_or(DecodeError::Truncated)?;
        self.position += 1;
        Ok(byte)
    }

    fn expect_tag(&mut self, expected: u8) -> Result<(), DecodeError> {
        let found = self.read_byte()?;
        if found != expected {
            return Err(DecodeError::UnexpectedTag { expected, found });
        }
        Ok(())
    }

    /// Read a short-form length byte. A P-256 signature never exceeds 72
    /// bytes, so the long form only occurs in malformed input.
    fn read_length(&mut self) -> Result<usize, DecodeError> {
        let length = self.read_byte()?;
        if length & 0x80 != 0 {
            return Err(DecodeError::LongFormLength(length));
        }
        Ok(length as usize)
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8], DecodeError> {
        let end = self
            .position
            .checked_add(count)
            .ok_or(DecodeError::Truncated)?;
        if end > self.buffer.len() {
            return Err(DecodeError::Truncated);
        }
        let bytes = &self.buffer[self.position..end];
        self.position = end;
        Ok(bytes)
    }

    /// Read one INTEGER and widen it to a fixed-width scalar.
    fn read_integer(&mut self) -> Result<[u8; SCALAR_LENGTH], DecodeError> {
        self.expect_tag(INTEGER_TAG)?;
        let length = self.read_length()?;
        if length == 0 || length > SCALAR_LENGTH + 1 {
            return Err(DecodeError::InvalidScalarLength(length));
        }

        let content = if length == SCALAR_LENGTH + 1 {
            if self.read_byte()? != 0 {
                return Err(DecodeError::InvalidPadding);
            }
            self.take(SCALAR_LENGTH)?
        } else {
            self.take(length)?
        };

        let mut scalar = [0u8; SCALAR_LENGTH];
        scalar[SCALAR_LENGTH - content.len()..].copy_from_slice(content);
        Ok(scalar)
    }
}
