//! Public key coordinate extraction.
//!
//! Registration hands the credential's public key over as a DER
//! SubjectPublicKeyInfo container. The verifying contract wants the
//! bare curve point instead: x and y as two fixed-width integers. The
//! container form for an uncompressed P-256 key is rigid, a constant
//! 26-byte header followed by the 65-byte SEC1 point, so the header is
//! matched against its template and the point checked to lie on the
//! curve before the coordinates are copied out.

use p256::ecdsa::VerifyingKey;

use crate::error::KeyFormatError;

/// Byte width of a P-256 coordinate.
pub const COORDINATE_LENGTH: usize = 32;

/// SubjectPublicKeyInfo header for an uncompressed P-256 public key.
///
/// ```text
/// SEQUENCE (89 bytes)
///   SEQUENCE (19 bytes)
///     OID 1.2.840.10045.2.1 (ecPublicKey)
///     OID 1.2.840.10045.3.1.7 (prime256v1 / P-256)
///   BIT STRING (66 bytes, 0 unused bits)
///     04 || x || y  (65-byte uncompressed point)
/// ```
const P256_SPKI_HEADER: [u8; 26] = [
    0x30, 0x59, // SEQUENCE, 89 bytes
    0x30, 0x13, // SEQUENCE, 19 bytes
    0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, // OID ecPublicKey
    0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07, // OID prime256v1
    0x03, 0x42, // BIT STRING, 66 bytes
    0x00, // 0 unused bits
];

/// Total container length: header plus point tag plus both coordinates.
const SPKI_LENGTH: usize = P256_SPKI_HEADER.len() + 1 + 2 * COORDINATE_LENGTH;

/// The affine coordinates of a P-256 public key, at fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKeyCoordinates {
    /// The x coordinate, unsigned big-endian.
    pub x: [u8; COORDINATE_LENGTH],
    /// The y coordinate, unsigned big-endian.
    pub y: [u8; COORDINATE_LENGTH],
}

impl PublicKeyCoordinates {
    /// Extract the curve coordinates from a SubjectPublicKeyInfo
    /// container.
    ///
    /// The key material is imported as a P-256 verifying key first,
    /// which rejects byte strings that do not name a point on the
    /// curve; the coordinates are then exported from the validated key.
    ///
    /// # Errors
    ///
    /// Returns a [`KeyFormatError`] when the container is not the
    /// 91-byte uncompressed P-256 form or the embedded point is
    /// invalid.
    pub fn from_spki(spki: &[u8]) -> Result<Self, KeyFormatError> {
        if spki.len() != SPKI_LENGTH {
            return Err(KeyFormatError::UnexpectedLength {
                expected: SPKI_LENGTH,
                found: spki.len(),
            });
        }
        if spki[..P256_SPKI_HEADER.len()] != P256_SPKI_HEADER {
            return Err(KeyFormatError::UnsupportedKeyType);
        }

        let key = VerifyingKey::from_sec1_bytes(&spki[P256_SPKI_HEADER.len()..])
            .map_err(|_| KeyFormatError::InvalidPoint)?;
        let point = key.to_encoded_point(false);
        let (Some(x), Some(y)) = (point.x(), point.y()) else {
            return Err(KeyFormatError::InvalidPoint);
        };

        let mut coordinates = Self {
            x: [0; COORDINATE_LENGTH],
            y: [0; COORDINATE_LENGTH],
        };
        coordinates.x.copy_from_slice(x);
        coordinates.y.copy_from_slice(y);
        Ok(coordinates)
    }
}
