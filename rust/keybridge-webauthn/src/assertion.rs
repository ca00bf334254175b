//! Ceremony artifact transport decoding.
//!
//! A completed authentication ceremony hands its artifacts over as
//! base64 text. The platform emits base64url without padding, but
//! artifacts routinely cross transports that re-encode them with the
//! standard alphabet or add padding back, so the decoder here accepts
//! either alphabet, padded or not.

use base64::{
    Engine,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};

use crate::error::PayloadError;

/// Decoder configuration that accepts both padded and unpadded text.
const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// base64url decoding, padding optional.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Standard-alphabet base64 decoding, padding optional.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Decode one base64 ceremony artifact, in either alphabet, with or
/// without padding.
///
/// # Errors
///
/// Returns the [`base64::DecodeError`] from the standard-alphabet
/// attempt when the text is valid in neither alphabet.
pub fn decode_artifact(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_LENIENT
        .decode(text)
        .or_else(|_| STANDARD_LENIENT.decode(text))
}

/// The byte artifacts of one completed authentication ceremony.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionResponse {
    /// The raw `clientDataJSON` bytes.
    pub client_data: Vec<u8>,
    /// The raw `authenticatorData` bytes.
    pub authenticator_data: Vec<u8>,
    /// The DER-encoded ECDSA signature.
    pub signature: Vec<u8>,
}

impl AssertionResponse {
    /// Create an assertion response from raw byte artifacts.
    #[must_use]
    pub fn new(client_data: Vec<u8>, authenticator_data: Vec<u8>, signature: Vec<u8>) -> Self {
        Self {
            client_data,
            authenticator_data,
            signature,
        }
    }

    /// Decode an assertion response from its base64 transport form.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Transport`] when any artifact is valid
    /// base64 in neither alphabet.
    pub fn from_base64(
        client_data: &str,
        authenticator_data: &str,
        signature: &str,
    ) -> Result<Self, PayloadError> {
        Ok(Self {
            client_data: decode_artifact(client_data)?,
            authenticator_data: decode_artifact(authenticator_data)?,
            signature: decode_artifact(signature)?,
        })
    }
}
