//! Verify-call payload assembly.
//!
//! The final pipeline stage packs the transformed ceremony artifacts
//! into the argument tuple the verifying contract reads:
//!
//! 1. split the DER signature into fixed-width scalars
//! 2. locate the challenge value offset in the raw client data
//! 3. extract the public key coordinates, if the shape carries them
//! 4. encode everything as one contract-call tuple
//!
//! Two entry points select the tuple shape. [`encode_verify_params`]
//! omits the key, for contracts that resolve the signer themselves;
//! [`encode_verify_params_with_key`] appends the coordinates as a final
//! pair of words. Both feed the same encoding operation, and the shape
//! is always the caller's explicit choice, never inferred from the
//! input.

use keybridge_abi::{EncodingError, Value, encode_tuple};

use crate::assertion::AssertionResponse;
use crate::client_data;
use crate::der::SignatureComponents;
use crate::error::PayloadError;
use crate::key::PublicKeyCoordinates;

/// Bit 0 of the authenticator flags byte: user presence. The bit the
/// verifying contract checks before accepting an assertion.
pub const USER_PRESENCE_MASK: u8 = 0x01;

/// The fields of one verify-call payload, ready for encoding.
///
/// `challenge_offset` must index the first byte of the challenge value
/// within `client_data`; the contract re-slices the raw buffer at that
/// position and compares it against `challenge`.
#[derive(Debug, Clone, Copy)]
pub struct VerifyParams<'a> {
    /// Authenticator data, passed through opaque.
    pub authenticator_data: &'a [u8],
    /// Mask selecting the flag bits the contract inspects.
    pub flag_mask: u8,
    /// Raw client data bytes, passed through opaque.
    pub client_data: &'a [u8],
    /// The challenge the contract expects to find at the offset.
    pub challenge: &'a str,
    /// Byte index of the challenge value within the client data.
    pub challenge_offset: usize,
    /// The fixed-width signature scalars.
    pub signature: &'a SignatureComponents,
    /// Public key coordinates; `Some` selects the with-key shape.
    pub public_key: Option<&'a PublicKeyCoordinates>,
}

impl VerifyParams<'_> {
    /// Encode the payload as a contract-call tuple.
    ///
    /// Field order matches the order the contract reads: authenticator
    /// data, flag mask, client data, challenge, challenge offset, the
    /// signature pair, then the coordinate pair when present.
    ///
    /// # Errors
    ///
    /// Returns an [`EncodingError`] when a field cannot occupy its
    /// tuple slot.
    pub fn encode(&self) -> Result<Vec<u8>, EncodingError> {
        let offset = (self.challenge_offset as u64).to_be_bytes();

        let mut values = vec![
            Value::Bytes(self.authenticator_data),
            Value::Byte(self.flag_mask),
            Value::Bytes(self.client_data),
            Value::Str(self.challenge),
            Value::Uint(&offset),
            Value::UintPair([self.signature.r.as_slice(), self.signature.s.as_slice()]),
        ];
        if let Some(key) = self.public_key {
            values.push(Value::UintPair([key.x.as_slice(), key.y.as_slice()]));
        }

        encode_tuple(&values)
    }
}

/// Assemble the keyless verify-call payload for an assertion.
///
/// # Errors
///
/// Returns a [`PayloadError`] naming the pipeline stage that rejected
/// the assertion.
pub fn encode_verify_params(
    assertion: &AssertionResponse,
    challenge: &str,
) -> Result<Vec<u8>, PayloadError> {
    assemble(assertion, challenge, None)
}

/// Assemble the verify-call payload carrying the signer's public key
/// coordinates, extracted from the given SubjectPublicKeyInfo
/// container.
///
/// # Errors
///
/// Returns a [`PayloadError`] naming the pipeline stage that rejected
/// the assertion or the key container.
pub fn encode_verify_params_with_key(
    assertion: &AssertionResponse,
    challenge: &str,
    public_key_spki: &[u8],
) -> Result<Vec<u8>, PayloadError> {
    let coordinates = PublicKeyCoordinates::from_spki(public_key_spki)?;
    assemble(assertion, challenge, Some(&coordinates))
}

fn assemble(
    assertion: &AssertionResponse,
    challenge: &str,
    public_key: Option<&PublicKeyCoordinates>,
) -> Result<Vec<u8>, PayloadError> {
    let signature = SignatureComponents::from_der(&assertion.signature)?;
    let challenge_offset = client_data::challenge_offset(&assertion.client_data)?;

    let params = VerifyParams {
        authenticator_data: &assertion.authenticator_data,
        flag_mask: USER_PRESENCE_MASK,
        client_data: &assertion.client_data,
        challenge,
        challenge_offset,
        signature: &signature,
        public_key,
    };
    Ok(params.encode()?)
}
