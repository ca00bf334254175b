#![warn(missing_docs)]

//! Reshapes WebAuthn assertion artifacts into the byte layout an
//! on-chain signature verifier expects.
//!
//! A passkey authentication ceremony yields a DER-encoded ECDSA
//! signature, an authenticator data blob and a client data JSON buffer.
//! The verifying contract consumes none of them directly: it wants the
//! signature as two fixed-width scalars, the byte offset of the
//! challenge inside the raw client data, optionally the signer's public
//! key as bare curve coordinates, and the whole set packed as one
//! contract-call tuple.
//!
//! The pipeline runs in stages:
//!
//! 1. [`AssertionResponse::from_base64`] decodes the transport encoding
//! 2. [`SignatureComponents::from_der`] splits the signature
//! 3. [`challenge_offset`] locates the challenge value
//! 4. [`PublicKeyCoordinates::from_spki`] extracts the key coordinates
//! 5. [`encode_verify_params`] or [`encode_verify_params_with_key`]
//!    packs the tuple
//!
//! Every stage is a pure function over its input bytes. Any failure
//! aborts the attempt with a stage-specific error; no partial payload
//! is ever produced.

mod assertion;
mod client_data;
mod der;
mod error;
mod key;
mod payload;

pub use assertion::{AssertionResponse, decode_artifact};
pub use client_data::{CHALLENGE_KEY_TOKEN, challenge_offset};
pub use der::{SCALAR_LENGTH, SignatureComponents};
pub use error::{DecodeError, KeyFormatError, OffsetNotFoundError, PayloadError};
pub use key::{COORDINATE_LENGTH, PublicKeyCoordinates};
pub use keybridge_abi::EncodingError;
pub use payload::{
    USER_PRESENCE_MASK, VerifyParams, encode_verify_params, encode_verify_params_with_key,
};
