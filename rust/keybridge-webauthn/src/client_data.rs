//! Challenge location within raw client data.
//!
//! The verifying contract never parses `clientDataJSON`. It slices the
//! raw buffer at a caller-supplied byte offset and compares what it
//! finds against the expected challenge, so the offset must be computed
//! with the same primitive the contract uses: a literal pattern search
//! for the challenge key token. A structural JSON parse would be free to
//! disagree with the contract about where the value starts, which is
//! exactly the bug this module exists to rule out.

use crate::error::OffsetNotFoundError;

/// The serialized key token preceding the challenge value, quotes and
/// colon included.
pub const CHALLENGE_KEY_TOKEN: &[u8] = b"\"challenge\":";

/// Locate the first byte of the challenge value in raw client data.
///
/// The returned offset indexes just past the value's opening quote: the
/// position of the first [`CHALLENGE_KEY_TOKEN`] match, plus the token
/// length, plus one for the quote. Offsets count raw bytes from the
/// start of the buffer.
///
/// # Errors
///
/// Returns [`OffsetNotFoundError`] when the token does not occur. A
/// guessed offset is never produced.
pub fn challenge_offset(client_data: &[u8]) -> Result<usize, OffsetNotFoundError> {
    let start = client_data
        .windows(CHALLENGE_KEY_TOKEN.len())
        .position(|window| window == CHALLENGE_KEY_TOKEN)
        .ok_or(OffsetNotFoundError)?;

    Ok(start + CHALLENGE_KEY_TOKEN.len() + 1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn finds_the_value_after_the_key_token() {
        let client_data = br#"{"type":"webauthn.get","challenge":"abc123","origin":"https://example.com"}"#;

        let offset = challenge_offset(client_data).unwrap();

        assert_eq!(offset, 36);
        assert_eq!(client_data[offset..offset + 6], *b"abc123");
    }

    #[test]
    fn counts_raw_bytes_before_the_token() {
        // Multi-byte characters ahead of the key shift the offset by
        // their byte width, not their character count.
        let client_data = r#"{"héllo":"wörld","challenge":"x"}"#.as_bytes();

        let offset = challenge_offset(client_data).unwrap();

        assert_eq!(client_data[offset], b'x');
    }

    #[test]
    fn uses_the_first_match() {
        let client_data = br#"{"challenge":"one","challenge":"two"}"#;

        let offset = challenge_offset(client_data).unwrap();

        assert_eq!(offset, 14);
        assert_eq!(client_data[offset..offset + 3], *b"one");
    }

    #[test]
    fn missing_challenge_key_is_an_error() {
        let client_data = br#"{"type":"webauthn.get","origin":"https://example.com"}"#;

        assert_eq!(challenge_offset(client_data), Err(OffsetNotFoundError));
    }

    #[test]
    fn bare_key_without_colon_is_an_error() {
        assert_eq!(
            challenge_offset(br#"{"challenge" :"spaced"}"#),
            Err(OffsetNotFoundError)
        );
    }

    #[test]
    fn empty_client_data_is_an_error() {
        assert_eq!(challenge_offset(b""), Err(OffsetNotFoundError));
    }
}
