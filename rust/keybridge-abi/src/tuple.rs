//! Packing a sequence of values into the head and tail sections.

use crate::error::EncodingError;
use crate::value::{Value, WORD_SIZE};

/// Encode a tuple of values as a single contract-call byte buffer.
///
/// The head length is fixed by the tuple shape alone, so dynamic offsets
/// can be computed in one pass: each dynamic value's head word is the
/// head length plus the tail bytes written so far.
///
/// # Errors
///
/// Returns [`EncodingError::ValueTooWide`] if an integer does not fit its
/// word slot. Nothing is returned for a partially encoded tuple.
pub fn encode_tuple(values: &[Value<'_>]) -> Result<Vec<u8>, EncodingError> {
    let head_length = values.iter().map(Value::head_words).sum::<usize>() * WORD_SIZE;
    let mut head = Vec::with_capacity(head_length);
    let mut tail = Vec::new();

    for value in values {
        match value {
            Value::Byte(byte) => {
                head.push(*byte);
                head.resize(head.len() + WORD_SIZE - 1, 0);
            }
            Value::Uint(integer) => push_uint(&mut head, integer)?,
            Value::UintPair([first, second]) => {
                push_uint(&mut head, first)?;
                push_uint(&mut head, second)?;
            }
            Value::Bytes(data) => {
                push_word(&mut head, (head_length + tail.len()) as u64);
                push_block(&mut tail, data);
            }
            Value::Str(text) => {
                push_word(&mut head, (head_length + tail.len()) as u64);
                push_block(&mut tail, text.as_bytes());
            }
        }
    }

    head.extend_from_slice(&tail);
    Ok(head)
}

/// Append an integer right-aligned in a zero-filled word.
fn push_uint(out: &mut Vec<u8>, integer: &[u8]) -> Result<(), EncodingError> {
    if integer.len() > WORD_SIZE {
        return Err(EncodingError::ValueTooWide {
            width: integer.len(),
        });
    }
    out.resize(out.len() + WORD_SIZE - integer.len(), 0);
    out.extend_from_slice(integer);
    Ok(())
}

/// Append a word holding a small integer, for offsets and lengths.
fn push_word(out: &mut Vec<u8>, value: u64) {
    let bytes = value.to_be_bytes();
    out.resize(out.len() + WORD_SIZE - bytes.len(), 0);
    out.extend_from_slice(&bytes);
}

/// Append a tail block: length word, then data padded to a word boundary.
fn push_block(out: &mut Vec<u8>, data: &[u8]) {
    push_word(out, data.len() as u64);
    out.extend_from_slice(data);
    let trailing = data.len() % WORD_SIZE;
    if trailing != 0 {
        out.resize(out.len() + WORD_SIZE - trailing, 0);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn word(buffer: &[u8], index: usize) -> &[u8] {
        &buffer[index * WORD_SIZE..(index + 1) * WORD_SIZE]
    }

    fn uint_word(value: u64) -> [u8; WORD_SIZE] {
        let mut word = [0u8; WORD_SIZE];
        word[WORD_SIZE - 8..].copy_from_slice(&value.to_be_bytes());
        word
    }

    #[test]
    fn it_encodes_static_values_in_place() {
        let encoded = encode_tuple(&[
            Value::Byte(0xab),
            Value::Uint(&[0x12, 0x34]),
            Value::UintPair([&[1], &[2]]),
        ])
        .unwrap();

        assert_eq!(encoded.len(), 4 * WORD_SIZE);

        let mut byte_word = [0u8; WORD_SIZE];
        byte_word[0] = 0xab;
        assert_eq!(word(&encoded, 0), byte_word);
        assert_eq!(word(&encoded, 1), uint_word(0x1234));
        assert_eq!(word(&encoded, 2), uint_word(1));
        assert_eq!(word(&encoded, 3), uint_word(2));
    }

    #[test]
    fn it_pads_short_integers_on_the_left() {
        let encoded = encode_tuple(&[Value::Uint(&[0x2a]), Value::Uint(&[])]).unwrap();

        assert_eq!(word(&encoded, 0), uint_word(0x2a));
        assert_eq!(word(&encoded, 1), uint_word(0));
    }

    #[test]
    fn it_copies_a_full_word_integer_verbatim() {
        let integer = [0x5cu8; WORD_SIZE];
        let encoded = encode_tuple(&[Value::Uint(&integer)]).unwrap();

        assert_eq!(word(&encoded, 0), integer);
    }

    #[test]
    fn it_rejects_integers_wider_than_a_word() {
        let wide = [0u8; WORD_SIZE + 1];

        assert_eq!(
            encode_tuple(&[Value::Uint(&wide)]),
            Err(EncodingError::ValueTooWide {
                width: WORD_SIZE + 1
            })
        );
        assert_eq!(
            encode_tuple(&[Value::UintPair([&[0u8; 40], &[1]])]),
            Err(EncodingError::ValueTooWide { width: 40 })
        );
    }

    #[test]
    fn it_length_prefixes_dynamic_values() {
        let encoded = encode_tuple(&[Value::Bytes(b"abc")]).unwrap();

        assert_eq!(encoded.len(), 3 * WORD_SIZE);
        assert_eq!(word(&encoded, 0), uint_word(WORD_SIZE as u64));
        assert_eq!(word(&encoded, 1), uint_word(3));
        assert_eq!(encoded[64..67], *b"abc");
        assert!(encoded[67..].iter().all(|byte| *byte == 0));
    }

    #[test]
    fn it_word_aligns_dynamic_data() {
        let empty = encode_tuple(&[Value::Bytes(b"")]).unwrap();
        assert_eq!(empty.len(), 2 * WORD_SIZE);
        assert_eq!(word(&empty, 1), uint_word(0));

        let exact = encode_tuple(&[Value::Bytes(&[0xee; WORD_SIZE])]).unwrap();
        assert_eq!(exact.len(), 3 * WORD_SIZE);

        let spill = encode_tuple(&[Value::Bytes(&[0xee; WORD_SIZE + 1])]).unwrap();
        assert_eq!(spill.len(), 4 * WORD_SIZE);
        assert_eq!(spill[64..97], [0xee; WORD_SIZE + 1]);
        assert!(spill[97..].iter().all(|byte| *byte == 0));
    }

    #[test]
    fn it_measures_strings_in_bytes() {
        let encoded = encode_tuple(&[Value::Str("héllo")]).unwrap();

        assert_eq!(word(&encoded, 1), uint_word(6));
        assert_eq!(encoded[64..70], *"héllo".as_bytes());
    }

    #[test]
    fn it_places_tail_blocks_in_tuple_order() {
        let encoded = encode_tuple(&[
            Value::Bytes(&[0xaa; 3]),
            Value::Byte(0x01),
            Value::Bytes(&[0xbb; 40]),
            Value::Str("ab"),
            Value::Uint(&[0x24]),
            Value::UintPair([&[1], &[2]]),
        ])
        .unwrap();

        // 7 head words, then blocks of 2, 3 and 2 words.
        assert_eq!(encoded.len(), 14 * WORD_SIZE);

        assert_eq!(word(&encoded, 0), uint_word(0x0e0));
        assert_eq!(word(&encoded, 2), uint_word(0x120));
        assert_eq!(word(&encoded, 3), uint_word(0x180));
        assert_eq!(word(&encoded, 4), uint_word(0x24));

        assert_eq!(word(&encoded, 7), uint_word(3));
        assert_eq!(encoded[0x100..0x103], [0xaa; 3]);
        assert_eq!(word(&encoded, 9), uint_word(40));
        assert_eq!(encoded[0x140..0x168], [0xbb; 40]);
        assert_eq!(word(&encoded, 12), uint_word(2));
        assert_eq!(encoded[0x1a0..0x1a2], *b"ab");
    }

    #[test]
    fn it_encodes_an_empty_tuple() {
        assert_eq!(encode_tuple(&[]).unwrap(), Vec::<u8>::new());
    }
}
