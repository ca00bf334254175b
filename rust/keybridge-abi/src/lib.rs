#![warn(missing_docs)]

//! Contract-call tuple encoding.
//!
//! On-chain verifiers take their arguments as a single flat byte buffer
//! in the canonical contract ABI layout: a tuple of values packed into
//! 32-byte words. This crate encodes such tuples from borrowed Rust
//! values.
//!
//! # Binary Layout
//!
//! The buffer splits into a head and a tail. The head holds one word per
//! static value (two for a pair) in tuple order; each dynamic value
//! contributes a head word holding the byte offset of its tail block
//! instead. Tail blocks follow the head in tuple order, each a length
//! word followed by the raw data zero-padded up to the next word
//! boundary.
//!
//! ```text
//!          ┌────────────────────────────┐
//!          │            Head            │
//!          │                            │
//!          │  word per static value     │
//!   ┌──────┼─ offset word per dynamic   │
//!   │      ├────────────────────────────┤
//!   │      │            Tail            │
//!   │      │                            │
//!   └─────→│ ┌─────────────┬──────────┐ │
//!          │ │ Length Word │ Data ··· │ │
//!          │ └─────────────┴──────────┘ │
//!          │  block per dynamic value,  │
//!          │  padded to a word boundary │
//!          └────────────────────────────┘
//! ```
//!
//! Integers are unsigned big-endian, right-aligned in their word; single
//! bytes are left-aligned; offsets count from the start of the buffer.
//!
//! # Basic Usage
//!
//! ```rust
//! use keybridge_abi::{Value, encode_tuple};
//!
//! let payload = encode_tuple(&[
//!     Value::Uint(&[0x2a]),
//!     Value::Bytes(b"hello"),
//! ])?;
//!
//! // Two head words, then the length-prefixed data block.
//! assert_eq!(payload.len(), 32 * 4);
//! assert_eq!(payload[31], 0x2a); // integer, right-aligned
//! assert_eq!(payload[63], 0x40); // tail starts after the head
//! assert_eq!(payload[95], 5); // length of "hello"
//! # Ok::<(), keybridge_abi::EncodingError>(())
//! ```

mod error;
mod tuple;
mod value;

pub use error::*;
pub use tuple::*;
pub use value::*;
