//! # bencodec
//!
//! A codec for **bencode**, the compact self-delimiting serialization format
//! with four value kinds: byte strings, signed integers, ordered lists, and
//! key-sorted dictionaries.
//!
//! ## Design principles
//!
//! - **Decoding is streaming-first.**
//!   [`StreamDecoder`] pulls from any [`std::io::Read`] with one byte of
//!   lookahead and yields fully materialized [`Value`]s lazily, one per
//!   iteration step, until end of stream.
//! - **Trees are mutable until encoded.**
//!   [`List`] and [`Dictionary`] are shared handles; the same node can be
//!   referenced from several parents and mutated in place between encodes.
//! - **Cycles fail loudly.**
//!   Encoding a composite value first walks its subtree tracking the node
//!   identities on the active path; a back-edge to a live ancestor fails
//!   with [`Error::CircularReference`] before a single byte is written.
//!   Legitimate DAG sharing encodes fine.
//!
//! ## Wire grammar
//!
//! - byte string: `<decimal-length>:<raw-bytes>`
//! - integer: `i<signed-decimal>e` — canonical form only: no leading zeros,
//!   no `+`, and `-0` is invalid
//! - list: `l<value>*e`
//! - dictionary: `d(<byte-string-key><value>)*e` — the encoder always emits
//!   keys in sorted order; the decoder accepts any input order and re-sorts
//!
//! Dictionary keys sort byte-wise lexicographically, which for valid UTF-8
//! keys equals code-point order and is total over arbitrary byte strings.
//!
//! ## Errors
//!
//! Malformed input is a [`FormatError`]; it aborts the decode of the current
//! value and every enclosing container. I/O failures from the caller-owned
//! source or sink propagate unwrapped as [`Error::Io`]. There is no retry or
//! repair of malformed input.
//!
//! ## Untrusted input
//!
//! Decode and encode recursion is proportional to nesting depth, and a byte
//! string header announces its own allocation size. Neither is bounded by
//! default; pass [`DecodeLimits`] to
//! [`StreamDecoder::with_limits`] when the source is hostile.
//!
//! ## Example
//!
//! ```
//! use bencodec::{encode_to_vec, Dictionary, StreamDecoder, Value};
//!
//! let dict = Dictionary::new();
//! dict.insert("spam", 42i64);
//! dict.insert("eggs", "on toast");
//!
//! let bytes = encode_to_vec(&Value::Dictionary(dict))?;
//! assert_eq!(bytes, b"d4:eggs8:on toast4:spami42ee");
//!
//! let decoded = StreamDecoder::new(&bytes[..]).next().unwrap()?;
//! assert_eq!(encode_to_vec(&decoded)?, bytes);
//! # Ok::<(), bencodec::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod bytes;
mod cycle;
mod decode;
mod dict;
mod encode;
mod error;
mod limits;
mod list;
mod reader;
mod value;

pub use crate::bytes::ByteString;
pub use crate::decode::StreamDecoder;
pub use crate::dict::Dictionary;
pub use crate::encode::{encode_into, encode_to_vec};
pub use crate::error::{Error, FormatError};
pub use crate::limits::{DecodeLimits, DEFAULT_MAX_BYTES_LEN, DEFAULT_MAX_DEPTH};
pub use crate::list::{List, ListIter};
pub use crate::reader::ByteStreamReader;
pub use crate::value::{Value, ValueKind};
