use std::io::Read;

use crate::reader::ByteStreamReader;
use crate::{ByteString, DecodeLimits, Dictionary, Error, FormatError, List, Value};

/// Lazy decoder over a byte source, yielding one [`Value`] per step.
///
/// In top-level mode the decoder runs until end of stream, so a source may
/// carry any number of consecutive values. Inside a composite the same
/// machinery runs in nested mode, stopping at the closing `e` marker
/// instead.
///
/// `StreamDecoder` implements `Iterator<Item = Result<Value, Error>>`: a
/// format or I/O error is yielded once, and iteration should be considered
/// dead afterwards (the stream position is unspecified).
///
/// Each yielded value is fully materialized before it is returned; there is
/// no partial decode of a single value.
pub struct StreamDecoder<R: Read> {
    reader: ByteStreamReader<R>,
    limits: DecodeLimits,
}

impl<R: Read> StreamDecoder<R> {
    /// Decode from `source` with no resource limits.
    ///
    /// Recursion depth and byte-string allocations are then bounded only by
    /// the input; use [`with_limits`](Self::with_limits) for untrusted
    /// sources.
    pub fn new(source: R) -> Self {
        Self::with_limits(source, DecodeLimits::unbounded())
    }

    /// Decode from `source`, enforcing `limits`.
    pub fn with_limits(source: R, limits: DecodeLimits) -> Self {
        Self {
            reader: ByteStreamReader::new(source),
            limits,
        }
    }

    /// Returns `true` iff the stream holds at least one more value.
    ///
    /// Peeks one byte non-destructively.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the source.
    pub fn has_next(&mut self) -> Result<bool, Error> {
        Ok(self.reader.peek_byte()?.is_some())
    }
}

impl<R: Read> Iterator for StreamDecoder<R> {
    type Item = Result<Value, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.has_next() {
            Ok(false) => None,
            Ok(true) => Some(decode_value(&mut self.reader, &self.limits, 0)),
            Err(e) => Some(Err(e)),
        }
    }
}

/// Returns `true` iff the nested stream holds another element, i.e. the next
/// byte is not the closing marker. End of stream also reads as "has next";
/// the subsequent dispatch then reports the truncation.
fn has_next_nested<R: Read>(reader: &mut ByteStreamReader<R>) -> Result<bool, Error> {
    Ok(reader.peek_byte()? != Some(Value::END))
}

/// Peek the prefix byte and dispatch to the matching kind's constructor.
fn decode_value<R: Read>(
    reader: &mut ByteStreamReader<R>,
    limits: &DecodeLimits,
    depth: usize,
) -> Result<Value, Error> {
    let prefix = reader
        .peek_byte()?
        .ok_or(FormatError::UnexpectedEndOfStream)?;

    match prefix {
        Value::INTEGER_PREFIX => decode_integer(reader),
        List::PREFIX => decode_list(reader, limits, depth),
        Dictionary::PREFIX => decode_dictionary(reader, limits, depth),
        b'0'..=b'9' => decode_byte_string(reader, limits),
        other => Err(FormatError::UnexpectedCharacter(other as char).into()),
    }
}

fn decode_integer<R: Read>(reader: &mut ByteStreamReader<R>) -> Result<Value, Error> {
    let prefix = reader.read_byte()?;
    debug_assert_eq!(prefix, Some(Value::INTEGER_PREFIX));

    let token = reader.read_until(Value::END)?;
    parse_canonical_i64(&token).map(Value::Integer)
}

/// Parse a signed 64-bit decimal token, accepting only the canonical form:
/// an optional leading `-`, no leading zeros, no `+`, and `0` as the sole
/// rendering of zero. Enforced by re-rendering the parsed value and
/// requiring an exact match against the token.
fn parse_canonical_i64(token: &[u8]) -> Result<i64, Error> {
    let text = std::str::from_utf8(token).map_err(|_| FormatError::NonCanonicalInteger)?;
    let value: i64 = text.parse().map_err(|_| FormatError::NonCanonicalInteger)?;
    if value.to_string() != text {
        return Err(FormatError::NonCanonicalInteger.into());
    }
    Ok(value)
}

fn decode_byte_string<R: Read>(
    reader: &mut ByteStreamReader<R>,
    limits: &DecodeLimits,
) -> Result<Value, Error> {
    let token = reader.read_until(ByteString::DELIMITER)?;
    if token.is_empty() {
        return Err(FormatError::MissingLength.into());
    }

    let text = std::str::from_utf8(&token).map_err(|_| FormatError::InvalidLength)?;
    let length: usize = text.parse().map_err(|_| FormatError::InvalidLength)?;
    if length > limits.max_bytes_len {
        return Err(FormatError::ByteStringTooLong.into());
    }

    let mut buffer = vec![0u8; length];
    let read = reader.read_exact_into(&mut buffer)?;
    if read != length {
        return Err(FormatError::TruncatedByteString.into());
    }
    Ok(Value::ByteString(ByteString::from(buffer)))
}

fn decode_list<R: Read>(
    reader: &mut ByteStreamReader<R>,
    limits: &DecodeLimits,
    depth: usize,
) -> Result<Value, Error> {
    let prefix = reader.read_byte()?;
    debug_assert_eq!(prefix, Some(List::PREFIX));
    let depth = enter_container(limits, depth)?;

    let list = List::new();
    while has_next_nested(reader)? {
        list.push(decode_value(reader, limits, depth)?);
    }
    consume_end(reader)?;
    Ok(Value::List(list))
}

fn decode_dictionary<R: Read>(
    reader: &mut ByteStreamReader<R>,
    limits: &DecodeLimits,
    depth: usize,
) -> Result<Value, Error> {
    let prefix = reader.read_byte()?;
    debug_assert_eq!(prefix, Some(Dictionary::PREFIX));
    let depth = enter_container(limits, depth)?;

    let dict = Dictionary::new();
    while has_next_nested(reader)? {
        let key = match decode_value(reader, limits, depth)? {
            Value::ByteString(key) => key,
            other => return Err(FormatError::NonStringDictionaryKey(other.kind()).into()),
        };
        if !has_next_nested(reader)? {
            return Err(FormatError::MissingDictionaryValue.into());
        }
        let value = decode_value(reader, limits, depth)?;
        // Later duplicates silently overwrite earlier entries.
        dict.insert(key, value);
    }
    consume_end(reader)?;
    Ok(Value::Dictionary(dict))
}

fn enter_container(limits: &DecodeLimits, depth: usize) -> Result<usize, Error> {
    let next = depth + 1;
    if next > limits.max_depth {
        return Err(FormatError::DepthLimitExceeded.into());
    }
    Ok(next)
}

fn consume_end<R: Read>(reader: &mut ByteStreamReader<R>) -> Result<(), Error> {
    let end = reader.read_byte()?;
    debug_assert_eq!(end, Some(Value::END));
    Ok(())
}
