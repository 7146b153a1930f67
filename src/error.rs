use crate::value::ValueKind;

/// A bencode format violation found while decoding.
///
/// Any format error aborts the decode of the current value and of every
/// enclosing container; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    /// The stream ended where at least one more byte was required.
    #[error("unexpected end of the stream")]
    UnexpectedEndOfStream,

    /// Bytes were accumulated but the stream ended before the stop symbol.
    #[error("stop symbol '{0}' was not reached")]
    StopSymbolNotReached(char),

    /// The next byte is not a valid value prefix.
    #[error("unexpected character in the stream: {0}")]
    UnexpectedCharacter(char),

    /// The integer token is not the canonical decimal rendering of its value
    /// (leading zeros, a `+` sign, `-0`, or non-digit characters).
    #[error("incorrect character sequence for the value")]
    NonCanonicalInteger,

    /// A byte string started with the `:` delimiter, with no length token.
    #[error("byte string length part is not present in the stream")]
    MissingLength,

    /// The byte string length token is not a valid decimal number.
    #[error("byte string length cannot be converted to a numeric value")]
    InvalidLength,

    /// The stream ended before the announced byte string length was read.
    #[error("unexpected end of the byte sequence stream")]
    TruncatedByteString,

    /// A dictionary key decoded to something other than a byte string.
    #[error("incorrect object used as dictionary key: expected a byte string, got {0}")]
    NonStringDictionaryKey(ValueKind),

    /// A dictionary key was decoded but the stream ended before its value.
    #[error("unexpected end of the stream for dictionary: key is present but value is not")]
    MissingDictionaryValue,

    /// Nesting exceeded the configured [`DecodeLimits::max_depth`](crate::DecodeLimits).
    #[error("nesting depth limit exceeded")]
    DepthLimitExceeded,

    /// A byte string length exceeded the configured
    /// [`DecodeLimits::max_bytes_len`](crate::DecodeLimits).
    #[error("byte string length exceeds decode limits")]
    ByteStringTooLong,
}

/// The error type for all fallible codec operations.
///
/// I/O failures from the underlying byte source or sink propagate as
/// [`Error::Io`]; they are never folded into a [`FormatError`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Malformed input encountered during decode.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A composite value's subtree contains a back-edge to an active
    /// ancestor. Raised only at encode time; nothing is written.
    #[error("circular reference found in {kind} while writing to stream")]
    CircularReference {
        /// The composite kind of the value whose encode was requested.
        kind: ValueKind,
    },

    /// An index-addressed container operation received an out-of-range index.
    /// The container is left unmodified.
    #[error("incorrect index value: {index} for list with size: {size}")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// The container size at the time of the call.
        size: usize,
    },

    /// An I/O failure from the caller-supplied byte source or sink.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the format error if this is [`Error::Format`].
    #[must_use]
    pub const fn as_format(&self) -> Option<&FormatError> {
        match self {
            Self::Format(e) => Some(e),
            _ => None,
        }
    }
}
