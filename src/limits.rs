/// Decode-time resource limits.
///
/// The bencode grammar puts no bound on nesting depth or byte string length,
/// and neither does [`StreamDecoder::new`](crate::StreamDecoder::new): every
/// recursive decode call grows the native call stack, and a byte string
/// header may announce an arbitrarily large allocation. When decoding
/// untrusted input, construct the decoder with
/// [`StreamDecoder::with_limits`](crate::StreamDecoder::with_limits) instead.
///
/// Limits are enforced deterministically at the point of violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum container nesting depth. A top-level scalar has depth 0; each
    /// enclosing list or dictionary adds 1.
    pub max_depth: usize,
    /// Maximum single byte-string length in bytes.
    pub max_bytes_len: usize,
}

/// Default maximum nesting depth for [`DecodeLimits::default`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default maximum byte-string length for [`DecodeLimits::default`].
///
/// This is a safety limit; tune it explicitly for your deployment.
pub const DEFAULT_MAX_BYTES_LEN: usize = 1 << 26;

impl DecodeLimits {
    /// Limits that never trigger, matching the unguarded behavior of
    /// [`StreamDecoder::new`](crate::StreamDecoder::new).
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
            max_bytes_len: usize::MAX,
        }
    }
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_bytes_len: DEFAULT_MAX_BYTES_LEN,
        }
    }
}
