use core::fmt;
use std::io::Write;

use crate::{ByteString, Dictionary, Error, List};

/// The kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A length-prefixed raw byte sequence.
    ByteString,
    /// A signed 64-bit integer.
    Integer,
    /// An ordered sequence of values.
    List,
    /// A key-sorted map from byte strings to values.
    Dictionary,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ByteString => "byte string",
            Self::Integer => "integer",
            Self::List => "list",
            Self::Dictionary => "dictionary",
        })
    }
}

/// A bencode value: one of the four kinds the format defines.
///
/// `ByteString` and `Integer` carry their payload by value; cloning copies
/// it. `List` and `Dictionary` are shared handles: cloning a composite
/// `Value` yields a second handle to the same underlying node, which is how
/// one node is deliberately shared across several parents. A shared node is
/// legal in a tree as long as it never appears on its own ancestor path at
/// encode time; [`encode`](Self::encode) rejects such cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A byte string.
    ByteString(ByteString),
    /// A signed 64-bit integer.
    Integer(i64),
    /// An ordered list of values (shared handle).
    List(List),
    /// A key-sorted dictionary (shared handle).
    Dictionary(Dictionary),
}

impl Value {
    /// Prefix byte of a serialized integer.
    pub const INTEGER_PREFIX: u8 = b'i';

    /// Suffix byte terminating serialized integers, lists, and dictionaries.
    pub const END: u8 = b'e';

    /// The kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::ByteString(_) => ValueKind::ByteString,
            Self::Integer(_) => ValueKind::Integer,
            Self::List(_) => ValueKind::List,
            Self::Dictionary(_) => ValueKind::Dictionary,
        }
    }

    /// Returns `true` iff this value can contain other values and therefore
    /// participate in a reference cycle.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::List(_) | Self::Dictionary(_))
    }

    /// Borrow the byte string payload, if this is a byte string.
    #[must_use]
    pub const fn as_byte_string(&self) -> Option<&ByteString> {
        match self {
            Self::ByteString(b) => Some(b),
            _ => None,
        }
    }

    /// Return the integer payload, if this is an integer.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Borrow the list handle, if this is a list.
    #[must_use]
    pub const fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Borrow the dictionary handle, if this is a dictionary.
    #[must_use]
    pub const fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Self::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Serialize this value to `sink`.
    ///
    /// For a composite value the subtree is first checked for reference
    /// cycles; on a cycle nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CircularReference`] if the subtree contains a
    /// back-edge to an active ancestor, or [`Error::Io`] from the sink.
    pub fn encode<W: Write>(&self, sink: &mut W) -> Result<(), Error> {
        crate::encode::encode_into(self, sink)
    }

    /// Identity of the shared composite node, if composite.
    ///
    /// Two handles to the same node compare equal here even when distinct
    /// `Value`s; two equal-valued but separately allocated nodes do not.
    pub(crate) fn composite_id(&self) -> Option<usize> {
        match self {
            Self::List(l) => Some(l.node_id()),
            Self::Dictionary(d) => Some(d.node_id()),
            _ => None,
        }
    }

    /// Clone handles to the composite children of this value, in container
    /// order. Scalar children are terminal for cycle detection and are
    /// skipped.
    pub(crate) fn composite_children(&self) -> Vec<Self> {
        match self {
            Self::List(l) => l.composite_elements(),
            Self::Dictionary(d) => d.composite_values(),
            _ => Vec::new(),
        }
    }
}

impl From<ByteString> for Value {
    fn from(b: ByteString) -> Self {
        Self::ByteString(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::ByteString(ByteString::from(s))
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::ByteString(ByteString::from(bytes))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<List> for Value {
    fn from(l: List) -> Self {
        Self::List(l)
    }
}

impl From<Dictionary> for Value {
    fn from(d: Dictionary) -> Self {
        Self::Dictionary(d)
    }
}
