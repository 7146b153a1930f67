use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::{ByteString, Value};

/// A key-sorted dictionary mapping [`ByteString`] keys to [`Value`]s.
///
/// Keys are unique and iteration always visits entries in ascending key
/// order (byte-wise lexicographic). Inserting under an existing key
/// overwrites the previous value, consistent with map semantics.
///
/// `Dictionary` is a shared handle: [`Clone`] yields a second handle to the
/// same underlying node. Equality is deep value equality of the entries.
/// Not internally synchronized; the handle is `!Send`/`!Sync`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dictionary {
    entries: Rc<RefCell<BTreeMap<ByteString, Value>>>,
}

impl Dictionary {
    /// Prefix byte of a serialized dictionary.
    pub const PREFIX: u8 = b'd';

    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, returning the previous value for that key
    /// if one existed.
    ///
    /// Plain-text keys are wrapped into byte strings implicitly.
    pub fn insert(&self, key: impl Into<ByteString>, value: impl Into<Value>) -> Option<Value> {
        self.entries.borrow_mut().insert(key.into(), value.into())
    }

    /// Return the value stored under `key`, if any.
    ///
    /// Accepts a [`ByteString`], `&str`, or raw bytes as the key. Composite
    /// values come back as shared handles; scalars are copies.
    #[must_use]
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<Value> {
        self.entries.borrow().get(key.as_ref()).cloned()
    }

    /// Remove the entry under `key`, returning its value if one existed.
    pub fn remove(&self, key: impl AsRef<[u8]>) -> Option<Value> {
        self.entries.borrow_mut().remove(key.as_ref())
    }

    /// Returns `true` iff an entry exists under `key`.
    #[must_use]
    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.entries.borrow().contains_key(key.as_ref())
    }

    /// Returns `true` iff at least one entry maps to a value equal to
    /// `value`. Linear in the number of entries.
    #[must_use]
    pub fn contains_value(&self, value: &Value) -> bool {
        self.entries.borrow().values().any(|v| v == value)
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` iff the dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// The keys in ascending order.
    #[must_use]
    pub fn keys(&self) -> Vec<ByteString> {
        self.entries.borrow().keys().cloned().collect()
    }

    /// The values, in ascending order of their keys.
    #[must_use]
    pub fn values(&self) -> Vec<Value> {
        self.entries.borrow().values().cloned().collect()
    }

    /// The entries in ascending key order.
    #[must_use]
    pub fn entries(&self) -> Vec<(ByteString, Value)> {
        self.entries
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Stable identity of the shared node, for ancestor tracking.
    pub(crate) fn node_id(&self) -> usize {
        Rc::as_ptr(&self.entries) as usize
    }

    /// Handles to the composite values only, in key order.
    pub(crate) fn composite_values(&self) -> Vec<Value> {
        self.entries
            .borrow()
            .values()
            .filter(|v| v.is_composite())
            .cloned()
            .collect()
    }

    /// Run `f` over the sorted entry map without cloning.
    pub(crate) fn with_entries<T>(&self, f: impl FnOnce(&BTreeMap<ByteString, Value>) -> T) -> T {
        f(&self.entries.borrow())
    }
}

impl FromIterator<(ByteString, Value)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (ByteString, Value)>>(iter: I) -> Self {
        Self {
            entries: Rc::new(RefCell::new(iter.into_iter().collect())),
        }
    }
}
