use std::cell::RefCell;
use std::rc::Rc;

use crate::{Error, Value};

/// An ordered, index-addressable, growable sequence of [`Value`]s.
///
/// `List` is a shared handle: [`Clone`] yields a second handle to the same
/// underlying node, and mutation through either handle is visible through
/// both. Equality is deep value equality of the elements.
///
/// Not internally synchronized; the handle is `!Send`/`!Sync`, so structural
/// mutation is confined to one thread by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct List {
    elements: Rc<RefCell<Vec<Value>>>,
}

impl List {
    /// Prefix byte of a serialized list.
    pub const PREFIX: u8 = b'l';

    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value.
    pub fn push(&self, value: impl Into<Value>) {
        self.elements.borrow_mut().push(value.into());
    }

    /// Insert a value at `index`, shifting later elements right.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index > len`; the list is left
    /// unmodified.
    pub fn insert(&self, index: usize, value: impl Into<Value>) -> Result<(), Error> {
        let mut elements = self.elements.borrow_mut();
        if index > elements.len() {
            return Err(Error::InvalidIndex {
                index,
                size: elements.len(),
            });
        }
        elements.insert(index, value.into());
        Ok(())
    }

    /// Return the element at `index`.
    ///
    /// Composite elements come back as shared handles; scalar elements are
    /// copies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<Value, Error> {
        let elements = self.elements.borrow();
        elements
            .get(index)
            .cloned()
            .ok_or(Error::InvalidIndex {
                index,
                size: elements.len(),
            })
    }

    /// Remove and return the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index >= len`; the list is left
    /// unmodified.
    pub fn remove(&self, index: usize) -> Result<Value, Error> {
        let mut elements = self.elements.borrow_mut();
        if index >= elements.len() {
            return Err(Error::InvalidIndex {
                index,
                size: elements.len(),
            });
        }
        Ok(elements.remove(index))
    }

    /// Remove the first element equal to `value`, returning whether one was
    /// removed.
    pub fn remove_item(&self, value: &Value) -> bool {
        let mut elements = self.elements.borrow_mut();
        match elements.iter().position(|e| e == value) {
            Some(index) => {
                elements.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove all elements.
    pub fn clear(&self) {
        self.elements.borrow_mut().clear();
    }

    /// Returns `true` iff an element equal to `value` is present.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.elements.borrow().iter().any(|e| e == value)
    }

    /// Index of the first element equal to `value`, if any.
    #[must_use]
    pub fn index_of(&self, value: &Value) -> Option<usize> {
        self.elements.borrow().iter().position(|e| e == value)
    }

    /// Index of the last element equal to `value`, if any.
    #[must_use]
    pub fn last_index_of(&self, value: &Value) -> Option<usize> {
        self.elements.borrow().iter().rposition(|e| e == value)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    /// Returns `true` iff the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }

    /// Iterate over the elements in insertion order.
    ///
    /// The iterator observes mutations made while it is live: it indexes the
    /// shared node on every step.
    #[must_use]
    pub fn iter(&self) -> ListIter {
        ListIter {
            list: self.clone(),
            index: 0,
        }
    }

    /// Stable identity of the shared node, for ancestor tracking.
    pub(crate) fn node_id(&self) -> usize {
        Rc::as_ptr(&self.elements) as usize
    }

    /// Handles to the composite elements only.
    pub(crate) fn composite_elements(&self) -> Vec<Value> {
        self.elements
            .borrow()
            .iter()
            .filter(|e| e.is_composite())
            .cloned()
            .collect()
    }

    /// Run `f` over the element slice without cloning.
    pub(crate) fn with_elements<T>(&self, f: impl FnOnce(&[Value]) -> T) -> T {
        f(&self.elements.borrow())
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            elements: Rc::new(RefCell::new(iter.into_iter().collect())),
        }
    }
}

/// Iterator over a [`List`]'s elements.
pub struct ListIter {
    list: List,
    index: usize,
}

impl Iterator for ListIter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let next = self.list.elements.borrow().get(self.index).cloned();
        if next.is_some() {
            self.index += 1;
        }
        next
    }
}

impl IntoIterator for &List {
    type Item = Value;
    type IntoIter = ListIter;

    fn into_iter(self) -> ListIter {
        self.iter()
    }
}
