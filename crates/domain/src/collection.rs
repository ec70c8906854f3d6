//! OrderedCollection - the 1-indexed sequence used throughout the domain model
//!
//! Position 1 is the first element. The translation to the 0-based `Vec`
//! underneath happens in exactly one place, [`OrderedCollection::slot`], so
//! callers never see a 0-based index.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// An insertion-ordered sequence with 1-based positional access
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedCollection<T> {
    items: Vec<T>,
}

impl<T> OrderedCollection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an element; it becomes position `len()`
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Element at a 1-based position
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutOfRange`] when `position` is 0 or greater
    /// than `len()`.
    pub fn get(&self, position: usize) -> Result<&T, DomainError> {
        let slot = self.slot(position)?;
        Ok(&self.items[slot])
    }

    /// Remove and return the element at a 1-based position, shifting later
    /// elements down by one
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutOfRange`] under the same rule as [`get`](Self::get).
    pub fn remove(&mut self, position: usize) -> Result<T, DomainError> {
        let slot = self.slot(position)?;
        Ok(self.items.remove(slot))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(item)
    }

    fn slot(&self, position: usize) -> Result<usize, DomainError> {
        if position == 0 || position > self.items.len() {
            return Err(DomainError::out_of_range(position, self.items.len()));
        }
        Ok(position - 1)
    }
}

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for OrderedCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for OrderedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for OrderedCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for OrderedCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
