//! Ordered list that rejects equal elements
//!
//! Lists are short (one account's expenditures), so every operation is a
//! linear scan.

use std::fmt;

use crate::error::{SaveItError, SaveItResult};

/// An element that can live in a [`UniqueList`]
pub trait ListItem: Clone + PartialEq + fmt::Display {
    /// Entity name used in error messages
    const ENTITY: &'static str;
}

/// Insertion-ordered list with no two equal elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: ListItem> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list, failing on the first duplicate
    pub fn from_items(items: Vec<T>) -> SaveItResult<Self> {
        let mut list = Self::new();
        list.set_all(items)?;
        Ok(list)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Append an element
    pub fn add(&mut self, item: T) -> SaveItResult<()> {
        if self.contains(&item) {
            return Err(duplicate(&item));
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove an element equal to `item`
    pub fn remove(&mut self, item: &T) -> SaveItResult<T> {
        let pos = self.position(item).ok_or_else(|| not_found(item))?;
        Ok(self.items.remove(pos))
    }

    /// Replace `old` with `new` in place
    pub fn replace(&mut self, old: &T, new: T) -> SaveItResult<()> {
        let pos = self.position(old).ok_or_else(|| not_found(old))?;

        if old != &new && self.contains(&new) {
            return Err(duplicate(&new));
        }

        self.items[pos] = new;
        Ok(())
    }

    /// Replace the whole contents; unchanged on failure
    pub fn set_all(&mut self, items: Vec<T>) -> SaveItResult<()> {
        for (i, item) in items.iter().enumerate() {
            if items[..i].contains(item) {
                return Err(duplicate(item));
            }
        }
        self.items = items;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }
}

impl<T> UniqueList<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for UniqueList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

fn duplicate<T: ListItem>(item: &T) -> SaveItError {
    SaveItError::Duplicate {
        entity_type: T::ENTITY,
        identifier: item.to_string(),
    }
}

fn not_found<T: ListItem>(item: &T) -> SaveItError {
    SaveItError::NotFound {
        entity_type: T::ENTITY,
        identifier: item.to_string(),
    }
}
