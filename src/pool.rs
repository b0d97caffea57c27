//! Candidate pool keyed by identifier.

use crate::entity::Candidate;
use crate::error::PoolError;
use crate::policy::Rankable;
use std::collections::hash_map::{Entry, HashMap};

/// Identifier-keyed snapshot of the items available to one ranking request.
///
/// Iteration order is unspecified; rankings never depend on it.
#[derive(Debug, Clone)]
pub struct CandidatePool<T = Candidate> {
    items: HashMap<String, T>,
}

impl<T: Rankable> CandidatePool<T> {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Builds a pool, rejecting repeated identifiers.
    ///
    /// # Errors
    ///
    /// [`PoolError::DuplicateId`] naming the first repeated identifier.
    pub fn try_from_candidates<I>(items: I) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = items.into_iter();
        let mut map = HashMap::with_capacity(iter.size_hint().0);
        for item in iter {
            match map.entry(item.id().to_owned()) {
                Entry::Occupied(e) => return Err(PoolError::DuplicateId(e.key().clone())),
                Entry::Vacant(e) => {
                    e.insert(item);
                }
            }
        }
        Ok(Self { items: map })
    }

    /// Adds an item, returning the one it replaced (same identifier).
    pub fn insert(&mut self, item: T) -> Option<T> {
        self.items.insert(item.id().to_owned(), item)
    }

    /// Resolves an identifier.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    /// Returns true if an item has this identifier.
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the pool has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    /// Identifiers in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Resolves identifiers in order, skipping unknown ones.
    pub fn resolve<'a, S>(&'a self, ids: &'a [S]) -> impl Iterator<Item = &'a T> + 'a
    where
        S: AsRef<str>,
    {
        ids.iter().filter_map(move |id| self.items.get(id.as_ref()))
    }
}

impl<T: Rankable> Default for CandidatePool<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Later items replace earlier ones with the same identifier.
impl<T: Rankable> FromIterator<T> for CandidatePool<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut pool = Self::new();
        pool.extend(iter);
        pool
    }
}

impl<T: Rankable> Extend<T> for CandidatePool<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
