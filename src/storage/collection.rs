//! Single-entity in-memory collection
//!
//! Owns the id counter, the primary-key index and insertion order for one
//! entity type. All three sit behind one lock, so id assignment and
//! insertion are observed as a single step.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::schema::{EntityId, Record};

/// First id handed out by a fresh collection
pub const FIRST_ID: EntityId = 1;

struct Inner<T> {
    next_id: EntityId,
    by_id: HashMap<EntityId, T>,
    order: Vec<EntityId>,
}

/// Thread-safe, append-only record collection.
pub struct Collection<T: Record> {
    inner: RwLock<Inner<T>>,
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: FIRST_ID,
                by_id: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    /// Assigns the next id, builds the record with it and stores it.
    ///
    /// `build` runs while the write lock is held and must return a record
    /// carrying the id it was given.
    pub fn insert_with(&self, build: impl FnOnce(EntityId) -> T) -> T {
        let mut inner = self.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let record = build(id);
        debug_assert_eq!(record.id(), id, "record must keep its assigned id");

        inner.by_id.insert(id, record.clone());
        inner.order.push(id);
        record
    }

    /// Primary-key lookup.
    pub fn get(&self, id: EntityId) -> Option<T> {
        self.read().by_id.get(&id).cloned()
    }

    /// First record, in insertion order, matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        let inner = self.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.by_id.get(id))
            .find(|record| predicate(record))
            .cloned()
    }

    /// Owned snapshot of every record, in insertion order.
    pub fn all(&self) -> Vec<T> {
        let inner = self.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.by_id.get(id))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Operations never leave the collection half-written, so a poisoned
    // lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Inner<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
