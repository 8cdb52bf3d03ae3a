//! Concurrent in-memory tables with auto-incrementing ids.

use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;

/// One table of rows keyed by an auto-incrementing id.
///
/// Rows are cloned out on read; mutation happens under the map's
/// per-entry lock so concurrent updates to the same row serialize.
pub struct Table<T> {
    rows: DashMap<i64, T>,
    next_id: AtomicI64,
}

impl<T: Clone> Table<T> {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Allocate the next id, build the row with it, and store it
    pub fn insert_with(&self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).map(|r| r.clone())
    }

    /// All rows ordered by id
    pub fn list(&self) -> Vec<T> {
        let mut rows: Vec<(i64, T)> = self.rows.iter().map(|r| (*r.key(), r.value().clone())).collect();
        rows.sort_by_key(|(id, _)| *id);
        rows.into_iter().map(|(_, row)| row).collect()
    }

    /// Mutate one row in place under its entry lock.
    ///
    /// Returns the updated row, or `None` when the id is absent.
    pub fn update(&self, id: i64, mutate: impl FnOnce(&mut T)) -> Option<T> {
        self.rows.get_mut(&id).map(|mut row| {
            mutate(row.value_mut());
            row.clone()
        })
    }

    pub fn remove(&self, id: i64) -> Option<T> {
        self.rows.remove(&id).map(|(_, row)| row)
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.iter().find(|r| pred(r.value())).map(|r| r.value().clone())
    }

    pub fn any(&self, pred: impl Fn(&T) -> bool) -> bool {
        self.rows.iter().any(|r| pred(r.value()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}
