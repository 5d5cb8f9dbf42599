//! In-process document store.
//!
//! Persists `User` and `Blog` documents in id-keyed collections that
//! preserve insertion order. The store knows nothing about reference
//! expansion; repositories perform their own joins after batch fetches,
//! keeping this interface storage-agnostic.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Blog, User};

/// Ordered, id-keyed document collection
#[derive(Debug)]
pub struct Collection<T> {
    order: Vec<Uuid>,
    items: HashMap<Uuid, T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            items: HashMap::new(),
        }
    }
}

impl<T> Collection<T> {
    /// Insert a document under the given id
    pub fn insert(&mut self, id: Uuid, item: T) {
        if self.items.insert(id, item).is_none() {
            self.order.push(id);
        }
    }

    /// Look up a document by id
    pub fn get(&self, id: &Uuid) -> Option<&T> {
        self.items.get(id)
    }

    /// Look up a document by id for in-place mutation
    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut T> {
        self.items.get_mut(id)
    }

    /// Remove a document by id, returning it if present
    pub fn remove(&mut self, id: &Uuid) -> Option<T> {
        let removed = self.items.remove(id);
        if removed.is_some() {
            self.order.retain(|other| other != id);
        }
        removed
    }

    /// Iterate documents in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    /// Number of documents in the collection
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no documents
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Document store holding the user and blog collections.
///
/// The sole point of contention between concurrently handled requests;
/// each collection sits behind its own async lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) users: RwLock<Collection<User>>,
    pub(crate) blogs: RwLock<Collection<Blog>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}
