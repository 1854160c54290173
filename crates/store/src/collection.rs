//! The shared collection state every store wraps.

use std::collections::HashSet;

use clementine_core::Keyed;

use crate::error::StoreError;

/// Last-known-good collection for one entity family.
///
/// Holds the records, the loading flag, the last failure message and the set
/// of ids with a mutation in flight. Stores keep one of these behind a
/// `tokio::sync::RwLock` and hand out read guards for rendering.
#[derive(Debug)]
pub struct Collection<T: Keyed> {
    items: Vec<T>,
    is_loading: bool,
    error: Option<String>,
    in_flight: HashSet<T::Id>,
}

impl<T: Keyed> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            error: None,
            in_flight: HashSet::new(),
        }
    }
}

impl<T: Keyed> Collection<T> {
    /// Empty collection, nothing loading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached records.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of cached records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a record by ID.
    #[must_use]
    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    /// Whether a full reload is in progress.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The last failure message, for passive display.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a mutation for this ID is pending. Callers typically disable
    /// the triggering control while this is true.
    #[must_use]
    pub fn is_mutating(&self, id: T::Id) -> bool {
        self.in_flight.contains(&id)
    }

    pub(crate) fn begin_load(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Replace the whole collection with a fresh load.
    pub(crate) fn load_succeeded(&mut self, items: Vec<T>) {
        self.items = items;
        self.is_loading = false;
        self.error = None;
    }

    /// Keep the stale collection, record why the reload failed.
    pub(crate) fn load_failed(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    /// Claim `id` for a mutation; fails fast when one is already pending.
    pub(crate) fn claim(&mut self, id: T::Id, entity: &'static str) -> Result<(), StoreError> {
        if self.in_flight.insert(id) {
            self.error = None;
            Ok(())
        } else {
            Err(StoreError::MutationInFlight {
                entity,
                id: id.to_string(),
            })
        }
    }

    /// Release a claim once the remote call has resolved, success or not.
    pub(crate) fn release(&mut self, id: T::Id) {
        self.in_flight.remove(&id);
    }

    /// Append a freshly created record (already accepted by the backend).
    pub(crate) fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    /// Replace the record matching the item's own key, if cached.
    pub(crate) fn replace(&mut self, item: T) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.key() == item.key()) {
            *existing = item;
        }
    }

    /// Drop the record with this ID, if cached.
    pub(crate) fn remove(&mut self, id: T::Id) {
        self.items.retain(|item| item.key() != id);
    }

    /// Update a cached record in place.
    pub(crate) fn update_with(&mut self, id: T::Id, f: impl FnOnce(&mut T)) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.key() == id) {
            f(existing);
        }
    }

    pub(crate) fn record_error(&mut self, message: String) {
        self.error = Some(message);
    }
}
