//! Lock-guarded collection view
//!
//! Every mutation of a view (rebuild, expand/collapse, focus change) runs
//! inside one lock acquisition, so the sorter never sees a half-updated
//! projection.

use std::sync::{Mutex, MutexGuard};

use super::view::CollectionView;

/// A [`CollectionView`] behind a coarse mutex
#[derive(Debug)]
pub struct SharedCollectionView {
    inner: Mutex<CollectionView>,
}

impl SharedCollectionView {
    pub fn new(view: CollectionView) -> Self {
        Self {
            inner: Mutex::new(view),
        }
    }

    /// Run `f` with exclusive access to the view
    pub fn with<R>(&self, f: impl FnOnce(&mut CollectionView) -> R) -> R {
        f(&mut self.lock())
    }

    /// Acquire the view lock.
    ///
    /// A panic inside a previous critical section does not leave the
    /// projection half-sorted (sorting builds new lists), so a poisoned
    /// lock is recovered.
    pub fn lock(&self) -> MutexGuard<'_, CollectionView> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn into_inner(self) -> CollectionView {
        self.inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
