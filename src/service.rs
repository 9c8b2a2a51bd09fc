//! # News Service
//!
//! [`NewsService`] is the public contract over the document store: list,
//! get, create, update, delete. Every operation is one read-modify-write
//! cycle against the whole document; nothing is cached between operations.
//!
//! ## Write Serialization
//!
//! Whole-document read-modify-write is a race under concurrent writers: two
//! simultaneous creates can allocate the same ID, and last-write-wins can
//! drop one writer's changes wholesale. The store therefore sits behind a
//! mutex, and each operation holds it for its full load → compute → save
//! cycle. Reads take the same lock and work on the snapshot it guards.
//!
//! ## Primary-Slot Rules
//!
//! - `create` only ever appends to `noticiasSecundarias`.
//! - `delete` refuses the primary record with
//!   [`NewsError::PrimaryDeleteForbidden`]; the only way to change the
//!   primary is `update`.

use crate::error::{NewsError, Result};
use crate::migrate;
use crate::model::{Location, NewsDocument, NewsRecord, RecordInput};
use crate::store::DocumentStore;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The CRUD contract over a [`DocumentStore`].
///
/// Generic over the storage backend: `FileStore` in production,
/// `InMemoryStore` in tests.
pub struct NewsService<S: DocumentStore> {
    store: Mutex<S>,
}

impl<S: DocumentStore> NewsService<S> {
    /// Wrap a store without touching it. Use [`NewsService::open`] at
    /// process startup so the legacy migration runs.
    pub fn new(store: S) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Wrap a store and run the startup migration against it. Migration
    /// failures are logged and swallowed: the service must come up and
    /// serve requests even over a document it could not migrate.
    pub fn open(mut store: S) -> Self {
        match migrate::run(&mut store) {
            Ok(0) => {}
            Ok(migrated) => {
                tracing::info!(migrated, "migrated legacy record bodies");
            }
            Err(error) => {
                tracing::warn!(%error, "startup migration failed, continuing");
            }
        }
        Self::new(store)
    }

    fn store(&self) -> MutexGuard<'_, S> {
        // A poisoned lock only means another thread panicked mid-operation;
        // the guarded store is still usable.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All records, primary first, then secondaries in stored order.
    pub fn list(&self) -> Result<Vec<NewsRecord>> {
        let doc = self.store().load()?;
        Ok(doc.iter().cloned().collect())
    }

    /// One consistent view of the whole document, read under the lock.
    /// Callers that need the listing and the primary slot together should
    /// use this instead of separate `list`/`get` calls, which would each
    /// take their own snapshot.
    pub fn snapshot(&self) -> Result<NewsDocument> {
        self.store().load()
    }

    pub fn get(&self, id: u64) -> Result<NewsRecord> {
        let doc = self.store().load()?;
        doc.find(id)
            .map(|(record, _)| record.clone())
            .ok_or(NewsError::NotFound(id))
    }

    /// Allocate the next ID and append the record to the secondary list.
    /// There is no way to create a primary record through the service.
    pub fn create(&self, input: RecordInput) -> Result<NewsRecord> {
        let mut store = self.store();
        let mut doc = store.load()?;

        let record = input.into_record(doc.next_id());
        doc.secundarias.push(record.clone());
        store.save(&doc)?;

        Ok(record)
    }

    /// Replace the record with `id` by one built from `input`. The ID is
    /// immutable: whatever the input carries, the stored record keeps `id`.
    pub fn update(&self, id: u64, input: RecordInput) -> Result<NewsRecord> {
        let mut store = self.store();
        let mut doc = store.load()?;

        let (_, location) = doc.find(id).ok_or(NewsError::NotFound(id))?;
        let record = input.into_record(id);
        doc.replace(location, record.clone());
        store.save(&doc)?;

        Ok(record)
    }

    /// Remove a secondary record. Deleting the primary record is forbidden
    /// regardless of document contents; replace it via `update` instead.
    pub fn delete(&self, id: u64) -> Result<()> {
        let mut store = self.store();
        let mut doc = store.load()?;

        let (_, location) = doc.find(id).ok_or(NewsError::NotFound(id))?;
        match location {
            Location::Principal => Err(NewsError::PrimaryDeleteForbidden),
            Location::Secundaria(index) => {
                doc.secundarias.remove(index);
                store.save(&doc)?;
                Ok(())
            }
        }
    }
}
