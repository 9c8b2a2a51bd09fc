//! # Storage Layer
//!
//! The [`DocumentStore`] trait abstracts persistence of the news document.
//! The whole document is the unit of storage: every operation loads it in
//! full and mutating operations write it back in full. There is no
//! per-record I/O and no in-memory cache across operations.
//!
//! ## First-Run Semantics
//!
//! A missing document is not an error. `load` returns the default empty
//! document (`noticiaPrincipal` absent, `noticiasSecundarias` empty) so the
//! service works before anything was ever saved.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production implementation over one JSON file.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.

use crate::error::Result;
use crate::model::NewsDocument;

pub mod fs;
pub mod memory;

/// Abstract interface for news document storage.
/// Agnostic of the underlying mechanism (file, memory).
pub trait DocumentStore {
    /// Load the full document. Returns the default empty document when no
    /// document exists yet; fails with [`crate::error::NewsError::Corrupt`]
    /// when the stored content is not valid JSON.
    fn load(&self) -> Result<NewsDocument>;

    /// Persist the full document, overwriting prior content. Implementations
    /// MUST be atomic (e.g. write to tmp then rename) so a reader never
    /// observes a half-written document.
    fn save(&mut self, doc: &NewsDocument) -> Result<()>;
}
