//! File-backed news store: one JSON document holding a single primary
//! record and an ordered list of secondary records, with a CRUD service
//! on top. See [`service::NewsService`] for the public contract and
//! [`store::DocumentStore`] for the persistence seam.

pub mod error;
pub mod migrate;
pub mod model;
pub mod service;
pub mod store;

pub use error::{NewsError, Result};
pub use model::{Content, ContentBlock, Location, NewsDocument, NewsRecord, RecordInput};
pub use service::NewsService;
