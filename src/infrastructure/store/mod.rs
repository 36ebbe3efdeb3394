//! Document store: a lazily connected pool plus collection-scoped CRUD.
//!
//! Documents are schema-less JSON objects stored in a single `documents`
//! table, grouped by collection name and keyed by UUID.

mod collection;
mod document_store;

pub use collection::{Collection, Document, UpdateResult};
pub use document_store::{DocumentStore, StoreOptions};
