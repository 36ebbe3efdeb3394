//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - Lazily connected document store with collection-scoped CRUD
//! - [`persistence`] - Repository implementations on top of the store

pub mod persistence;
pub mod store;
