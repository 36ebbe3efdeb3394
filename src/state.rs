//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::PostService;
use crate::config::Environment;
use crate::infrastructure::persistence::PgPostRepository;
use crate::infrastructure::store::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub post_service: Arc<PostService<PgPostRepository>>,
    pub store: DocumentStore,
    pub environment: Environment,
}

impl AppState {
    /// Wires the post repository and service on top of `store`.
    pub fn new(store: DocumentStore, environment: Environment) -> Self {
        let repository = Arc::new(PgPostRepository::new(&store));

        Self {
            post_service: Arc::new(PostService::new(repository)),
            store,
            environment,
        }
    }
}
