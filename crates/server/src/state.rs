use std::sync::Arc;

use configs::AppConfig;
use service::auth::service::{AuthConfig, AuthService};
use service::{CatalogService, MemoryStore, OrderService, UserService};

/// Backing store used by the HTTP server.
pub type Store = MemoryStore;

/// Shared handler state. Every service points at the same store.
#[derive(Clone)]
pub struct ServerState {
    pub users: Arc<UserService<Store>>,
    pub catalog: Arc<CatalogService<Store>>,
    pub orders: Arc<OrderService<Store>>,
    pub auth: Arc<AuthService<Store>>,
}

impl ServerState {
    pub fn new(store: Arc<Store>, auth: AuthConfig) -> Self {
        Self {
            users: Arc::new(UserService::new(Arc::clone(&store))),
            catalog: Arc::new(CatalogService::new(Arc::clone(&store))),
            orders: Arc::new(OrderService::new(Arc::clone(&store))),
            auth: Arc::new(AuthService::new(store, auth)),
        }
    }

    /// Fresh, empty store wired with the configured auth policy.
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(MemoryStore::new(), AuthConfig { session_binding: cfg.auth.session_binding })
    }
}
