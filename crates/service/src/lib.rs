//! Service layer for the marketplace.
//! - `storage` owns every table behind one lock.
//! - `repository` and `auth::repository` are the seams the services depend on.
//! - `user_service`, `catalog_service`, `order_service` and `auth` hold the
//!   business rules and are independent of the web framework.

pub mod auth;
pub mod catalog_service;
pub mod errors;
pub mod order_service;
pub mod repository;
pub mod storage;
pub mod user_service;

pub use catalog_service::CatalogService;
pub use order_service::OrderService;
pub use storage::memory_store::MemoryStore;
pub use user_service::UserService;
