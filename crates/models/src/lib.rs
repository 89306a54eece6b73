//! Marketplace records as stored in memory and serialized on the wire.
//!
//! Field names on the wire follow the established client contract
//! (`ID`, `Username`, `ProviderID`, ...), not Rust naming.

pub mod credential;
pub mod order;
pub mod service;
pub mod session;
pub mod user;

pub use credential::Credential;
pub use order::{Order, OrderStatus};
pub use service::{NewService, Service};
pub use session::Session;
pub use user::{Role, User};

/// Primary key type shared by users, services and orders.
pub type Id = i64;
