//! Auth module: domain, repository and service layers.
//!
//! Registration, login and session lookup. Passwords are compared in clear text.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;

pub use service::AuthService;
