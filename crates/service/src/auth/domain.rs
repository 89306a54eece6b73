use models::{Role, Session, User};
use serde::{Deserialize, Serialize};

/// Registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterInput {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Login input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Result of a successful login.
///
/// `username` echoes the name that authenticated; `user` is whoever the
/// session was bound to, which differs under `SessionBinding::LastRegistered`.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub session: Session,
    pub username: String,
    pub user: User,
}
