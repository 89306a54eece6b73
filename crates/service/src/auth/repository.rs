use async_trait::async_trait;
use models::{Credential, Id, Role, Session, User};

use super::errors::AuthError;

/// Repository abstraction for credentials, sessions and the users they map to.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Store the credential and create its user in one step.
    /// Fails with `AuthError::Conflict` if the username already has a credential.
    async fn register(&self, username: &str, password: &str, role: Role) -> Result<User, AuthError>;
    async fn find_credential(&self, username: &str) -> Result<Option<Credential>, AuthError>;

    async fn find_user(&self, id: Id) -> Result<Option<User>, AuthError>;
    /// The user holding the highest ID issued so far.
    async fn last_registered_user(&self) -> Result<Option<User>, AuthError>;

    /// Allocate the next session ID and bind it to `user_id`.
    async fn create_session(&self, user_id: Id) -> Result<Session, AuthError>;
    async fn find_session(&self, session_id: &str) -> Result<Option<Session>, AuthError>;
}
