use std::sync::Arc;

use models::{Id, Role, User};
use tracing::{info, instrument};

use crate::{errors::ServiceError, repository::MarketplaceRepository};

/// Direct user management (no credentials involved).
pub struct UserService<R: MarketplaceRepository> {
    repo: Arc<R>,
}

impl<R: MarketplaceRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a user with the next ID. Username and role are not validated.
    #[instrument(skip(self))]
    pub async fn create_user(&self, username: &str, role: &str) -> Result<User, ServiceError> {
        let user = self.repo.create_user(username, Role::parse(role)).await?;
        info!(user_id = user.id, "user_created");
        Ok(user)
    }

    pub async fn get_user(&self, id: Id) -> Result<User, ServiceError> {
        self.repo.get_user(id).await?.ok_or_else(|| ServiceError::not_found("user"))
    }
}
