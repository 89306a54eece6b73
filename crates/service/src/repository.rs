use async_trait::async_trait;
use models::{Id, NewService, Order, Role, Service, User};

use crate::errors::ServiceError;

/// Storage seam for users, services and orders.
///
/// Every method that assigns an ID must do so atomically with the insert.
#[async_trait]
pub trait MarketplaceRepository: Send + Sync {
    async fn create_user(&self, username: &str, role: Role) -> Result<User, ServiceError>;
    async fn get_user(&self, id: Id) -> Result<Option<User>, ServiceError>;

    /// Services in ascending ID order.
    async fn list_services(&self) -> Result<Vec<Service>, ServiceError>;
    async fn create_service(&self, input: NewService) -> Result<Service, ServiceError>;

    async fn create_order(&self, service_id: Id, consumer_id: Id) -> Result<Order, ServiceError>;
    async fn get_order(&self, id: Id) -> Result<Option<Order>, ServiceError>;
    /// Marks the order completed; `None` when no such order exists.
    async fn complete_order(&self, id: Id) -> Result<Option<Order>, ServiceError>;
}
