use std::sync::Arc;

use models::{Id, Order};
use tracing::{info, instrument};

use crate::{errors::ServiceError, repository::MarketplaceRepository};

/// Orders placed by consumers against services.
pub struct OrderService<R: MarketplaceRepository> {
    repo: Arc<R>,
}

impl<R: MarketplaceRepository> OrderService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// New orders always start `pending`. Neither ID is checked.
    #[instrument(skip(self))]
    pub async fn place(&self, service_id: Id, consumer_id: Id) -> Result<Order, ServiceError> {
        let order = self.repo.create_order(service_id, consumer_id).await?;
        info!(order_id = order.id, "order_placed");
        Ok(order)
    }

    pub async fn get(&self, id: Id) -> Result<Order, ServiceError> {
        self.repo.get_order(id).await?.ok_or_else(|| ServiceError::not_found("order"))
    }

    /// Set the order to `completed`, whatever its current status.
    #[instrument(skip(self))]
    pub async fn complete(&self, id: Id) -> Result<Order, ServiceError> {
        let order = self
            .repo
            .complete_order(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("order"))?;
        info!(order_id = order.id, "order_completed");
        Ok(order)
    }
}
