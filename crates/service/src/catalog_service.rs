use std::sync::Arc;

use models::{NewService, Service};
use tracing::{info, instrument};

use crate::{errors::ServiceError, repository::MarketplaceRepository};

/// Service listings offered by providers.
pub struct CatalogService<R: MarketplaceRepository> {
    repo: Arc<R>,
}

impl<R: MarketplaceRepository> CatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Service>, ServiceError> {
        self.repo.list_services().await
    }

    /// The provider is stored as given; it need not exist.
    #[instrument(skip(self, input), fields(provider_id = input.provider_id))]
    pub async fn create(&self, input: NewService) -> Result<Service, ServiceError> {
        let service = self.repo.create_service(input).await?;
        info!(service_id = service.id, name = %service.name, "service_created");
        Ok(service)
    }
}
