use axum::{extract::State, Form, Json};
use common::form::lenient_int;
use models::{NewService, Service};
use serde::Deserialize;
use tracing::info;

use crate::{errors::ApiError, state::ServerState};

/// `provider_id` stays a string here; unparsable values become 0.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateServiceForm {
    pub name: String,
    pub description: String,
    pub provider_id: String,
    pub image_url: String,
}

impl From<CreateServiceForm> for NewService {
    fn from(f: CreateServiceForm) -> Self {
        NewService {
            name: f.name,
            description: f.description,
            provider_id: lenient_int(&f.provider_id),
            image_url: f.image_url,
        }
    }
}

#[utoipa::path(get, path = "/services", tag = "services", responses((status = 200, description = "All services")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Service>>, ApiError> {
    let list = state.catalog.list().await?;
    info!(count = list.len(), "list services");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/services", tag = "services",
    request_body(content = crate::openapi::CreateServiceRequest, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Created service"))
)]
pub async fn create(State(state): State<ServerState>, Form(form): Form<CreateServiceForm>) -> Result<Json<Service>, ApiError> {
    let service = state.catalog.create(form.into()).await?;
    Ok(Json(service))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_provider_id_becomes_zero() {
        let input: NewService = CreateServiceForm { provider_id: "abc".into(), ..Default::default() }.into();
        assert_eq!(input.provider_id, 0);
        let input: NewService = CreateServiceForm { provider_id: "12".into(), ..Default::default() }.into();
        assert_eq!(input.provider_id, 12);
    }
}
