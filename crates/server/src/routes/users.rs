use axum::{extract::State, Form, Json};
use models::User;
use serde::Deserialize;

use crate::{errors::ApiError, state::ServerState};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserForm {
    pub username: String,
    pub role: String,
}

#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body(content = crate::openapi::CreateUserRequest, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Created user"))
)]
pub async fn create(State(state): State<ServerState>, Form(form): Form<CreateUserForm>) -> Result<Json<User>, ApiError> {
    let user = state.users.create_user(&form.username, &form.role).await?;
    Ok(Json(user))
}
