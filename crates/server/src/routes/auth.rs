use axum::{extract::State, http::HeaderMap, Form, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use common::types::MessageBody;
use models::{Id, Role, User};
use serde::{Deserialize, Serialize};
use service::auth::domain::{LoginInput, RegisterInput};
use service::auth::errors::AuthError;

use crate::{errors::ApiError, state::ServerState};

pub const SESSION_COOKIE: &str = "session_id";
pub const SESSION_HEADER: &str = "x-session-id";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginOutput {
    pub message: &'static str,
    pub session_id: String,
    pub user_id: Id,
    pub username: String,
    pub user_role: Role,
}

#[utoipa::path(
    post, path = "/register", tag = "auth",
    request_body(content = crate::openapi::RegisterRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Registration successful"),
        (status = 400, description = "Username already exists")
    )
)]
pub async fn register(State(state): State<ServerState>, Form(form): Form<RegisterForm>) -> Result<Json<MessageBody>, ApiError> {
    let input = RegisterInput { username: form.username, password: form.password, role: Role::parse(&form.role) };
    state.auth.register(input).await?;
    Ok(Json(MessageBody::new("Registration successful")))
}

#[utoipa::path(
    post, path = "/login", tag = "auth",
    request_body(content = crate::openapi::LoginRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Json<LoginOutput>), ApiError> {
    let login = state.auth.login(LoginInput { username: form.username, password: form.password }).await?;

    let mut cookie = Cookie::new(SESSION_COOKIE, login.session.session_id.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    let jar = jar.add(cookie);

    let out = LoginOutput {
        message: "Login successful",
        session_id: login.session.session_id,
        user_id: login.user.id,
        username: login.username,
        user_role: login.user.role,
    };
    Ok((jar, Json(out)))
}

/// Session ID from the `X-Session-Id` header, falling back to the cookie.
fn session_id(headers: &HeaderMap, jar: &CookieJar) -> Option<String> {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| jar.get(SESSION_COOKIE).map(|c| c.value().to_string()))
}

#[utoipa::path(
    get, path = "/me", tag = "auth",
    responses(
        (status = 200, description = "User bound to the session"),
        (status = 401, description = "Invalid session")
    )
)]
pub async fn me(State(state): State<ServerState>, headers: HeaderMap, jar: CookieJar) -> Result<Json<User>, ApiError> {
    let Some(id) = session_id(&headers, &jar) else {
        return Err(AuthError::InvalidSession.into());
    };
    let user = state.auth.resolve_session(&id).await?;
    Ok(Json(user))
}
