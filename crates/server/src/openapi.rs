use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct CreateUserRequest { pub username: String, pub role: String }

#[derive(ToSchema)]
pub struct CreateServiceRequest {
    pub name: String,
    pub description: String,
    pub provider_id: String,
    pub image_url: String,
}

#[derive(ToSchema)]
pub struct CreateOrderRequest { pub service_id: String, pub consumer_id: String }

#[derive(ToSchema)]
pub struct RegisterRequest { pub username: String, pub password: String, pub role: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub username: String, pub password: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::create,
        crate::routes::services::list,
        crate::routes::services::create,
        crate::routes::orders::create,
        crate::routes::orders::complete,
        crate::routes::orders::get,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::auth::me,
    ),
    components(
        schemas(
            CreateUserRequest,
            CreateServiceRequest,
            CreateOrderRequest,
            RegisterRequest,
            LoginRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "services"),
        (name = "orders"),
        (name = "auth")
    )
)]
pub struct ApiDoc;
