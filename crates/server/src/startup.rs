use std::net::SocketAddr;

use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use configs::{AppConfig, CorsConfig};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;

/// CORS layer from config. `*` in `allow_origins` allows every origin.
pub fn build_cors(cfg: &CorsConfig) -> CorsLayer {
    let headers: Vec<HeaderName> = cfg
        .allow_headers
        .iter()
        .filter_map(|h| match HeaderName::from_bytes(h.trim().as_bytes()) {
            Ok(name) => Some(name),
            Err(e) => {
                warn!(header = %h, error = %e, "ignoring invalid CORS header");
                None
            }
        })
        .collect();

    let origin = if cfg.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = cfg
            .allow_origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o.trim()).ok())
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_headers(headers)
        .allow_methods([Method::GET, Method::POST, Method::HEAD, Method::PUT, Method::DELETE, Method::PATCH])
}

/// Router wired to a fresh, empty store.
pub fn build_app(cfg: &AppConfig) -> Router {
    let state = ServerState::from_config(cfg);
    routes::build_router(state, build_cors(&cfg.cors))
}

/// Public entry: build the app and serve until the listener fails.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg);

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    info!(%addr, session_binding = ?cfg.auth.session_binding, "starting marketplace server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn preflight_allows_configured_headers() -> anyhow::Result<()> {
        let app = build_app(&AppConfig::default());
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/services")
            .header(header::ORIGIN, "http://shop.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())?;
        let resp = app.oneshot(req).await?;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        let allowed = resp.headers().get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap().to_str()?.to_lowercase();
        assert!(allowed.contains("content-type"));
        assert!(allowed.contains("accept"));
        Ok(())
    }

    #[tokio::test]
    async fn explicit_origin_list_is_respected() -> anyhow::Result<()> {
        let mut cfg = AppConfig::default();
        cfg.cors.allow_origins = vec!["http://shop.example".into()];
        let app = build_app(&cfg);
        let req = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "http://shop.example")
            .body(Body::empty())?;
        let resp = app.oneshot(req).await?;
        assert_eq!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "http://shop.example");
        Ok(())
    }
}
