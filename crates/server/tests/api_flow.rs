use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use configs::{AppConfig, SessionBinding};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::startup::build_app;

fn app() -> Router {
    build_app(&AppConfig::default())
}

fn legacy_binding_app() -> Router {
    let mut cfg = AppConfig::default();
    cfg.auth.session_binding = SessionBinding::LastRegistered;
    build_app(&cfg)
}

fn form(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn bare(method: &str, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).expect("request")
}

async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = resp.into_body().collect().await?.to_bytes();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, body))
}

#[tokio::test]
async fn create_users_assigns_sequential_ids() -> anyhow::Result<()> {
    let app = app();
    for expected in 1..=3 {
        let (status, body) = send(&app, form("POST", "/users", &format!("username=u{expected}&role=service_provider"))).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ID": expected, "Username": format!("u{expected}"), "Role": "service_provider"}));
    }
    Ok(())
}

#[tokio::test]
async fn unknown_role_and_missing_fields_are_accepted() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, form("POST", "/users", "role=wizard")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ID": 1, "Username": "", "Role": "wizard"}));
    Ok(())
}

#[tokio::test]
async fn services_list_starts_empty_and_returns_created_set() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, bare("GET", "/services")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    for name in ["A", "B", "C"] {
        let (status, _) = send(
            &app,
            form("POST", "/services", &format!("name={name}&description=d&provider_id=1&image_url=http%3A%2F%2Fimg%2F{name}")),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = send(&app, bare("GET", "/services")).await?;
    let mut names: Vec<String> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|s| s["Name"].as_str().unwrap_or_default().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(body[0]["ImageURL"], "http://img/A");
    Ok(())
}

#[tokio::test]
async fn non_numeric_provider_id_becomes_zero() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, form("POST", "/services", "name=x&provider_id=abc")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ProviderID"], 0);
    assert_eq!(body["Description"], "");
    Ok(())
}

#[tokio::test]
async fn order_lifecycle() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, form("POST", "/orders", "service_id=4&consumer_id=oops")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ID": 1, "ServiceID": 4, "ConsumerID": 0, "Status": "pending"}));

    let (status, body) = send(&app, bare("PUT", "/orders/1")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Status"], "completed");

    let (status, body) = send(&app, bare("GET", "/orders/1")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Status"], "completed");

    // completing twice is an overwrite, not an error
    let (status, body) = send(&app, bare("PUT", "/orders/1")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Status"], "completed");
    Ok(())
}

#[tokio::test]
async fn updating_missing_order_is_not_found() -> anyhow::Result<()> {
    let app = app();
    for uri in ["/orders/1", "/orders/abc", "/orders/-3"] {
        let (status, body) = send(&app, bare("PUT", uri)).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({"message": "Order not found"}));
    }
    let (status, _) = send(&app, bare("GET", "/orders/9")).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn register_twice_is_bad_request() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, form("POST", "/register", "username=alice&password=pw&role=service_consumer")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Registration successful"}));

    let (status, body) = send(&app, form("POST", "/register", "username=alice&password=changed&role=service_provider")).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Username already exists"}));

    // original password still works, the attempted one does not
    let (status, _) = send(&app, form("POST", "/login", "username=alice&password=pw")).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, form("POST", "/login", "username=alice&password=changed")).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn alice_scenario() -> anyhow::Result<()> {
    let app = app();
    let (status, _) = send(&app, form("POST", "/register", "username=alice&password=pw&role=service_consumer")).await?;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, form("POST", "/login", "username=alice&password=wrong")).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"message": "Invalid credentials"}));

    let (status, body) = send(&app, form("POST", "/login", "username=nobody&password=pw")).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"message": "Invalid credentials"}));

    let (status, body) = send(&app, form("POST", "/login", "username=alice&password=pw")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Login successful",
            "session_id": "1",
            "user_id": 1,
            "username": "alice",
            "user_role": "service_consumer"
        })
    );
    Ok(())
}

#[tokio::test]
async fn login_binds_the_authenticated_user_by_default() -> anyhow::Result<()> {
    let app = app();
    send(&app, form("POST", "/register", "username=alice&password=pw&role=service_consumer")).await?;
    send(&app, form("POST", "/register", "username=bob&password=pw&role=service_provider")).await?;

    let (status, body) = send(&app, form("POST", "/login", "username=alice&password=pw")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], 1);
    assert_eq!(body["user_role"], "service_consumer");
    Ok(())
}

#[tokio::test]
async fn last_registered_binding_reports_the_newest_user() -> anyhow::Result<()> {
    let app = legacy_binding_app();
    send(&app, form("POST", "/register", "username=alice&password=pw&role=service_consumer")).await?;
    send(&app, form("POST", "/register", "username=bob&password=pw&role=service_provider")).await?;

    let (status, body) = send(&app, form("POST", "/login", "username=alice&password=pw")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["user_id"], 2);
    assert_eq!(body["user_role"], "service_provider");
    Ok(())
}

#[tokio::test]
async fn me_resolves_session_from_header_or_cookie() -> anyhow::Result<()> {
    let app = app();
    send(&app, form("POST", "/register", "username=alice&password=pw&role=service_consumer")).await?;

    let resp = app.clone().oneshot(form("POST", "/login", "username=alice&password=pw")).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let set_cookie = resp.headers().get(header::SET_COOKIE).expect("session cookie").to_str()?.to_string();
    assert!(set_cookie.starts_with("session_id=1"));

    let req = Request::builder().uri("/me").header("X-Session-Id", "1").body(Body::empty())?;
    let (status, body) = send(&app, req).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ID": 1, "Username": "alice", "Role": "service_consumer"}));

    let req = Request::builder().uri("/me").header(header::COOKIE, "session_id=1").body(Body::empty())?;
    let (status, _) = send(&app, req).await?;
    assert_eq!(status, StatusCode::OK);

    let req = Request::builder().uri("/me").header("X-Session-Id", "77").body(Body::empty())?;
    let (status, body) = send(&app, req).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"message": "Invalid session"}));

    let (status, _) = send(&app, bare("GET", "/me")).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn health_and_openapi_are_served() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, bare("GET", "/health")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = send(&app, bare("GET", "/api-docs/openapi.json")).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/orders/{id}").is_some());
    assert!(body["paths"].get("/login").is_some());
    Ok(())
}
