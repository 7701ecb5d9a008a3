//! The REST surface driven through the router: auth layer, status codes and
//! the `{"error": ...}` bodies the dashboard turns into toasts.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use backend::routes::configure_routes;
use backend::shared::config::parse_config;
use backend::shared::data::db::initialize_database;
use backend::system::initialization;
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use contracts::domain::a004_vendor::aggregate::{Vendor, VendorDto};
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tower::util::ServiceExt;

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<String>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn post<T: Serialize>(app: &Router, uri: &str, token: Option<&str>, body: &T) -> (StatusCode, Vec<u8>) {
    let json = serde_json::to_string(body).unwrap();
    send(app, request(Method::POST, uri, token, Some(json))).await
}

fn parse<T: DeserializeOwned>(bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).unwrap()
}

fn error_message(bytes: &[u8]) -> String {
    let value: serde_json::Value = parse(bytes);
    value["error"].as_str().unwrap_or_default().to_string()
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = post(
        app,
        "/api/system/auth/login",
        None,
        &LoginRequest {
            username: username.into(),
            password: password.into(),
        },
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    parse::<LoginResponse>(&body).access_token
}

#[tokio::test]
async fn test_rest_api() {
    let dir = tempfile::tempdir().unwrap();
    initialize_database(&dir.path().join("tienda.db")).await.unwrap();
    initialization::apply_auth_migration().await.unwrap();
    initialization::ensure_default_users().await.unwrap();
    let config = parse_config("[database]\npath = \"unused.db\"\n").unwrap();
    initialization::seed_mock_data(&config).await.unwrap();

    let app = configure_routes();

    let (status, body) = send(&app, request(Method::GET, "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");

    // no token, bad token, bad password
    let (status, _) = send(&app, request(Method::GET, "/api/category", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&app, request(Method::GET, "/api/sale", Some("not-a-jwt"), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = post(
        &app,
        "/api/system/auth/login",
        None,
        &LoginRequest {
            username: "admin".into(),
            password: "otra".into(),
        },
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let admin = login(&app, "admin", "admin").await;
    let clerk = login(&app, "vendedor", "vendedor").await;

    let (status, body) = send(&app, request(Method::GET, "/api/system/auth/me", Some(&clerk), None)).await;
    assert_eq!(status, StatusCode::OK);
    let me: UserInfo = parse(&body);
    assert_eq!(me.username, "vendedor");
    assert!(!me.is_admin);

    // category with products: 409 and the guard message
    let (status, body) = send(&app, request(Method::GET, "/api/category", Some(&clerk), None)).await;
    assert_eq!(status, StatusCode::OK);
    let categories: Vec<Category> = parse(&body);
    let drinks = categories
        .iter()
        .find(|c| c.product_count > 0)
        .unwrap();
    let uri = format!("/api/category/{}", drinks.base.id.value());
    let (status, body) = send(&app, request(Method::DELETE, &uri, Some(&admin), None)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(error_message(&body).contains(&drinks.base.description));

    // empty form: 400 with the first failing rule
    let (status, body) = post(&app, "/api/category", Some(&admin), &CategoryDto::default()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).contains("obligatorio"));

    // unknown id
    let uri = format!("/api/category/{}", uuid::Uuid::new_v4());
    let (status, _) = send(&app, request(Method::DELETE, &uri, Some(&admin), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // vendor writes are admin only, reads are not
    let form = VendorDto {
        name: "Pedro Ruiz".into(),
        document_id: "80.123.456".into(),
        email: "pedro.ruiz@tienda.com".into(),
        ..Default::default()
    };
    let (status, body) = post(&app, "/api/vendor", Some(&clerk), &form).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(!error_message(&body).is_empty());

    let (status, body) = post(&app, "/api/vendor", Some(&admin), &form).await;
    assert_eq!(status, StatusCode::OK);
    let vendor: Vendor = parse(&body);
    assert_eq!(vendor.base.description, "Pedro Ruiz");
    assert_eq!(vendor.total_sales, 0.0);

    let (status, _) = send(&app, request(Method::GET, "/api/vendor", Some(&clerk), None)).await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/api/vendor/{}", vendor.base.id.value());
    let (status, _) = send(&app, request(Method::DELETE, &uri, Some(&clerk), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(&app, request(Method::DELETE, &uri, Some(&admin), None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // reused code
    let (status, body) = post(
        &app,
        "/api/category",
        Some(&admin),
        &CategoryDto {
            code: Some(drinks.base.code.clone()),
            name: "Duplicada".into(),
            ..Default::default()
        },
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(error_message(&body).contains(&drinks.base.code));
}
