use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt; // for .oneshot()

use exwork_backend::config::SessionConfig;
use exwork_backend::middlewares::admin_middleware::AdminAuthState;
use exwork_backend::model::user::UserRole;
use exwork_backend::repository::content_repo::MemoryContentRepository;
use exwork_backend::repository::user_repo::MemoryUserRepository;
use exwork_backend::router::admin_router::admin_router;
use exwork_backend::router::auth_router::auth_router;
use exwork_backend::router::content_router::content_router;
use exwork_backend::service::auth_service::{AuthService, AuthServiceImpl};
use exwork_backend::service::content_service::ContentServiceImpl;
use exwork_backend::util::session::MemorySessionStore;

async fn test_app() -> Router {
    let session_config = SessionConfig::from_test_env();
    let content_repo = Arc::new(MemoryContentRepository::new());
    let user_repo = Arc::new(MemoryUserRepository::new());
    let sessions = Arc::new(MemorySessionStore::new(session_config.clone()));
    let content_service = Arc::new(ContentServiceImpl::new(content_repo));
    let auth_service = Arc::new(AuthServiceImpl::new(user_repo, sessions));
    auth_service
        .register("admin".to_string(), "Secret#123".to_string(), UserRole::Admin)
        .await
        .expect("seed admin");
    auth_service
        .register("viewer".to_string(), "Viewer#123".to_string(), UserRole::User)
        .await
        .expect("seed viewer");
    let admin_auth_state = Arc::new(AdminAuthState {
        auth_service: auth_service.clone(),
        session_config,
    });
    Router::new()
        .merge(content_router(content_service.clone()))
        .merge(auth_router(auth_service))
        .merge(admin_router(content_service, admin_auth_state))
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let req = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(json!({"username": username, "password": password}).to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

fn request(method: &str, uri: &str, cookie: Option<&str>, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_admin_routes_require_session() {
    let app = test_app().await;
    let resp = app
        .clone()
        .oneshot(request("GET", "/api/admin/contact-requests", None, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // A cookie that maps to no live session is also unauthorized
    let resp = app
        .oneshot(request(
            "GET",
            "/api/admin/contact-requests",
            Some("exwork_session=bogus-token"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_routes_reject_non_admin_session() {
    let app = test_app().await;
    let cookie = login(&app, "viewer", "Viewer#123").await;
    let resp = app
        .oneshot(request("GET", "/api/admin/contact-requests", Some(&cookie), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_service_lifecycle() {
    let app = test_app().await;
    let cookie = login(&app, "admin", "Secret#123").await;

    // Create
    let resp = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/admin/services",
            Some(&cookie),
            Some(json!({
                "title": "X",
                "description": "Y",
                "icon": "code",
                "features": ["a", "b"]
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = json_body(resp).await;
    let id = created["id"].as_u64().expect("id assigned");
    assert_eq!(created["title"], "X");

    // Listed publicly
    let resp = app
        .clone()
        .oneshot(request("GET", "/api/services", None, None))
        .await
        .unwrap();
    let listed = json_body(resp).await;
    assert!(listed
        .as_array()
        .unwrap()
        .iter()
        .any(|s| s["id"].as_u64() == Some(id)));

    // Partial update keeps other fields
    let resp = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("/api/admin/services/{}", id),
            Some(&cookie),
            Some(json!({"title": "X2"})),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = json_body(resp).await;
    assert_eq!(updated["title"], "X2");
    assert_eq!(updated["description"], "Y");
    assert_eq!(updated["features"], json!(["a", "b"]));

    // Delete
    let resp = app
        .clone()
        .oneshot(request(
            "DELETE",
            &format!("/api/admin/services/{}", id),
            Some(&cookie),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted = json_body(resp).await;
    assert_eq!(deleted["message"], "Service deleted successfully");

    // Gone from the public listing, and a second delete is a 404
    let resp = app
        .clone()
        .oneshot(request("GET", "/api/services", None, None))
        .await
        .unwrap();
    let listed = json_body(resp).await;
    assert!(!listed
        .as_array()
        .unwrap()
        .iter()
        .any(|s| s["id"].as_u64() == Some(id)));

    let resp = app
        .oneshot(request(
            "DELETE",
            &format!("/api/admin/services/{}", id),
            Some(&cookie),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_service_returns_not_found() {
    let app = test_app().await;
    let cookie = login(&app, "admin", "Secret#123").await;
    let resp = app
        .oneshot(request(
            "PUT",
            "/api/admin/services/999",
            Some(&cookie),
            Some(json!({"title": "Nope"})),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "Service not found");
}

#[tokio::test]
async fn test_create_testimonial_rejects_out_of_range_rating() {
    let app = test_app().await;
    let cookie = login(&app, "admin", "Secret#123").await;
    let resp = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/admin/testimonials",
            Some(&cookie),
            Some(json!({
                "name": "Sarah Johnson",
                "position": "CEO",
                "company": "TechInnovate",
                "content": "Great work",
                "rating": 6
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert!(body["errors"].get("rating").is_some());

    let resp = app
        .oneshot(request(
            "POST",
            "/api/admin/testimonials",
            Some(&cookie),
            Some(json!({
                "name": "Sarah Johnson",
                "position": "CEO",
                "company": "TechInnovate",
                "content": "Great work",
                "rating": 5
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_contact_request_status_flow() {
    let app = test_app().await;
    let cookie = login(&app, "admin", "Secret#123").await;

    // Submit through the public form
    let resp = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/contact",
            None,
            Some(json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "service": "Software Development",
                "message": "We need a new platform."
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let submitted = json_body(resp).await;
    let id = submitted["id"].as_u64().unwrap();

    // Unknown status value is rejected
    let resp = app
        .clone()
        .oneshot(request(
            "PATCH",
            &format!("/api/admin/contact-requests/{}/status", id),
            Some(&cookie),
            Some(json!({"status": "archived"})),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "Invalid status");

    // Known status value is accepted and persisted
    let resp = app
        .clone()
        .oneshot(request(
            "PATCH",
            &format!("/api/admin/contact-requests/{}/status", id),
            Some(&cookie),
            Some(json!({"status": "in-progress"})),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["status"], "in-progress");

    let resp = app
        .clone()
        .oneshot(request("GET", "/api/admin/contact-requests", Some(&cookie), None))
        .await
        .unwrap();
    let listed = json_body(resp).await;
    let stored = listed
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"].as_u64() == Some(id))
        .expect("request listed")
        .clone();
    assert_eq!(stored["status"], "in-progress");

    // Delete, then a second delete reports not found
    let resp = app
        .clone()
        .oneshot(request(
            "DELETE",
            &format!("/api/admin/contact-requests/{}", id),
            Some(&cookie),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(request(
            "DELETE",
            &format!("/api/admin/contact-requests/{}", id),
            Some(&cookie),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "Contact request not found");
}

#[tokio::test]
async fn test_update_status_of_missing_request() {
    let app = test_app().await;
    let cookie = login(&app, "admin", "Secret#123").await;
    let resp = app
        .oneshot(request(
            "PATCH",
            "/api/admin/contact-requests/404/status",
            Some(&cookie),
            Some(json!({"status": "completed"})),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_company_details_upsert_via_http() {
    let app = test_app().await;
    let cookie = login(&app, "admin", "Secret#123").await;

    let resp = app
        .clone()
        .oneshot(request(
            "PUT",
            "/api/admin/company-details",
            Some(&cookie),
            Some(json!({
                "address": "123 Business Avenue",
                "email": "contact@exwork.eu",
                "phone": "+1 (123) 456-7890",
                "socialLinks": ["https://linkedin.com"]
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let first = json_body(resp).await;
    let first_id = first["id"].as_u64().unwrap();

    let resp = app
        .clone()
        .oneshot(request(
            "PUT",
            "/api/admin/company-details",
            Some(&cookie),
            Some(json!({
                "address": "456 Commerce Street",
                "email": "contact@exwork.eu",
                "phone": "+1 (123) 456-7890",
                "socialLinks": []
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let second = json_body(resp).await;
    assert_eq!(second["id"].as_u64(), Some(first_id));
    assert_eq!(second["address"], "456 Commerce Street");

    // Visible on the public route
    let resp = app
        .oneshot(request("GET", "/api/company-details", None, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let details = json_body(resp).await;
    assert_eq!(details["address"], "456 Commerce Street");
}

#[tokio::test]
async fn test_feature_crud_via_http() {
    let app = test_app().await;
    let cookie = login(&app, "admin", "Secret#123").await;

    let resp = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/admin/features",
            Some(&cookie),
            Some(json!({
                "title": "Expertise",
                "description": "Years of experience",
                "icon": "code"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = json_body(resp).await;
    let id = created["id"].as_u64().unwrap();

    let resp = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("/api/admin/features/{}", id),
            Some(&cookie),
            Some(json!({"icon": "users"})),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = json_body(resp).await;
    assert_eq!(updated["icon"], "users");
    assert_eq!(updated["title"], "Expertise");

    let resp = app
        .oneshot(request(
            "DELETE",
            &format!("/api/admin/features/{}", id),
            Some(&cookie),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
