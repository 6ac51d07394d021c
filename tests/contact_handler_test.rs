use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt; // for .oneshot()

use exwork_backend::repository::content_repo::MemoryContentRepository;
use exwork_backend::router::content_router::content_router;
use exwork_backend::service::content_service::{ContentService, ContentServiceImpl};
use exwork_backend::model::company_details::NewCompanyDetails;
use exwork_backend::model::service::NewService;

fn test_app() -> (Router, Arc<ContentServiceImpl>) {
    let content_repo = Arc::new(MemoryContentRepository::new());
    let content_service = Arc::new(ContentServiceImpl::new(content_repo));
    let app = Router::new().merge(content_router(content_service.clone()));
    (app, content_service)
}

fn contact_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_contact_submission_accepted() {
    let (app, _) = test_app();
    // Message exactly at the 10-character minimum
    let resp = app
        .oneshot(contact_request(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "service": "Software Development",
            "message": "1234567890"
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "Contact request submitted successfully");
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_contact_submission_message_too_short() {
    let (app, _) = test_app();
    // One character below the minimum
    let resp = app
        .oneshot(contact_request(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "service": "Software Development",
            "message": "123456789"
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "Validation error");
    assert!(body["errors"].get("message").is_some());
}

#[tokio::test]
async fn test_contact_submission_invalid_email() {
    let (app, _) = test_app();
    let resp = app
        .oneshot(contact_request(json!({
            "name": "Jane Doe",
            "email": "not-an-email",
            "service": "Software Development",
            "message": "A long enough message"
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body["errors"].get("email").is_some());
}

#[tokio::test]
async fn test_public_listings() {
    let (app, content_service) = test_app();
    content_service
        .create_service(NewService {
            title: "Cybersecurity".to_string(),
            description: "Protect your business".to_string(),
            icon: "shield".to_string(),
            features: vec!["Security Assessments".to_string()],
        })
        .await
        .expect("seed service");

    let resp = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/services")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let services = body.as_array().expect("array body");
    assert_eq!(services.len(), 1);
    assert_eq!(services[0]["title"], "Cybersecurity");
    assert!(services[0].get("createdAt").is_some());
}

#[tokio::test]
async fn test_company_details_not_found_before_seed() {
    let (app, content_service) = test_app();

    let req = Request::builder()
        .method("GET")
        .uri("/api/company-details")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "Company details not found");

    content_service
        .update_company_details(NewCompanyDetails {
            address: "123 Business Avenue".to_string(),
            email: "contact@exwork.eu".to_string(),
            phone: "+1 (123) 456-7890".to_string(),
            social_links: vec![],
        })
        .await
        .expect("seed details");

    let req = Request::builder()
        .method("GET")
        .uri("/api/company-details")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["email"], "contact@exwork.eu");
    assert!(body.get("socialLinks").is_some());
}
