use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::contact_dto::{ContactFormRequest, ContactSubmissionResponse};
use crate::service::content_service::{ContentService, ContentServiceImpl};
use crate::util::error::HandlerError;

// Public content endpoints: no auth, read-only apart from the contact form.

pub async fn list_services_handler(
    State(service): State<Arc<ContentServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let services = service
        .list_services()
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to fetch services: {}", e)))?;
    Ok(Json(services))
}

pub async fn list_features_handler(
    State(service): State<Arc<ContentServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let features = service
        .list_features()
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to fetch features: {}", e)))?;
    Ok(Json(features))
}

pub async fn list_testimonials_handler(
    State(service): State<Arc<ContentServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let testimonials = service
        .list_testimonials()
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to fetch testimonials: {}", e)))?;
    Ok(Json(testimonials))
}

// 404 is only reachable before the singleton has been seeded
pub async fn get_company_details_handler(
    State(service): State<Arc<ContentServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let details = service
        .get_company_details()
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to fetch company details: {}", e)))?
        .ok_or_else(|| HandlerError::not_found("Company details not found"))?;
    Ok(Json(details))
}

pub async fn submit_contact_handler(
    State(service): State<Arc<ContentServiceImpl>>,
    Json(payload): Json<ContactFormRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(&e));
    }
    let request = service
        .submit_contact_request(payload.into())
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to submit contact request: {}", e)))?;
    info!(request_id = request.id, "Contact request submitted");
    Ok((
        StatusCode::CREATED,
        Json(ContactSubmissionResponse {
            message: "Contact request submitted successfully".to_string(),
            id: request.id,
        }),
    ))
}
