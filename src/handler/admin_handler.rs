use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::contact_dto::UpdateContactStatusRequest;
use crate::dto::content_dto::{
    CreateFeatureRequest, CreateServiceRequest, CreateTestimonialRequest, UpdateCompanyDetailsRequest,
    UpdateFeatureRequest, UpdateServiceRequest, UpdateTestimonialRequest,
};
use crate::dto::MessageResponse;
use crate::model::contact_request::ContactStatus;
use crate::service::content_service::{ContentService, ContentServiceImpl};
use crate::util::error::HandlerError;

// Admin content management. The admin_auth middleware has already vetted
// the session by the time any of these run.

// --- Contact requests ---

pub async fn list_contact_requests_handler(
    State(service): State<Arc<ContentServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let requests = service
        .list_contact_requests()
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to fetch contact requests: {}", e)))?;
    Ok(Json(requests))
}

pub async fn update_contact_status_handler(
    State(service): State<Arc<ContentServiceImpl>>,
    Path(id): Path<u32>,
    Json(payload): Json<UpdateContactStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    // Checked against the known states independently of the schema layer
    let status = ContactStatus::parse(&payload.status)
        .ok_or_else(|| HandlerError::bad_request("Invalid status"))?;
    let updated = service
        .update_contact_request_status(id, status)
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to update contact request status: {}", e)))?
        .ok_or_else(|| HandlerError::not_found("Contact request not found"))?;
    Ok(Json(updated))
}

pub async fn delete_contact_request_handler(
    State(service): State<Arc<ContentServiceImpl>>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, HandlerError> {
    let deleted = service
        .delete_contact_request(id)
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to delete contact request: {}", e)))?;
    if !deleted {
        return Err(HandlerError::not_found("Contact request not found"));
    }
    Ok(Json(MessageResponse::new("Contact request deleted successfully")))
}

// --- Services ---

pub async fn create_service_handler(
    State(service): State<Arc<ContentServiceImpl>>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(&e));
    }
    let created = service
        .create_service(payload.into())
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to create service: {}", e)))?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_service_handler(
    State(service): State<Arc<ContentServiceImpl>>,
    Path(id): Path<u32>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(&e));
    }
    let updated = service
        .update_service(id, payload.into())
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to update service: {}", e)))?
        .ok_or_else(|| HandlerError::not_found("Service not found"))?;
    Ok(Json(updated))
}

pub async fn delete_service_handler(
    State(service): State<Arc<ContentServiceImpl>>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, HandlerError> {
    let deleted = service
        .delete_service(id)
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to delete service: {}", e)))?;
    if !deleted {
        return Err(HandlerError::not_found("Service not found"));
    }
    Ok(Json(MessageResponse::new("Service deleted successfully")))
}

// --- Features ---

pub async fn create_feature_handler(
    State(service): State<Arc<ContentServiceImpl>>,
    Json(payload): Json<CreateFeatureRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(&e));
    }
    let created = service
        .create_feature(payload.into())
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to create feature: {}", e)))?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_feature_handler(
    State(service): State<Arc<ContentServiceImpl>>,
    Path(id): Path<u32>,
    Json(payload): Json<UpdateFeatureRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(&e));
    }
    let updated = service
        .update_feature(id, payload.into())
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to update feature: {}", e)))?
        .ok_or_else(|| HandlerError::not_found("Feature not found"))?;
    Ok(Json(updated))
}

pub async fn delete_feature_handler(
    State(service): State<Arc<ContentServiceImpl>>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, HandlerError> {
    let deleted = service
        .delete_feature(id)
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to delete feature: {}", e)))?;
    if !deleted {
        return Err(HandlerError::not_found("Feature not found"));
    }
    Ok(Json(MessageResponse::new("Feature deleted successfully")))
}

// --- Testimonials ---

pub async fn create_testimonial_handler(
    State(service): State<Arc<ContentServiceImpl>>,
    Json(payload): Json<CreateTestimonialRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(&e));
    }
    let created = service
        .create_testimonial(payload.into())
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to create testimonial: {}", e)))?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_testimonial_handler(
    State(service): State<Arc<ContentServiceImpl>>,
    Path(id): Path<u32>,
    Json(payload): Json<UpdateTestimonialRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(&e));
    }
    let updated = service
        .update_testimonial(id, payload.into())
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to update testimonial: {}", e)))?
        .ok_or_else(|| HandlerError::not_found("Testimonial not found"))?;
    Ok(Json(updated))
}

pub async fn delete_testimonial_handler(
    State(service): State<Arc<ContentServiceImpl>>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, HandlerError> {
    let deleted = service
        .delete_testimonial(id)
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to delete testimonial: {}", e)))?;
    if !deleted {
        return Err(HandlerError::not_found("Testimonial not found"));
    }
    Ok(Json(MessageResponse::new("Testimonial deleted successfully")))
}

// --- Company details ---

pub async fn update_company_details_handler(
    State(service): State<Arc<ContentServiceImpl>>,
    Json(payload): Json<UpdateCompanyDetailsRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(&e));
    }
    let details = service
        .update_company_details(payload.into())
        .await
        .map_err(|e| HandlerError::internal(format!("Failed to update company details: {}", e)))?;
    Ok(Json(details))
}
