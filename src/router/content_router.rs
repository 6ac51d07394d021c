use axum::{routing::{get, post}, Router};
use std::sync::Arc;

use crate::handler::content_handler::{
    get_company_details_handler,
    list_features_handler,
    list_services_handler,
    list_testimonials_handler,
    submit_contact_handler,
};
use crate::service::content_service::ContentServiceImpl;

/// Public site content plus the contact form. No auth gate here.
pub fn content_router(service: Arc<ContentServiceImpl>) -> Router {
    Router::new()
        .route("/api/services", get(list_services_handler))
        .route("/api/features", get(list_features_handler))
        .route("/api/testimonials", get(list_testimonials_handler))
        .route("/api/company-details", get(get_company_details_handler))
        .route("/api/contact", post(submit_contact_handler))
        .with_state(service)
}
