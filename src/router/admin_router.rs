use axum::{middleware, routing::{delete, get, patch, post, put}, Router};
use std::sync::Arc;

use crate::handler::admin_handler::{
    create_feature_handler,
    create_service_handler,
    create_testimonial_handler,
    delete_contact_request_handler,
    delete_feature_handler,
    delete_service_handler,
    delete_testimonial_handler,
    list_contact_requests_handler,
    update_company_details_handler,
    update_contact_status_handler,
    update_feature_handler,
    update_service_handler,
    update_testimonial_handler,
};
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};
use crate::service::content_service::ContentServiceImpl;

pub fn admin_router(service: Arc<ContentServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    Router::new()
        .route("/api/admin/contact-requests", get(list_contact_requests_handler))
        .route("/api/admin/contact-requests/{id}/status", patch(update_contact_status_handler))
        .route("/api/admin/contact-requests/{id}", delete(delete_contact_request_handler))
        .route("/api/admin/services", post(create_service_handler))
        .route("/api/admin/services/{id}", put(update_service_handler).delete(delete_service_handler))
        .route("/api/admin/features", post(create_feature_handler))
        .route("/api/admin/features/{id}", put(update_feature_handler).delete(delete_feature_handler))
        .route("/api/admin/testimonials", post(create_testimonial_handler))
        .route("/api/admin/testimonials/{id}", put(update_testimonial_handler).delete(delete_testimonial_handler))
        .route("/api/admin/company-details", put(update_company_details_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state, admin_auth))
        .with_state(service)
}
