use axum::{routing::{get, post}, Router};
use std::sync::Arc;

use crate::handler::auth_handler::{auth_status_handler, login_handler, logout_handler};
use crate::service::auth_service::AuthServiceImpl;

pub fn auth_router(service: Arc<AuthServiceImpl>) -> Router {
    Router::new()
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/logout", post(logout_handler))
        .route("/api/auth/status", get(auth_status_handler))
        .with_state(service)
}
