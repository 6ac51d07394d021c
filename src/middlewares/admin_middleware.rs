use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::config::SessionConfig;
use crate::service::auth_service::{AuthService, AuthServiceImpl};
use crate::util::session::session_token_from_headers;

pub struct AdminAuthState {
    pub auth_service: Arc<AuthServiceImpl>,
    pub session_config: SessionConfig,
}

/// Gate for the admin routes: a missing or dead session is 401, a live
/// session without the admin role is 403.
pub async fn admin_auth(
    State(state): State<Arc<AdminAuthState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = session_token_from_headers(req.headers(), &state.session_config.cookie_name)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let user = match state.auth_service.authenticate(&token).await {
        Some(user) => user,
        None => return Err(StatusCode::UNAUTHORIZED),
    };

    if !user.role.is_admin() {
        return Err(StatusCode::FORBIDDEN);
    }

    // Make the authenticated user available to downstream handlers
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
