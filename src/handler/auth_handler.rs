use axum::{extract::State, http::header, http::HeaderMap, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::dto::MessageResponse;
use crate::model::user::User;
use crate::service::auth_service::{AuthService, AuthServiceImpl};
use crate::util::error::{HandlerError, ServiceError};
use crate::util::session::session_token_from_headers;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Public view of an account: never carries the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub id: u32,
    pub username: String,
    pub is_admin: bool,
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        AuthenticatedUser {
            id: user.id,
            username: user.username.clone(),
            is_admin: user.role.is_admin(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: AuthenticatedUser,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthenticatedUser>,
}

// Login
pub async fn login_handler(
    State(service): State<Arc<AuthServiceImpl>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(&e));
    }
    let (session, user) = service
        .login(payload.username, payload.password)
        .await
        .map_err(|e| match e {
            ServiceError::NotFound(msg) | ServiceError::InvalidInput(msg) => {
                HandlerError::unauthorized(msg)
            }
            e => HandlerError::internal(format!("Login failed: {}", e)),
        })?;
    let cookie = service.sessions.config().cookie(&session.token);
    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            message: "Authentication successful".to_string(),
            user: AuthenticatedUser::from(&user),
        }),
    ))
}

// Logout always succeeds; a missing session just means nothing to drop.
pub async fn logout_handler(
    State(service): State<Arc<AuthServiceImpl>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let cookie_name = service.sessions.config().cookie_name.clone();
    if let Some(token) = session_token_from_headers(&headers, &cookie_name) {
        service.logout(&token).await;
    }
    let clear = service.sessions.config().clear_cookie();
    (
        [(header::SET_COOKIE, clear)],
        Json(MessageResponse::new("Logged out successfully")),
    )
}

// Session status probe used by the admin panel on load
pub async fn auth_status_handler(
    State(service): State<Arc<AuthServiceImpl>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let cookie_name = service.sessions.config().cookie_name.clone();
    let user = match session_token_from_headers(&headers, &cookie_name) {
        Some(token) => service.authenticate(&token).await,
        None => None,
    };
    match user {
        Some(user) => Json(StatusResponse {
            authenticated: true,
            user: Some(AuthenticatedUser::from(&user)),
        }),
        None => Json(StatusResponse {
            authenticated: false,
            user: None,
        }),
    }
}
