use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument};

use crate::model::user::{NewUser, User, UserRole};
use crate::repository::user_repo::{MemoryUserRepository, UserRepository};
use crate::util::error::ServiceError;
use crate::util::password::{PasswordUtils, PasswordUtilsImpl};
use crate::util::session::{MemorySessionStore, Session, SessionStore};

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Creates an account with a hashed password.
    async fn register(&self, username: String, password: String, role: UserRole) -> Result<User, ServiceError>;
    /// Checks credentials and opens a session. The error message tells the
    /// caller which half failed, matching what the login form displays.
    async fn login(&self, username: String, password: String) -> Result<(Session, User), ServiceError>;
    /// Drops the session for this token; true if one existed.
    async fn logout(&self, token: &str) -> bool;
    /// Resolves a session token back to its user, if the session is still
    /// live and the user still exists.
    async fn authenticate(&self, token: &str) -> Option<User>;
}

pub struct AuthServiceImpl {
    pub user_repo: Arc<MemoryUserRepository>,
    pub sessions: Arc<MemorySessionStore>,
}

impl AuthServiceImpl {
    pub fn new(user_repo: Arc<MemoryUserRepository>, sessions: Arc<MemorySessionStore>) -> Self {
        Self { user_repo, sessions }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    #[instrument(skip(self, password), fields(username = %username, role = %role))]
    async fn register(&self, username: String, password: String, role: UserRole) -> Result<User, ServiceError> {
        info!("Registering new user");
        let password_hash = PasswordUtilsImpl::hash_password(&password)
            .map_err(|e| ServiceError::InvalidInput(format!("Password hash error: {}", e)))?;
        let inserted = self
            .user_repo
            .insert(NewUser {
                username,
                password_hash,
                role,
            })
            .await;
        match &inserted {
            Ok(user) => info!(user_id = user.id, "User registered"),
            Err(e) => error!("Failed to register user: {e}"),
        }
        Ok(inserted?)
    }

    #[instrument(skip(self, password), fields(username = %username))]
    async fn login(&self, username: String, password: String) -> Result<(Session, User), ServiceError> {
        info!("User login attempt");
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| {
                error!("User not found for login");
                ServiceError::NotFound("Incorrect username".to_string())
            })?;
        let valid = PasswordUtilsImpl::verify_password(&password, &user.password_hash)
            .map_err(|e| ServiceError::InternalError(format!("Password verify error: {}", e)))?;
        if !valid {
            error!("Invalid credentials for user: {}", username);
            return Err(ServiceError::InvalidInput("Incorrect password".to_string()));
        }
        let session = self.sessions.create(user.id, user.role).await;
        info!("User logged in successfully");
        Ok((session, user))
    }

    #[instrument(skip(self, token))]
    async fn logout(&self, token: &str) -> bool {
        self.sessions.remove(token).await
    }

    async fn authenticate(&self, token: &str) -> Option<User> {
        let session = self.sessions.get(token).await?;
        match self.user_repo.find_by_id(session.user_id).await {
            Ok(user) => user,
            Err(e) => {
                error!("Failed to fetch user for session: {e}");
                None
            }
        }
    }
}
