use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::config::session_conf::SessionConfig;
use crate::model::user::UserRole;
use async_trait::async_trait;

/// Server-side session payload. The opaque token travels in the cookie;
/// everything else stays on the server.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: u32,
    pub role: UserRole,
    pub created_at: i64, // Unix timestamp
    pub expires_at: i64, // Unix timestamp
}

impl Session {
    pub fn new(token: String, user_id: u32, role: UserRole, ttl_secs: u64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Session {
            token,
            user_id,
            role,
            created_at: now,
            expires_at: now + ttl_secs as i64,
        }
    }

    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() > self.expires_at
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, user_id: u32, role: UserRole) -> Session;
    async fn get(&self, token: &str) -> Option<Session>;
    async fn remove(&self, token: &str) -> bool;
}

/// In-memory session store keyed by the cookie token.
pub struct MemorySessionStore {
    config: SessionConfig,
    sessions: RwLock<HashMap<String, Session>>,
}

impl MemorySessionStore {
    pub fn new(config: SessionConfig) -> Self {
        MemorySessionStore {
            config,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Generate a random token for the session cookie
    fn generate_token(&self) -> String {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.config.token_length)
            .map(char::from)
            .collect();
        debug!("Generated session token of length: {}", token.len());
        token
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    #[tracing::instrument(skip(self), fields(user_id = user_id))]
    async fn create(&self, user_id: u32, role: UserRole) -> Session {
        let token = self.generate_token();
        let session = Session::new(token.clone(), user_id, role, self.config.ttl_secs);
        self.sessions.write().await.insert(token, session.clone());
        info!(user_id = user_id, "Session created");
        session
    }

    async fn get(&self, token: &str) -> Option<Session> {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(session) if !session.is_expired() => return Some(session.clone()),
                Some(_) => {}
                None => return None,
            }
        }
        // Expired: remove it so the map does not accumulate dead sessions
        self.sessions.write().await.remove(token);
        debug!("Session expired and removed");
        None
    }

    #[tracing::instrument(skip(self, token))]
    async fn remove(&self, token: &str) -> bool {
        let removed = self.sessions.write().await.remove(token).is_some();
        if removed {
            info!("Session removed");
        }
        removed
    }
}

/// Pulls the session token for `cookie_name` out of the request's Cookie
/// header, if any.
pub fn session_token_from_headers(headers: &axum::http::HeaderMap, cookie_name: &str) -> Option<String> {
    let cookie_header = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    for pair in cookie_header.split(';') {
        if let Some((name, value)) = pair.trim().split_once('=') {
            if name == cookie_name && !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}
