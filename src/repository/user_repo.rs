use crate::model::user::{NewUser, User};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::Collection;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> RepositoryResult<User>;
    async fn find_by_id(&self, id: u32) -> RepositoryResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
}

pub struct MemoryUserRepository {
    users: RwLock<Collection<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        MemoryUserRepository {
            users: RwLock::new(Collection::new()),
        }
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    #[tracing::instrument(skip(self, user), fields(username = %user.username))]
    async fn insert(&self, user: NewUser) -> RepositoryResult<User> {
        let mut users = self.users.write().await;
        // Usernames are unique across the collection
        if users.iter().any(|u| u.username == user.username) {
            return Err(RepositoryError::already_exists(format!(
                "User already exists: {}",
                user.username
            )));
        }
        let id = users.allocate_id();
        let user = User {
            id,
            username: user.username,
            password_hash: user.password_hash,
            role: user.role,
        };
        users.insert(id, user.clone());
        info!(user_id = id, "User created");
        Ok(user)
    }

    async fn find_by_id(&self, id: u32) -> RepositoryResult<Option<User>> {
        Ok(self.users.read().await.get(id))
    }

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        let users = self.users.read().await;
        let found = users.iter().find(|u| u.username == username).cloned();
        Ok(found)
    }
}
