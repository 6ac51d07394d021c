use std::env;

use crate::config::ConfigError;

/// Credentials for the account seeded at startup. Kept out of the source
/// tree on purpose: both values must come from the environment.
#[derive(Debug, Clone)]
pub struct AdminUserConfig {
    pub username: String,
    pub password: String,
}

impl AdminUserConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(AdminUserConfig {
            username: env::var("ADMIN_USERNAME")
                .map_err(|_| ConfigError::EnvVarNotFound("ADMIN_USERNAME".to_string()))?,
            password: env::var("ADMIN_PASSWORD")
                .map_err(|_| ConfigError::EnvVarNotFound("ADMIN_PASSWORD".to_string()))?,
        })
    }
}
