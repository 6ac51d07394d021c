use std::env;
use tracing::{error, warn};

use crate::config::ConfigError;

/// Configuration for the cookie session layer
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Name of the session cookie
    pub cookie_name: String,
    /// Token length in characters
    pub token_length: usize,
    /// Session lifetime in seconds
    pub ttl_secs: u64,
}

impl SessionConfig {
    /// Create SessionConfig from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let cookie_name = env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| {
            warn!("SESSION_COOKIE_NAME not set, defaulting to exwork_session");
            "exwork_session".to_string()
        });

        let token_length = env::var("SESSION_TOKEN_LENGTH")
            .unwrap_or_else(|_| "48".to_string())
            .parse::<usize>()
            .map_err(|_| {
                error!("Invalid SESSION_TOKEN_LENGTH value");
                ConfigError::InvalidValue("Invalid SESSION_TOKEN_LENGTH value".to_string())
            })?;

        let ttl_secs = env::var("SESSION_TTL_SECS")
            .unwrap_or_else(|_| {
                warn!("SESSION_TTL_SECS not set, defaulting to 86400 seconds (24 hours)");
                "86400".to_string()
            })
            .parse::<u64>()
            .map_err(|_| {
                error!("Invalid SESSION_TTL_SECS value");
                ConfigError::InvalidValue("Invalid SESSION_TTL_SECS value".to_string())
            })?;

        let config = SessionConfig {
            cookie_name,
            token_length,
            ttl_secs,
        };

        config.validate()?;
        Ok(config)
    }

    /// Create SessionConfig for testing
    pub fn from_test_env() -> Self {
        SessionConfig {
            cookie_name: "exwork_session".to_string(),
            token_length: 24,
            ttl_secs: 3600,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cookie_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "Session cookie name cannot be empty".to_string(),
            ));
        }

        if self.token_length < 16 {
            return Err(ConfigError::ValidationError(
                "Session token length must be at least 16 characters".to_string(),
            ));
        }

        if self.ttl_secs == 0 {
            return Err(ConfigError::ValidationError(
                "Session TTL cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Set-Cookie value carrying a session token
    pub fn cookie(&self, token: &str) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.cookie_name, token, self.ttl_secs
        )
    }

    /// Set-Cookie value that clears the session cookie
    pub fn clear_cookie(&self) -> String {
        format!(
            "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
            self.cookie_name
        )
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            cookie_name: "exwork_session".to_string(),
            token_length: 48,
            ttl_secs: 86400, // 24 hours
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.cookie_name, "exwork_session");
        assert_eq!(config.token_length, 48);
        assert_eq!(config.ttl_secs, 86400);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_cookie_name() {
        let mut config = SessionConfig::from_test_env();
        config.cookie_name = "".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_short_token_length() {
        let mut config = SessionConfig::from_test_env();
        config.token_length = 8;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_ttl() {
        let mut config = SessionConfig::from_test_env();
        config.ttl_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cookie_format() {
        let config = SessionConfig::from_test_env();
        let cookie = config.cookie("abc123");
        assert_eq!(
            cookie,
            "exwork_session=abc123; Path=/; HttpOnly; SameSite=Lax; Max-Age=3600"
        );
    }

    #[test]
    fn test_clear_cookie_format() {
        let config = SessionConfig::from_test_env();
        assert!(config.clear_cookie().contains("Max-Age=0"));
    }
}
