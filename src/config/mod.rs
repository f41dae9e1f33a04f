use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(&'static str),

    #[error("Invalid configuration: {0} {1}")]
    Invalid(&'static str, String),
}

/// Upper bound for `SESSION_TTL_HOURS` (ten years).
pub const MAX_SESSION_TTL_HOURS: u64 = 24 * 365 * 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    pub upload: UploadConfig,
    pub shop: ShopConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection.
    pub connection_timeout: u64,
    pub auto_migrate: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    pub session_ttl_hours: u64,
    pub cookie_name: String,
    pub cookie_secure: bool,
    /// Empty means any origin.
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub base_url: String,
    pub cloud_name: Option<String>,
    pub api_key: Option<String>,
    #[serde(skip_serializing)]
    pub api_secret: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Owner of the banks listed on `/v1/banks/admin`.
    pub admin_user_id: i64,
}

impl SecurityConfig {
    /// Saturates instead of wrapping; out-of-range values are refused by `from_lookup`.
    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl_hours
            .checked_mul(3600)
            .and_then(|secs| i64::try_from(secs).ok())
            .unwrap_or(i64::MAX)
    }
}

impl AppConfig {
    /// Build the configuration from the process environment (after `.env` has been loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        let config = match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_overrides(&lookup);

        if config.security.jwt_secret.is_empty() {
            return Err(ConfigError::Missing("SECRET"));
        }
        if config.database.url.is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }
        let ttl = config.security.session_ttl_hours;
        if ttl == 0 || ttl > MAX_SESSION_TTL_HOURS {
            return Err(ConfigError::Invalid(
                "SESSION_TTL_HOURS",
                format!("must be between 1 and {}, got {}", MAX_SESSION_TTL_HOURS, ttl),
            ));
        }

        Ok(config)
    }

    fn with_overrides<F>(mut self, lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(v) = lookup("HOST") {
            self.server.host = v;
        }
        if let Some(v) = lookup("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        // Database overrides
        if let Some(v) = lookup("DATABASE_URL") {
            self.database.url = v;
        }
        if let Some(v) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Some(v) = lookup("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }
        if let Some(v) = lookup("DATABASE_AUTO_MIGRATE") {
            self.database.auto_migrate = v.parse().unwrap_or(self.database.auto_migrate);
        }

        // Security overrides
        if let Some(v) = lookup("SECRET") {
            self.security.jwt_secret = v;
        }
        if let Some(v) = lookup("SESSION_TTL_HOURS") {
            self.security.session_ttl_hours = v.parse().unwrap_or(self.security.session_ttl_hours);
        }
        if let Some(v) = lookup("SESSION_COOKIE_SECURE") {
            self.security.cookie_secure = v.parse().unwrap_or(self.security.cookie_secure);
        }
        if let Some(v) = lookup("CORS_ORIGINS") {
            self.security.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Upload overrides
        if let Some(v) = lookup("CLOUDINARY_BASE_URL") {
            self.upload.base_url = v;
        }
        if let Some(v) = lookup("CLOUDINARY_CLOUD_NAME") {
            self.upload.cloud_name = Some(v);
        }
        if let Some(v) = lookup("APIKEY") {
            self.upload.api_key = Some(v);
        }
        if let Some(v) = lookup("APISECRET") {
            self.upload.api_secret = Some(v);
        }

        if let Some(v) = lookup("SHOP_ADMIN_USER_ID") {
            self.shop.admin_user_id = v.parse().unwrap_or(self.shop.admin_user_id);
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8888,
            },
            database: DatabaseConfig {
                url: String::new(),
                max_connections: 10,
                connection_timeout: 30,
                auto_migrate: true,
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                session_ttl_hours: 24 * 7, // 1 week
                cookie_name: "Authorization".to_string(),
                cookie_secure: false,
                cors_origins: Vec::new(),
            },
            upload: UploadConfig::default(),
            shop: ShopConfig::default(),
        }
    }

    pub fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            database: DatabaseConfig {
                url: String::new(),
                max_connections: 20,
                connection_timeout: 10,
                auto_migrate: true,
            },
            security: SecurityConfig {
                cookie_secure: true,
                ..Self::development().security
            },
            ..Self::development()
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            database: DatabaseConfig {
                url: String::new(),
                max_connections: 50,
                connection_timeout: 5,
                auto_migrate: false,
            },
            security: SecurityConfig {
                cookie_secure: true,
                ..Self::development().security
            },
            ..Self::development()
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.cloudinary.com".to_string(),
            cloud_name: Some("dqudegiey".to_string()),
            api_key: None,
            api_secret: None,
        }
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self { admin_user_id: 10 }
    }
}
