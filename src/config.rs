//! Service configuration
//!
//! Loaded once at startup from environment variables (with a `.env` file
//! picked up by `dotenvy` when present) and passed explicitly to the server
//! layer. Every key has a documented default so the service runs out of the
//! box in development.

use std::net::SocketAddr;

use serde::Deserialize;

use crate::error::ServiceError;

/// Environment-backed service configuration.
///
/// The `postgres_*` settings are not consumed by any current handler; they
/// are reserved for the database-backed KPI computation that will replace
/// the placeholder values.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Human-readable application name.
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Deployment environment tag (`development`, `staging`, `production`).
    #[serde(default = "default_app_env")]
    pub app_env: String,
    /// Public base URL the service is reachable at.
    #[serde(default = "default_app_base_url")]
    pub app_base_url: String,
    /// Socket address to listen on.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Origins allowed by CORS (`CORS_ORIGINS` as a comma-separated list).
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_postgres_server")]
    pub postgres_server: String,
    #[serde(default = "default_postgres_port")]
    pub postgres_port: String,
    #[serde(default = "default_postgres_user")]
    pub postgres_user: String,
    #[serde(default = "default_postgres_password")]
    pub postgres_password: String,
    #[serde(default = "default_postgres_db")]
    pub postgres_db: String,
}

fn default_app_name() -> String {
    "KPIs Service".to_string()
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_app_base_url() -> String {
    "http://localhost:8002".to_string()
}

fn default_bind_addr() -> String {
    "0.0.0.0:8002".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:3001".to_string(),
        "http://localhost:3002".to_string(),
        "http://localhost:5300".to_string(),
    ]
}

fn default_postgres_server() -> String {
    "localhost".to_string()
}

fn default_postgres_port() -> String {
    "5434".to_string()
}

fn default_postgres_user() -> String {
    "svc_kpis_user".to_string()
}

fn default_postgres_password() -> String {
    "svc_kpis_user".to_string()
}

fn default_postgres_db() -> String {
    "kpis-svc".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            app_env: default_app_env(),
            app_base_url: default_app_base_url(),
            bind_addr: default_bind_addr(),
            cors_origins: default_cors_origins(),
            postgres_server: default_postgres_server(),
            postgres_port: default_postgres_port(),
            postgres_user: default_postgres_user(),
            postgres_password: default_postgres_password(),
            postgres_db: default_postgres_db(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ServiceError> {
        Self::from_environment(config::Environment::default())
    }

    /// Load configuration from an explicit environment source.
    ///
    /// Tests inject a key/value map here instead of mutating process env.
    pub(crate) fn from_environment(env: config::Environment) -> Result<Self, ServiceError> {
        let loaded = config::Config::builder()
            .add_source(
                env.try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_origins"),
            )
            .build()?;

        Ok(loaded.try_deserialize()?)
    }

    /// Parse the configured listen address.
    pub fn listen_addr(&self) -> Result<SocketAddr, ServiceError> {
        self.bind_addr
            .parse()
            .map_err(|source| ServiceError::InvalidBindAddr {
                addr: self.bind_addr.clone(),
                source,
            })
    }

    /// Connection string for the (future) KPI database.
    pub fn database_url(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_server,
            self.postgres_port,
            self.postgres_db
        )
    }
}
