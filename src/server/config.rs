use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Credentials of the administrator created on first start.
pub struct AdminSeed {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Allowed browser origin. Any origin is allowed when unset.
    pub cors_origin: Option<String>,

    pub admin_seed: Option<AdminSeed>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: bind_address_from_env()?,
            cors_origin: optional_var("CORS_ORIGIN"),
            admin_seed: admin_seed_from_env(),
        })
    }
}

fn bind_address_from_env() -> Result<SocketAddr, ConfigError> {
    let value = optional_var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

    value.parse().map_err(|err: std::net::AddrParseError| ConfigError::InvalidEnvVar {
        name: "BIND_ADDRESS".to_string(),
        reason: err.to_string(),
    })
}

/// An admin is only seeded when both email and password are configured.
fn admin_seed_from_env() -> Option<AdminSeed> {
    let email = optional_var("ADMIN_EMAIL")?;
    let password = optional_var("ADMIN_PASSWORD")?;

    Some(AdminSeed {
        name: optional_var("ADMIN_NAME").unwrap_or_else(|| "Administrator".to_string()),
        email,
        password,
    })
}

/// Reads a variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
