//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de
//! configuración. DATABASE_URL es opcional: sin ella el servidor
//! arranca con el storage en memoria.

use std::env;

use anyhow::{Context, Result};

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    /// None selecciona el adapter en memoria
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub cors_origins: Vec<String>,
    /// Password del usuario admin sembrado al primer arranque
    pub seed_admin_password: String,
}

impl EnvironmentConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            database_url: env::var("DATABASE_URL").ok(),
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .context("JWT_EXPIRATION_HOURS must be a valid number")?,
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            seed_admin_password: env::var("SEED_ADMIN_PASSWORD")
                .context("SEED_ADMIN_PASSWORD must be set")?,
        })
    }

    /// Configuración mínima para tests, sin tocar el entorno
    pub fn for_tests() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: None,
            jwt_secret: "test-secret".to_string(),
            jwt_expiration_hours: 24,
            cors_origins: Vec::new(),
            seed_admin_password: "admin-password".to_string(),
        }
    }
}
