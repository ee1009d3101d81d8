//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El storage es un trait object: los
//! handlers no saben si corren contra memoria o Postgres.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::services::jwt_service::JwtService;
use crate::storage::Storage;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub jwt: JwtService,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, config: EnvironmentConfig) -> Self {
        let jwt = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);
        Self {
            storage,
            jwt,
            config,
        }
    }
}
