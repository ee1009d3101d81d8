use std::sync::Arc;

use crate::models::auth::{LoginRequest, LoginResponse, UserInfo};
use crate::services::jwt_service::JwtService;
use crate::storage::Storage;
use crate::utils::errors::AppError;

pub struct AuthController {
    storage: Arc<dyn Storage>,
    jwt: JwtService,
}

impl AuthController {
    pub fn new(storage: Arc<dyn Storage>, jwt: JwtService) -> Self {
        Self { storage, jwt }
    }

    /// Login con username/password; devuelve un JWT firmado
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let user = self
            .storage
            .get_user_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        if !valid {
            tracing::warn!("Login fallido para usuario: {}", request.username);
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let user_info = user.to_user_info();
        let (token, expires_at) = self.jwt.generate_token(&user_info)?;

        tracing::info!("Login exitoso: {} ({})", user_info.username, user_info.role.as_str());

        Ok(LoginResponse {
            success: true,
            token: Some(token),
            user: Some(user_info),
            message: None,
            expires_at: Some(expires_at),
        })
    }

    /// El middleware ya validó el token y cargó al usuario;
    /// verify solo refleja la identidad de vuelta
    pub fn verify(&self, user: UserInfo) -> LoginResponse {
        LoginResponse {
            success: true,
            token: None,
            user: Some(user),
            message: None,
            expires_at: None,
        }
    }
}
