//! Middleware de autenticación y autorización
//!
//! `auth_middleware` valida el bearer JWT del header Authorization,
//! carga el usuario desde storage y lo inyecta como extension del
//! request. `require_any_role` se apila después para el gating por
//! rol de cada grupo de rutas.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::models::auth::{UserInfo, UserRole};
use crate::services::jwt_service::JwtService;
use crate::state::AppState;
use crate::utils::errors::AppError;

fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid Authorization header".to_string()))
}

/// Middleware de autenticación: valida el token y resuelve el usuario
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())?;
    let claims = state.jwt.validate_token(token)?;
    let user_id = JwtService::user_id_from_claims(&claims)?;

    // El token puede ser válido para un usuario ya eliminado o con el
    // rol cambiado: la fuente de verdad es el storage
    let user = state
        .storage
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Unknown user".to_string()))?;

    request.extensions_mut().insert(user.to_user_info());
    Ok(next.run(request).await)
}

/// Gating por rol: se usa desde las rutas con una allow-list fija
pub async fn require_any_role(
    allowed: &'static [UserRole],
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<UserInfo>()
        .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))?;

    if !allowed.contains(&user.role) {
        return Err(AppError::Forbidden(format!(
            "Role not permitted: {}",
            user.role.as_str()
        )));
    }
    Ok(next.run(request).await)
}
