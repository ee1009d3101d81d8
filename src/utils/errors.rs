//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Hash error: {0}")]
    Hash(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Database Error".to_string(),
                        message: "An error occurred while accessing the database".to_string(),
                        details: None,
                        code: Some("DB_ERROR".to_string()),
                    },
                )
            }

            AppError::Validation(e) => {
                tracing::warn!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::ValidationError(msg) => {
                tracing::warn!("Validation error: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: msg,
                        details: None,
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized access: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse {
                        error: "Unauthorized".to_string(),
                        message: msg,
                        details: None,
                        code: Some("UNAUTHORIZED".to_string()),
                    },
                )
            }

            AppError::Forbidden(msg) => {
                tracing::warn!("Forbidden access: {}", msg);
                (
                    StatusCode::FORBIDDEN,
                    ErrorResponse {
                        error: "Forbidden".to_string(),
                        message: msg,
                        details: None,
                        code: Some("FORBIDDEN".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                tracing::info!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: msg,
                        details: None,
                        code: Some("CONFLICT".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }

            AppError::Jwt(msg) => {
                tracing::warn!("JWT error: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse {
                        error: "JWT Error".to_string(),
                        message: msg,
                        details: None,
                        code: Some("JWT_ERROR".to_string()),
                    },
                )
            }

            AppError::Hash(msg) => {
                tracing::error!("Hash error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Hash Error".to_string(),
                        message: "An error occurred while processing credentials".to_string(),
                        details: None,
                        code: Some("HASH_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("Room not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_forbidden_maps_to_403() {
        let response = AppError::Forbidden("Role not permitted".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_jwt_error_maps_to_401() {
        let response = AppError::Jwt("Token expired".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
