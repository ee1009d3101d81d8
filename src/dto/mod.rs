//! DTOs de la API
//!
//! Requests validados en el boundary (validator) y responses sin
//! campos sensibles.

pub mod user_dto;
pub mod property_dto;
pub mod booking_dto;
pub mod operations_dto;
pub mod inquiry_dto;
pub mod ledger_dto;

use serde::Serialize;

/// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
