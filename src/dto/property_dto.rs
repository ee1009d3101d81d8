use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use validator::Validate;

use crate::models::property::{CleaningStatus, LinenStatus, RoomStatus};

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePropertyRequest {
    /// Código corto, ej. "P1"
    #[validate(length(min = 1, max = 16))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub daily_rate: Decimal,
    pub weekly_rate: Decimal,
    pub monthly_rate: Decimal,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePropertyRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub daily_rate: Option<Decimal>,
    pub weekly_rate: Option<Decimal>,
    pub monthly_rate: Option<Decimal>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoomRequest {
    /// Código corto, ej. "P1-R1"
    #[validate(length(min = 1, max = 32))]
    pub id: String,
    #[validate(length(min = 1, max = 16))]
    pub property_id: String,
    #[validate(length(min = 1, max = 16))]
    pub room_number: String,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoomRequest {
    pub status: Option<RoomStatus>,
    pub cleaning_status: Option<CleaningStatus>,
    pub linen_status: Option<LinenStatus>,
    pub notes: Option<String>,
}

/// Request de emisión de door code; duration no reconocida cae en el
/// tier mensual
#[derive(Debug, Deserialize)]
pub struct GenerateCodeRequest {
    pub duration: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateCodeResponse {
    pub door_code: String,
    pub code_expiry: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMasterCodeRequest {
    pub property_id: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub label: String,
    pub duration: String,
}
