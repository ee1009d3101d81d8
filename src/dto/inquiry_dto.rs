use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use validator::Validate;

use crate::models::booking::BookingPlan;
use crate::models::guest::ContactType;
use crate::models::inquiry::InquiryStatus;

/// Submission pública, sin autenticación
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitInquiryRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(length(min = 1, max = 128))]
    pub contact: String,
    pub contact_type: ContactType,
    pub property_id: Option<String>,
    pub plan: Option<BookingPlan>,
    pub message: Option<String>,
}

/// Devuelve el tracker token una única vez, al crear
#[derive(Debug, Serialize)]
pub struct SubmitInquiryResponse {
    pub tracker_token: String,
    pub token_expiry: DateTime<Utc>,
    pub status: InquiryStatus,
}

/// Vista pública del estado, consultada por token
#[derive(Debug, Serialize)]
pub struct TrackInquiryResponse {
    pub status: InquiryStatus,
    pub property_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInquiryStatusRequest {
    pub status: InquiryStatus,
}

/// Alta de una persona bloqueada; al menos email o teléfono
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBannedUserRequest {
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub reason: String,
}

/// Acción de staff: asigna habitación al lead creando Guest + Booking
/// y regenerando el door code de la habitación
#[derive(Debug, Deserialize, Validate)]
pub struct AssignRoomRequest {
    #[validate(length(min = 1))]
    pub room_id: String,
    pub plan: BookingPlan,
    pub total_amount: Decimal,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}
