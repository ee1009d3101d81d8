use serde::Deserialize;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::models::booking::{BookingPlan, BookingStatus, PaymentMethod, PaymentStatus};
use crate::models::guest::ContactType;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGuestRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub contact: String,
    pub contact_type: ContactType,
    pub referral_source: Option<String>,
    pub cashtag: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGuestRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub contact: Option<String>,
    pub contact_type: Option<ContactType>,
    pub referral_source: Option<String>,
    pub cashtag: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[validate(length(min = 1))]
    pub room_id: String,
    pub guest_id: Uuid,
    pub plan: BookingPlan,
    pub start_date: Option<DateTime<Utc>>,
    /// None = booking de tenant (ocupación indefinida)
    pub end_date: Option<DateTime<Utc>>,
    pub total_amount: Decimal,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookingRequest {
    pub plan: Option<BookingPlan>,
    pub end_date: Option<DateTime<Utc>>,
    pub total_amount: Option<Decimal>,
    pub payment_status: Option<PaymentStatus>,
    pub status: Option<BookingStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    pub booking_id: Uuid,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub discount: Option<Decimal>,
    pub deposit: Option<Decimal>,
    pub fee: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTurnInRequest {
    pub amount: Decimal,
    pub note: Option<String>,
}
