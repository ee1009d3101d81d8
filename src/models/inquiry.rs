use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::booking::BookingPlan;
use crate::models::guest::ContactType;

/// Estado de un inquiry público.
/// Progresión: received -> payment_confirmed -> booking_confirmed,
/// con cancelled alcanzable desde cualquier estado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    Received,
    PaymentConfirmed,
    BookingConfirmed,
    Cancelled,
}

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::Received => "received",
            InquiryStatus::PaymentConfirmed => "payment_confirmed",
            InquiryStatus::BookingConfirmed => "booking_confirmed",
            InquiryStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "received" => Some(InquiryStatus::Received),
            "payment_confirmed" => Some(InquiryStatus::PaymentConfirmed),
            "booking_confirmed" => Some(InquiryStatus::BookingConfirmed),
            "cancelled" => Some(InquiryStatus::Cancelled),
            _ => None,
        }
    }

    /// Transiciones válidas del state machine
    pub fn can_transition_to(&self, next: InquiryStatus) -> bool {
        match (self, next) {
            (_, InquiryStatus::Cancelled) => true,
            (InquiryStatus::Received, InquiryStatus::PaymentConfirmed) => true,
            (InquiryStatus::PaymentConfirmed, InquiryStatus::BookingConfirmed) => true,
            _ => false,
        }
    }
}

impl TryFrom<String> for InquiryStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        InquiryStatus::from_str(&s).ok_or_else(|| format!("Invalid inquiry status: {}", s))
    }
}

/// Lead público; el tracker_token permite consultar estado sin autenticación
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub contact: String,
    pub contact_type: ContactType,
    pub property_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<BookingPlan>,
    pub message: Option<String>,
    pub status: InquiryStatus,
    #[serde(skip_serializing)]
    pub tracker_token: String,
    pub token_expiry: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Inquiry {
    pub fn token_is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.token_expiry
    }
}

fn decode_err(column: &str, message: String) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: message.into(),
    }
}

// FromRow manual: el plan es una columna TEXT nullable y el derive
// no cubre Option<enum> sobre texto
impl sqlx::FromRow<'_, sqlx::postgres::PgRow> for Inquiry {
    fn from_row(row: &sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        let contact_type: String = row.try_get("contact_type")?;
        let status: String = row.try_get("status")?;
        let plan: Option<String> = row.try_get("plan")?;

        Ok(Inquiry {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            contact: row.try_get("contact")?,
            contact_type: ContactType::from_str(&contact_type)
                .ok_or_else(|| decode_err("contact_type", format!("Invalid contact type: {}", contact_type)))?,
            property_id: row.try_get("property_id")?,
            plan: match plan {
                None => None,
                Some(p) => Some(
                    BookingPlan::from_str(&p)
                        .ok_or_else(|| decode_err("plan", format!("Invalid booking plan: {}", p)))?,
                ),
            },
            message: row.try_get("message")?,
            status: InquiryStatus::from_str(&status)
                .ok_or_else(|| decode_err("status", format!("Invalid inquiry status: {}", status)))?,
            tracker_token: row.try_get("tracker_token")?,
            token_expiry: row.try_get("token_expiry")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_progression() {
        assert!(InquiryStatus::Received.can_transition_to(InquiryStatus::PaymentConfirmed));
        assert!(InquiryStatus::PaymentConfirmed.can_transition_to(InquiryStatus::BookingConfirmed));
        assert!(!InquiryStatus::Received.can_transition_to(InquiryStatus::BookingConfirmed));
        assert!(!InquiryStatus::BookingConfirmed.can_transition_to(InquiryStatus::Received));
    }

    #[test]
    fn test_cancellable_from_any_state() {
        for s in [
            InquiryStatus::Received,
            InquiryStatus::PaymentConfirmed,
            InquiryStatus::BookingConfirmed,
        ] {
            assert!(s.can_transition_to(InquiryStatus::Cancelled));
        }
    }

    #[test]
    fn test_token_expiry_check() {
        let now = Utc::now();
        let inquiry = Inquiry {
            id: Uuid::new_v4(),
            name: "Lead".to_string(),
            contact: "lead@example.com".to_string(),
            contact_type: ContactType::Email,
            property_id: None,
            plan: None,
            message: None,
            status: InquiryStatus::Received,
            tracker_token: "abc123".to_string(),
            token_expiry: now + chrono::Duration::days(7),
            created_at: now,
        };
        assert!(!inquiry.token_is_expired(now));
        assert!(inquiry.token_is_expired(now + chrono::Duration::days(8)));
    }
}
