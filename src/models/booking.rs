use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Plan de estadía; también selecciona el tier de expiración del door code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingPlan {
    Daily,
    Weekly,
    Monthly,
}

impl BookingPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingPlan::Daily => "daily",
            BookingPlan::Weekly => "weekly",
            BookingPlan::Monthly => "monthly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(BookingPlan::Daily),
            "weekly" => Some(BookingPlan::Weekly),
            "monthly" => Some(BookingPlan::Monthly),
            _ => None,
        }
    }
}

impl TryFrom<String> for BookingPlan {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        BookingPlan::from_str(&s).ok_or_else(|| format!("Invalid booking plan: {}", s))
    }
}

/// Estado de cobro de un booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Overdue,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Overdue => "overdue",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PaymentStatus::Pending),
            "paid" => Some(PaymentStatus::Paid),
            "overdue" => Some(PaymentStatus::Overdue),
            _ => None,
        }
    }
}

impl TryFrom<String> for PaymentStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        PaymentStatus::from_str(&s).ok_or_else(|| format!("Invalid payment status: {}", s))
    }
}

/// Ciclo de vida de un booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Active,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Active => "active",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(BookingStatus::Active),
            "completed" => Some(BookingStatus::Completed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

impl TryFrom<String> for BookingStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        BookingStatus::from_str(&s).ok_or_else(|| format!("Invalid booking status: {}", s))
    }
}

/// Booking de una habitación. `end_date = None` representa un booking
/// de tenant: ocupación indefinida sin fecha de salida.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub room_id: String,
    pub guest_id: Uuid,
    #[sqlx(try_from = "String")]
    pub plan: BookingPlan,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub total_amount: Decimal,
    #[sqlx(try_from = "String")]
    pub payment_status: PaymentStatus,
    #[sqlx(try_from = "String")]
    pub status: BookingStatus,
    pub door_code: Option<String>,
    pub door_code_expiry: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Un booking sin end_date es una ocupación indefinida (tenant)
    pub fn is_tenant(&self) -> bool {
        self.end_date.is_none()
    }
}

/// Método de pago
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CashApp,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::CashApp => "cash_app",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "cash" => Some(PaymentMethod::Cash),
            "cash_app" => Some(PaymentMethod::CashApp),
            _ => None,
        }
    }
}

impl TryFrom<String> for PaymentMethod {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        PaymentMethod::from_str(&s).ok_or_else(|| format!("Invalid payment method: {}", s))
    }
}

/// Pago registrado contra un booking
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Payment {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub amount: Decimal,
    #[sqlx(try_from = "String")]
    pub method: PaymentMethod,
    /// Usuario del staff que recibió el pago
    pub received_by: Uuid,
    pub discount: Option<Decimal>,
    pub deposit: Option<Decimal>,
    pub fee: Option<Decimal>,
    pub total_paid: Decimal,
    pub date_received: DateTime<Utc>,
}

/// Entrega de efectivo de un manager al cash drawer del admin
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CashTurnIn {
    pub id: Uuid,
    pub manager_id: Uuid,
    pub amount: Decimal,
    pub note: Option<String>,
    pub turned_in_at: DateTime<Utc>,
}
