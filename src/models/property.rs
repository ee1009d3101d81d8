use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Propiedad (rooming house) identificada por código corto, ej. "P1"
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub daily_rate: Decimal,
    pub weekly_rate: Decimal,
    pub monthly_rate: Decimal,
    pub front_door_code: Option<String>,
    pub front_door_code_expiry: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Estado operativo de una habitación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Occupied,
    Cleaning,
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Cleaning => "cleaning",
            RoomStatus::Maintenance => "maintenance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "available" => Some(RoomStatus::Available),
            "occupied" => Some(RoomStatus::Occupied),
            "cleaning" => Some(RoomStatus::Cleaning),
            "maintenance" => Some(RoomStatus::Maintenance),
            _ => None,
        }
    }
}

impl TryFrom<String> for RoomStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        RoomStatus::from_str(&s).ok_or_else(|| format!("Invalid room status: {}", s))
    }
}

/// Estado de limpieza de una habitación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleaningStatus {
    Clean,
    Dirty,
    InProgress,
}

impl CleaningStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CleaningStatus::Clean => "clean",
            CleaningStatus::Dirty => "dirty",
            CleaningStatus::InProgress => "in_progress",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "clean" => Some(CleaningStatus::Clean),
            "dirty" => Some(CleaningStatus::Dirty),
            "in_progress" => Some(CleaningStatus::InProgress),
            _ => None,
        }
    }
}

impl TryFrom<String> for CleaningStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        CleaningStatus::from_str(&s).ok_or_else(|| format!("Invalid cleaning status: {}", s))
    }
}

/// Estado de la ropa de cama
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinenStatus {
    Fresh,
    Used,
    Changing,
}

impl LinenStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinenStatus::Fresh => "fresh",
            LinenStatus::Used => "used",
            LinenStatus::Changing => "changing",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fresh" => Some(LinenStatus::Fresh),
            "used" => Some(LinenStatus::Used),
            "changing" => Some(LinenStatus::Changing),
            _ => None,
        }
    }
}

impl TryFrom<String> for LinenStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        LinenStatus::from_str(&s).ok_or_else(|| format!("Invalid linen status: {}", s))
    }
}

/// Habitación, identificada por código corto, ej. "P1-R1"
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Room {
    pub id: String,
    pub property_id: String,
    pub room_number: String,
    #[sqlx(try_from = "String")]
    pub status: RoomStatus,
    pub door_code: Option<String>,
    pub door_code_expiry: Option<DateTime<Utc>>,
    #[sqlx(try_from = "String")]
    pub cleaning_status: CleaningStatus,
    #[sqlx(try_from = "String")]
    pub linen_status: LinenStatus,
    pub notes: Option<String>,
    pub last_cleaned: Option<DateTime<Utc>>,
    pub last_linen_change: Option<DateTime<Utc>>,
}

/// Código maestro de acceso: override a nivel de propiedad,
/// distinto de los door codes por booking
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MasterCode {
    pub id: Uuid,
    pub property_id: Option<String>,
    pub label: String,
    pub code: String,
    pub expiry: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
