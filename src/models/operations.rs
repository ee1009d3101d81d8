use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Prioridad compartida por cleaning tasks y maintenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Normal,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            // "medium" aparece en datos viejos como sinónimo de normal
            "normal" | "medium" => Some(Priority::Normal),
            "high" => Some(Priority::High),
            "critical" => Some(Priority::Critical),
            _ => None,
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Priority::from_str(&s).ok_or_else(|| format!("Invalid priority: {}", s))
    }
}

/// Tipo de tarea de limpieza
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleaningTaskType {
    RoomCleaning,
    LinenChange,
    CommonArea,
}

impl CleaningTaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CleaningTaskType::RoomCleaning => "room_cleaning",
            CleaningTaskType::LinenChange => "linen_change",
            CleaningTaskType::CommonArea => "common_area",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "room_cleaning" => Some(CleaningTaskType::RoomCleaning),
            "linen_change" => Some(CleaningTaskType::LinenChange),
            "common_area" => Some(CleaningTaskType::CommonArea),
            _ => None,
        }
    }
}

impl TryFrom<String> for CleaningTaskType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        CleaningTaskType::from_str(&s).ok_or_else(|| format!("Invalid task type: {}", s))
    }
}

/// Estado de una tarea de limpieza
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TaskStatus::Pending),
            "in_progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        TaskStatus::from_str(&s).ok_or_else(|| format!("Invalid task status: {}", s))
    }
}

/// Tarea de limpieza; al completarse una room_cleaning el storage
/// actualiza en cascada el cleaning_status de la habitación
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CleaningTask {
    pub id: Uuid,
    pub room_id: Option<String>,
    pub property_id: Option<String>,
    #[sqlx(try_from = "String")]
    pub task_type: CleaningTaskType,
    #[sqlx(try_from = "String")]
    pub priority: Priority,
    #[sqlx(try_from = "String")]
    pub status: TaskStatus,
    pub assigned_to: Option<Uuid>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Estado de un pedido de mantenimiento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Open,
    InProgress,
    Resolved,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Open => "open",
            MaintenanceStatus::InProgress => "in_progress",
            MaintenanceStatus::Resolved => "resolved",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "open" => Some(MaintenanceStatus::Open),
            "in_progress" => Some(MaintenanceStatus::InProgress),
            "resolved" => Some(MaintenanceStatus::Resolved),
            _ => None,
        }
    }
}

impl TryFrom<String> for MaintenanceStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        MaintenanceStatus::from_str(&s).ok_or_else(|| format!("Invalid maintenance status: {}", s))
    }
}

/// Pedido de mantenimiento
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MaintenanceRequest {
    pub id: Uuid,
    pub room_id: Option<String>,
    pub property_id: Option<String>,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub priority: Priority,
    #[sqlx(try_from = "String")]
    pub status: MaintenanceStatus,
    pub reported_by: Option<Uuid>,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Item de inventario por propiedad; low-stock cuando quantity <= threshold
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct InventoryItem {
    pub id: Uuid,
    pub property_id: String,
    pub item: String,
    pub quantity: i32,
    pub threshold: i32,
    pub unit: String,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.threshold
    }
}

/// Entrada del audit log; la appendea el storage en mutaciones relevantes
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub action: String,
    pub entity: String,
    pub entity_id: String,
    pub detail: Option<String>,
    pub created_at: DateTime<Utc>,
}
