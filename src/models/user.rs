use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::auth::{UserInfo, UserRole};

/// Usuario del staff (admin, manager o helper)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub role: UserRole,
    /// Id de la propiedad asignada; obligatoria para managers
    pub property: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<String> for UserRole {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        UserRole::from_str(&s).ok_or_else(|| format!("Invalid role: {}", s))
    }
}

impl User {
    pub fn to_user_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            username: self.username.clone(),
            name: self.name.clone(),
            role: self.role,
            property: self.property.clone(),
        }
    }
}
