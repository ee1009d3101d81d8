use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::models::auth::UserRole;
use crate::models::user::User;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 32))]
    pub username: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub role: UserRole,
    /// Obligatoria cuando role == manager
    pub property: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 8))]
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub property: Option<String>,
}

/// Response de usuario (sin password hash)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub role: UserRole,
    pub property: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            role: user.role,
            property: user.property,
            created_at: user.created_at,
        }
    }
}
