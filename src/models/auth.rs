use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Roles del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Manager,
    Helper,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Helper => "helper",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(UserRole::Admin),
            "manager" => Some(UserRole::Manager),
            "helper" => Some(UserRole::Helper),
            _ => None,
        }
    }
}

/// Información del usuario autenticado que viaja como extension del request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub role: UserRole,
    /// Propiedad asignada; obligatoria para managers, None para admin/helper
    pub property: Option<String>,
}

/// Claims del JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // user_id
    pub username: String,
    pub role: String,
    pub property: Option<String>,
    pub exp: i64, // expiration timestamp
    pub iat: i64, // issued at timestamp
}

/// Request de login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response de login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub user: Option<UserInfo>,
    pub message: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::Admin, UserRole::Manager, UserRole::Helper] {
            assert_eq!(UserRole::from_str(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::from_str("super_admin"), None);
    }

    #[test]
    fn test_role_serde_snake_case() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        let parsed: UserRole = serde_json::from_str("\"helper\"").unwrap();
        assert_eq!(parsed, UserRole::Helper);
    }
}
