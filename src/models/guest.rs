use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Tipo de contacto de un guest o inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactType {
    Phone,
    Email,
    Other,
}

impl ContactType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::Phone => "phone",
            ContactType::Email => "email",
            ContactType::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "phone" => Some(ContactType::Phone),
            "email" => Some(ContactType::Email),
            "other" => Some(ContactType::Other),
            _ => None,
        }
    }
}

impl TryFrom<String> for ContactType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ContactType::from_str(&s).ok_or_else(|| format!("Invalid contact type: {}", s))
    }
}

/// Huésped (ocupante de una habitación)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Guest {
    pub id: Uuid,
    pub name: String,
    pub contact: String,
    #[sqlx(try_from = "String")]
    pub contact_type: ContactType,
    pub referral_source: Option<String>,
    pub cashtag: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Persona bloqueada: sus inquiries públicas se rechazan con 403
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BannedUser {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl BannedUser {
    /// Match case-insensitive contra email o teléfono de un contacto entrante
    pub fn matches_contact(&self, contact: &str) -> bool {
        let needle = contact.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.email
            .as_deref()
            .map_or(false, |e| e.trim().to_lowercase() == needle)
            || self
                .phone
                .as_deref()
                .map_or(false, |p| p.trim().to_lowercase() == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banned(email: Option<&str>, phone: Option<&str>) -> BannedUser {
        BannedUser {
            id: Uuid::new_v4(),
            name: None,
            email: email.map(String::from),
            phone: phone.map(String::from),
            reason: "no-show repetido".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_banned_matches_email_case_insensitive() {
        let b = banned(Some("Sketchy@Example.com"), None);
        assert!(b.matches_contact("sketchy@example.com"));
        assert!(b.matches_contact("  SKETCHY@EXAMPLE.COM "));
        assert!(!b.matches_contact("other@example.com"));
    }

    #[test]
    fn test_banned_matches_phone() {
        let b = banned(None, Some("555-0100"));
        assert!(b.matches_contact("555-0100"));
        assert!(!b.matches_contact("555-0199"));
    }

    #[test]
    fn test_empty_contact_never_matches() {
        let b = banned(None, None);
        assert!(!b.matches_contact(""));
        assert!(!b.matches_contact("   "));
    }
}
