//! Emisión de door codes
//!
//! Genera códigos numéricos de 4 dígitos con expiración según el plan.
//! Los códigos pueden colisionar entre habitaciones: son códigos de
//! cerradura para humanos, no tokens de seguridad.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::booking::BookingPlan;

/// Código emitido junto con su fecha de expiración
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedCode {
    pub code: String,
    pub expiry: DateTime<Utc>,
}

/// Días de validez por tier de duración; cualquier input no reconocido
/// cae en el tier mensual
fn expiry_days(plan: Option<BookingPlan>) -> i64 {
    match plan {
        Some(BookingPlan::Daily) => 2,
        Some(BookingPlan::Weekly) => 10,
        Some(BookingPlan::Monthly) | None => 35,
    }
}

/// Genera un código aleatorio de 4 dígitos (1000-9999) y su expiración
pub fn issue_code(duration: &str) -> IssuedCode {
    issue_code_at(duration, Utc::now())
}

/// Variante con reloj inyectado, para tests
pub fn issue_code_at(duration: &str, now: DateTime<Utc>) -> IssuedCode {
    let plan = BookingPlan::from_str(duration);
    let code = rand::thread_rng().gen_range(1000..=9999).to_string();

    IssuedCode {
        code,
        expiry: now + Duration::days(expiry_days(plan)),
    }
}

/// Token opaco para tracking público de inquiries
pub fn generate_tracker_token() -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::thread_rng();
    (0..32)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_four_digits() {
        for _ in 0..200 {
            let issued = issue_code("monthly");
            assert_eq!(issued.code.len(), 4);
            assert!(issued.code.chars().all(|c| c.is_ascii_digit()));
            let n: u32 = issued.code.parse().unwrap();
            assert!((1000..=9999).contains(&n));
        }
    }

    #[test]
    fn test_expiry_table() {
        let now = Utc::now();
        assert_eq!(issue_code_at("daily", now).expiry, now + Duration::days(2));
        assert_eq!(issue_code_at("weekly", now).expiry, now + Duration::days(10));
        assert_eq!(issue_code_at("monthly", now).expiry, now + Duration::days(35));
    }

    #[test]
    fn test_unrecognized_duration_defaults_to_monthly() {
        let now = Utc::now();
        assert_eq!(issue_code_at("fortnight", now).expiry, now + Duration::days(35));
        assert_eq!(issue_code_at("", now).expiry, now + Duration::days(35));
    }

    #[test]
    fn test_tracker_token_shape() {
        let token = generate_tracker_token();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        // Dos tokens consecutivos no deberían coincidir
        assert_ne!(token, generate_tracker_token());
    }
}
