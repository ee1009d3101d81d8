use jsonwebtoken::{encode, decode, Header, Algorithm, Validation, EncodingKey, DecodingKey};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::auth::{JwtClaims, UserInfo, UserRole};
use crate::utils::errors::AppError;

/// Configuración JWT
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub token_duration: Duration,
}

impl JwtConfig {
    pub fn new(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret,
            algorithm: Algorithm::HS256,
            token_duration: Duration::hours(expiration_hours),
        }
    }
}

/// Servicio JWT: emite y valida bearer tokens firmados
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        let config = JwtConfig::new(secret.to_string(), expiration_hours);
        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Genera un token de acceso para un usuario
    pub fn generate_token(&self, user: &UserInfo) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = now + self.config.token_duration;

        let claims = JwtClaims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role.as_str().to_string(),
            property: user.property.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::Jwt(format!("Error generating token: {}", e)))?;

        Ok((token, exp))
    }

    /// Valida firma y expiración, y devuelve los claims
    pub fn validate_token(&self, token: &str) -> Result<JwtClaims, AppError> {
        let mut validation = Validation::new(self.config.algorithm);
        validation.validate_exp = true;

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Jwt(format!("Invalid token: {}", e)))
    }

    /// Id de usuario del claim `sub`
    pub fn user_id_from_claims(claims: &JwtClaims) -> Result<Uuid, AppError> {
        Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Jwt("Invalid subject in token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> UserInfo {
        UserInfo {
            id: Uuid::new_v4(),
            username: "maria".to_string(),
            name: "Maria".to_string(),
            role: UserRole::Manager,
            property: Some("P1".to_string()),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let service = JwtService::new("test-secret", 24);
        let user = test_user();

        let (token, expires_at) = service.generate_token(&user).unwrap();
        assert!(expires_at > Utc::now());

        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.username, "maria");
        assert_eq!(claims.role, "manager");
        assert_eq!(claims.property.as_deref(), Some("P1"));
        assert_eq!(JwtService::user_id_from_claims(&claims).unwrap(), user.id);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = JwtService::new("secret-a", 24);
        let other = JwtService::new("secret-b", 24);

        let (token, _) = service.generate_token(&test_user()).unwrap();
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = JwtService::new("test-secret", 24);
        assert!(service.validate_token("not-a-jwt").is_err());
        assert!(service.validate_token("").is_err());
    }
}
