//! Unit tests for token service

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::{User, UserRole};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service(secret: &str) -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: secret.to_string(),
        expiry_seconds: 3600,
        ..Default::default()
    })
}

fn admin() -> User {
    User::new("Ops", "ops@rewear.app", UserRole::Admin, 0).unwrap()
}

#[test]
fn test_issue_and_verify_round_trip() {
    let service = service("test-secret");
    let user = admin();

    let issued = service.issue(&user).unwrap();
    assert_eq!(issued.token_type, "Bearer");
    assert_eq!(issued.expires_in, 3600);

    let claims = service.verify(&issued.access_token).unwrap();
    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(claims.role, UserRole::Admin);
}

#[test]
fn test_verify_rejects_other_secret() {
    let issued = service("secret-a").issue(&admin()).unwrap();

    let result = service("secret-b").verify(&issued.access_token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_verify_rejects_expired_token() {
    let service = service("test-secret");
    let mut claims = Claims::new(Uuid::new_v4(), UserRole::Member, 3600);
    claims.iat -= 7200;
    claims.nbf -= 7200;
    claims.exp = Utc::now().timestamp() - 60;
    let token = service.encode_jwt(&claims).unwrap();

    assert!(matches!(
        service.verify(&token),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_verify_rejects_wrong_audience() {
    let service = service("test-secret");
    let mut claims = Claims::new(Uuid::new_v4(), UserRole::Member, 3600);
    claims.aud = "someone-else".to_string();
    let token = service.encode_jwt(&claims).unwrap();

    assert!(matches!(
        service.verify(&token),
        Err(DomainError::Token(TokenError::InvalidClaims))
    ));
}

#[test]
fn test_verify_rejects_garbage() {
    assert!(matches!(
        service("test-secret").verify("not.a.jwt"),
        Err(DomainError::Token(_))
    ));
}
