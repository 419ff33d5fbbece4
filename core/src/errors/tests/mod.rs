//! Unit tests for domain error types

use crate::errors::{DomainError, SwapError, TokenError, ValidationError};

#[test]
fn test_validation_error_bridges_into_domain_error() {
    let error: DomainError = ValidationError::RequiredField {
        field: "email".to_string(),
    }
    .into();
    assert!(matches!(
        error,
        DomainError::ValidationErr(ValidationError::RequiredField { .. })
    ));
    assert_eq!(error.to_string(), "Required field: email");
}

#[test]
fn test_swap_error_messages() {
    let error = SwapError::InsufficientPoints {
        required: 40,
        available: 15,
    };
    assert_eq!(error.to_string(), "Insufficient points: 40 required, 15 available");

    let error = SwapError::InvalidTransition {
        action: "accept".to_string(),
        status: "rejected".to_string(),
    };
    assert_eq!(error.to_string(), "Cannot accept a swap that is rejected");
}

#[test]
fn test_token_error_is_transparent() {
    let error: DomainError = TokenError::TokenExpired.into();
    assert_eq!(error.to_string(), "Token expired");
}

#[test]
fn test_client_error_classification() {
    assert!(DomainError::not_found("item").is_client_error());
    assert!(DomainError::Conflict {
        field: "email".to_string()
    }
    .is_client_error());
    assert!(!DomainError::internal("connection reset").is_client_error());
}
