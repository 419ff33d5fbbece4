//! Specific error types bridged into `DomainError`
//!
//! Messages here are the English server-side descriptions; the presentation
//! layer chooses status codes and client-facing wording.

use thiserror::Error;

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid URL in field: {field}")]
    InvalidUrl { field: String },

    #[error("Out of range: {field} (min: {min}, max: {max})")]
    OutOfRange { field: String, min: i64, max: i64 },

    #[error("Too many values for {field} (max: {max})")]
    TooMany { field: String, max: usize },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Bearer token errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Swap workflow rule violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    #[error("Item {item_id} is not available for swapping")]
    ItemNotAvailable { item_id: String },

    #[error("You cannot request a swap for your own item")]
    OwnItem,

    #[error("The offered item must belong to you")]
    OfferedItemNotOwned,

    #[error("An item swap requires an offered item")]
    MissingOfferedItem,

    #[error("Insufficient points: {required} required, {available} available")]
    InsufficientPoints { required: i64, available: i64 },

    #[error("Cannot {action} a swap that is {status}")]
    InvalidTransition { action: String, status: String },

    #[error("Only the {role} of this swap can perform this action")]
    NotParticipant { role: String },
}
