//! Translation of domain and request errors into HTTP responses.
//!
//! Every handler and middleware reports failures as [`ApiError`]; the status
//! code and the `{error, message}` body are decided here and nowhere else.

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use rw_core::errors::{DomainError, SwapError, TokenError, ValidationError};
use rw_shared::errors::{error_codes, ErrorResponse};

/// Failure of an API request
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request DTO failed its `validator` rules
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] validator::ValidationErrors),

    /// Body, query string or path could not be parsed
    #[error("Malformed request: {0}")]
    Malformed(String),
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => classify(error).0,
            ApiError::InvalidRequest(_) | ApiError::Malformed(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Domain(error) => handle_domain_error(error),
            ApiError::InvalidRequest(errors) => {
                let fields: Vec<&str> = errors.field_errors().keys().copied().collect();
                let code = if errors
                    .field_errors()
                    .values()
                    .flat_map(|errs| errs.iter())
                    .any(|e| e.code == "email")
                {
                    error_codes::INVALID_EMAIL
                } else {
                    error_codes::VALIDATION_ERROR
                };
                HttpResponse::BadRequest().json(
                    ErrorResponse::new(code, "Request validation failed").add_detail("fields", fields),
                )
            }
            ApiError::Malformed(reason) => HttpResponse::BadRequest()
                .json(ErrorResponse::new(error_codes::BAD_REQUEST, reason.clone())),
        }
    }
}

/// Status, error code and client-facing message for a domain error
fn classify(error: &DomainError) -> (StatusCode, &'static str, String) {
    match error {
        DomainError::Validation { message } => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            message.clone(),
        ),
        DomainError::ValidationErr(validation) => classify_validation(validation),
        DomainError::BusinessRule { message } => (
            StatusCode::BAD_REQUEST,
            error_codes::BUSINESS_RULE_VIOLATION,
            message.clone(),
        ),
        DomainError::NotFound { resource } => (
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            format!("{} not found", resource),
        ),
        DomainError::Conflict { field } if field == "email" => (
            StatusCode::BAD_REQUEST,
            error_codes::DUPLICATE_EMAIL,
            "This email is already registered".to_string(),
        ),
        DomainError::Conflict { field } => (
            StatusCode::BAD_REQUEST,
            error_codes::DUPLICATE_VALUE,
            format!("Duplicate value for {}", field),
        ),
        DomainError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            error_codes::UNAUTHORIZED,
            "Authentication required".to_string(),
        ),
        DomainError::Forbidden { reason } => (
            StatusCode::FORBIDDEN,
            error_codes::FORBIDDEN,
            reason.clone(),
        ),
        DomainError::Internal { .. } | DomainError::Token(TokenError::TokenGenerationFailed) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            "An internal error occurred".to_string(),
        ),
        DomainError::Token(TokenError::TokenExpired) => (
            StatusCode::UNAUTHORIZED,
            error_codes::TOKEN_EXPIRED,
            "Token has expired".to_string(),
        ),
        DomainError::Token(_) => (
            StatusCode::UNAUTHORIZED,
            error_codes::TOKEN_INVALID,
            "Invalid bearer token".to_string(),
        ),
        DomainError::Swap(swap @ SwapError::NotParticipant { .. }) => (
            StatusCode::FORBIDDEN,
            error_codes::FORBIDDEN,
            swap.to_string(),
        ),
        DomainError::Swap(swap) => (
            StatusCode::BAD_REQUEST,
            error_codes::BUSINESS_RULE_VIOLATION,
            swap.to_string(),
        ),
    }
}

fn classify_validation(error: &ValidationError) -> (StatusCode, &'static str, String) {
    let (code, message) = match error {
        ValidationError::RequiredField { field } => {
            (error_codes::REQUIRED_FIELD, format!("{} is required", capitalize(field)))
        }
        ValidationError::InvalidEmail => (
            error_codes::INVALID_EMAIL,
            "Please provide a valid email address".to_string(),
        ),
        other => (error_codes::VALIDATION_ERROR, other.to_string()),
    };
    (StatusCode::BAD_REQUEST, code, message)
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>().replace('_', " "),
        None => String::new(),
    }
}

/// Converts a domain error into its HTTP response
///
/// Server-side failures are logged with their detail; the client only sees a
/// generic message.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code, message) = classify(error);

    if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
    } else {
        tracing::debug!(error = %error, status = status.as_u16(), "Request rejected");
    }

    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

/// `JsonConfig` error handler producing the standard error body
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Malformed(format!("Invalid JSON body: {}", error)).into()
}

/// `QueryConfig` error handler producing the standard error body
pub fn query_error_handler(error: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Malformed(format!("Invalid query string: {}", error)).into()
}

/// `PathConfig` error handler producing the standard error body
pub fn path_error_handler(error: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Malformed(format!("Invalid path parameter: {}", error)).into()
}
