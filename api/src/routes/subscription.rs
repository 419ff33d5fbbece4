use actix_web::{web, HttpResponse};

use rw_shared::types::MessageResponse;

use crate::app::AppState;
use crate::dto::SubscribeRequest;
use crate::handlers::ApiError;

/// Handler for POST /subscribe and POST /api/subscribe
///
/// # Request
/// ```json
/// { "email": "jane@example.com" }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "message": "Thanks for subscribing!" }
/// ```
///
/// ## Errors
/// - 400 `required_field`: email missing or blank
/// - 400 `invalid_email`: email is not a valid address
/// - 400 `duplicate_email`: email already subscribed
/// - 500 `internal_error`: store failure
pub async fn subscribe(
    state: web::Data<AppState>,
    body: web::Json<SubscribeRequest>,
) -> Result<HttpResponse, ApiError> {
    let email = body.into_inner().email.unwrap_or_default();
    state.subscriptions.subscribe(&email).await?;

    Ok(HttpResponse::Created().json(MessageResponse::new("Thanks for subscribing!")))
}
