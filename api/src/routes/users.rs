use actix_web::{web, HttpResponse};
use validator::Validate;

use rw_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::{RegisterUserRequest, RegisteredUser};
use crate::handlers::ApiError;
use crate::middleware::auth::{AuthContext, JwtAuth};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::post().to(register))
            .service(
                web::resource("/me")
                    .route(web::get().to(me))
                    .wrap(JwtAuth::new()),
            ),
    );
}

/// POST /api/users
///
/// Registers a member and returns the user with a bearer token.
///
/// ## Errors
/// - 400 `validation_error` / `invalid_email`: bad name or email
/// - 400 `duplicate_email`: email already registered
async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let user = state.users.register(&body.name, &body.email).await?;
    let token = state.tokens.issue(&user)?;

    Ok(HttpResponse::Created().json(ApiResponse::success(RegisteredUser { user, token })))
}

/// GET /api/users/me
async fn me(state: web::Data<AppState>, auth: AuthContext) -> Result<HttpResponse, ApiError> {
    let user = state.users.get(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(user)))
}
