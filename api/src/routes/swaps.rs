//! Swap workflow endpoints. Every route requires a bearer token.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use rw_core::services::SwapRequest;
use rw_shared::types::ApiResponse;

use crate::app::AppState;
use crate::handlers::ApiError;
use crate::middleware::auth::{AuthContext, JwtAuth};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/swaps")
            .service(
                web::resource("")
                    .route(web::get().to(list_swaps))
                    .route(web::post().to(request_swap)),
            )
            .route("/{id}", web::get().to(get_swap))
            .route("/{id}/accept", web::post().to(accept_swap))
            .route("/{id}/reject", web::post().to(reject_swap))
            .route("/{id}/cancel", web::post().to(cancel_swap))
            .wrap(JwtAuth::new()),
    );
}

/// POST /api/swaps
///
/// Opens a pending swap for `requested_item_id`, offering either one of the
/// caller's items (`offered_item_id`) or points (`use_points: true`).
async fn request_swap(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<SwapRequest>,
) -> Result<HttpResponse, ApiError> {
    let swap = state.swaps.request(auth.actor(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(swap)))
}

/// GET /api/swaps
async fn list_swaps(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let swaps = state.swaps.list_for(auth.actor()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(swaps)))
}

/// GET /api/swaps/{id}
async fn get_swap(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let swap = state.swaps.get(auth.actor(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(swap)))
}

/// POST /api/swaps/{id}/accept
async fn accept_swap(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let swap = state.swaps.accept(auth.actor(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(swap)))
}

/// POST /api/swaps/{id}/reject
async fn reject_swap(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let swap = state.swaps.reject(auth.actor(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(swap)))
}

/// POST /api/swaps/{id}/cancel
async fn cancel_swap(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let swap = state.swaps.cancel(auth.actor(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(swap)))
}
