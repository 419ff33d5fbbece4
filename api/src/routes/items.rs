//! Item listing CRUD.
//!
//! Reads are public. Writes need a bearer token and are limited to the
//! item's owner or an admin.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use rw_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::{ItemQuery, ItemRequest, UpdateStatusRequest};
use crate::handlers::ApiError;
use crate::middleware::auth::{AuthContext, JwtAuth};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/items")
            .service(
                web::resource("")
                    .route(web::get().to(list_items))
                    .route(web::post().to(create_item)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_item))
                    .route(web::put().to(update_item))
                    .route(web::delete().to(delete_item)),
            )
            .service(web::resource("/{id}/status").route(web::patch().to(update_status)))
            .wrap(JwtAuth::optional()),
    );
}

/// GET /api/items
///
/// Returns every matching item, or one page of them when `page` or
/// `per_page` is given.
async fn list_items(
    state: web::Data<AppState>,
    query: web::Query<ItemQuery>,
) -> Result<HttpResponse, ApiError> {
    let filter = query.filter()?;

    let response = match query.pagination() {
        Some(pagination) => {
            let page = state.catalog.list_page(&filter, pagination).await?;
            HttpResponse::Ok().json(ApiResponse::success(page))
        }
        None => {
            let items = state.catalog.list(&filter).await?;
            HttpResponse::Ok().json(ApiResponse::success(items))
        }
    };
    Ok(response)
}

/// GET /api/items/{id}
async fn get_item(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let item = state.catalog.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(item)))
}

/// POST /api/items
async fn create_item(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<ItemRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    let item = state
        .catalog
        .create(auth.actor(), body.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(item)))
}

/// PUT /api/items/{id}
async fn update_item(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    body: web::Json<ItemRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    let item = state
        .catalog
        .update(auth.actor(), path.into_inner(), body.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(item)))
}

/// PATCH /api/items/{id}/status
async fn update_status(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    body: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, ApiError> {
    let item = state
        .catalog
        .set_status(auth.actor(), path.into_inner(), body.status)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(item)))
}

/// DELETE /api/items/{id}
async fn delete_item(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    state.catalog.delete(auth.actor(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
