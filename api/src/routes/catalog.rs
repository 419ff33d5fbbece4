use actix_web::{web, HttpResponse};

use rw_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::ItemQuery;
use crate::handlers::ApiError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/catalog", web::get().to(catalog));
}

/// GET /api/catalog
///
/// Storefront cards for every matching item, in store order. Accepts the
/// same filters as `GET /api/items`; paging parameters are ignored.
async fn catalog(
    state: web::Data<AppState>,
    query: web::Query<ItemQuery>,
) -> Result<HttpResponse, ApiError> {
    let cards = state.catalog.cards(&query.filter()?).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(cards)))
}
