//! Admin analytics over the affiliate "courses" table.

use actix_web::{web, HttpResponse};
use validator::Validate;

use rw_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::{CourseQuery, CreateCourseRequest};
use crate::handlers::ApiError;
use crate::middleware::auth::JwtAuth;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/courses")
            .service(
                web::resource("")
                    .route(web::get().to(overview))
                    .route(web::post().to(create_course)),
            )
            .wrap(JwtAuth::admin()),
    );
}

/// GET /api/courses?sort=<title|clicks|revenue|created_at>&order=<asc|desc>
///
/// Sorted rows plus click and revenue totals. Defaults to clicks descending.
async fn overview(
    state: web::Data<AppState>,
    query: web::Query<CourseQuery>,
) -> Result<HttpResponse, ApiError> {
    let (sort, order) = query.sorting()?;
    let analytics = state.analytics.overview(sort, order).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(analytics)))
}

/// POST /api/courses
async fn create_course(
    state: web::Data<AppState>,
    body: web::Json<CreateCourseRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    let course = state
        .analytics
        .create(&body.title, &body.affiliate_link, body.clicks, body.revenue_cents)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(course)))
}
