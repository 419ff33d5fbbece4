//! Bearer token authentication middleware.
//!
//! Extracts the JWT from the Authorization header, verifies it with the
//! token service held in [`AppState`], and injects an [`AuthContext`] into
//! the request. Three levels are supported:
//! 1. `optional` - verify a token when one is sent, pass anonymous requests through
//! 2. `new` - a valid token is required (401 otherwise)
//! 3. `admin` - a valid admin token is required (403 for members)

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use rw_core::{
    domain::entities::token::Claims,
    domain::entities::user::{Actor, UserRole},
    errors::DomainError,
};
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

use crate::app::AppState;
use crate::handlers::ApiError;

/// Caller identity injected into authenticated requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: Uuid,
    pub role: UserRole,
    /// JWT ID for tracking
    pub jti: String,
}

impl AuthContext {
    /// Creates a new authentication context from JWT claims
    pub fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let actor = claims.actor()?;
        Ok(Self {
            user_id: actor.user_id,
            role: actor.role,
            jti: claims.jti,
        })
    }

    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Requirement {
    Optional,
    Authenticated,
    Admin,
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    requirement: Requirement,
}

impl JwtAuth {
    /// Requires a valid bearer token
    pub fn new() -> Self {
        Self {
            requirement: Requirement::Authenticated,
        }
    }

    /// Authenticates when a token is present, lets anonymous requests through
    pub fn optional() -> Self {
        Self {
            requirement: Requirement::Optional,
        }
    }

    /// Requires a valid bearer token with the admin role
    pub fn admin() -> Self {
        Self {
            requirement: Requirement::Admin,
        }
    }
}

impl Default for JwtAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            requirement: self.requirement,
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    requirement: Requirement,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let requirement = self.requirement;

        Box::pin(async move {
            let context = match extract_bearer_token(&req) {
                Some(token) => match authenticate(&req, &token) {
                    Ok(context) => Some(context),
                    Err(error) => return Ok(reject(req, error)),
                },
                None => None,
            };

            match (requirement, &context) {
                (Requirement::Optional, _) => {}
                (_, None) => return Ok(reject(req, DomainError::Unauthorized.into())),
                (Requirement::Admin, Some(ctx)) if !ctx.is_admin() => {
                    tracing::warn!(user_id = %ctx.user_id, path = %req.path(), "Admin route denied");
                    return Ok(reject(req, DomainError::forbidden("Admin access required").into()));
                }
                _ => {}
            }

            if let Some(context) = context {
                req.extensions_mut().insert(context);
            }

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Verifies `token` with the token service registered in app data
fn authenticate(req: &ServiceRequest, token: &str) -> Result<AuthContext, ApiError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| DomainError::internal("Application state is not configured"))?;

    let claims = state.tokens.verify(token)?;
    Ok(AuthContext::from_claims(claims)?)
}

fn reject<B>(req: ServiceRequest, error: ApiError) -> ServiceResponse<EitherBody<B>> {
    req.into_response(error.error_response()).map_into_right_body()
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or(ApiError::Domain(DomainError::Unauthorized));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;

    #[test]
    fn test_extract_bearer_token() {
        let req = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_empty = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_empty), None);

        let req_no_header = actix_test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[test]
    fn test_context_from_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, UserRole::Admin, 60);
        let context = AuthContext::from_claims(claims).unwrap();

        assert_eq!(context.user_id, user_id);
        assert!(context.is_admin());
        assert_eq!(context.actor(), Actor::new(user_id, UserRole::Admin));
    }
}
