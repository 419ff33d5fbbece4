use serde::{Deserialize, Serialize};
use validator::Validate;

use rw_core::domain::entities::user::User;
use rw_core::services::IssuedToken;

/// Body of `POST /api/users`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 80))]
    pub name: String,

    #[validate(email)]
    pub email: String,
}

/// A newly registered user together with their first bearer token
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUser {
    pub user: User,
    pub token: IssuedToken,
}
