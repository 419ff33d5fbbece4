use serde::{Deserialize, Serialize};

/// Body of `POST /subscribe`
///
/// `email` is optional so that a missing field reaches the subscription
/// service and is reported as `required_field` rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: Option<String>,
}
