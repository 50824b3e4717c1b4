use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SendMessageValidator {
    #[validate(length(min = 1, message = "session_id is required"))]
    pub session_id: String,

    /// Required, but any text is accepted, including an empty answer.
    pub message: String,
}
