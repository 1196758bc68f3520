//! JSON response envelope.
//!
//! The admission and doctor front-ends expect `{ success, message, data }` around scoring and
//! validation results.

use crate::pb;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[aliases(
    SeverityApiResponse = ApiResponse<pb::SeverityRes>,
    ValidationApiResponse = ApiResponse<pb::ValidationRes>
)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: "OK".into(),
            data,
        }
    }
}
