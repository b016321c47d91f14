use serde::Serialize;
use utoipa::ToSchema;

/// Failure envelope shared by every endpoint: a status string, a
/// human-readable message and the numeric code mirroring the HTTP status.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub response_code: u16,
}

impl ErrorResponse {
    pub fn failed(message: impl Into<String>, response_code: u16) -> Self {
        Self {
            status: "Failed".to_string(),
            message: message.into(),
            response_code,
        }
    }
}
