use core::fmt;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope with a payload: status string, human-readable message
/// and the numeric code mirroring the HTTP status.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub response_code: u16,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, response_code: u16, data: T) -> Self {
        Self {
            status: "Success".to_string(),
            message: message.into(),
            response_code,
            data,
        }
    }
}

impl<T: std::fmt::Debug> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ApiResponse {{ status: {}, message: {}, response_code: {}, data: {:?} }}",
            self.status, self.message, self.response_code, self.data
        )
    }
}

/// Success envelope without a payload, used by the administrative
/// update path.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
    pub response_code: u16,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "Success".to_string(),
            message: message.into(),
            response_code: 200,
        }
    }
}
