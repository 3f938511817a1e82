use serde::{Deserialize, Serialize};

/// Field-scoped validation failure as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub field: String,
    pub error_message: String,
}

/// Error payload: either a single human-readable string or a per-field list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Fields(Vec<ValidationError>),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessfulResponse<T> {
    pub status: String,
    pub status_code: u16,
    pub data: T,
}

/// Non-success envelope; `status` is `"error"` or `"fail"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status: String,
    pub status_code: u16,
    pub message: ErrorMessage,
}

/// Discriminated backend envelope. A success payload always carries `data`,
/// an error payload always carries `message`, so the untagged decode cannot
/// pick the wrong arm.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Success(SuccessfulResponse<T>),
    Error(ErrorResponse),
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub total: u64,
    pub count: u64,
    pub pages: Option<u32>,
    pub limit: u32,
    pub page: u32,
}
