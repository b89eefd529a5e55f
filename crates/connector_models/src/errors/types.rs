use serde::Serialize;

/// Structured error body returned to API callers: a stable code, a message
/// and the raw diagnostic payload of the failure. Nothing is redacted at
/// this layer; the marketplace operators use the payload to debug mappings.
#[derive(Clone, Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(
        code: impl Into<String>,
        message: impl ToString,
        data: Option<serde_json::Value>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.to_string(),
            data,
        }
    }
}

/// HTTP classification of an [`ApiError`].
#[derive(Clone, Debug)]
pub enum ApiErrorResponse {
    BadRequest(ApiError),
    Forbidden(ApiError),
    NotFound(ApiError),
    InternalServerError(ApiError),
}

impl ApiErrorResponse {
    pub(crate) fn get_internal_error(&self) -> &ApiError {
        match self {
            Self::BadRequest(i)
            | Self::Forbidden(i)
            | Self::NotFound(i)
            | Self::InternalServerError(i) => i,
        }
    }
}

impl core::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(
            &serde_json::to_string(self.get_internal_error())
                .unwrap_or_else(|_| r#"{"code":"INTERNAL","message":"API error response"}"#.to_string()),
        )
    }
}

impl std::error::Error for ApiErrorResponse {}
