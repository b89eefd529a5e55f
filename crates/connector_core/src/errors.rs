//! Error taxonomy of the connector flows.

use connector_models::{
    errors::{ApiError, ApiErrorResponse},
    marketplace::MarketplaceOrder,
    platform::LogisticsQuote,
};

/// A custom datatype that wraps the error variant `<E>` into a report,
/// allowing `error_stack::Report<E>` specific extendability.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Transport-level failures of the HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Failed to build or send the request")]
    RequestFailed,
    #[error("Received unexpected status code {status_code}")]
    UnexpectedStatus { status_code: u16 },
    #[error("Failed to deserialize the response body")]
    ResponseDeserializationFailed,
}

/// Failures of the order translation and cancellation flows. Variants carry
/// the diagnostic payload surfaced verbatim to the caller.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("No products mapped for this order")]
    NoMappedProducts { order: Box<MarketplaceOrder> },
    #[error("No shipping option tagged for the marketplace; check that the warehouses point to the marketplace loading dock")]
    NoShippingOption { simulation: Vec<LogisticsQuote> },
    #[error("Marketplace order {order_id} could not be resolved")]
    OrderNotFound { order_id: String },
    #[error("Platform order cancellation returned an empty response")]
    CancelFailed { response: serde_json::Value },
    #[error("Line item {product_id} carries a malformed {field} value")]
    MalformedLine {
        product_id: String,
        field: &'static str,
    },
    #[error("Platform call failed while processing the order")]
    PlatformUnavailable,
    #[error("Marketplace call failed while processing the order")]
    MarketplaceUnavailable,
}

/// Failures of the configuration handshake.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("AppKey and AppToken are required")]
    MissingCredentials,
    #[error("Invalid appKey and/or appToken")]
    InvalidCredentials,
    #[error("Credential validation could not be completed")]
    ValidationUnavailable,
}

/// Conversion of domain errors into the wire-level error response at the
/// HTTP boundary.
pub trait ErrorSwitch<T> {
    fn switch(&self) -> T;
}

impl ErrorSwitch<ApiErrorResponse> for OrderError {
    fn switch(&self) -> ApiErrorResponse {
        match self {
            Self::NoMappedProducts { order } => ApiErrorResponse::BadRequest(ApiError::new(
                "NO_MAPPED_PRODUCTS",
                self,
                serde_json::to_value(order).ok(),
            )),
            Self::NoShippingOption { simulation } => ApiErrorResponse::BadRequest(ApiError::new(
                "NO_SHIPPING_OPTION",
                self,
                serde_json::to_value(simulation).ok(),
            )),
            Self::OrderNotFound { order_id } => ApiErrorResponse::BadRequest(ApiError::new(
                "ORDER_NOT_FOUND",
                self,
                Some(serde_json::json!({ "order_id": order_id })),
            )),
            Self::CancelFailed { response } => ApiErrorResponse::BadRequest(ApiError::new(
                "CANCEL_FAILED",
                self,
                Some(response.clone()),
            )),
            Self::MalformedLine { product_id, .. } => ApiErrorResponse::BadRequest(ApiError::new(
                "MALFORMED_LINE_ITEM",
                self,
                Some(serde_json::json!({ "product_id": product_id })),
            )),
            Self::PlatformUnavailable | Self::MarketplaceUnavailable => {
                ApiErrorResponse::InternalServerError(ApiError::new("UPSTREAM_FAILURE", self, None))
            }
        }
    }
}

impl ErrorSwitch<ApiErrorResponse> for ConfigError {
    fn switch(&self) -> ApiErrorResponse {
        match self {
            Self::MissingCredentials => {
                ApiErrorResponse::BadRequest(ApiError::new("MISSING_CREDENTIALS", self, None))
            }
            Self::InvalidCredentials => {
                ApiErrorResponse::Forbidden(ApiError::new("INVALID_CREDENTIALS", self, None))
            }
            Self::ValidationUnavailable => {
                ApiErrorResponse::InternalServerError(ApiError::new("UPSTREAM_FAILURE", self, None))
            }
        }
    }
}
