//! Types.

use strum::Display;
pub use tracing::Level;

/// API flow of the connector. Recorded on the request span so log lines can
/// be correlated per handler.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Health check.
    HealthCheck,
    /// Incoming marketplace order notification.
    OrderNotify,
    /// Bidirectional order cancellation.
    OrderCancel,
    /// Connector configuration handshake.
    ConnectorConfig,
    /// Redirect to the product mapper UI.
    MapperRedirect,
}
