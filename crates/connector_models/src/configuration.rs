//! Connector configuration descriptor returned by the handshake endpoint.

use serde::{Deserialize, Serialize};

/// Callback descriptor the marketplace uses to discover where to push
/// order-processing notifications. Computed per request, never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorConfiguration {
    pub order_processing_notification_endpoint: String,
}
