//! Client traits for the external collaborators. The flows depend only on
//! these traits; the reqwest-backed implementations live in [`http`].

pub mod http;

use async_trait::async_trait;
use connector_models::{
    marketplace::MarketplaceOrder,
    platform::{LogisticsQuote, OrderSimulationRequest},
    products::TrackedProductMapping,
};
use masking::Secret;

use crate::errors::{ClientError, CustomResult};

/// Filter expression, projection and pagination for a platform document
/// search.
#[derive(Clone, Debug)]
pub struct DocumentQuery {
    pub collection: String,
    pub fields: String,
    pub filter: String,
    pub pagination: String,
}

/// Surface of the commerce platform consumed by the connector.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Batched document search against the platform document store.
    async fn get_all_documents(
        &self,
        query: DocumentQuery,
    ) -> CustomResult<Vec<serde_json::Value>, ClientError>;

    /// Shipping quote for the mapped items.
    async fn order_simulation(
        &self,
        request: OrderSimulationRequest,
    ) -> CustomResult<Vec<LogisticsQuote>, ClientError>;

    /// Cancels a platform order. The raw response body is handed back to
    /// the caller untouched.
    async fn cancel_order(
        &self,
        platform_order_id: &str,
        reason: &str,
    ) -> CustomResult<serde_json::Value, ClientError>;
}

/// Surface of the marketplace order API consumed by the connector.
#[async_trait]
pub trait MarketplaceClient: Send + Sync {
    /// Fetches an order by marketplace id. `None` when the id does not
    /// resolve.
    async fn get_order(
        &self,
        order_id: &str,
    ) -> CustomResult<Option<MarketplaceOrder>, ClientError>;
}

/// External identity check validating connector credentials.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    async fn are_valid_app_credentials(
        &self,
        vendor: &str,
        app_key: &str,
        app_token: &Secret<String>,
    ) -> CustomResult<bool, ClientError>;
}

/// Product synchronization routine. Invoked fire-and-forget from the order
/// flow; the routine owns retrying and status bookkeeping.
#[async_trait]
pub trait ProductSyncClient: Send + Sync {
    async fn sync_products(
        &self,
        products: Vec<TrackedProductMapping>,
    ) -> CustomResult<(), ClientError>;
}
