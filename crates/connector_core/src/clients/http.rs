//! reqwest-backed implementations of the client traits.

use async_trait::async_trait;
use connector_env::logger;
use connector_models::{
    marketplace::MarketplaceOrder,
    platform::{LogisticsQuote, OrderSimulationRequest},
    products::TrackedProductMapping,
};
use error_stack::{report, ResultExt};
use masking::{PeekInterface, Secret};
use serde::Deserialize;

use super::{DocumentQuery, IdentityClient, MarketplaceClient, PlatformClient, ProductSyncClient};
use crate::errors::{ClientError, CustomResult};

const APP_KEY_HEADER: &str = "X-Connector-AppKey";
const APP_TOKEN_HEADER: &str = "X-Connector-AppToken";

/// Client of the platform document, checkout, order and identity APIs.
#[derive(Clone, Debug)]
pub struct PlatformHttpClient {
    client: reqwest::Client,
    base_url: String,
    app_key: String,
    app_token: Secret<String>,
}

impl PlatformHttpClient {
    pub fn new(base_url: impl Into<String>, app_key: impl Into<String>, app_token: Secret<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            app_key: app_key.into(),
            app_token,
        }
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(APP_KEY_HEADER, &self.app_key)
            .header(APP_TOKEN_HEADER, self.app_token.peek().as_str())
    }
}

fn ensure_success(response: &reqwest::Response) -> CustomResult<(), ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(report!(ClientError::UnexpectedStatus {
            status_code: status.as_u16(),
        }))
    }
}

#[async_trait]
impl PlatformClient for PlatformHttpClient {
    async fn get_all_documents(
        &self,
        query: DocumentQuery,
    ) -> CustomResult<Vec<serde_json::Value>, ClientError> {
        let url = format!("{}/api/documents/{}/search", self.base_url, query.collection);
        logger::debug!(collection = %query.collection, filter = %query.filter, "platform document search");

        let response = self
            .request(self.client.get(&url).query(&[
                ("_fields", query.fields.as_str()),
                ("_where", query.filter.as_str()),
                ("_pagination", query.pagination.as_str()),
            ]))
            .send()
            .await
            .change_context(ClientError::RequestFailed)?;
        ensure_success(&response)?;

        response
            .json()
            .await
            .change_context(ClientError::ResponseDeserializationFailed)
    }

    async fn order_simulation(
        &self,
        request: OrderSimulationRequest,
    ) -> CustomResult<Vec<LogisticsQuote>, ClientError> {
        let url = format!("{}/api/checkout/simulation", self.base_url);
        logger::debug!(items = request.items.len(), "platform order simulation");

        let response = self
            .request(self.client.post(&url).json(&request))
            .send()
            .await
            .change_context(ClientError::RequestFailed)?;
        ensure_success(&response)?;

        response
            .json()
            .await
            .change_context(ClientError::ResponseDeserializationFailed)
    }

    async fn cancel_order(
        &self,
        platform_order_id: &str,
        reason: &str,
    ) -> CustomResult<serde_json::Value, ClientError> {
        let url = format!("{}/api/orders/{}/cancel", self.base_url, platform_order_id);
        logger::debug!(order_id = %platform_order_id, "platform order cancellation");

        let response = self
            .request(
                self.client
                    .post(&url)
                    .json(&serde_json::json!({ "reason": reason })),
            )
            .send()
            .await
            .change_context(ClientError::RequestFailed)?;
        ensure_success(&response)?;

        // The cancel API answers 200 with an empty body for already-closed
        // orders; that is the caller's signal, not a transport failure.
        let body = response
            .text()
            .await
            .change_context(ClientError::RequestFailed)?;
        if body.trim().is_empty() {
            Ok(serde_json::Value::Null)
        } else {
            serde_json::from_str(&body).change_context(ClientError::ResponseDeserializationFailed)
        }
    }
}

#[derive(Debug, Deserialize)]
struct CredentialValidation {
    authorized: bool,
}

#[async_trait]
impl IdentityClient for PlatformHttpClient {
    async fn are_valid_app_credentials(
        &self,
        vendor: &str,
        app_key: &str,
        app_token: &Secret<String>,
    ) -> CustomResult<bool, ClientError> {
        let url = format!("{}/api/identity/credentials/validate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({
                "vendor": vendor,
                "appKey": app_key,
                "appToken": app_token.peek(),
            }))
            .send()
            .await
            .change_context(ClientError::RequestFailed)?;
        ensure_success(&response)?;

        let validation: CredentialValidation = response
            .json()
            .await
            .change_context(ClientError::ResponseDeserializationFailed)?;
        Ok(validation.authorized)
    }
}

/// Client of the marketplace order and product-offer APIs.
#[derive(Clone, Debug)]
pub struct MarketplaceHttpClient {
    client: reqwest::Client,
    base_url: String,
    api_token: Secret<String>,
}

impl MarketplaceHttpClient {
    pub fn new(base_url: impl Into<String>, api_token: Secret<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_token,
        }
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.bearer_auth(self.api_token.peek())
    }
}

#[async_trait]
impl MarketplaceClient for MarketplaceHttpClient {
    async fn get_order(
        &self,
        order_id: &str,
    ) -> CustomResult<Option<MarketplaceOrder>, ClientError> {
        let url = format!("{}/api/orders/{}", self.base_url, order_id);
        logger::debug!(order_id = %order_id, "marketplace order fetch");

        let response = self
            .request(self.client.get(&url))
            .send()
            .await
            .change_context(ClientError::RequestFailed)?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        ensure_success(&response)?;

        let order = response
            .json()
            .await
            .change_context(ClientError::ResponseDeserializationFailed)?;
        Ok(Some(order))
    }
}

#[async_trait]
impl ProductSyncClient for MarketplaceHttpClient {
    async fn sync_products(
        &self,
        products: Vec<TrackedProductMapping>,
    ) -> CustomResult<(), ClientError> {
        let url = format!("{}/api/product_offer/save", self.base_url);
        logger::debug!(products = products.len(), "marketplace product resync");

        let response = self
            .request(self.client.post(&url).json(&products))
            .send()
            .await
            .change_context(ClientError::RequestFailed)?;
        ensure_success(&response)
    }
}
