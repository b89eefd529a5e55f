//! Connector settings and the configuration handshake flow.

use connector_models::configuration::ConnectorConfiguration;
use error_stack::{report, ResultExt};
use masking::{PeekInterface, Secret};
use serde::Deserialize;

use crate::{
    clients::IdentityClient,
    consts,
    errors::{ConfigError, CustomResult},
};

/// Persisted connector configuration, sourced externally and read-only here.
#[derive(Clone, Debug, Deserialize)]
pub struct ConnectorSettings {
    /// Affiliate id composed into platform order identifiers.
    pub affiliate_id: String,
    /// Prefix stripped from marketplace product ids to obtain platform SKUs.
    pub product_id_prefix: String,
    /// Identifier of the product mapper instance for this account.
    pub mapper_id: String,
    /// Platform account name substituted into endpoint templates.
    pub account: String,
    /// Vendor name the credentials are validated against.
    pub vendor: String,
}

/// Endpoint the marketplace pushes order notifications to, for `account`.
pub fn notification_endpoint(account: &str) -> String {
    consts::ORDER_PROCESSING_NOTIFICATION_ENDPOINT.replace("{{account}}", account)
}

/// Connector service base advertised on created platform orders.
pub fn services_endpoint(account: &str) -> String {
    consts::MARKETPLACE_SERVICES_ENDPOINT.replace("{{account}}", account)
}

/// Product mapper UI location for the configured mapper id.
pub fn mapper_url(mapper_id: &str) -> String {
    consts::MAPPER_URL.replace("{{mapper-id}}", mapper_id)
}

/// Configuration handshake: both credential headers must be present and
/// valid for the configured vendor, then the callback descriptor for the
/// account is computed. No persistence, no side effects.
pub async fn get_connector_config(
    identity: &dyn IdentityClient,
    settings: &ConnectorSettings,
    app_key: Option<String>,
    app_token: Option<Secret<String>>,
) -> CustomResult<ConnectorConfiguration, ConfigError> {
    let (app_key, app_token) = match (app_key, app_token) {
        (Some(key), Some(token)) if !key.is_empty() && !token.peek().is_empty() => (key, token),
        _ => return Err(report!(ConfigError::MissingCredentials)),
    };

    let valid = identity
        .are_valid_app_credentials(&settings.vendor, &app_key, &app_token)
        .await
        .change_context(ConfigError::ValidationUnavailable)?;
    if !valid {
        return Err(report!(ConfigError::InvalidCredentials));
    }

    Ok(ConnectorConfiguration {
        order_processing_notification_endpoint: notification_endpoint(&settings.account),
    })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::errors::ClientError;

    struct StubIdentity {
        valid: bool,
    }

    #[async_trait]
    impl IdentityClient for StubIdentity {
        async fn are_valid_app_credentials(
            &self,
            _vendor: &str,
            _app_key: &str,
            _app_token: &Secret<String>,
        ) -> CustomResult<bool, ClientError> {
            Ok(self.valid)
        }
    }

    fn settings() -> ConnectorSettings {
        ConnectorSettings {
            affiliate_id: "MKP".to_string(),
            product_id_prefix: "MKP-".to_string(),
            mapper_id: "mapper-1".to_string(),
            account: "acme".to_string(),
            vendor: "vendor.connector".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_token_is_rejected_before_validation() {
        let result = get_connector_config(
            &StubIdentity { valid: true },
            &settings(),
            Some("key".to_string()),
            None,
        )
        .await;

        let error = result.expect_err("must fail");
        assert!(matches!(
            error.current_context(),
            ConfigError::MissingCredentials
        ));
    }

    #[tokio::test]
    async fn invalid_credentials_are_forbidden() {
        let result = get_connector_config(
            &StubIdentity { valid: false },
            &settings(),
            Some("key".to_string()),
            Some(Secret::new("token".to_string())),
        )
        .await;

        let error = result.expect_err("must fail");
        assert!(matches!(
            error.current_context(),
            ConfigError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn valid_credentials_yield_the_account_endpoint() {
        let config = get_connector_config(
            &StubIdentity { valid: true },
            &settings(),
            Some("key".to_string()),
            Some(Secret::new("token".to_string())),
        )
        .await
        .expect("handshake succeeds");

        assert_eq!(
            config.order_processing_notification_endpoint,
            "https://acme.myplatform.com/api/connector/orders/notify"
        );
    }

    #[test]
    fn mapper_url_substitutes_the_id() {
        assert_eq!(
            mapper_url("mapper-1"),
            "https://mapper.myplatform.com/connectors/mapper-1"
        );
    }
}
