//! Flow tests against in-memory stub clients.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use connector_core::{
    clients::{DocumentQuery, MarketplaceClient, PlatformClient, ProductSyncClient},
    configuration::ConnectorSettings,
    errors::{ClientError, CustomResult, OrderError},
    orders,
};
use connector_models::{
    marketplace::{MarketplaceCustomer, MarketplaceOrder, MarketplaceOrderLine},
    platform::{LogisticsQuote, OrderSimulationRequest, ShippingSla},
    products::TrackedProductMapping,
};

#[derive(Default)]
struct StubPlatform {
    documents: Vec<serde_json::Value>,
    quotes: Vec<LogisticsQuote>,
    cancel_response: serde_json::Value,
    simulation_called: AtomicBool,
    cancelled_with: Mutex<Option<(String, String)>>,
}

#[async_trait]
impl PlatformClient for StubPlatform {
    async fn get_all_documents(
        &self,
        _query: DocumentQuery,
    ) -> CustomResult<Vec<serde_json::Value>, ClientError> {
        Ok(self.documents.clone())
    }

    async fn order_simulation(
        &self,
        _request: OrderSimulationRequest,
    ) -> CustomResult<Vec<LogisticsQuote>, ClientError> {
        self.simulation_called.store(true, Ordering::SeqCst);
        Ok(self.quotes.clone())
    }

    async fn cancel_order(
        &self,
        platform_order_id: &str,
        reason: &str,
    ) -> CustomResult<serde_json::Value, ClientError> {
        *self.cancelled_with.lock().expect("poisoned") =
            Some((platform_order_id.to_string(), reason.to_string()));
        Ok(self.cancel_response.clone())
    }
}

struct StubMarketplace {
    order: Option<MarketplaceOrder>,
}

#[async_trait]
impl MarketplaceClient for StubMarketplace {
    async fn get_order(
        &self,
        _order_id: &str,
    ) -> CustomResult<Option<MarketplaceOrder>, ClientError> {
        Ok(self.order.clone())
    }
}

struct StubSync;

#[async_trait]
impl ProductSyncClient for StubSync {
    async fn sync_products(
        &self,
        _products: Vec<TrackedProductMapping>,
    ) -> CustomResult<(), ClientError> {
        Ok(())
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

fn order(shipping_tax: Option<f64>) -> MarketplaceOrder {
    MarketplaceOrder {
        id: "939393".to_string(),
        customer: MarketplaceCustomer {
            id: "120".to_string(),
            name: "Jane Q. Public".to_string(),
            email: None,
            phone_1: Some("+40700000000".to_string()),
            company: None,
            legal_entity: false,
            shipping_street: "Strada Exemplu 1".to_string(),
            shipping_city: "Cluj-Napoca".to_string(),
            shipping_suburb: "Cluj".to_string(),
            shipping_country: "RO".to_string(),
        },
        products: vec![MarketplaceOrderLine {
            product_id: "MKP-4422".to_string(),
            sale_price: "10.00".to_string(),
            vat: "0.19".to_string(),
            quantity: 2,
        }],
        payment_mode: Some("COD".to_string()),
        detailed_payment_method: None,
        shipping_tax,
    }
}

fn tracked_document(product_id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": format!("doc-{product_id}"),
        "platformSkuId": "55",
        "marketplaceProductId": product_id,
        "syncStatus": "NOT_STARTED"
    })
}

fn marketplace_quote(price: i64) -> Vec<LogisticsQuote> {
    vec![LogisticsQuote {
        item_index: 0,
        slas: vec![ShippingSla {
            id: "marketplace".to_string(),
            price,
            shipping_estimate: Some("2bd".to_string()),
            available_delivery_windows: Vec::new(),
        }],
    }]
}

#[tokio::test]
async fn translation_builds_the_full_platform_order() {
    let platform = StubPlatform {
        documents: vec![tracked_document("MKP-4422")],
        quotes: marketplace_quote(1500),
        ..StubPlatform::default()
    };

    let platform_order = orders::build_platform_order(
        &platform,
        Arc::new(StubSync),
        &settings(),
        order(None),
        "939393",
    )
    .await
    .expect("translation succeeds");

    assert_eq!(platform_order.items.len(), 1);
    assert_eq!(platform_order.items[0].id, "4422");
    assert_eq!(platform_order.items[0].price, 1190);
    assert_eq!(platform_order.items[0].quantity, 2);

    assert_eq!(platform_order.shipping_data.logistics_info[0].price, 1500);
    assert_eq!(platform_order.marketplace_payment_value, 2 * 1190 + 1500);
    assert_eq!(platform_order.marketplace_order_id, "939393");
    assert_eq!(
        platform_order.marketplace_services_endpoint,
        "https://acme.myplatform.com/api/connector/"
    );

    let address = &platform_order.shipping_data.address;
    assert_eq!(address.country, "ROU");
    assert_eq!(address.postal_code, Some("400010".to_string()));
    assert_eq!(address.state, "Cluj");

    assert_eq!(
        platform_order.client_profile_data.email,
        "marketplace-customer-939393@orders.invalid"
    );
}

#[tokio::test]
async fn shipping_tax_takes_precedence_over_the_quote() {
    let platform = StubPlatform {
        documents: vec![tracked_document("MKP-4422")],
        quotes: marketplace_quote(1500),
        ..StubPlatform::default()
    };

    let platform_order = orders::build_platform_order(
        &platform,
        Arc::new(StubSync),
        &settings(),
        order(Some(19.99)),
        "939393",
    )
    .await
    .expect("translation succeeds");

    assert_eq!(platform_order.shipping_data.logistics_info[0].price, 1999);
}

#[tokio::test]
async fn unmapped_order_fails_before_the_simulation() {
    let platform = StubPlatform {
        documents: Vec::new(),
        quotes: marketplace_quote(1500),
        ..StubPlatform::default()
    };

    let error = orders::build_platform_order(
        &platform,
        Arc::new(StubSync),
        &settings(),
        order(None),
        "939393",
    )
    .await
    .expect_err("must fail");

    assert!(matches!(
        error.current_context(),
        OrderError::NoMappedProducts { .. }
    ));
    assert!(!platform.simulation_called.load(Ordering::SeqCst));
}

#[tokio::test]
async fn missing_marketplace_sla_carries_the_raw_simulation() {
    let platform = StubPlatform {
        documents: vec![tracked_document("MKP-4422")],
        quotes: vec![LogisticsQuote {
            item_index: 0,
            slas: vec![ShippingSla {
                id: "standard".to_string(),
                price: 900,
                shipping_estimate: None,
                available_delivery_windows: Vec::new(),
            }],
        }],
        ..StubPlatform::default()
    };

    let error = orders::build_platform_order(
        &platform,
        Arc::new(StubSync),
        &settings(),
        order(None),
        "939393",
    )
    .await
    .expect_err("must fail");

    match error.current_context() {
        OrderError::NoShippingOption { simulation } => {
            assert_eq!(simulation.len(), 1);
            assert_eq!(simulation[0].slas[0].id, "standard");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn cancel_composes_the_platform_order_id() {
    let platform = StubPlatform {
        cancel_response: serde_json::json!({ "orderId": "MKP-939393", "status": "cancelled" }),
        ..StubPlatform::default()
    };
    let marketplace = StubMarketplace {
        order: Some(order(None)),
    };

    let response = orders::cancel_order(&platform, &marketplace, &settings(), "939393")
        .await
        .expect("cancel succeeds");

    assert_eq!(response["status"], "cancelled");
    let cancelled = platform.cancelled_with.lock().expect("poisoned").clone();
    assert_eq!(
        cancelled,
        Some((
            "MKP-939393".to_string(),
            "Cancelled by marketplace user".to_string()
        ))
    );
}

#[tokio::test]
async fn empty_cancel_responses_fail() {
    for empty in [serde_json::Value::Null, serde_json::json!([])] {
        let platform = StubPlatform {
            cancel_response: empty.clone(),
            ..StubPlatform::default()
        };
        let marketplace = StubMarketplace {
            order: Some(order(None)),
        };

        let error = orders::cancel_order(&platform, &marketplace, &settings(), "939393")
            .await
            .expect_err("must fail");

        match error.current_context() {
            OrderError::CancelFailed { response } => assert_eq!(response, &empty),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[tokio::test]
async fn unresolvable_order_is_not_cancelled() {
    let platform = StubPlatform::default();
    let marketplace = StubMarketplace { order: None };

    let error = orders::cancel_order(&platform, &marketplace, &settings(), "404404")
        .await
        .expect_err("must fail");

    assert!(matches!(
        error.current_context(),
        OrderError::OrderNotFound { .. }
    ));
    assert!(platform.cancelled_with.lock().expect("poisoned").is_none());
}
