//! Order translation and cancellation flows.

pub mod transformers;

use std::sync::Arc;

use connector_env::logger;
use connector_models::{
    marketplace::{MarketplaceOrder, MarketplaceOrderLine},
    platform::{OpenTextField, OrderSimulationRequest, PlatformOrder, ShippingData},
    products::TrackedProductMapping,
};
use error_stack::{report, ResultExt};

use crate::{
    clients::{DocumentQuery, MarketplaceClient, PlatformClient, ProductSyncClient},
    configuration::{self, ConnectorSettings},
    consts,
    errors::{CustomResult, OrderError},
    postal_codes, sync,
};

fn tracked_products_query(order: &MarketplaceOrder) -> DocumentQuery {
    let filter = order
        .products
        .iter()
        .map(|line| format!("marketplaceProductId={}", line.product_id))
        .collect::<Vec<_>>()
        .join(" OR ");

    DocumentQuery {
        collection: consts::PRODUCTS_COLLECTION.to_string(),
        fields: consts::PRODUCTS_FIELD_PROJECTION.to_string(),
        filter: format!("({filter})"),
        pagination: consts::PRODUCTS_PAGINATION.to_string(),
    }
}

fn intersect_lines(
    order: &MarketplaceOrder,
    tracked: &[TrackedProductMapping],
) -> Vec<MarketplaceOrderLine> {
    order
        .products
        .iter()
        .filter(|line| {
            tracked
                .iter()
                .any(|mapping| mapping.marketplace_product_id == line.product_id)
        })
        .cloned()
        .collect()
}

/// Translates a marketplace order into the platform order-creation payload.
///
/// Fails with [`OrderError::NoMappedProducts`] before any remote write when
/// none of the order lines matches a tracked product, and with
/// [`OrderError::NoShippingOption`] when the shipping quote carries no offer
/// tagged for this marketplace. Submitting the returned payload is the
/// caller's concern.
pub async fn build_platform_order(
    platform: &dyn PlatformClient,
    product_sync: Arc<dyn ProductSyncClient>,
    settings: &ConnectorSettings,
    order: MarketplaceOrder,
    local_order_id: &str,
) -> CustomResult<PlatformOrder, OrderError> {
    let documents = platform
        .get_all_documents(tracked_products_query(&order))
        .await
        .change_context(OrderError::PlatformUnavailable)?;

    let tracked: Vec<TrackedProductMapping> = documents
        .into_iter()
        .filter_map(|document| {
            serde_json::from_value(document)
                .map_err(|error| {
                    logger::warn!(%error, "skipping malformed tracked product document")
                })
                .ok()
        })
        .collect();

    let used_lines = intersect_lines(&order, &tracked);
    if used_lines.is_empty() {
        return Err(report!(OrderError::NoMappedProducts {
            order: Box::new(order),
        }));
    }

    // Matched products that never synchronized successfully are resynced in
    // a detached task; order creation does not wait for the round trip.
    sync::spawn_resync(product_sync, &tracked, &used_lines);

    let items = transformers::build_order_items(&used_lines, &settings.product_id_prefix)?;
    let postal_code = postal_codes::lookup(&order.customer.shipping_suburb);

    let quotes = platform
        .order_simulation(OrderSimulationRequest {
            items: transformers::simulation_items(&items),
            postal_code: postal_code.clone(),
            country: consts::SHIPPING_COUNTRY_CODE.to_string(),
        })
        .await
        .change_context(OrderError::PlatformUnavailable)?;

    let selected_sla = transformers::select_marketplace_sla(&quotes)
        .cloned()
        .ok_or_else(|| {
            report!(OrderError::NoShippingOption {
                simulation: quotes.clone(),
            })
        })?;

    let logistics_info =
        transformers::build_logistics_lines(&quotes, &selected_sla, order.shipping_tax);
    let marketplace_payment_value = transformers::payment_total(&items, &logistics_info);
    let client_profile_data = transformers::build_client_profile(&order.customer, &order.id);
    let address = transformers::build_shipping_address(&order.customer, postal_code);

    Ok(PlatformOrder {
        client_profile_data,
        items,
        marketplace_order_id: local_order_id.to_string(),
        marketplace_payment_value,
        marketplace_services_endpoint: configuration::services_endpoint(&settings.account),
        open_text_field: OpenTextField {
            payment_mode: order.payment_mode,
            detailed_payment_method: order.detailed_payment_method,
        },
        payment_data: None,
        shipping_data: ShippingData {
            address,
            id: consts::SHIPPING_DATA_SECTION_ID.to_string(),
            logistics_info,
        },
    })
}

fn is_empty_response(response: &serde_json::Value) -> bool {
    match response {
        serde_json::Value::Null => true,
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::Object(fields) => fields.is_empty(),
        serde_json::Value::String(body) => body.is_empty(),
        serde_json::Value::Bool(_) | serde_json::Value::Number(_) => false,
    }
}

/// Cancels the platform order backing a marketplace order.
///
/// The marketplace order must resolve; the platform order identifier is the
/// configured affiliate id composed with the marketplace order id. An empty
/// cancel response is a failure, a non-empty one is handed back untouched.
/// No retries; every failure is terminal for the request.
pub async fn cancel_order(
    platform: &dyn PlatformClient,
    marketplace: &dyn MarketplaceClient,
    settings: &ConnectorSettings,
    marketplace_order_id: &str,
) -> CustomResult<serde_json::Value, OrderError> {
    logger::info!(order_id = %marketplace_order_id, "order cancel received from the marketplace");

    let order = marketplace
        .get_order(marketplace_order_id)
        .await
        .change_context(OrderError::MarketplaceUnavailable)?;
    if order.is_none() {
        return Err(report!(OrderError::OrderNotFound {
            order_id: marketplace_order_id.to_string(),
        }));
    }

    let platform_order_id = format!("{}-{}", settings.affiliate_id, marketplace_order_id);
    let response = platform
        .cancel_order(&platform_order_id, consts::CANCEL_REASON)
        .await
        .change_context(OrderError::PlatformUnavailable)?;

    if is_empty_response(&response) {
        logger::warn!(
            order_id = %marketplace_order_id,
            platform_order_id = %platform_order_id,
            "order cancel ended with an empty platform response"
        );
        return Err(report!(OrderError::CancelFailed { response }));
    }

    logger::info!(
        order_id = %marketplace_order_id,
        platform_order_id = %platform_order_id,
        "order cancel ended successfully"
    );
    Ok(response)
}
