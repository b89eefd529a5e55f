use actix_web::{web, HttpResponse, ResponseError};
use connector_core::{
    errors::ErrorSwitch,
    orders,
};
use connector_env::{logger, Flow};
use connector_models::marketplace::MarketplaceOrder;
use serde::Deserialize;
use tracing::instrument;

use crate::app::AppState;

/// Marketplace order notification: translates the payload into the platform
/// order-creation body. The caller submits it to the platform order API.
#[instrument(skip_all, fields(flow = %Flow::OrderNotify))]
pub async fn order_notify(
    state: web::Data<AppState>,
    payload: web::Json<MarketplaceOrder>,
) -> HttpResponse {
    let order = payload.into_inner();
    let order_id = order.id.clone();

    match orders::build_platform_order(
        state.platform.as_ref(),
        state.product_sync.clone(),
        &state.settings.connector,
        order,
        &order_id,
    )
    .await
    {
        Ok(platform_order) => HttpResponse::Ok().json(platform_order),
        Err(error) => {
            logger::error!(order_id = %order_id, ?error, "order notification ended with error");
            error.current_context().switch().error_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CancelQuery {
    pub order_id: String,
}

/// Bidirectional cancel: resolves the platform order backing the marketplace
/// order and cancels it. 200 with the platform response body on success,
/// 400 with the structured error otherwise.
#[instrument(skip_all, fields(flow = %Flow::OrderCancel))]
pub async fn order_cancel(
    state: web::Data<AppState>,
    query: web::Query<CancelQuery>,
) -> HttpResponse {
    let order_id = query.into_inner().order_id;

    match orders::cancel_order(
        state.platform.as_ref(),
        state.marketplace.as_ref(),
        &state.settings.connector,
        &order_id,
    )
    .await
    {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => {
            logger::error!(order_id = %order_id, ?error, "order cancel ended with error");
            error.current_context().switch().error_response()
        }
    }
}
