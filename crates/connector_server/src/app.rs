//! Application state and route composition.

use std::sync::Arc;

use actix_web::{web, Scope};
use connector_core::clients::{
    http::{MarketplaceHttpClient, PlatformHttpClient},
    IdentityClient, MarketplaceClient, PlatformClient, ProductSyncClient,
};

use crate::{
    routes::{connector, health, orders},
    settings::Settings,
};

/// Per-process state shared by the handlers: the settings plus the
/// externally-owned clients. Nothing here is mutable across requests.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub platform: Arc<dyn PlatformClient>,
    pub marketplace: Arc<dyn MarketplaceClient>,
    pub identity: Arc<dyn IdentityClient>,
    pub product_sync: Arc<dyn ProductSyncClient>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let platform = Arc::new(PlatformHttpClient::new(
            settings.platform.base_url.clone(),
            settings.platform.app_key.clone(),
            settings.platform.app_token.clone(),
        ));
        let marketplace = Arc::new(MarketplaceHttpClient::new(
            settings.marketplace.base_url.clone(),
            settings.marketplace.api_token.clone(),
        ));

        Self {
            settings: Arc::new(settings),
            platform: platform.clone(),
            identity: platform,
            marketplace: marketplace.clone(),
            product_sync: marketplace,
        }
    }
}

pub struct Health;

impl Health {
    pub fn server(state: AppState) -> Scope {
        web::scope("/health")
            .app_data(web::Data::new(state))
            .service(web::resource("").route(web::get().to(health::health)))
    }
}

pub struct Orders;

impl Orders {
    pub fn server(state: AppState) -> Scope {
        web::scope("/orders")
            .app_data(web::Data::new(state))
            .service(web::resource("/notify").route(web::post().to(orders::order_notify)))
            .service(web::resource("/cancel").route(web::post().to(orders::order_cancel)))
    }
}

pub struct Connector;

impl Connector {
    pub fn server(state: AppState) -> Scope {
        web::scope("/connector")
            .app_data(web::Data::new(state))
            .service(web::resource("/config").route(web::get().to(connector::connector_config)))
            .service(web::resource("/mapper").route(web::get().to(connector::mapper_redirect)))
    }
}
