//! Constants of the connector.

/// SLA id the platform reserves for offers routed through this marketplace.
/// Warehouses must point a loading dock at it for the quote to contain one.
pub const MARKETPLACE_SLA_ID: &str = "marketplace";

/// The platform account owns a single seller for marketplace orders.
pub const DEFAULT_SELLER_ID: &str = "1";

/// All marketplace shipments are domestic.
pub const SHIPPING_COUNTRY_CODE: &str = "ROU";

/// Stock reservation TTL the platform expects on logistics lines.
pub const LOGISTICS_LOCK_TTL: &str = "7bd";

/// Fixed reason recorded on platform-side cancellations.
pub const CANCEL_REASON: &str = "Cancelled by marketplace user";

/// Address type of every marketplace shipping address.
pub const ADDRESS_TYPE_RESIDENTIAL: &str = "Residencial";

/// Section ids of the platform order-creation payload.
pub const CLIENT_PROFILE_SECTION_ID: &str = "clientProfileData";
pub const SHIPPING_DATA_SECTION_ID: &str = "shippingData";

/// Domain used when synthesizing a placeholder customer email.
pub const PLACEHOLDER_EMAIL_DOMAIN: &str = "orders.invalid";

/// Document collection holding the tracked product mappings.
pub const PRODUCTS_COLLECTION: &str = "products";

/// Field projection for tracked product lookups.
pub const PRODUCTS_FIELD_PROJECTION: &str = "id,platformSkuId,marketplaceProductId,syncStatus";

/// An order never references more than a page of distinct products.
pub const PRODUCTS_PAGINATION: &str = "0-100";

/// Template of the endpoint the marketplace pushes order notifications to.
/// `{{account}}` is substituted with the platform account name.
pub const ORDER_PROCESSING_NOTIFICATION_ENDPOINT: &str =
    "https://{{account}}.myplatform.com/api/connector/orders/notify";

/// Template of the connector service base advertised on created orders.
pub const MARKETPLACE_SERVICES_ENDPOINT: &str =
    "https://{{account}}.myplatform.com/api/connector/";

/// Template of the product mapper UI. `{{mapper-id}}` is substituted with
/// the configured mapper identifier.
pub const MAPPER_URL: &str = "https://mapper.myplatform.com/connectors/{{mapper-id}}";
