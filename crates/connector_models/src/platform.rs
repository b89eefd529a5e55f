//! Platform-side payloads: the order-creation body and the shipping
//! simulation wire types. All prices are integer minor units.

use serde::{Deserialize, Serialize};

/// Order-creation payload handed to the platform order API. Constructed
/// fresh per request, write-once.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformOrder {
    pub client_profile_data: ClientProfileData,
    pub items: Vec<PlatformOrderItem>,
    pub marketplace_order_id: String,
    /// Total payable: item line totals plus all logistics-line prices.
    pub marketplace_payment_value: i64,
    pub marketplace_services_endpoint: String,
    pub open_text_field: OpenTextField,
    pub payment_data: Option<serde_json::Value>,
    pub shipping_data: ShippingData,
}

/// Client profile of the platform order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfileData {
    pub corporate_document: Option<String>,
    pub corporate_name: Option<String>,
    pub corporate_phone: Option<String>,
    pub document: String,
    pub document_type: Option<String>,
    pub email: String,
    pub id: String,
    pub is_corporate: bool,
    pub last_name: String,
    pub first_name: String,
    pub phone: Option<String>,
    pub state_inscription: Option<String>,
    pub trade_name: Option<String>,
    pub user_profile_id: Option<String>,
}

/// Free-text metadata the platform stores verbatim on the order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OpenTextField {
    pub payment_mode: Option<String>,
    pub detailed_payment_method: Option<String>,
}

/// One mapped order item.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformOrderItem {
    pub attachments: Vec<serde_json::Value>,
    pub bundle_items: Vec<serde_json::Value>,
    pub commission: i64,
    pub freight_commission: i64,
    pub id: String,
    pub is_gift: bool,
    pub item_attachment: ItemAttachment,
    pub measurement_unit: Option<String>,
    pub price: i64,
    pub quantity: u32,
    pub seller: String,
    pub unit_multiplier: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemAttachment {
    pub content: serde_json::Value,
    pub name: Option<String>,
}

/// Shipping block of the platform order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingData {
    pub address: PlatformAddress,
    pub id: String,
    pub logistics_info: Vec<LogisticsLine>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformAddress {
    pub address_id: String,
    pub address_type: String,
    pub city: String,
    pub complement: Option<String>,
    pub country: String,
    pub geo_coordinates: Vec<f64>,
    pub neighborhood: Option<String>,
    pub number: Option<String>,
    pub postal_code: Option<String>,
    pub receiver_name: String,
    pub reference: Option<String>,
    pub state: String,
    pub street: String,
}

/// Per-item logistics selection applied from the chosen SLA.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsLine {
    pub delivery_window: Option<DeliveryWindow>,
    pub item_index: u32,
    pub lock_ttl: String,
    pub price: i64,
    pub selected_sla: String,
    pub shipping_estimate: Option<String>,
}

/// Shipping simulation request sent to the platform checkout API.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSimulationRequest {
    pub items: Vec<SimulationItem>,
    pub postal_code: Option<String>,
    pub country: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationItem {
    pub id: String,
    pub quantity: u32,
    pub seller: String,
}

/// Per-item quote in the simulation response.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsQuote {
    pub item_index: u32,
    #[serde(default)]
    pub slas: Vec<ShippingSla>,
}

/// A named shipping offer with price and delivery estimate.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingSla {
    pub id: String,
    /// Quoted freight price in minor units.
    pub price: i64,
    pub shipping_estimate: Option<String>,
    #[serde(default)]
    pub available_delivery_windows: Vec<DeliveryWindow>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryWindow {
    pub start_date_utc: Option<String>,
    pub end_date_utc: Option<String>,
    pub price: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_order_serializes_camel_case() {
        let order = PlatformOrder {
            client_profile_data: ClientProfileData {
                corporate_document: None,
                corporate_name: None,
                corporate_phone: None,
                document: "120".to_string(),
                document_type: None,
                email: "jane@example.com".to_string(),
                id: "clientProfileData".to_string(),
                is_corporate: false,
                last_name: "Public".to_string(),
                first_name: "Q. Public".to_string(),
                phone: None,
                state_inscription: None,
                trade_name: None,
                user_profile_id: None,
            },
            items: Vec::new(),
            marketplace_order_id: "939393".to_string(),
            marketplace_payment_value: 1190,
            marketplace_services_endpoint: "https://acme.example.com/".to_string(),
            open_text_field: OpenTextField {
                payment_mode: Some("COD".to_string()),
                detailed_payment_method: None,
            },
            payment_data: None,
            shipping_data: ShippingData {
                address: PlatformAddress {
                    address_id: "Strada Exemplu 1".to_string(),
                    address_type: "Residencial".to_string(),
                    city: "Cluj-Napoca".to_string(),
                    complement: None,
                    country: "ROU".to_string(),
                    geo_coordinates: Vec::new(),
                    neighborhood: None,
                    number: None,
                    postal_code: Some("400010".to_string()),
                    receiver_name: "Jane Q. Public".to_string(),
                    reference: None,
                    state: "Cluj".to_string(),
                    street: "Strada Exemplu 1".to_string(),
                },
                id: "shippingData".to_string(),
                logistics_info: Vec::new(),
            },
        };

        let value = serde_json::to_value(&order).expect("serializable");
        assert_eq!(value["marketplacePaymentValue"], 1190);
        assert_eq!(value["clientProfileData"]["lastName"], "Public");
        assert_eq!(value["shippingData"]["address"]["postalCode"], "400010");
    }

    #[test]
    fn simulation_response_tolerates_missing_sla_fields() {
        let payload = serde_json::json!([
            { "itemIndex": 0, "slas": [ { "id": "marketplace", "price": 1500 } ] },
            { "itemIndex": 1 }
        ]);

        let quotes: Vec<LogisticsQuote> = serde_json::from_value(payload).expect("valid quotes");
        assert_eq!(quotes[0].slas[0].price, 1500);
        assert!(quotes[0].slas[0].available_delivery_windows.is_empty());
        assert!(quotes[1].slas.is_empty());
    }
}
