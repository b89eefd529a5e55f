//! Order payloads as delivered by the marketplace order API.

use serde::{Deserialize, Serialize};

use crate::de;

/// A marketplace order. Immutable once received.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MarketplaceOrder {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    pub customer: MarketplaceCustomer,
    #[serde(default)]
    pub products: Vec<MarketplaceOrderLine>,
    #[serde(default)]
    pub payment_mode: Option<String>,
    #[serde(default)]
    pub detailed_payment_method: Option<String>,
    /// Shipping tax in major units. Absent when the marketplace did not
    /// charge shipping separately.
    #[serde(default)]
    pub shipping_tax: Option<f64>,
}

/// Customer block of a marketplace order.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MarketplaceCustomer {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_1: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    /// The marketplace sends this as a 0/1 flag.
    #[serde(default, deserialize_with = "de::bool_or_int")]
    pub legal_entity: bool,
    pub shipping_street: String,
    pub shipping_city: String,
    /// Region label, used as the key into the postal-code table.
    pub shipping_suburb: String,
    pub shipping_country: String,
}

/// A single order line.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MarketplaceOrderLine {
    #[serde(deserialize_with = "de::string_or_number")]
    pub product_id: String,
    /// Unit sale price in major units, tax excluded.
    #[serde(deserialize_with = "de::string_or_number")]
    pub sale_price: String,
    /// VAT rate as a decimal fraction, e.g. `"0.19"`.
    #[serde(deserialize_with = "de::string_or_number")]
    pub vat: String,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_deserializes_numeric_identifiers_and_flags() {
        let payload = serde_json::json!({
            "id": 939393,
            "customer": {
                "id": 120,
                "name": "Jane Q. Public",
                "phone_1": "+40700000000",
                "legal_entity": 1,
                "shipping_street": "Strada Exemplu 1",
                "shipping_city": "Cluj-Napoca",
                "shipping_suburb": "Cluj",
                "shipping_country": "RO"
            },
            "products": [
                { "product_id": 4422, "sale_price": 10.5, "vat": "0.19", "quantity": 2 }
            ],
            "payment_mode": "COD",
            "shipping_tax": 19.99
        });

        let order: MarketplaceOrder = serde_json::from_value(payload).expect("valid order");
        assert_eq!(order.id, "939393");
        assert_eq!(order.customer.id, "120");
        assert!(order.customer.legal_entity);
        assert_eq!(order.customer.email, None);
        assert_eq!(order.products[0].product_id, "4422");
        assert_eq!(order.products[0].sale_price, "10.5");
        assert_eq!(order.shipping_tax, Some(19.99));
    }

    #[test]
    fn shipping_tax_defaults_to_absent() {
        let payload = serde_json::json!({
            "id": "1",
            "customer": {
                "id": "c1",
                "name": "Ion Pop",
                "shipping_street": "s",
                "shipping_city": "c",
                "shipping_suburb": "Cluj",
                "shipping_country": "RO"
            },
            "products": []
        });

        let order: MarketplaceOrder = serde_json::from_value(payload).expect("valid order");
        assert_eq!(order.shipping_tax, None);
        assert!(!order.customer.legal_entity);
    }
}
