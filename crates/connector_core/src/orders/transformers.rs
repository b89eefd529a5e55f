//! Field-by-field mapping from the marketplace order schema to the platform
//! order-creation schema.

use connector_models::{
    marketplace::{MarketplaceCustomer, MarketplaceOrderLine},
    platform::{
        ClientProfileData, ItemAttachment, LogisticsLine, LogisticsQuote, PlatformAddress,
        PlatformOrderItem, ShippingSla, SimulationItem,
    },
};
use error_stack::report;

use crate::{
    consts,
    errors::{CustomResult, OrderError},
};

/// Platform item price in minor units: `round(sale_price × (1 + vat) × 100)`.
fn line_price_minor_units(line: &MarketplaceOrderLine) -> CustomResult<i64, OrderError> {
    let sale_price: f64 = line.sale_price.parse().map_err(|_| {
        report!(OrderError::MalformedLine {
            product_id: line.product_id.clone(),
            field: "sale_price",
        })
    })?;
    let vat: f64 = line.vat.parse().map_err(|_| {
        report!(OrderError::MalformedLine {
            product_id: line.product_id.clone(),
            field: "vat",
        })
    })?;

    Ok((sale_price * (1.0 + vat) * 100.0).round() as i64)
}

/// Maps matched order lines onto platform items. The configured prefix is
/// stripped once from the marketplace product id to obtain the platform SKU;
/// all marketplace items ship from the single default seller.
pub fn build_order_items(
    lines: &[MarketplaceOrderLine],
    product_id_prefix: &str,
) -> CustomResult<Vec<PlatformOrderItem>, OrderError> {
    lines
        .iter()
        .map(|line| {
            let id = if product_id_prefix.is_empty() {
                line.product_id.clone()
            } else {
                line.product_id.replacen(product_id_prefix, "", 1)
            };

            Ok(PlatformOrderItem {
                attachments: Vec::new(),
                bundle_items: Vec::new(),
                commission: 0,
                freight_commission: 0,
                id,
                is_gift: false,
                item_attachment: ItemAttachment {
                    content: serde_json::json!({}),
                    name: None,
                },
                measurement_unit: None,
                price: line_price_minor_units(line)?,
                quantity: line.quantity,
                seller: consts::DEFAULT_SELLER_ID.to_string(),
                unit_multiplier: 0,
            })
        })
        .collect()
}

/// Simulation view of the mapped items.
pub fn simulation_items(items: &[PlatformOrderItem]) -> Vec<SimulationItem> {
    items
        .iter()
        .map(|item| SimulationItem {
            id: item.id.clone(),
            quantity: item.quantity,
            seller: item.seller.clone(),
        })
        .collect()
}

/// Splits a full name the way the platform profile expects: the last token
/// becomes the last name, tokens from index 1 on (last included) become the
/// first name. "Jane Q. Public" therefore yields ("Q. Public", "Public").
pub fn split_client_name(name: &str) -> (String, String) {
    let tokens: Vec<&str> = name.split(' ').collect();
    let last_name = tokens.last().copied().unwrap_or_default().to_string();
    let first_name = tokens.get(1..).unwrap_or_default().join(" ");
    (first_name, last_name)
}

/// The platform uses ISO 3166-1 alpha-3; the marketplace sends alpha-2 for
/// the domestic country only, everything else already arrives as alpha-3.
pub fn map_country_code(code: &str) -> String {
    if code == "RO" {
        "ROU".to_string()
    } else {
        code.to_string()
    }
}

/// Client profile of the order. Corporate fields are populated only for
/// legal entities; a placeholder email is synthesized from the order id
/// when the customer has none.
pub fn build_client_profile(customer: &MarketplaceCustomer, order_id: &str) -> ClientProfileData {
    let (first_name, last_name) = split_client_name(&customer.name);

    ClientProfileData {
        corporate_document: None,
        corporate_name: customer
            .legal_entity
            .then(|| customer.company.clone())
            .flatten(),
        corporate_phone: None,
        document: customer.id.clone(),
        document_type: None,
        email: customer.email.clone().unwrap_or_else(|| {
            format!(
                "marketplace-customer-{}@{}",
                order_id,
                consts::PLACEHOLDER_EMAIL_DOMAIN
            )
        }),
        id: consts::CLIENT_PROFILE_SECTION_ID.to_string(),
        is_corporate: customer.legal_entity,
        last_name,
        first_name,
        phone: customer.phone_1.clone(),
        state_inscription: None,
        trade_name: None,
        user_profile_id: None,
    }
}

/// Shipping address of the order. The marketplace has no address-id notion,
/// so the street doubles as the identifier, matching what the platform
/// stores for connector-created orders.
pub fn build_shipping_address(
    customer: &MarketplaceCustomer,
    postal_code: Option<String>,
) -> PlatformAddress {
    PlatformAddress {
        address_id: customer.shipping_street.clone(),
        address_type: consts::ADDRESS_TYPE_RESIDENTIAL.to_string(),
        city: customer.shipping_city.clone(),
        complement: None,
        country: map_country_code(&customer.shipping_country),
        geo_coordinates: Vec::new(),
        neighborhood: None,
        number: None,
        postal_code,
        receiver_name: customer.name.clone(),
        reference: None,
        state: customer.shipping_suburb.clone(),
        street: customer.shipping_street.clone(),
    }
}

/// The quoted offer reserved for this marketplace, if the platform returned
/// one for the first item.
pub fn select_marketplace_sla(quotes: &[LogisticsQuote]) -> Option<&ShippingSla> {
    quotes
        .first()?
        .slas
        .iter()
        .find(|sla| sla.id == consts::MARKETPLACE_SLA_ID)
}

/// Applies the selected SLA to every quoted item index. The logistics price
/// is the order's shipping tax converted to minor units when the
/// marketplace sent one (zero included); only an absent field falls back to
/// the quoted SLA price.
pub fn build_logistics_lines(
    quotes: &[LogisticsQuote],
    sla: &ShippingSla,
    shipping_tax: Option<f64>,
) -> Vec<LogisticsLine> {
    let price = shipping_tax.map_or(sla.price, |tax| (tax * 100.0).round() as i64);

    quotes
        .iter()
        .map(|quote| LogisticsLine {
            delivery_window: sla.available_delivery_windows.first().cloned(),
            item_index: quote.item_index,
            lock_ttl: consts::LOGISTICS_LOCK_TTL.to_string(),
            price,
            selected_sla: sla.id.clone(),
            shipping_estimate: sla.shipping_estimate.clone(),
        })
        .collect()
}

/// Total payable: item line totals plus all logistics-line prices.
pub fn payment_total(items: &[PlatformOrderItem], logistics: &[LogisticsLine]) -> i64 {
    let item_total: i64 = items
        .iter()
        .map(|item| item.price * i64::from(item.quantity))
        .sum();
    let logistics_total: i64 = logistics.iter().map(|line| line.price).sum();
    item_total + logistics_total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: &str, sale_price: &str, vat: &str, quantity: u32) -> MarketplaceOrderLine {
        MarketplaceOrderLine {
            product_id: product_id.to_string(),
            sale_price: sale_price.to_string(),
            vat: vat.to_string(),
            quantity,
        }
    }

    fn customer() -> MarketplaceCustomer {
        MarketplaceCustomer {
            id: "120".to_string(),
            name: "Jane Q. Public".to_string(),
            email: None,
            phone_1: Some("+40700000000".to_string()),
            company: Some("Acme SRL".to_string()),
            legal_entity: false,
            shipping_street: "Strada Exemplu 1".to_string(),
            shipping_city: "Cluj-Napoca".to_string(),
            shipping_suburb: "Cluj".to_string(),
            shipping_country: "RO".to_string(),
        }
    }

    fn sla(price: i64) -> ShippingSla {
        ShippingSla {
            id: consts::MARKETPLACE_SLA_ID.to_string(),
            price,
            shipping_estimate: Some("2bd".to_string()),
            available_delivery_windows: Vec::new(),
        }
    }

    fn quote(item_index: u32, slas: Vec<ShippingSla>) -> LogisticsQuote {
        LogisticsQuote { item_index, slas }
    }

    #[test]
    fn item_price_is_vat_inclusive_minor_units() {
        let items =
            build_order_items(&[line("P1", "10.00", "0.19", 2)], "").expect("valid lines");
        assert_eq!(items[0].price, 1190);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].seller, "1");
    }

    #[test]
    fn product_id_prefix_is_stripped_once() {
        let items =
            build_order_items(&[line("MKP-MKP-77", "1.00", "0", 1)], "MKP-").expect("valid lines");
        assert_eq!(items[0].id, "MKP-77");
    }

    #[test]
    fn malformed_sale_price_is_reported_with_the_line() {
        let error = build_order_items(&[line("P9", "ten", "0.19", 1)], "")
            .expect_err("must fail");
        assert!(matches!(
            error.current_context(),
            OrderError::MalformedLine { field: "sale_price", .. }
        ));
    }

    #[test]
    fn name_splits_from_index_one() {
        assert_eq!(
            split_client_name("Jane Q. Public"),
            ("Q. Public".to_string(), "Public".to_string())
        );
        assert_eq!(
            split_client_name("Madonna"),
            (String::new(), "Madonna".to_string())
        );
    }

    #[test]
    fn domestic_country_code_maps_to_alpha3() {
        assert_eq!(map_country_code("RO"), "ROU");
        assert_eq!(map_country_code("HUN"), "HUN");
        assert_eq!(map_country_code("DE"), "DE");
    }

    #[test]
    fn missing_email_synthesizes_a_placeholder_from_the_order_id() {
        let profile = build_client_profile(&customer(), "939393");
        assert_eq!(
            profile.email,
            "marketplace-customer-939393@orders.invalid"
        );
        assert_eq!(profile.last_name, "Public");
        assert_eq!(profile.first_name, "Q. Public");
        assert!(!profile.is_corporate);
        assert_eq!(profile.corporate_name, None);
    }

    #[test]
    fn legal_entity_populates_corporate_name() {
        let mut corporate = customer();
        corporate.legal_entity = true;
        corporate.email = Some("office@acme.ro".to_string());

        let profile = build_client_profile(&corporate, "939393");
        assert!(profile.is_corporate);
        assert_eq!(profile.corporate_name, Some("Acme SRL".to_string()));
        assert_eq!(profile.email, "office@acme.ro");
    }

    #[test]
    fn shipping_tax_present_overrides_the_quoted_price() {
        let lines = build_logistics_lines(&[quote(0, vec![sla(1500)])], &sla(1500), Some(19.99));
        assert_eq!(lines[0].price, 1999);
        assert_eq!(lines[0].selected_sla, consts::MARKETPLACE_SLA_ID);
        assert_eq!(lines[0].lock_ttl, "7bd");
    }

    #[test]
    fn zero_shipping_tax_still_counts_as_present() {
        let lines = build_logistics_lines(&[quote(0, vec![sla(1500)])], &sla(1500), Some(0.0));
        assert_eq!(lines[0].price, 0);
    }

    #[test]
    fn absent_shipping_tax_falls_back_to_the_quoted_price() {
        let lines = build_logistics_lines(&[quote(0, vec![sla(1500)])], &sla(1500), None);
        assert_eq!(lines[0].price, 1500);
    }

    #[test]
    fn sla_selection_requires_the_marketplace_tag() {
        let other = ShippingSla {
            id: "standard".to_string(),
            price: 900,
            shipping_estimate: None,
            available_delivery_windows: Vec::new(),
        };
        assert!(select_marketplace_sla(&[quote(0, vec![other])]).is_none());
        assert!(select_marketplace_sla(&[]).is_none());

        let quotes = [quote(0, vec![sla(1500)])];
        assert_eq!(
            select_marketplace_sla(&quotes).map(|s| s.price),
            Some(1500)
        );
    }

    #[test]
    fn payment_total_sums_lines_and_logistics() {
        let items =
            build_order_items(&[line("P1", "10.00", "0.19", 2)], "").expect("valid lines");
        let logistics = build_logistics_lines(&[quote(0, vec![sla(1500)])], &sla(1500), None);
        assert_eq!(payment_total(&items, &logistics), 2 * 1190 + 1500);
    }
}
