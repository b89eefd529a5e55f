//! Fire-and-forget product resynchronization trigger.

use std::sync::Arc;

use connector_env::logger;
use connector_models::{
    marketplace::MarketplaceOrderLine,
    products::{SyncStatus, TrackedProductMapping},
};

use crate::clients::ProductSyncClient;

/// Tracked products referenced by the order whose last synchronization did
/// not succeed.
pub fn pending_resync(
    tracked: &[TrackedProductMapping],
    used_lines: &[MarketplaceOrderLine],
) -> Vec<TrackedProductMapping> {
    tracked
        .iter()
        .filter(|mapping| {
            mapping.sync_status != SyncStatus::Success
                && used_lines
                    .iter()
                    .any(|line| line.product_id == mapping.marketplace_product_id)
        })
        .cloned()
        .collect()
}

/// Hands the pending mappings to a detached task. The order flow never
/// blocks on the outcome; failures are logged by the task itself instead of
/// being swallowed.
pub fn spawn_resync(
    client: Arc<dyn ProductSyncClient>,
    tracked: &[TrackedProductMapping],
    used_lines: &[MarketplaceOrderLine],
) {
    let pending = pending_resync(tracked, used_lines);
    if pending.is_empty() {
        return;
    }

    let product_ids: Vec<String> = pending
        .iter()
        .map(|mapping| mapping.marketplace_product_id.clone())
        .collect();

    tokio::spawn(async move {
        logger::info!(products = ?product_ids, "detached product resync started");
        if let Err(error) = client.sync_products(pending).await {
            logger::error!(?error, products = ?product_ids, "detached product resync failed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(product_id: &str, status: SyncStatus) -> TrackedProductMapping {
        TrackedProductMapping {
            id: format!("doc-{product_id}"),
            platform_sku_id: "55".to_string(),
            marketplace_product_id: product_id.to_string(),
            sync_status: status,
        }
    }

    fn line(product_id: &str) -> MarketplaceOrderLine {
        MarketplaceOrderLine {
            product_id: product_id.to_string(),
            sale_price: "1.00".to_string(),
            vat: "0".to_string(),
            quantity: 1,
        }
    }

    #[test]
    fn only_unsynced_products_referenced_by_the_order_are_pending() {
        let tracked = vec![
            mapping("P1", SyncStatus::Success),
            mapping("P2", SyncStatus::NotStarted),
            mapping("P3", SyncStatus::Failed),
        ];
        let used = vec![line("P1"), line("P2")];

        let pending = pending_resync(&tracked, &used);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].marketplace_product_id, "P2");
    }

    #[test]
    fn nothing_pending_when_everything_synced() {
        let tracked = vec![mapping("P1", SyncStatus::Success)];
        assert!(pending_resync(&tracked, &[line("P1")]).is_empty());
    }
}
