//! Locally-tracked product records correlating the two catalogs.

use serde::{Deserialize, Serialize};

use crate::de;

/// Synchronization state of a tracked product, as persisted in the platform
/// document store. Unknown wire values collapse into [`SyncStatus::Failed`].
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum SyncStatus {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "NOT_STARTED")]
    NotStarted,
    #[serde(other, rename = "FAILED")]
    Failed,
}

/// Persisted record linking a marketplace product id to a platform SKU.
/// Read-only here; mutated only by the product synchronization routine.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedProductMapping {
    pub id: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub platform_sku_id: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub marketplace_product_id: String,
    pub sync_status: SyncStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sync_status_collapses_to_failed() {
        let payload = serde_json::json!({
            "id": "doc-1",
            "platformSkuId": 55,
            "marketplaceProductId": "4422",
            "syncStatus": "SOMETHING_ELSE"
        });

        let mapping: TrackedProductMapping =
            serde_json::from_value(payload).expect("valid mapping");
        assert_eq!(mapping.platform_sku_id, "55");
        assert_eq!(mapping.sync_status, SyncStatus::Failed);
    }
}
