//! Cached customer state backed by the settings store.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::storage::{SettingsStore, CUSTOMER_INFO_KEY};

/// Customer attributes the SDK caches between launches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct CachedCustomer {
    /// Identifier assigned by the Recommend platform, when known.
    pub customer_id: Option<String>,
    /// Email the host application attributed to the customer, when known.
    pub email: Option<String>,
}

/// Owns cached customer-related state in the settings store.
///
/// Every operation is best-effort: store-level failures are swallowed here,
/// matching the store's own contract.
pub struct CustomerInfo {
    settings: Arc<dyn SettingsStore>,
}

impl CustomerInfo {
    pub(crate) fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self { settings }
    }

    /// Returns the cached customer record, if one is present and readable.
    #[must_use]
    pub fn cached(&self) -> Option<CachedCustomer> {
        let raw = self.settings.get_string(CUSTOMER_INFO_KEY.to_string())?;
        match serde_json::from_str(&raw) {
            Ok(customer) => Some(customer),
            Err(err) => {
                log::warn!("discarding unreadable customer-info cache: {err}");
                None
            }
        }
    }

    /// Stores `customer` as the cached record, replacing any existing one.
    pub fn store(&self, customer: &CachedCustomer) {
        match serde_json::to_string(customer) {
            Ok(raw) => self.settings.set_string(CUSTOMER_INFO_KEY.to_string(), raw),
            Err(err) => log::warn!("failed to serialize customer-info cache: {err}"),
        }
    }

    /// Removes any cached customer data from the settings store.
    pub fn clear(&self) {
        self.settings.remove(CUSTOMER_INFO_KEY.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySettingsStore;

    fn customer_info() -> (Arc<MemorySettingsStore>, CustomerInfo) {
        let settings = Arc::new(MemorySettingsStore::new());
        let info = CustomerInfo::new(Arc::clone(&settings) as Arc<dyn SettingsStore>);
        (settings, info)
    }

    #[test]
    fn test_store_and_read_back() {
        let (_, info) = customer_info();
        assert!(info.cached().is_none());

        let customer = CachedCustomer {
            customer_id: Some("cus_123".to_string()),
            email: Some("a@example.com".to_string()),
        };
        info.store(&customer);
        assert_eq!(info.cached(), Some(customer));
    }

    #[test]
    fn test_clear_removes_cached_data() {
        let (settings, info) = customer_info();
        info.store(&CachedCustomer::default());
        assert!(settings.contains(CUSTOMER_INFO_KEY));

        info.clear();
        assert!(info.cached().is_none());
        assert!(!settings.contains(CUSTOMER_INFO_KEY));
    }

    #[test]
    fn test_unreadable_cache_is_discarded() {
        let (settings, info) = customer_info();
        settings.set_string(CUSTOMER_INFO_KEY.to_string(), "not json".to_string());
        assert!(info.cached().is_none());
    }
}
