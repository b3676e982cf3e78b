//! Composition root of the SDK.
//!
//! Validates the host configuration, wires the customer-info cache and the
//! API client, and answers the device-identity and first-launch queries from
//! the two platform storage tiers.

use std::sync::{Arc, OnceLock};

use uuid::Uuid;

use crate::api::{ApiClient, ApiConfiguration};
use crate::config::RecommendConfiguration;
use crate::customer_info::CustomerInfo;
use crate::error::RecommendError;
use crate::storage::{
    PlatformProvider, SecureCredentialStore, SettingsStore, DEVICE_ID_KEY,
    IS_FIRST_LAUNCH_KEY, KEYCHAIN_ACCOUNT, KEYCHAIN_SERVICE, SETTINGS_SUITE,
};

/// The composition root of the SDK.
///
/// Created once per app lifetime from a validated [`RecommendConfiguration`]
/// and a [`PlatformProvider`]. Not documented as thread-safe: callers
/// serialize access to [`Self::get_device_id`], since device-id resolution
/// performs a non-atomic read-modify-write sequence across the two stores.
#[derive(uniffi::Object)]
pub struct RecommendCore {
    account_id: String,
    settings: Arc<dyn SettingsStore>,
    secure_store: Arc<dyn SecureCredentialStore>,
    provider: Arc<dyn PlatformProvider>,
    customer_info: CustomerInfo,
    api_client: ApiClient,
    first_launch: OnceLock<bool>,
}

#[uniffi::export]
impl RecommendCore {
    /// Validates `configuration` and wires the SDK components.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::InvalidAccountId`] when the configured
    /// account id is empty, and [`RecommendError::InvalidSettingsStore`] when
    /// the platform cannot open the SDK's settings suite. Both conditions are
    /// unrecoverable misconfiguration; the embedding application decides
    /// whether to abort.
    #[uniffi::constructor]
    pub fn new(
        configuration: &RecommendConfiguration,
        provider: Arc<dyn PlatformProvider>,
    ) -> Result<Arc<Self>, RecommendError> {
        if configuration.account_id.is_empty() {
            return Err(RecommendError::InvalidAccountId);
        }

        let settings = provider
            .open_settings_store(SETTINGS_SUITE.to_string())
            .ok_or(RecommendError::InvalidSettingsStore)?;

        let customer_info = CustomerInfo::new(Arc::clone(&settings));
        let api_client =
            ApiClient::new(&ApiConfiguration::new(configuration.api_host.clone()));

        log::debug!(
            "core initialized for account {} against {}",
            configuration.account_id,
            configuration.api_host
        );

        Ok(Arc::new(Self {
            account_id: configuration.account_id.clone(),
            settings,
            secure_store: provider.secure_store(),
            provider,
            customer_info,
            api_client,
            first_launch: OnceLock::new(),
        }))
    }

    /// The validated Recommend account identifier.
    #[must_use]
    pub fn account_id(&self) -> String {
        self.account_id.clone()
    }

    /// Removes any cached customer data. Best-effort; never fails outwardly.
    pub fn clear_customer_info(&self) {
        self.customer_info.clear();
    }

    /// Resolves the durable device identifier for this installation.
    ///
    /// Candidate sources, in priority order: the settings-store cache, the
    /// secure-store entry, the platform vendor identifier, a freshly
    /// generated UUID. The resolved value is persisted to the secure store
    /// only — the settings cache is cleared and the secure entry is
    /// removed and re-saved on every call, even when the value is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::InvalidDeviceId`] when resolution produces
    /// an empty value. Recoverable by the caller; nothing is persisted.
    pub fn get_device_id(&self) -> Result<String, RecommendError> {
        let stored_settings_id = self.settings.get_string(DEVICE_ID_KEY.to_string());
        let stored_secure_id = self
            .secure_store
            .get_item(KEYCHAIN_SERVICE.to_string(), KEYCHAIN_ACCOUNT.to_string());

        let device_id = if matches!(&stored_settings_id, Some(id) if !id.is_empty()) {
            log::debug!("device id resolved from settings cache");
            stored_settings_id
        } else if matches!(&stored_secure_id, Some(id) if !id.is_empty()) {
            log::debug!("device id resolved from secure store");
            stored_secure_id
        } else {
            log::debug!("device id resolved from platform identity");
            Some(
                self.provider
                    .vendor_identifier()
                    .unwrap_or_else(|| Uuid::new_v4().to_string()),
            )
        };

        match device_id {
            Some(device_id) if !device_id.is_empty() => {
                self.settings.remove(DEVICE_ID_KEY.to_string());
                self.secure_store.remove_item(
                    KEYCHAIN_SERVICE.to_string(),
                    KEYCHAIN_ACCOUNT.to_string(),
                );
                self.secure_store.save_item(
                    KEYCHAIN_SERVICE.to_string(),
                    KEYCHAIN_ACCOUNT.to_string(),
                    device_id.clone(),
                );
                Ok(device_id)
            }
            device_id => {
                log::warn!("device id resolution produced an empty value");
                Err(RecommendError::InvalidDeviceId { device_id })
            }
        }
    }

    /// Whether this is the first launch of the host application.
    ///
    /// Computed once per instance and cached for the instance's lifetime. The
    /// stored flag is flipped to `false` so that instances constructed
    /// afterwards report `false`.
    #[must_use]
    pub fn is_first_launch(&self) -> bool {
        *self
            .first_launch
            .get_or_init(|| self.resolve_first_launch())
    }
}

impl RecommendCore {
    /// Read-then-fix resolution of the persisted first-launch flag.
    fn resolve_first_launch(&self) -> bool {
        match self.settings.get_bool(IS_FIRST_LAUNCH_KEY.to_string()) {
            None | Some(true) => {
                self.settings.set_bool(IS_FIRST_LAUNCH_KEY.to_string(), false);
                true
            }
            Some(false) => false,
        }
    }

    /// The API client configured for this instance.
    #[must_use]
    pub const fn api_client(&self) -> &ApiClient {
        &self.api_client
    }

    /// The customer-info cache bound to this instance's settings store.
    #[must_use]
    pub const fn customer_info(&self) -> &CustomerInfo {
        &self.customer_info
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::storage::MemoryPlatform;

    fn configuration() -> RecommendConfiguration {
        RecommendConfiguration {
            account_id: "acct_1".to_string(),
            api_host: "api.recommend.pro".to_string(),
        }
    }

    fn core_on(platform: &Arc<MemoryPlatform>) -> Arc<RecommendCore> {
        let provider = Arc::clone(platform) as Arc<dyn PlatformProvider>;
        RecommendCore::new(&configuration(), provider).expect("construction")
    }

    #[test]
    fn test_empty_account_id_fails_construction() {
        let platform = Arc::new(MemoryPlatform::new());
        let config = RecommendConfiguration {
            account_id: String::new(),
            api_host: "api.recommend.pro".to_string(),
        };
        match RecommendCore::new(&config, platform as Arc<dyn PlatformProvider>) {
            Err(RecommendError::InvalidAccountId) => {}
            Err(err) => panic!("unexpected error: {err}"),
            Ok(_) => panic!("expected error"),
        }
    }

    #[test]
    fn test_unavailable_settings_store_fails_construction() {
        let platform = Arc::new(MemoryPlatform::new());
        platform.set_settings_available(false);
        match RecommendCore::new(
            &configuration(),
            platform as Arc<dyn PlatformProvider>,
        ) {
            Err(RecommendError::InvalidSettingsStore) => {}
            Err(err) => panic!("unexpected error: {err}"),
            Ok(_) => panic!("expected error"),
        }
    }

    #[test]
    fn test_construction_retains_account_id() {
        let platform = Arc::new(MemoryPlatform::new());
        let core = core_on(&platform);
        assert_eq!(core.account_id(), "acct_1");
    }

    #[test_case(Some("abc"), Some("xyz"), None => "abc"; "settings cache wins over secure store")]
    #[test_case(None, Some("xyz"), None => "xyz"; "secure store used when cache empty")]
    #[test_case(Some(""), Some("xyz"), None => "xyz"; "empty settings cache is skipped")]
    #[test_case(None, Some(""), Some("vendor-1") => "vendor-1"; "empty secure value is skipped")]
    #[test_case(None, None, Some("vendor-1") => "vendor-1"; "vendor identifier used when stores empty")]
    fn resolution_priority(
        settings_id: Option<&str>,
        secure_id: Option<&str>,
        vendor_id: Option<&str>,
    ) -> String {
        let platform = Arc::new(MemoryPlatform::new());
        if let Some(id) = settings_id {
            platform
                .settings
                .set_string(DEVICE_ID_KEY.to_string(), id.to_string());
        }
        if let Some(id) = secure_id {
            platform.secure.save_item(
                KEYCHAIN_SERVICE.to_string(),
                KEYCHAIN_ACCOUNT.to_string(),
                id.to_string(),
            );
        }
        platform.set_vendor_identifier(vendor_id.map(ToString::to_string));

        let core = core_on(&platform);
        core.get_device_id().expect("device id")
    }

    #[test]
    fn test_generated_ids_distinct_across_fresh_installs() {
        let first = core_on(&Arc::new(MemoryPlatform::new()))
            .get_device_id()
            .expect("device id");
        let second = core_on(&Arc::new(MemoryPlatform::new()))
            .get_device_id()
            .expect("device id");

        assert!(!first.is_empty());
        assert!(!second.is_empty());
        assert_ne!(first, second);
    }

    #[test]
    fn test_device_id_stable_but_rewrites_secure_store() {
        let platform = Arc::new(MemoryPlatform::new());
        let core = core_on(&platform);

        let first = core.get_device_id().expect("device id");
        let second = core.get_device_id().expect("device id");
        assert_eq!(first, second);

        // Idempotent observable result, non-idempotent store traffic.
        assert_eq!(platform.secure.save_count(), 2);
    }

    #[test]
    fn test_device_id_promoted_from_settings_to_secure_store() {
        let platform = Arc::new(MemoryPlatform::new());
        platform
            .settings
            .set_string(DEVICE_ID_KEY.to_string(), "abc".to_string());

        let core = core_on(&platform);
        assert_eq!(core.get_device_id().expect("device id"), "abc");

        // The settings cache is cleared; the secure store is now the owner.
        assert!(!platform.settings.contains(DEVICE_ID_KEY));
        assert_eq!(
            platform
                .secure
                .get_item(KEYCHAIN_SERVICE.to_string(), KEYCHAIN_ACCOUNT.to_string()),
            Some("abc".to_string())
        );
    }

    #[test]
    fn test_empty_vendor_identifier_is_invalid() {
        let platform = Arc::new(MemoryPlatform::new());
        platform.set_vendor_identifier(Some(String::new()));

        let core = core_on(&platform);
        match core.get_device_id() {
            Err(RecommendError::InvalidDeviceId { device_id }) => {
                assert_eq!(device_id, Some(String::new()));
            }
            other => panic!("expected InvalidDeviceId, got {other:?}"),
        }
        // Nothing was persisted on the failure path.
        assert!(platform.secure.is_empty());
    }

    #[test]
    fn test_first_launch_sequence() {
        let platform = Arc::new(MemoryPlatform::new());

        let first_instance = core_on(&platform);
        assert!(first_instance.is_first_launch());
        assert!(first_instance.is_first_launch());
        assert_eq!(
            platform.settings.get_bool(IS_FIRST_LAUNCH_KEY.to_string()),
            Some(false)
        );

        let second_instance = core_on(&platform);
        assert!(!second_instance.is_first_launch());
    }

    #[test]
    fn test_first_launch_cached_for_instance_lifetime() {
        let platform = Arc::new(MemoryPlatform::new());
        let core = core_on(&platform);
        assert!(core.is_first_launch());

        // External flag changes do not affect the memoized value.
        platform
            .settings
            .set_bool(IS_FIRST_LAUNCH_KEY.to_string(), true);
        assert!(core.is_first_launch());
    }

    #[test]
    fn test_clear_customer_info() {
        let platform = Arc::new(MemoryPlatform::new());
        let core = core_on(&platform);

        core.customer_info().store(&crate::CachedCustomer {
            customer_id: Some("cus_9".to_string()),
            email: None,
        });
        assert!(core.customer_info().cached().is_some());

        core.clear_customer_info();
        assert!(core.customer_info().cached().is_none());
    }
}
