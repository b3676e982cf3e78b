//! Platform provider trait wiring the storage tiers and device identity.

use std::sync::Arc;

use super::{SecureCredentialStore, SettingsStore};

/// Provider responsible for platform-specific storage components and the
/// vendor-scoped device identifier.
///
/// Injected at [`crate::RecommendCore`] construction so the bootstrap logic
/// never touches ambient platform state, which keeps device-id resolution
/// deterministic under test.
#[uniffi::export(with_foreign)]
pub trait PlatformProvider: Send + Sync {
    /// Opens (or creates) the named settings-store suite.
    ///
    /// Returns `None` when the platform cannot provide the suite, which makes
    /// construction of the core fail.
    fn open_settings_store(&self, suite: String) -> Option<Arc<dyn SettingsStore>>;

    /// Returns the secure credential store implementation.
    fn secure_store(&self) -> Arc<dyn SecureCredentialStore>;

    /// Returns the platform vendor-scoped identifier, when available.
    fn vendor_identifier(&self) -> Option<String>;
}
