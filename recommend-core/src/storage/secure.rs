//! Secure credential store trait for platform secret storage.

/// Platform secure storage for small secrets, keyed by (service, account)
/// pairs.
///
/// Treated as a simple at-most-one-value-per-key store. No versioning and no
/// concurrency control; callers serialize access.
///
/// Platform implementations should use the hardware-backed secret store where
/// available:
/// - iOS: Keychain Services with `kSecAttrAccessibleAfterFirstUnlock`
/// - Android: Android Keystore backed `EncryptedSharedPreferences`
#[uniffi::export(with_foreign)]
pub trait SecureCredentialStore: Send + Sync {
    /// Returns the value stored under (`service`, `account`), if present.
    fn get_item(&self, service: String, account: String) -> Option<String>;

    /// Stores `data` under (`service`, `account`), replacing any existing
    /// value. Best-effort.
    fn save_item(&self, service: String, account: String, data: String);

    /// Removes the value stored under (`service`, `account`). Best-effort.
    fn remove_item(&self, service: String, account: String);
}
