//! Settings-store trait for app-scoped scalar storage.

/// Fast, non-secure, app-scoped persistent key-value storage for simple
/// scalars.
///
/// Absence of a key is `None`, never an error. Writes are best-effort; the
/// SDK does not observe write failures, matching the contract of the backing
/// platform stores (`UserDefaults`, `SharedPreferences`).
#[uniffi::export(with_foreign)]
pub trait SettingsStore: Send + Sync {
    /// Returns the string stored under `key`, if one is present.
    ///
    /// A value of a different type under the same key is reported as absent.
    fn get_string(&self, key: String) -> Option<String>;

    /// Stores `value` under `key`, replacing any existing value.
    fn set_string(&self, key: String, value: String);

    /// Returns the boolean stored under `key`, if one is present.
    fn get_bool(&self, key: String) -> Option<bool>;

    /// Stores `value` under `key`, replacing any existing value.
    fn set_bool(&self, key: String, value: bool);

    /// Removes any value stored under `key`.
    fn remove(&self, key: String);
}
