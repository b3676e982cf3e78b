//! In-memory implementations of the platform traits for testing.
//!
//! These implementations are NOT durable and NOT secure. They are designed
//! for unit and integration testing of the bootstrap logic without touching
//! real platform storage.

// Allow certain clippy lints for test-only code
#![allow(clippy::missing_panics_doc)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use super::{PlatformProvider, SecureCredentialStore, SettingsStore};

/// A scalar stored in the in-memory settings store.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SettingValue {
    Str(String),
    Bool(bool),
}

/// In-memory settings store backed by a `HashMap`.
///
/// Typed reads mirror the platform stores: a value of the wrong type under a
/// key is reported as absent.
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, SettingValue>>,
}

impl MemorySettingsStore {
    /// Creates a new empty settings store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Returns `true` if a value of any type is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.read().unwrap().contains_key(key)
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.read().unwrap().len()
    }

    /// Returns `true` if no values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.read().unwrap().is_empty()
    }

    /// Clears all stored values.
    pub fn clear(&self) {
        self.values.write().unwrap().clear();
    }
}

impl Default for MemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_string(&self, key: String) -> Option<String> {
        match self.values.read().unwrap().get(&key) {
            Some(SettingValue::Str(value)) => Some(value.clone()),
            _ => None,
        }
    }

    fn set_string(&self, key: String, value: String) {
        self.values
            .write()
            .unwrap()
            .insert(key, SettingValue::Str(value));
    }

    fn get_bool(&self, key: String) -> Option<bool> {
        match self.values.read().unwrap().get(&key) {
            Some(SettingValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    fn set_bool(&self, key: String, value: bool) {
        self.values
            .write()
            .unwrap()
            .insert(key, SettingValue::Bool(value));
    }

    fn remove(&self, key: String) {
        self.values.write().unwrap().remove(&key);
    }
}

/// In-memory secure credential store backed by a `HashMap`.
///
/// Tracks save calls so tests can assert on store traffic.
pub struct MemorySecureStore {
    items: RwLock<HashMap<(String, String), String>>,
    save_count: Mutex<u64>,
}

impl MemorySecureStore {
    /// Creates a new empty secure store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
            save_count: Mutex::new(0),
        }
    }

    /// Returns the number of stored items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.read().unwrap().len()
    }

    /// Returns `true` if no items are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.read().unwrap().is_empty()
    }

    /// Returns the number of times `save_item` has been called.
    #[must_use]
    pub fn save_count(&self) -> u64 {
        *self.save_count.lock().unwrap()
    }

    /// Clears all stored items and the save counter.
    pub fn clear(&self) {
        self.items.write().unwrap().clear();
        *self.save_count.lock().unwrap() = 0;
    }
}

impl Default for MemorySecureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureCredentialStore for MemorySecureStore {
    fn get_item(&self, service: String, account: String) -> Option<String> {
        self.items.read().unwrap().get(&(service, account)).cloned()
    }

    fn save_item(&self, service: String, account: String, data: String) {
        self.items.write().unwrap().insert((service, account), data);
        *self.save_count.lock().unwrap() += 1;
    }

    fn remove_item(&self, service: String, account: String) {
        self.items.write().unwrap().remove(&(service, account));
    }
}

/// Combines the in-memory implementations for easy test setup.
///
/// The vendor identifier and settings-store availability are configurable so
/// tests can drive every branch of device-id resolution and construction.
pub struct MemoryPlatform {
    /// In-memory settings store handed out for any suite.
    pub settings: Arc<MemorySettingsStore>,
    /// In-memory secure credential store.
    pub secure: Arc<MemorySecureStore>,
    vendor_identifier: RwLock<Option<String>>,
    settings_available: RwLock<bool>,
}

impl MemoryPlatform {
    /// Creates a new memory platform with empty stores and no vendor
    /// identifier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: Arc::new(MemorySettingsStore::new()),
            secure: Arc::new(MemorySecureStore::new()),
            vendor_identifier: RwLock::new(None),
            settings_available: RwLock::new(true),
        }
    }

    /// Sets the vendor identifier reported to the core.
    pub fn set_vendor_identifier(&self, identifier: Option<String>) {
        *self.vendor_identifier.write().unwrap() = identifier;
    }

    /// Controls whether `open_settings_store` succeeds.
    pub fn set_settings_available(&self, available: bool) {
        *self.settings_available.write().unwrap() = available;
    }

    /// Clears all stored data (useful for test isolation).
    pub fn reset(&self) {
        self.settings.clear();
        self.secure.clear();
        *self.vendor_identifier.write().unwrap() = None;
        *self.settings_available.write().unwrap() = true;
    }
}

impl Default for MemoryPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformProvider for MemoryPlatform {
    fn open_settings_store(&self, _suite: String) -> Option<Arc<dyn SettingsStore>> {
        if *self.settings_available.read().unwrap() {
            Some(Arc::clone(&self.settings) as Arc<dyn SettingsStore>)
        } else {
            None
        }
    }

    fn secure_store(&self) -> Arc<dyn SecureCredentialStore> {
        Arc::clone(&self.secure) as Arc<dyn SecureCredentialStore>
    }

    fn vendor_identifier(&self) -> Option<String> {
        self.vendor_identifier.read().unwrap().clone()
    }
}
