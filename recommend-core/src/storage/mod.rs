//! Platform storage access for the SDK.
//!
//! The bootstrap and identity logic is platform-agnostic. The two storage
//! tiers it depends on are abstracted behind traits the embedding platform
//! implements:
//!
//! - [`SettingsStore`] — fast, non-secure, app-scoped key-value storage
//! - [`SecureCredentialStore`] — platform secure storage for small secrets
//! - [`PlatformProvider`] — hands out the two stores and the vendor identifier
//!
//! The tiers stay distinct because the device-id resolution algorithm depends
//! on their different durability: the secure store survives settings resets,
//! while the settings cache is transient.
//!
//! # Platform Implementations
//!
//! ## iOS (Swift)
//! - `SettingsStore`: `UserDefaults(suiteName:)`
//! - `SecureCredentialStore`: Keychain Services
//! - vendor identifier: `UIDevice.identifierForVendor`
//!
//! ## Android (Kotlin)
//! - `SettingsStore`: `SharedPreferences`
//! - `SecureCredentialStore`: Android Keystore backed `EncryptedSharedPreferences`
//! - vendor identifier: `Settings.Secure.ANDROID_ID`

mod memory;
mod provider;
mod secure;
mod settings;

pub use memory::{MemoryPlatform, MemorySecureStore, MemorySettingsStore};
pub use provider::PlatformProvider;
pub use secure::SecureCredentialStore;
pub use settings::SettingsStore;

/// Settings-store suite the SDK scopes its keys under.
pub const SETTINGS_SUITE: &str = "Recommend";

/// Settings-store key holding the transient device-id cache.
pub const DEVICE_ID_KEY: &str = "DEVICE_ID";

/// Settings-store key holding the persisted first-launch flag.
pub const IS_FIRST_LAUNCH_KEY: &str = "IS_FIRST_LAUNCH";

/// Settings-store key holding the serialized customer-info cache.
pub const CUSTOMER_INFO_KEY: &str = "CUSTOMER_INFO";

/// Secure-store service identifier for the durable device id.
pub const KEYCHAIN_SERVICE: &str = "Recommend_keychain_service";

/// Secure-store account identifier for the durable device id.
pub const KEYCHAIN_ACCOUNT: &str = "Recommend_keychain_account";
