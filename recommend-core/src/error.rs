use thiserror::Error;

/// Error outputs from the Recommend SDK core.
#[derive(Debug, Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum RecommendError {
    /// The configured account id is empty
    #[error("invalid_account_id")]
    InvalidAccountId,
    /// The platform could not open the SDK's settings-store suite
    #[error("invalid_settings_store")]
    InvalidSettingsStore,
    /// Device-id resolution produced an empty value
    #[error("invalid_device_id: {device_id:?}")]
    InvalidDeviceId {
        /// The candidate value that failed validation, when one existed.
        device_id: Option<String>,
    },
    /// Network connection error with details
    #[error("network_error: {url} ({status:?}): {error}")]
    NetworkError {
        /// The URL the request targeted.
        url: String,
        /// HTTP status code, when a response was received.
        status: Option<u16>,
        /// Description of the failure.
        error: String,
    },
    /// Unexpected error serializing information
    #[error("serialization_error: {0}")]
    SerializationError(String),
}
