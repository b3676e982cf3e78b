/// Host application configuration, consumed once at [`crate::RecommendCore`]
/// construction.
///
/// `account_id` must be non-empty; `api_host` is handed to the API client
/// as-is. The value is not retained beyond extracting its fields.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct RecommendConfiguration {
    /// Recommend account identifier assigned to the host application.
    pub account_id: String,
    /// API host the SDK talks to, e.g. `api.recommend.pro`.
    pub api_host: String,
}
