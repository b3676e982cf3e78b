//! API client plumbing for the configured Recommend host.

use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use reqwest::{Method, RequestBuilder, Response};

use crate::error::RecommendError;

/// Configuration for the API client, derived from the host configuration's
/// `api_host` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfiguration {
    /// API host, with or without a scheme.
    pub host: String,
}

impl ApiConfiguration {
    /// Creates a configuration for `host`.
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// Base URL for the configured host. Schemeless hosts get `https://`.
    #[must_use]
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }
}

/// A simple wrapper on an HTTP client bound to the configured Recommend API
/// host. Sets sensible defaults such as timeouts, user-agent & ensuring
/// HTTPS, and applies retry middleware for transient failures.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    max_retries: u32,
}

impl ApiClient {
    /// Initializes a new `ApiClient` for the configured host.
    pub(crate) fn new(configuration: &ApiConfiguration) -> Self {
        let client = reqwest::Client::new();
        let timeout = Duration::from_secs(5);
        let max_retries = 3; // total attempts = 4
        Self {
            client,
            base_url: configuration.base_url(),
            timeout,
            max_retries,
        }
    }

    /// Absolute URL for `path` under the configured host.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Creates a request builder with defaults applied.
    #[must_use]
    pub fn req(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.endpoint(path);
        #[cfg(not(test))]
        assert!(url.starts_with("https"));

        self.client
            .request(method, url)
            .timeout(self.timeout)
            .header(
                "User-Agent",
                format!("recommend-core/{}", env!("CARGO_PKG_VERSION")),
            )
    }

    /// Creates a GET request builder with defaults applied.
    #[must_use]
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.req(Method::GET, path)
    }

    /// Creates a POST request builder with defaults applied.
    #[must_use]
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.req(Method::POST, path)
    }

    /// Sends a request built by `req`/`get`/`post`, retrying transient
    /// failures (429, 5xx, timeouts) with exponential backoff.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::NetworkError`] when the request cannot be
    /// built, fails permanently, or keeps failing once retries are exhausted.
    pub async fn handle(
        &self,
        request_builder: RequestBuilder,
    ) -> Result<Response, RecommendError> {
        // Streaming bodies cannot be cloned for replay; send those once.
        let Some(template) = request_builder.try_clone() else {
            return execute(request_builder).await.map_err(Into::into);
        };

        let backoff = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(200))
            .with_max_delay(Duration::from_secs(2))
            .with_max_times(self.max_retries as usize);

        (|| async {
            let attempt = template.try_clone().ok_or_else(|| {
                AttemptError::permanent(
                    "<unknown>".to_string(),
                    None,
                    "request cannot be retried because it is not cloneable".to_string(),
                )
            })?;
            execute(attempt).await
        })
        .retry(backoff)
        .when(AttemptError::is_retryable)
        .await
        .map_err(Into::into)
    }
}

#[derive(Debug)]
struct AttemptError {
    url: String,
    status: Option<u16>,
    error: String,
    retryable: bool,
}

impl AttemptError {
    fn retryable(url: String, status: Option<u16>, error: String) -> Self {
        Self {
            url,
            status,
            error,
            retryable: true,
        }
    }

    fn permanent(url: String, status: Option<u16>, error: String) -> Self {
        Self {
            url,
            status,
            error,
            retryable: false,
        }
    }

    const fn is_retryable(&self) -> bool {
        self.retryable
    }
}

impl From<AttemptError> for RecommendError {
    fn from(value: AttemptError) -> Self {
        Self::NetworkError {
            url: value.url,
            status: value.status,
            error: value.error,
        }
    }
}

async fn execute(request_builder: RequestBuilder) -> Result<Response, AttemptError> {
    let (client, request) = request_builder.build_split();
    let request = request.map_err(|err| {
        AttemptError::permanent(
            err.url()
                .map_or_else(|| "<unknown>".to_string(), ToString::to_string),
            None,
            format!("request build failed: {err}"),
        )
    })?;
    let url = request.url().to_string();

    match client.execute(request).await {
        Ok(resp) => {
            let status = resp.status().as_u16();
            if status == 429 || (500..600).contains(&status) {
                return Err(AttemptError::retryable(
                    url,
                    Some(status),
                    format!("request error with bad status code {status}"),
                ));
            }
            Ok(resp)
        }
        Err(err) => {
            if err.is_timeout() || err.is_connect() {
                return Err(AttemptError::retryable(
                    url,
                    None,
                    format!("request timeout/connect error: {err}"),
                ));
            }

            Err(AttemptError::permanent(
                url,
                None,
                format!("request failed: {err}"),
            ))
        }
    }
}
