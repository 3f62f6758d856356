//! HTTP client wrapper

use std::time::Duration;

use url::Url;

use crate::error::Error;

/// Thin wrapper over a shared `reqwest::Client`
///
/// Cloning is cheap and all clones share the same connection pool, so one
/// pre-configured client can back any number of
/// [`Request`](crate::Request) values concurrently.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Create a new HTTP client builder
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Create an HttpClient from an externally configured `reqwest::Client`
    pub fn from_reqwest(client: reqwest::Client) -> Self {
        Self { inner: client }
    }

    /// Get the inner reqwest client
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }
}

/// HTTP client builder for timeout, TLS, and proxy settings
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    accept_invalid_certs: bool,
    proxy: Option<Url>,
}

impl HttpClientBuilder {
    /// Set a total per-request timeout
    ///
    /// A send that exceeds it fails with [`Error::Timeout`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a connect timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Accept invalid TLS certificates
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Route all requests through a proxy
    pub fn proxy(mut self, url: Url) -> Self {
        self.proxy = Some(url);
        self
    }

    /// Build the HTTP client
    pub fn build(self) -> Result<HttpClient, Error> {
        let mut builder =
            reqwest::Client::builder().danger_accept_invalid_certs(self.accept_invalid_certs);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(proxy_url) = self.proxy {
            let proxy =
                reqwest::Proxy::all(proxy_url.as_str()).map_err(|e| Error::Proxy(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        let inner = builder.build().map_err(Error::ClientBuild)?;
        Ok(HttpClient { inner })
    }
}
