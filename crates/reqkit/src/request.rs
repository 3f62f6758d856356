//! Reusable HTTP request with stored response state

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::client::HttpClient;
use crate::error::Error;
use crate::method::Method;

const CONTENT_TYPE: &str = "content-type";
const CONTENT_TYPE_JSON: &str = "application/json";

/// Fixed delay between retry attempts
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// A reusable HTTP request
///
/// Holds the target URL, headers, query parameters, and an optional JSON
/// body, plus the raw bytes and status code of the last response. Each
/// successful send overwrites the stored response state, so the same value
/// can be driven through several verb calls in sequence.
///
/// HTTP status codes are never errors here: a 4xx or 5xx response is a
/// completed send whose status the caller inspects via [`status`] or the
/// status-class helpers.
///
/// A `Request` is not meant for concurrent use. For parallel calls, clone
/// one request per in-flight call; the backing [`HttpClient`] is shared by
/// the clones and is safe to use from many tasks.
///
/// [`status`]: Self::status
#[derive(Debug, Clone)]
pub struct Request {
    url: String,
    headers: Vec<(String, String)>,
    params: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    json_content: bool,
    client: HttpClient,
    response_body: Vec<u8>,
    response_status: Option<u16>,
}

impl Request {
    /// Create a request targeting `url`, backed by a default client
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            params: Vec::new(),
            body: None,
            json_content: false,
            client: HttpClient::new(),
            response_body: Vec::new(),
            response_status: None,
        }
    }

    /// Use a pre-configured client for all sends from this request
    pub fn with_client(mut self, client: HttpClient) -> Self {
        self.client = client;
        self
    }

    /// Add a header
    ///
    /// Headers are applied in insertion order and additively; repeating a
    /// name sends multiple values, nothing is deduplicated.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter
    ///
    /// Parameters are percent-encoded and appended to the query string after
    /// any pairs already present in the URL, which are preserved.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Send `content-type: application/json` ahead of the explicit headers
    pub fn json_content(mut self) -> Self {
        self.json_content = true;
        self
    }

    /// Capture a JSON body
    ///
    /// The body is sent for POST, PUT, and PATCH; GET and DELETE ignore it.
    /// Setting a body does not imply [`json_content`](Self::json_content).
    pub fn json_body<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, Error> {
        self.body = Some(serde_json::to_value(body).map_err(Error::Serialization)?);
        Ok(self)
    }

    /// Target URL as given
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Status code of the last response, if any
    pub fn status(&self) -> Option<u16> {
        self.response_status
    }

    /// Raw bytes of the last response body (empty before any send)
    pub fn response_body(&self) -> &[u8] {
        &self.response_body
    }

    /// Whether the last response had a 2xx status
    pub fn is_success(&self) -> bool {
        self.response_status
            .is_some_and(|status| (200..300).contains(&status))
    }

    /// Whether the last response had a 4xx status
    pub fn is_client_error(&self) -> bool {
        self.response_status
            .is_some_and(|status| (400..500).contains(&status))
    }

    /// Whether the last response had a 5xx status
    pub fn is_server_error(&self) -> bool {
        self.response_status
            .is_some_and(|status| (500..600).contains(&status))
    }

    /// Send a GET request
    pub async fn get(&mut self) -> Result<(), Error> {
        self.send(Method::Get).await
    }

    /// Send a POST request
    pub async fn post(&mut self) -> Result<(), Error> {
        self.send(Method::Post).await
    }

    /// Send a PUT request
    pub async fn put(&mut self) -> Result<(), Error> {
        self.send(Method::Put).await
    }

    /// Send a PATCH request
    pub async fn patch(&mut self) -> Result<(), Error> {
        self.send(Method::Patch).await
    }

    /// Send a DELETE request
    pub async fn delete(&mut self) -> Result<(), Error> {
        self.send(Method::Delete).await
    }

    /// Send the request with the given method
    ///
    /// On success the response status and body bytes are stored on the
    /// request, replacing any previous response state. A failed send leaves
    /// the previous state untouched.
    pub async fn send(&mut self, method: Method) -> Result<(), Error> {
        let url = self.build_url()?;
        tracing::debug!("{} {}", method, url);

        let mut builder = self.client.inner().request(method.into(), url);

        if method.allows_body() {
            if let Some(body) = &self.body {
                let payload = serde_json::to_vec(body).map_err(Error::Serialization)?;
                builder = builder.body(payload);
            }
        }

        if self.json_content {
            builder = builder.header(CONTENT_TYPE, CONTENT_TYPE_JSON);
        }
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(Error::from)?;
        let status = response.status().as_u16();
        tracing::debug!("{} {} responded {}", method, self.url, status);

        let bytes = response.bytes().await.map_err(Error::Io)?;
        self.response_status = Some(status);
        self.response_body = bytes.to_vec();
        Ok(())
    }

    /// Send with up to `attempts` tries, sleeping one second between them
    ///
    /// The first successful attempt wins and stores its response. Every
    /// failure kind is retried uniformly, intermediate errors are discarded,
    /// and only the final attempt's error is returned. An `attempts` of zero
    /// is rejected with [`Error::InvalidAttemptCount`] before anything is
    /// sent.
    pub async fn send_with_retry(&mut self, method: Method, attempts: u32) -> Result<(), Error> {
        if attempts == 0 {
            return Err(Error::InvalidAttemptCount);
        }

        for attempt in 1..attempts {
            match self.send(method).await {
                Ok(()) => return Ok(()),
                Err(err) => {
                    tracing::warn!(
                        "{} {} attempt {}/{} failed: {}, retrying in {}s",
                        method,
                        self.url,
                        attempt,
                        attempts,
                        err,
                        RETRY_DELAY.as_secs()
                    );
                    tokio::time::sleep(RETRY_DELAY).await;
                }
            }
        }

        self.send(method).await
    }

    /// Decode the stored response body as JSON
    ///
    /// Reads the bytes captured by the last send; it never re-executes the
    /// request. Before any send the stored body is empty and decoding fails.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.response_body).map_err(Error::Deserialization)
    }

    fn build_url(&self) -> Result<Url, Error> {
        let mut url = Url::parse(&self.url)?;
        if !self.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.params {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }
}
