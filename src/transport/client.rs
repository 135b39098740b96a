//! reqwest implementation of the [`HttpClient`] seam.

use std::time::Duration;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("better-uptime/", env!("CARGO_PKG_VERSION"));

/// [`HttpClient`] backed by a pooled `reqwest::Client`.
///
/// The API layer never retries; a timeout, if any, is the one configured
/// here.
///
/// # Example
///
/// ```no_run
/// use better_uptime::transport::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new()?;
/// let url = Url::parse("https://uptime.betterstack.com/api/v2/monitors")?;
/// let response = client.request(HttpRequest::new(http::Method::GET, url)).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a client without a request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Connection`] if the TLS backend cannot be
    /// initialised.
    pub fn new() -> Result<Self, HttpError> {
        Self::from_builder(reqwest::Client::builder())
    }

    /// Creates a client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Connection`] if the TLS backend cannot be
    /// initialised.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        Self::from_builder(reqwest::Client::builder().timeout(timeout))
    }

    /// Finishes a caller-supplied builder, adding the crate's user agent.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Connection`] if the builder cannot produce a
    /// client.
    pub fn from_builder(builder: reqwest::ClientBuilder) -> Result<Self, HttpError> {
        let inner = builder
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| HttpError::Connection(Box::new(e)))?;
        Ok(Self { inner })
    }

    /// Wraps an already configured reqwest client as is.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

/// Maps a reqwest failure onto the seam's error kinds.
fn classify(error: reqwest::Error) -> HttpError {
    if error.is_timeout() {
        HttpError::Timeout
    } else if error.is_builder() {
        HttpError::InvalidUrl(error.to_string())
    } else {
        HttpError::Connection(Box::new(error))
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = req;

        let mut builder = self.inner.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(classify)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(classify)?;

        Ok(HttpResponse::new(status, headers, body.to_vec()))
    }
}
