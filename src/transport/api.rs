//! Authenticated JSON transport bound to one API base URL.

use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use http::{HeaderMap, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::{HttpClient, HttpRequest, TransportError};

/// Media type the API expects in the `Accept` header.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Query-string parameters for one request.
///
/// Unset parameters are simply never added, so nothing ends up as
/// `?page=` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Builds a query from a serialisable parameter struct.
    ///
    /// The value must serialise to a JSON object (or `null`) whose members
    /// are scalars. `null` members are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidQuery`] for nested values and
    /// [`TransportError::Encode`] if serialisation itself fails.
    pub fn from_params<P: Serialize + ?Sized>(params: &P) -> Result<Self, TransportError> {
        let object = match serde_json::to_value(params).map_err(TransportError::Encode)? {
            Value::Object(object) => object,
            Value::Null => return Ok(Self::new()),
            _ => {
                return Err(TransportError::InvalidQuery {
                    name: String::new(),
                    reason: "parameters must serialise to an object",
                });
            }
        };

        let mut query = Self::new();
        for (name, value) in object {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(TransportError::InvalidQuery {
                        name,
                        reason: "nested values are not supported",
                    });
                }
            };
            query.pairs.push((name, text));
        }

        Ok(query)
    }

    /// Returns true when no parameter is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the parameters in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Status and decoded JSON body of one API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Decoded body; `Null` for an empty body, a JSON string holding the
    /// raw text for a non-JSON error body
    pub body: Value,
}

impl ApiResponse {
    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Consumes a successful response and returns its `data` member.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Status`] for a non-2xx status and
    /// [`TransportError::MissingData`] when the envelope is absent.
    pub fn into_data(self) -> Result<Value, TransportError> {
        if !self.is_success() {
            return Err(self.into_status_error());
        }

        match self.body {
            Value::Object(mut object) => object.remove("data").ok_or(TransportError::MissingData),
            _ => Err(TransportError::MissingData),
        }
    }

    /// Converts this response into a [`TransportError::Status`].
    #[must_use]
    pub fn into_status_error(self) -> TransportError {
        let body = match self.body {
            Value::Null => None,
            Value::String(text) => Some(text),
            other => Some(other.to_string()),
        };

        TransportError::Status {
            status: self.status,
            body,
        }
    }
}

/// Transport bound to a base URL and an API key.
///
/// Every request carries `Authorization: Bearer <key>` and
/// `Accept: application/vnd.api+json`. Paths are given as segments and
/// percent-encoded individually; empty and dot segments are rejected,
/// so ids can never escape their slot in the URL.
///
/// The transport holds no mutable state; it can be shared freely between
/// managers and entities.
pub struct ApiTransport<C> {
    client: C,
    base_url: Url,
    headers: HeaderMap,
}

impl<C> std::fmt::Debug for ApiTransport<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Headers carry the API key.
        f.debug_struct("ApiTransport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl<C> ApiTransport<C> {
    /// Creates a transport sending requests through `client`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidApiKey`] if the key cannot be put
    /// in a header, or [`TransportError::InvalidBaseUrl`] if the base URL
    /// cannot take path segments.
    pub fn new(client: C, base_url: Url, api_key: &str) -> Result<Self, TransportError> {
        if base_url.cannot_be_a_base() {
            return Err(TransportError::InvalidBaseUrl(base_url));
        }

        let mut authorization = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| TransportError::InvalidApiKey)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_API_MEDIA_TYPE));

        Ok(Self {
            client,
            base_url,
            headers,
        })
    }

    /// Returns the base URL every path is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the wrapped HTTP client.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Resolves path segments and query parameters against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidBaseUrl`] if the base URL cannot
    /// take path segments, and [`TransportError::InvalidPathSegment`] for
    /// an empty, `.` or `..` segment.
    pub fn url_for<S: AsRef<str>>(&self, path: &[S], query: &Query) -> Result<Url, TransportError> {
        // The url crate drops dot segments instead of encoding them.
        if let Some(segment) = path
            .iter()
            .map(AsRef::as_ref)
            .find(|segment| matches!(*segment, "" | "." | ".."))
        {
            return Err(TransportError::InvalidPathSegment {
                segment: segment.to_string(),
            });
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| TransportError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(path);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.pairs());
        }

        Ok(url)
    }
}

impl<C: HttpClient> ApiTransport<C> {
    /// Sends one API request and decodes the JSON body.
    ///
    /// Non-2xx statuses are returned as a normal [`ApiResponse`]; the
    /// caller decides which of them mean "not found" or "invalid".
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Http`] on network failure,
    /// [`TransportError::Encode`] if `body` cannot be serialised and
    /// [`TransportError::Decode`] if a successful response is not JSON.
    pub async fn request<S, B>(
        &self,
        method: Method,
        path: &[S],
        query: &Query,
        body: Option<&B>,
    ) -> Result<ApiResponse, TransportError>
    where
        S: AsRef<str> + Sync,
        B: Serialize + ?Sized + Sync,
    {
        let url = self.url_for(path, query)?;
        let mut request = HttpRequest::new(method, url);
        request.headers = self.headers.clone();

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(TransportError::Encode)?;
            request = request
                .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .with_body(bytes);
        }

        tracing::debug!("{} {}", request.method, request.url);
        let response = self.client.request(request).await?;
        tracing::debug!("Response status {}", response.status);

        let body = decode_body(&response.body, response.status)?;

        Ok(ApiResponse {
            status: response.status,
            body,
        })
    }
}

fn decode_body(bytes: &[u8], status: StatusCode) -> Result<Value, TransportError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    match serde_json::from_slice(bytes) {
        Ok(value) => Ok(value),
        Err(e) if status.is_success() => Err(TransportError::Decode(e)),
        // Error pages are often HTML or plain text; keep them for the message.
        Err(_) => Ok(Value::String(String::from_utf8_lossy(bytes).into_owned())),
    }
}
