//! Transport layer between the resource managers and the remote API.
//!
//! This module provides:
//! - Plain HTTP value types ([`HttpRequest`], [`HttpResponse`])
//! - The HTTP client seam ([`HttpClient`]) and its reqwest implementation ([`ReqwestClient`])
//! - The authenticated JSON transport bound to one base URL ([`ApiTransport`])
//! - Error types ([`HttpError`], [`TransportError`])

mod api;
mod client;
mod error;
mod http;


pub use api::{ApiResponse, ApiTransport, JSON_API_MEDIA_TYPE, Query};
pub use client::{ReqwestClient, USER_AGENT};
pub use error::{HttpError, TransportError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
