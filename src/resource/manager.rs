//! The CRUD template.

use std::marker::PhantomData;

use http::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::Resource;
use crate::error::{UptimeError, ValidationErrors};
use crate::transport::{ApiResponse, ApiTransport, HttpClient, Query, TransportError};

/// Per-manager switches for status mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorRules {
    /// Map a 404 on `delete` to [`UptimeError::NotFound`] instead of
    /// returning the raw status error.
    pub not_found_on_delete: bool,
}

/// Which non-2xx status a call maps to a typed error.
#[derive(Debug, Clone, Copy)]
enum Expect<'i> {
    /// 404 means the resource with this id does not exist
    Found(&'i str),
    /// 422 carries field validation errors
    Valid,
    /// No mapping; every non-2xx is a status error
    Success,
}

/// CRUD operations for one resource family.
///
/// `T` is the type each `data` payload is decoded into; it defaults to
/// the untyped [`Resource`]. The manager borrows the transport and is
/// cheap to create, so accessors build a fresh one per call.
pub struct ResourceManager<'a, C, T = Resource> {
    transport: &'a ApiTransport<C>,
    path: Vec<String>,
    label: &'static str,
    rules: ErrorRules,
    _marker: PhantomData<fn() -> T>,
}

impl<C, T> Clone for ResourceManager<'_, C, T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport,
            path: self.path.clone(),
            label: self.label,
            rules: self.rules,
            _marker: PhantomData,
        }
    }
}

impl<C, T> std::fmt::Debug for ResourceManager<'_, C, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceManager")
            .field("path", &self.path)
            .field("label", &self.label)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl<'a, C, T> ResourceManager<'a, C, T> {
    /// Creates a manager for the collection at `path` (relative to the
    /// transport's base URL).
    pub fn new<I, S>(transport: &'a ApiTransport<C>, path: I, label: &'static str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            transport,
            path: path.into_iter().map(Into::into).collect(),
            label,
            rules: ErrorRules::default(),
            _marker: PhantomData,
        }
    }

    /// Replaces the status-mapping rules.
    #[must_use]
    pub fn with_rules(mut self, rules: ErrorRules) -> Self {
        self.rules = rules;
        self
    }

    /// Label used in `NotFound` errors.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Collection path segments.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Active status-mapping rules.
    #[must_use]
    pub const fn rules(&self) -> ErrorRules {
        self.rules
    }

    /// The transport requests go through.
    #[must_use]
    pub const fn transport(&self) -> &'a ApiTransport<C> {
        self.transport
    }

    fn path_to(&self, extra: &[&str]) -> Vec<String> {
        let mut path = self.path.clone();
        path.extend(extra.iter().map(|segment| (*segment).to_string()));
        path
    }

    fn check(&self, response: ApiResponse, expect: Expect<'_>) -> Result<Value, UptimeError> {
        match expect {
            Expect::Found(id) if response.status == StatusCode::NOT_FOUND => {
                Err(UptimeError::not_found(self.label, id))
            }
            Expect::Valid if response.status == StatusCode::UNPROCESSABLE_ENTITY => Err(
                UptimeError::Validation(ValidationErrors::from_body(&response.body)),
            ),
            _ => Ok(response.into_data()?),
        }
    }
}

fn decode<R: DeserializeOwned>(data: Value) -> Result<R, UptimeError> {
    serde_json::from_value(data).map_err(|e| TransportError::Decode(e).into())
}

const NO_BODY: Option<&Value> = None;

impl<C: HttpClient + Sync, T: DeserializeOwned> ResourceManager<'_, C, T> {
    /// Lists the collection. `params` become query parameters; unset
    /// (`None`) members are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Transport`] on any failure.
    pub async fn list<P: Serialize + ?Sized>(&self, params: &P) -> Result<Vec<T>, UptimeError> {
        let query = Query::from_params(params)?;
        let response = self
            .transport
            .request(Method::GET, &self.path, &query, NO_BODY)
            .await?;
        decode(self.check(response, Expect::Success)?)
    }

    /// Fetches one resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::NotFound`] on 404.
    pub async fn get(&self, id: &str) -> Result<T, UptimeError> {
        self.get_with(id, &()).await
    }

    /// Fetches one resource by id with extra query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::NotFound`] on 404.
    pub async fn get_with<P: Serialize + ?Sized>(&self, id: &str, params: &P) -> Result<T, UptimeError> {
        let query = Query::from_params(params)?;
        let response = self
            .transport
            .request(Method::GET, &self.path_to(&[id]), &query, NO_BODY)
            .await?;
        decode(self.check(response, Expect::Found(id))?)
    }

    /// Creates a resource.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Validation`] on 422.
    pub async fn create<B: Serialize + ?Sized + Sync>(&self, body: &B) -> Result<T, UptimeError> {
        let response = self
            .transport
            .request(Method::POST, &self.path, &Query::new(), Some(body))
            .await?;
        decode(self.check(response, Expect::Valid)?)
    }

    /// Applies a partial update and returns the updated resource.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Validation`] on 422.
    pub async fn update<B: Serialize + ?Sized + Sync>(&self, id: &str, body: &B) -> Result<T, UptimeError> {
        let response = self
            .transport
            .request(Method::PATCH, &self.path_to(&[id]), &Query::new(), Some(body))
            .await?;
        decode(self.check(response, Expect::Valid)?)
    }

    /// Deletes a resource. Returns `true` on any 2xx, including an empty 204.
    ///
    /// # Errors
    ///
    /// Returns the raw status error on 404 unless
    /// [`ErrorRules::not_found_on_delete`] is set.
    pub async fn delete(&self, id: &str) -> Result<bool, UptimeError> {
        let response = self
            .transport
            .request(Method::DELETE, &self.path_to(&[id]), &Query::new(), NO_BODY)
            .await?;

        if response.status == StatusCode::NOT_FOUND && self.rules.not_found_on_delete {
            return Err(UptimeError::not_found(self.label, id));
        }
        if !response.is_success() {
            return Err(response.into_status_error().into());
        }

        tracing::debug!("Deleted {} {id}", self.label);
        Ok(true)
    }

    /// Fetches a sub-collection or report of one resource (`{path}/{id}/{sub}`).
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::NotFound`] (naming the parent) on 404.
    pub async fn fetch_related<P, R>(&self, id: &str, sub: &str, params: &P) -> Result<R, UptimeError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let query = Query::from_params(params)?;
        let response = self
            .transport
            .request(Method::GET, &self.path_to(&[id, sub]), &query, NO_BODY)
            .await?;
        decode(self.check(response, Expect::Found(id))?)
    }

    /// Posts an action on one resource (`{path}/{id}/{sub}`).
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Validation`] on 422.
    pub async fn act<B, R>(&self, id: &str, sub: &str, body: &B) -> Result<R, UptimeError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .transport
            .request(Method::POST, &self.path_to(&[id, sub]), &Query::new(), Some(body))
            .await?;
        decode(self.check(response, Expect::Valid)?)
    }
}
