//! Error type returned by every public API operation.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::diff::DiffError;
use crate::transport::TransportError;

/// Error type for API operations.
///
/// `NotFound` and `Validation` are the two statuses the managers map
/// explicitly; everything else the transport reports is passed through
/// unchanged.
#[derive(Debug, Error)]
pub enum UptimeError {
    /// A single-resource lookup returned 404.
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Human-readable resource label (`Monitor`, `Incident`, ...)
        resource: &'static str,
        /// The id that was looked up
        id: String,
    },

    /// A create, update or action request was rejected with 422.
    #[error("Validation failed ({0})")]
    Validation(ValidationErrors),

    /// Network failure, unexpected status or malformed body.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Local attributes could not be converted for diffing.
    #[error("Invalid attributes: {0}")]
    Attributes(#[from] DiffError),
}

impl UptimeError {
    /// Creates a `NotFound` error.
    #[must_use]
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Returns true for [`UptimeError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the field errors of a [`UptimeError::Validation`].
    #[must_use]
    pub const fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Field-level messages from a 422 response, in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: Vec<(String, Vec<String>)>,
}

impl ValidationErrors {
    /// Creates an empty set of field errors.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends messages for one field.
    #[must_use]
    pub fn with_field<I, S>(mut self, field: impl Into<String>, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .push((field.into(), messages.into_iter().map(Into::into).collect()));
        self
    }

    /// Reads the `errors` member of a response body.
    ///
    /// A missing or non-object `errors` member yields an empty set. A
    /// field whose value is a single string gets that string as its only
    /// message; other non-array values are skipped.
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        let Some(errors) = body.get("errors").and_then(Value::as_object) else {
            return Self::new();
        };

        let fields = errors
            .iter()
            .filter_map(|(field, messages)| {
                let messages = match messages {
                    Value::Array(items) => items.iter().map(message_text).collect(),
                    Value::String(text) => vec![text.clone()],
                    _ => return None,
                };
                Some((field.clone(), messages))
            })
            .collect();

        Self { fields }
    }

    /// Returns the messages reported for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Iterates over `(field, messages)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Returns true when the server reported no field errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, messages)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {}", messages.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
