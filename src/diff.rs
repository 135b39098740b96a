//! Field-level diffing between a baseline snapshot and a live copy.
//!
//! Records are compared through their JSON form: every top-level member
//! is a "field", and two field values are equal when their JSON values
//! are structurally equal (nested objects and arrays compared element by
//! element). All functions are pure.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

/// Changed fields mapped to their new values.
pub type Diff = Map<String, Value>;

/// Error raised when a record cannot take part in diffing.
#[derive(Debug, Error)]
pub enum DiffError {
    /// The record did not serialise to a JSON object.
    #[error("{role} record must serialise to a JSON object")]
    NotAnObject {
        /// Which argument was rejected (`baseline`, `live`, ...)
        role: &'static str,
    },

    /// A field set by name is not part of the record.
    #[error("Unknown field '{field}'")]
    UnknownField {
        /// Field name as given
        field: String,
    },

    /// Serialising a record, or rebuilding one from the merged object, failed.
    #[error("Failed to convert record: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Returns every field of `live` whose value differs from `baseline`.
///
/// Fields missing from `baseline` count as changed. Fields present only
/// in `baseline` are not represented.
#[must_use]
pub fn diff_objects(baseline: &Map<String, Value>, live: &Map<String, Value>) -> Diff {
    live.iter()
        .filter(|(field, value)| baseline.get(field.as_str()) != Some(*value))
        .map(|(field, value)| (field.clone(), value.clone()))
        .collect()
}

/// Returns `baseline` with every field of `diff` written over it.
#[must_use]
pub fn apply_to_object(baseline: &Map<String, Value>, diff: &Diff) -> Map<String, Value> {
    let mut merged = baseline.clone();
    for (field, value) in diff {
        merged.insert(field.clone(), value.clone());
    }
    merged
}

/// Merges a refreshed baseline with the edits pending in `live`.
///
/// Fields the caller changed since `old_baseline` keep the caller's value;
/// every other field takes the value from `new_baseline`.
#[must_use]
pub fn reconcile_objects(
    old_baseline: &Map<String, Value>,
    new_baseline: &Map<String, Value>,
    live: &Map<String, Value>,
) -> Map<String, Value> {
    let pending = diff_objects(old_baseline, live);
    apply_to_object(new_baseline, &pending)
}

/// Typed form of [`diff_objects`].
///
/// # Errors
///
/// Returns [`DiffError`] if either record does not serialise to a JSON object.
pub fn compute_diff<T: Serialize>(baseline: &T, live: &T) -> Result<Diff, DiffError> {
    let baseline = to_object(baseline, "baseline")?;
    let live = to_object(live, "live")?;
    Ok(diff_objects(&baseline, &live))
}

/// Typed form of [`apply_to_object`].
///
/// # Errors
///
/// Returns [`DiffError`] if `baseline` does not serialise to an object or
/// the patched object is not a valid `T`.
pub fn apply_diff<T: Serialize + DeserializeOwned>(baseline: &T, diff: &Diff) -> Result<T, DiffError> {
    let baseline = to_object(baseline, "baseline")?;
    let merged = apply_to_object(&baseline, diff);
    Ok(serde_json::from_value(Value::Object(merged))?)
}

/// Typed form of [`reconcile_objects`].
///
/// # Errors
///
/// Returns [`DiffError`] if a record does not serialise to an object or
/// the merged object is not a valid `T`.
pub fn reconcile_after_refresh<T: Serialize + DeserializeOwned>(
    old_baseline: &T,
    new_baseline: &T,
    live: &T,
) -> Result<T, DiffError> {
    let pending = compute_diff(old_baseline, live)?;
    apply_diff(new_baseline, &pending)
}

/// Returns `record` with the named fields overwritten.
///
/// The result is rebuilt through `T`, so values must have the field's
/// type. All fields are applied at once, which lets a check-type change
/// carry the fields the new type requires.
///
/// # Errors
///
/// Returns [`DiffError::UnknownField`] when a field does not exist in the
/// rebuilt record, or [`DiffError::Serde`] when a value does not fit.
pub fn set_fields<T: Serialize + DeserializeOwned>(record: &T, fields: &Diff) -> Result<T, DiffError> {
    let updated: T = apply_diff(record, fields)?;
    let rebuilt = to_object(&updated, "updated")?;

    if let Some(field) = fields.keys().find(|field| !rebuilt.contains_key(field.as_str())) {
        return Err(DiffError::UnknownField {
            field: field.clone(),
        });
    }

    Ok(updated)
}

fn to_object<T: Serialize>(record: &T, role: &'static str) -> Result<Map<String, Value>, DiffError> {
    match serde_json::to_value(record)? {
        Value::Object(object) => Ok(object),
        _ => Err(DiffError::NotAnObject { role }),
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
