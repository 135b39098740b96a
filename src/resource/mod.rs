//! Generic CRUD template shared by every resource family.
//!
//! A [`ResourceManager`] is parameterised by a path, a human-readable
//! label used in `NotFound` errors, and [`ErrorRules`]. It unwraps the
//! `{ "data": ... }` envelope and maps 404/422 responses to
//! [`UptimeError`](crate::UptimeError) variants.

mod manager;
mod types;


pub use manager::{ErrorRules, ResourceManager};
pub use types::{PageParams, Resource};
