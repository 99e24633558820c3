//! # Paisa Store
//!
//! Per-user record sourcing and caching for the paisa engine.
//!
//! The metrics crate is pure; something has to hand it the raw
//! collections. [`RecordSource`] is that seam: an async trait with one
//! fetch method per collection, implemented against whatever backend
//! holds the data. [`AppDataCache`] wraps a source and keeps each user's
//! collections in memory after the first fetch, until explicitly
//! invalidated. There is no TTL and no retry; a failed fetch surfaces as
//! a [`StoreError`] and caches nothing.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cache;
pub mod error;
pub mod ids;
pub mod source;

pub use cache::AppDataCache;
pub use error::{StoreError, StoreResult};
pub use ids::UserId;
pub use source::RecordSource;
