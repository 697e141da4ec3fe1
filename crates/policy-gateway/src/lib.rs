//! Publishing Policy persistence gateway.
//!
//! This crate defines the storage contract the builder depends on:
//! - listing sector templates (ordered by category, then name)
//! - creating a policy and receiving its opaque edit token
//! - locating and updating a saved policy by edit token
//!
//! Design stance:
//! - The builder treats every failure as opaque and retryable; it reports the
//!   error and keeps the draft.
//! - Query execution and schema live behind the adapters, not in the core.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod memory;
mod model;
pub mod seed;
mod traits;

pub use error::{StorageError, StorageResult};
#[cfg(feature = "http")]
pub use http::HttpPolicyGateway;
pub use memory::InMemoryPolicyStore;
pub use model::{sort_for_listing, CreatedPolicy, PolicyCreateRequest, StoredPolicy};
pub use traits::{PersistenceGateway, PolicyLookup};
