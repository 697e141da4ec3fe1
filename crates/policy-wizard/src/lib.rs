//! Publishing Policy wizard.
//!
//! A four step builder (identity, commitments, accountability, review) that
//! owns one [`PolicyDraft`](policy_types::PolicyDraft) per session. Steps are
//! gated by pure validators; the review step derives the malpublishing
//! definitions, assembles the document and saves it through a
//! [`PersistenceGateway`](policy_gateway::PersistenceGateway).
//!
//! ```no_run
//! # async fn run() -> Result<(), policy_wizard::WizardError> {
//! use std::sync::Arc;
//! use policy_gateway::InMemoryPolicyStore;
//! use policy_types::PublishingIdentity;
//! use policy_wizard::BuilderEntry;
//!
//! let entry = BuilderEntry::open(Arc::new(InMemoryPolicyStore::seeded())).await;
//! if let Some(mut wizard) = entry.into_controller() {
//!     wizard.update_identity(|identity| {
//!         *identity = PublishingIdentity::new("Acme News", "local-news", "residents");
//!     })?;
//!     while wizard.advance() {}
//!     let policy = wizard.finalize().await?;
//!     println!("saved {} as {}", policy.name(), policy.edit_token);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

mod controller;
mod entry;
mod error;
mod handle;
mod summary;
pub mod validators;

pub use controller::WizardController;
pub use entry::{BuilderEntry, UNAVAILABLE_HINT, UNAVAILABLE_TITLE};
pub use error::{WizardError, WizardResult};
pub use handle::SessionHandle;
pub use summary::{ReviewSummary, StepProgress, StepStatus, NO_MISSION};
pub use validators::{identity_check, IdentityCheck, IdentityField};
