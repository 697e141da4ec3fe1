//! Publishing Policy Domain Types
//!
//! An organization declares its editorial standards through a guided,
//! multi-step builder. This crate holds the canonical shape of that
//! declaration and of the artifacts derived from it.
//!
//! # Key Concepts
//!
//! - **PolicyDraft**: The session-local, fully defaulted working copy of a
//!   policy. Created by [`PolicyDraft::new`], never partially initialized.
//! - **PublishingIdentity**: Who is publishing, for whom, in which sector.
//! - **EditorialCommitments**: Sourcing, accuracy, transparency and
//!   independence standards. Every field always holds a concrete value.
//! - **AccountabilityFramework**: Corrections, feedback channels, contact
//!   and review cadence.
//! - **MalpublishDefinition**: A negated commitment: what it means, for this
//!   organization, to violate its own declared standard.
//! - **SectorCatalog**: The known sector templates, grouped by category.
//!
//! All choice sets are closed enumerations. Anything that consumes them
//! matches exhaustively, so adding a variant is a compile error until every
//! consumer handles it.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

mod accountability;
mod commitments;
mod definition;
mod document;
mod draft;
mod error;
mod identity;
mod sector;

pub use accountability::{
    AccountabilityFramework, CorrectionTimeframe, FeedbackChannel, FeedbackMechanism,
    ReviewSchedule,
};
pub use commitments::{
    Accuracy, EditorialCommitments, Independence, Sourcing, Transparency, TransparencyFlag,
};
pub use definition::{Dimension, MalpublishDefinition};
pub use document::{EditToken, Policy, PolicyDocument, Visibility};
pub use draft::{PolicyDraft, WizardStep};
pub use error::{PolicyTypesError, PolicyTypesResult};
pub use identity::PublishingIdentity;
pub use sector::{SectorCatalog, SectorCategory, SectorGroup, SectorTemplate};
