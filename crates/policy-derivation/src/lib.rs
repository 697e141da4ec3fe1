//! Malpublishing Derivation
//!
//! Turns a completed draft's commitments and accountability choices into
//! the ordered list of malpublishing definitions, then assembles the policy
//! document that gets persisted.
//!
//! # Guarantees
//!
//! 1. **Deterministic**: identical inputs always produce identical output,
//!    in the fixed canonical dimension order.
//! 2. **Total**: every value of every closed choice set has a rule. The
//!    rule table is a set of exhaustive `match`es, so a new variant without
//!    a rule does not compile.
//! 3. **Pure**: no I/O, no clock, no randomness.
//!
//! ```rust
//! use policy_derivation::derive;
//! use policy_types::{AccountabilityFramework, EditorialCommitments};
//!
//! let definitions = derive(
//!     &EditorialCommitments::default(),
//!     &AccountabilityFramework::default(),
//! );
//! assert_eq!(definitions.len(), 6);
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

mod assembler;
mod engine;
pub mod rules;

pub use assembler::{policy_name, PolicyDocumentAssembler};
pub use engine::{derive, DerivationEngine};
pub use rules::Rule;
