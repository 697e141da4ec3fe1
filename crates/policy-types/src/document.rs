//! The assembled policy document and its persisted form

use crate::accountability::AccountabilityFramework;
use crate::commitments::EditorialCommitments;
use crate::definition::MalpublishDefinition;
use crate::identity::PublishingIdentity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque token that locates a saved policy for later edits.
///
/// Issued once by the persistence gateway at creation and stable for the
/// lifetime of the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditToken(String);

impl EditToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EditToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a saved policy is shared publicly or kept internal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    #[default]
    Internal,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Internal => "internal",
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A policy assembled from a completed draft, ready to persist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDocument {
    pub name: String,
    pub sector: String,
    pub publishing_identity: PublishingIdentity,
    pub editorial_commitments: EditorialCommitments,
    pub accountability_framework: AccountabilityFramework,
    pub derived_definitions: Vec<MalpublishDefinition>,
    #[serde(default)]
    pub visibility: Visibility,
}

/// A persisted policy: the document plus the token issued at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub edit_token: EditToken,
    #[serde(flatten)]
    pub document: PolicyDocument,
}

impl Policy {
    pub fn new(edit_token: EditToken, document: PolicyDocument) -> Self {
        Self {
            edit_token,
            document,
        }
    }

    pub fn name(&self) -> &str {
        &self.document.name
    }

    pub fn definitions(&self) -> &[MalpublishDefinition] {
        &self.document.derived_definitions
    }
}
