//! Step validators.
//!
//! Each validator is a pure predicate over one section of the draft. They gate
//! transitions and never raise errors.

use policy_types::{
    AccountabilityFramework, EditorialCommitments, PolicyDraft, PublishingIdentity,
    SectorCatalog, WizardStep,
};
use serde::Serialize;
use std::fmt;

/// Identity step: organization name, sector and audience are required.
/// The mission never affects validity.
pub fn identity_valid(identity: &PublishingIdentity) -> bool {
    missing_identity_fields(identity).is_empty()
}

/// Commitments step. Every field carries a default, so it is always valid.
pub fn commitments_valid(_commitments: &EditorialCommitments) -> bool {
    true
}

/// Accountability step: at least one feedback channel must be selected.
pub fn accountability_valid(accountability: &AccountabilityFramework) -> bool {
    !accountability.feedback_mechanism.is_empty()
}

/// Whether the draft may leave `step`. The review step has no successor.
pub fn can_proceed(draft: &PolicyDraft, step: WizardStep) -> bool {
    match step {
        WizardStep::Identity => identity_valid(&draft.identity),
        WizardStep::Commitments => commitments_valid(&draft.commitments),
        WizardStep::Accountability => accountability_valid(&draft.accountability),
        WizardStep::Review => false,
    }
}

/// A required identity field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityField {
    OrganizationName,
    Sector,
    PrimaryAudience,
}

impl IdentityField {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityField::OrganizationName => "organization_name",
            IdentityField::Sector => "sector",
            IdentityField::PrimaryAudience => "primary_audience",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IdentityField::OrganizationName => "Organization name",
            IdentityField::Sector => "Sector",
            IdentityField::PrimaryAudience => "Primary audience",
        }
    }
}

impl fmt::Display for IdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn missing_identity_fields(identity: &PublishingIdentity) -> Vec<IdentityField> {
    let mut missing = Vec::new();
    if identity.organization_name.trim().is_empty() {
        missing.push(IdentityField::OrganizationName);
    }
    if identity.sector.is_empty() {
        missing.push(IdentityField::Sector);
    }
    if identity.primary_audience.trim().is_empty() {
        missing.push(IdentityField::PrimaryAudience);
    }
    missing
}

/// Detailed result of checking the identity step against a sector catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityCheck {
    pub missing: Vec<IdentityField>,
    /// Sector slug set but not present in the catalog. Reported, never blocking.
    pub unknown_sector: bool,
}

impl IdentityCheck {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

pub fn identity_check(identity: &PublishingIdentity, catalog: &SectorCatalog) -> IdentityCheck {
    IdentityCheck {
        missing: missing_identity_fields(identity),
        unknown_sector: identity.has_sector() && !catalog.contains(&identity.sector),
    }
}
