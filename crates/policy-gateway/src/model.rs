use chrono::{DateTime, Utc};
use policy_types::{
    AccountabilityFramework, EditToken, EditorialCommitments, MalpublishDefinition, Policy,
    PolicyDocument, PublishingIdentity, SectorCategory, SectorTemplate, Visibility,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Create payload sent to the gateway.
///
/// `items` and `guidelines` belong to an older document shape. They are kept
/// for compatibility and always sent empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyCreateRequest {
    pub name: String,
    pub sector: String,
    pub publishing_identity: PublishingIdentity,
    pub editorial_commitments: EditorialCommitments,
    pub accountability_framework: AccountabilityFramework,
    pub derived_definitions: Vec<MalpublishDefinition>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub guidelines: Vec<Value>,
}

impl PolicyCreateRequest {
    pub fn into_document(self) -> PolicyDocument {
        PolicyDocument {
            name: self.name,
            sector: self.sector,
            publishing_identity: self.publishing_identity,
            editorial_commitments: self.editorial_commitments,
            accountability_framework: self.accountability_framework,
            derived_definitions: self.derived_definitions,
            visibility: self.visibility,
        }
    }
}

impl From<PolicyDocument> for PolicyCreateRequest {
    fn from(document: PolicyDocument) -> Self {
        Self {
            name: document.name,
            sector: document.sector,
            publishing_identity: document.publishing_identity,
            editorial_commitments: document.editorial_commitments,
            accountability_framework: document.accountability_framework,
            derived_definitions: document.derived_definitions,
            visibility: document.visibility,
            items: Vec::new(),
            guidelines: Vec::new(),
        }
    }
}

/// Create response: the token that locates the new policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPolicy {
    pub edit_token: EditToken,
}

/// Persistent policy record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPolicy {
    pub policy: Policy,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing order for sector templates: category text, then name.
/// Uncategorized templates (`Other`) come after every named category.
pub fn sort_for_listing(templates: &mut [SectorTemplate]) {
    templates.sort_by(|a, b| {
        let uncategorized = |t: &SectorTemplate| t.category == SectorCategory::Other;
        uncategorized(a)
            .cmp(&uncategorized(b))
            .then_with(|| a.category.as_str().cmp(b.category.as_str()))
            .then_with(|| a.name.cmp(&b.name))
    });
}
