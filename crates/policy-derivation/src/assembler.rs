//! Policy document assembly

use crate::engine::DerivationEngine;
use policy_types::{MalpublishDefinition, PolicyDocument, PolicyDraft};

/// Display name for an organization's policy. The organization name is used
/// exactly as entered.
pub fn policy_name(organization_name: &str) -> String {
    format!("{organization_name} Publishing Policy")
}

/// Merges the draft sections and derived definitions into the persisted
/// document shape. Performs no I/O and cannot fail; the wizard rejects
/// incomplete drafts before this stage.
#[derive(Clone, Debug, Default)]
pub struct PolicyDocumentAssembler {
    engine: DerivationEngine,
}

impl PolicyDocumentAssembler {
    pub fn new() -> Self {
        Self {
            engine: DerivationEngine::new(),
        }
    }

    /// Derive definitions for the draft and assemble the document
    pub fn compose(&self, draft: &PolicyDraft) -> PolicyDocument {
        let definitions = self.engine.derive_draft(draft);
        self.assemble(draft, definitions)
    }

    /// Assemble from already-derived definitions
    pub fn assemble(
        &self,
        draft: &PolicyDraft,
        derived_definitions: Vec<MalpublishDefinition>,
    ) -> PolicyDocument {
        PolicyDocument {
            name: policy_name(&draft.identity.organization_name),
            sector: draft.identity.sector.clone(),
            publishing_identity: draft.identity.clone(),
            editorial_commitments: draft.commitments.clone(),
            accountability_framework: draft.accountability.clone(),
            derived_definitions,
            visibility: draft.visibility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use policy_types::{Dimension, PublishingIdentity, Visibility};

    fn acme() -> PolicyDraft {
        PolicyDraft::new()
            .with_identity(PublishingIdentity::new("Acme News", "local-news", "residents"))
            .with_visibility(Visibility::Public)
    }

    #[test]
    fn test_policy_name() {
        assert_eq!(policy_name("Acme News"), "Acme News Publishing Policy");
        assert_eq!(policy_name("City Tribune "), "City Tribune  Publishing Policy");
    }

    #[test]
    fn test_compose_keeps_organization_name_verbatim() {
        let mut draft = acme();
        draft.identity.organization_name = " Acme  News".into();
        let doc = PolicyDocumentAssembler::new().compose(&draft);
        assert_eq!(doc.name, " Acme  News Publishing Policy");
        assert_eq!(doc.publishing_identity.organization_name, " Acme  News");
    }

    #[test]
    fn test_compose_copies_sections() {
        let draft = acme();
        let doc = PolicyDocumentAssembler::new().compose(&draft);
        assert_eq!(doc.name, "Acme News Publishing Policy");
        assert_eq!(doc.sector, "local-news");
        assert_eq!(doc.publishing_identity, draft.identity);
        assert_eq!(doc.editorial_commitments, draft.commitments);
        assert_eq!(doc.accountability_framework, draft.accountability);
        assert_eq!(doc.visibility, Visibility::Public);
        assert_eq!(doc.derived_definitions.len(), 6);
        assert_eq!(doc.derived_definitions[0].source_field, Dimension::Sourcing);
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let draft = acme();
        let assembler = PolicyDocumentAssembler::new();
        let first = serde_json::to_vec(&assembler.compose(&draft).derived_definitions).unwrap();
        let second = serde_json::to_vec(&assembler.compose(&draft).derived_definitions).unwrap();
        assert_eq!(first, second);
    }
}
