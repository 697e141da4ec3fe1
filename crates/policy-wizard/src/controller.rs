//! Wizard controller: owns one draft and drives it through the steps
//!
//! Transitions are synchronous and gated by the step validators. The only
//! suspending operation is [`WizardController::finalize`], which assembles the
//! document and hands it to the persistence gateway.

use crate::error::{WizardError, WizardResult};
use crate::handle::SessionHandle;
use crate::summary::{progress_for, ReviewSummary, StepProgress, NO_MISSION};
use crate::validators::{self, identity_check, IdentityCheck};
use policy_derivation::{DerivationEngine, PolicyDocumentAssembler};
use policy_gateway::{PersistenceGateway, PolicyCreateRequest};
use policy_types::{
    AccountabilityFramework, EditToken, EditorialCommitments, FeedbackChannel, Policy,
    PolicyDraft, PublishingIdentity, SectorCatalog, TransparencyFlag, Visibility, WizardStep,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Step-gated wizard session over a single [`PolicyDraft`].
pub struct WizardController<G: PersistenceGateway + ?Sized> {
    draft: PolicyDraft,
    catalog: SectorCatalog,
    gateway: Arc<G>,
    engine: DerivationEngine,
    assembler: PolicyDocumentAssembler,
    session: SessionHandle,
    last_error: Option<String>,
    saved: Option<EditToken>,
}

impl<G: PersistenceGateway + ?Sized> WizardController<G> {
    /// Start a session on the identity step with a fully defaulted draft
    pub fn new(gateway: Arc<G>, catalog: SectorCatalog) -> Self {
        Self::with_draft(gateway, catalog, PolicyDraft::new())
    }

    pub fn with_draft(gateway: Arc<G>, catalog: SectorCatalog, draft: PolicyDraft) -> Self {
        Self {
            draft,
            catalog,
            gateway,
            engine: DerivationEngine::new(),
            assembler: PolicyDocumentAssembler::new(),
            session: SessionHandle::new(),
            last_error: None,
            saved: None,
        }
    }

    pub fn draft(&self) -> &PolicyDraft {
        &self.draft
    }

    pub fn catalog(&self) -> &SectorCatalog {
        &self.catalog
    }

    pub fn current_step(&self) -> WizardStep {
        self.draft.step
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Edit token of the saved policy, once finalize has succeeded
    pub fn saved_token(&self) -> Option<&EditToken> {
        self.saved.as_ref()
    }

    pub fn is_saved(&self) -> bool {
        self.saved.is_some()
    }

    pub fn is_saving(&self) -> bool {
        self.session.is_saving()
    }

    pub fn handle(&self) -> SessionHandle {
        self.session.clone()
    }

    pub fn can_proceed(&self, step: WizardStep) -> bool {
        validators::can_proceed(&self.draft, step)
    }

    pub fn identity_check(&self) -> IdentityCheck {
        identity_check(&self.draft.identity, &self.catalog)
    }

    /// Move to the next step. Returns `false` when the current step is
    /// incomplete, on the last step, or once the policy is saved.
    pub fn advance(&mut self) -> bool {
        if self.is_saved() {
            return false;
        }
        let current = self.draft.step;
        let Some(next) = current.next() else {
            return false;
        };
        if !self.can_proceed(current) {
            debug!(step = %current, "advance blocked");
            return false;
        }
        if current == WizardStep::Identity && self.identity_check().unknown_sector {
            warn!(sector = %self.draft.identity.sector, "sector not in template catalog");
        }

        self.draft.step = next;
        debug!(from = %current, to = %next, "advanced");
        true
    }

    /// Move to the previous step. Never blocked by validity.
    pub fn retreat(&mut self) -> bool {
        if self.is_saved() {
            return false;
        }
        let current = self.draft.step;
        match current.previous() {
            Some(previous) => {
                self.draft.step = previous;
                debug!(from = %current, to = %previous, "retreated");
                true
            }
            None => false,
        }
    }

    fn editable(&mut self) -> WizardResult<&mut PolicyDraft> {
        if self.is_saved() {
            return Err(WizardError::AlreadySaved);
        }
        Ok(&mut self.draft)
    }

    pub fn update_identity(
        &mut self,
        edit: impl FnOnce(&mut PublishingIdentity),
    ) -> WizardResult<()> {
        edit(&mut self.editable()?.identity);
        Ok(())
    }

    pub fn update_commitments(
        &mut self,
        edit: impl FnOnce(&mut EditorialCommitments),
    ) -> WizardResult<()> {
        edit(&mut self.editable()?.commitments);
        Ok(())
    }

    pub fn update_accountability(
        &mut self,
        edit: impl FnOnce(&mut AccountabilityFramework),
    ) -> WizardResult<()> {
        edit(&mut self.editable()?.accountability);
        Ok(())
    }

    /// Returns whether the channel is selected afterwards
    pub fn toggle_feedback_channel(&mut self, channel: FeedbackChannel) -> WizardResult<bool> {
        Ok(self
            .editable()?
            .accountability
            .feedback_mechanism
            .toggle(channel))
    }

    pub fn toggle_transparency(&mut self, flag: TransparencyFlag) -> WizardResult<bool> {
        Ok(self.editable()?.commitments.transparency.toggle(flag))
    }

    pub fn set_visibility(&mut self, visibility: Visibility) -> WizardResult<()> {
        self.editable()?.visibility = visibility;
        Ok(())
    }

    pub fn progress(&self) -> Vec<StepProgress> {
        progress_for(self.draft.step, self.is_saved())
    }

    pub fn review_summary(&self) -> ReviewSummary {
        let identity = &self.draft.identity;
        ReviewSummary {
            organization_name: identity.organization_name.clone(),
            mission: identity.mission().unwrap_or(NO_MISSION).to_string(),
            sector_name: self.catalog.display_name(&identity.sector).to_string(),
            primary_audience: identity.primary_audience.clone(),
            definitions: self.engine.derive_draft(&self.draft),
            visibility: self.draft.visibility,
            last_error: self.last_error.clone(),
        }
    }

    /// Derive, assemble and persist the policy.
    ///
    /// On failure the draft is left untouched on the review step and the
    /// error is kept for display; calling again issues a new create.
    pub async fn finalize(&mut self) -> WizardResult<Policy> {
        if self.is_saved() {
            return Err(WizardError::AlreadySaved);
        }
        let step = self.draft.step;
        if step != WizardStep::Review {
            return Err(WizardError::NotAtReview(step));
        }
        if self.session.is_closed() {
            return Err(WizardError::SessionClosed);
        }
        for step in [WizardStep::Identity, WizardStep::Accountability] {
            if !self.can_proceed(step) {
                return Err(WizardError::StepIncomplete(step));
            }
        }

        let _saving = self.session.begin_save()?;
        let document = self.assembler.compose(&self.draft);
        let request = PolicyCreateRequest::from(document.clone());
        let mut closed = self.session.subscribe();

        info!(
            policy = %document.name,
            definitions = document.derived_definitions.len(),
            "saving policy"
        );

        let outcome = tokio::select! {
            biased;
            _ = closed.wait_for(|done| *done) => None,
            result = self.gateway.create(&request) => Some(result),
        };

        match outcome {
            None => {
                warn!(policy = %document.name, "session closed during save, result discarded");
                Err(WizardError::SessionClosed)
            }
            Some(Ok(created)) => {
                info!(policy = %document.name, token = %created.edit_token, "policy saved");
                self.last_error = None;
                self.saved = Some(created.edit_token.clone());
                Ok(Policy::new(created.edit_token, document))
            }
            Some(Err(err)) => {
                warn!(policy = %document.name, error = %err, "failed to save policy");
                let err = WizardError::from(err);
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

impl<G: PersistenceGateway + ?Sized> Drop for WizardController<G> {
    fn drop(&mut self) {
        self.session.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use policy_gateway::{seed, InMemoryPolicyStore, StorageError};

    fn controller() -> (Arc<InMemoryPolicyStore>, WizardController<InMemoryPolicyStore>) {
        let store = Arc::new(InMemoryPolicyStore::seeded());
        let catalog = SectorCatalog::new(seed::default_sector_templates());
        (store.clone(), WizardController::new(store, catalog))
    }

    fn fill_identity(ctl: &mut WizardController<InMemoryPolicyStore>) {
        ctl.update_identity(|identity| {
            *identity = PublishingIdentity::new("Acme News", "local-news", "residents");
        })
        .unwrap();
    }

    #[test]
    fn test_starts_on_identity_and_blocks() {
        let (_, mut ctl) = controller();
        assert_eq!(ctl.current_step(), WizardStep::Identity);
        assert!(!ctl.advance());
        assert_eq!(ctl.current_step(), WizardStep::Identity);
        assert!(!ctl.retreat());
    }

    #[test]
    fn test_walks_forward_and_back() {
        let (_, mut ctl) = controller();
        fill_identity(&mut ctl);
        assert!(ctl.advance());
        assert!(ctl.advance());
        assert_eq!(ctl.current_step(), WizardStep::Accountability);

        ctl.toggle_feedback_channel(FeedbackChannel::Email).unwrap();
        assert!(!ctl.advance());

        // Going back is allowed even while the current step is invalid
        assert!(ctl.retreat());
        assert_eq!(ctl.current_step(), WizardStep::Commitments);
        assert!(ctl.advance());

        ctl.toggle_feedback_channel(FeedbackChannel::Form).unwrap();
        assert!(ctl.advance());
        assert_eq!(ctl.current_step(), WizardStep::Review);
        assert!(!ctl.advance());
    }

    #[tokio::test]
    async fn test_finalize_requires_review_step() {
        let (_, mut ctl) = controller();
        fill_identity(&mut ctl);
        let err = ctl.finalize().await.unwrap_err();
        assert_eq!(err, WizardError::NotAtReview(WizardStep::Identity));
    }

    #[tokio::test]
    async fn test_finalize_revalidates_draft() {
        let store = Arc::new(InMemoryPolicyStore::seeded());
        let mut draft = PolicyDraft::new();
        draft.step = WizardStep::Review;
        let mut ctl = WizardController::with_draft(store.clone(), SectorCatalog::default(), draft);

        let err = ctl.finalize().await.unwrap_err();
        assert_eq!(err, WizardError::StepIncomplete(WizardStep::Identity));
        assert_eq!(store.create_attempts(), 0);
    }

    #[tokio::test]
    async fn test_saved_session_is_frozen() {
        let (store, mut ctl) = controller();
        fill_identity(&mut ctl);
        while ctl.advance() {}
        let policy = ctl.finalize().await.unwrap();

        assert_eq!(ctl.saved_token(), Some(&policy.edit_token));
        assert!(!ctl.retreat());
        assert_eq!(
            ctl.set_visibility(Visibility::Public),
            Err(WizardError::AlreadySaved)
        );
        assert_eq!(ctl.finalize().await, Err(WizardError::AlreadySaved));
        assert_eq!(store.policy_count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_failure_is_kept_for_review() {
        let (store, mut ctl) = controller();
        fill_identity(&mut ctl);
        while ctl.advance() {}
        store.set_offline(true);

        let err = ctl.finalize().await.unwrap_err();
        assert!(err.is_retryable());
        assert!(matches!(
            err,
            WizardError::Storage(StorageError::Unavailable(_))
        ));
        assert_eq!(ctl.current_step(), WizardStep::Review);
        assert!(ctl.review_summary().last_error.is_some());
        assert!(!ctl.is_saving());
    }

    #[test]
    fn test_review_summary_fallbacks() {
        let (_, mut ctl) = controller();
        ctl.update_identity(|identity| {
            *identity = PublishingIdentity::new("Acme News", "retired-sector", "residents");
        })
        .unwrap();
        let summary = ctl.review_summary();
        assert_eq!(summary.mission, NO_MISSION);
        assert_eq!(summary.sector_name, "retired-sector");
        assert_eq!(summary.definitions.len(), 6);
        assert_eq!(summary.visibility, Visibility::Internal);

        ctl.update_identity(|identity| {
            identity.sector = "local-news".into();
            identity.publishing_mission = "Cover the valley".into();
        })
        .unwrap();
        let summary = ctl.review_summary();
        assert_eq!(summary.sector_name, "Local News Outlet");
        assert_eq!(summary.mission, "Cover the valley");
    }

    #[test]
    fn test_drop_closes_session() {
        let (_, ctl) = controller();
        let handle = ctl.handle();
        assert!(!handle.is_closed());
        drop(ctl);
        assert!(handle.is_closed());
    }
}
