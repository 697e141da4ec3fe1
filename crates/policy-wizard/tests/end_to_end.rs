use async_trait::async_trait;
use policy_gateway::{
    CreatedPolicy, InMemoryPolicyStore, PersistenceGateway, PolicyCreateRequest, PolicyLookup,
    StorageResult,
};
use policy_types::{
    Dimension, FeedbackChannel, PublishingIdentity, SectorTemplate, TransparencyFlag, Visibility,
    WizardStep,
};
use policy_wizard::{BuilderEntry, WizardController, WizardError};
use std::sync::Arc;
use tokio::sync::Notify;

async fn open<G: PersistenceGateway + ?Sized>(gateway: Arc<G>) -> WizardController<G> {
    match BuilderEntry::open(gateway).await {
        BuilderEntry::Ready(controller) => controller,
        BuilderEntry::Unavailable { reason } => panic!("builder unavailable: {reason}"),
    }
}

fn acme<G: PersistenceGateway + ?Sized>(wizard: &mut WizardController<G>) {
    wizard
        .update_identity(|identity| {
            *identity = PublishingIdentity::new("Acme News", "local-news", "residents");
        })
        .unwrap();
}

fn walk_to_review<G: PersistenceGateway + ?Sized>(wizard: &mut WizardController<G>) {
    assert!(wizard.can_proceed(WizardStep::Identity));
    assert!(wizard.advance());
    assert!(wizard.advance());
    assert!(wizard.can_proceed(WizardStep::Accountability));
    assert!(wizard.advance());
    assert_eq!(wizard.current_step(), WizardStep::Review);
}

#[tokio::test]
async fn acme_news_saves_with_six_definitions() {
    let store = Arc::new(InMemoryPolicyStore::seeded());
    let mut wizard = open(store.clone()).await;
    acme(&mut wizard);
    walk_to_review(&mut wizard);

    let policy = wizard.finalize().await.unwrap();
    assert_eq!(policy.name(), "Acme News Publishing Policy");

    let dimensions: Vec<_> = policy.definitions().iter().map(|d| d.source_field).collect();
    assert_eq!(
        dimensions,
        vec![
            Dimension::Sourcing,
            Dimension::Accuracy,
            Dimension::Independence,
            Dimension::CorrectionTimeframe,
            Dimension::FeedbackMechanism,
            Dimension::ReviewSchedule,
        ]
    );

    let stored = store
        .get_by_edit_token(&policy.edit_token)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, policy);
    assert!(wizard.is_saved());
}

#[tokio::test]
async fn transparency_and_visibility_reach_the_document() {
    let store = Arc::new(InMemoryPolicyStore::seeded());
    let mut wizard = open(store).await;
    acme(&mut wizard);
    wizard.toggle_transparency(TransparencyFlag::Funding).unwrap();
    wizard.toggle_transparency(TransparencyFlag::Corrections).unwrap();
    wizard
        .toggle_feedback_channel(FeedbackChannel::PublicComment)
        .unwrap();
    wizard.set_visibility(Visibility::Public).unwrap();
    walk_to_review(&mut wizard);

    let policy = wizard.finalize().await.unwrap();
    assert_eq!(policy.definitions().len(), 8);
    assert_eq!(policy.document.visibility, Visibility::Public);
    let feedback = policy
        .definitions()
        .iter()
        .filter(|d| d.source_field == Dimension::FeedbackMechanism)
        .count();
    assert_eq!(feedback, 1);
}

#[tokio::test]
async fn failed_save_keeps_draft_and_retry_creates_anew() {
    let store = Arc::new(InMemoryPolicyStore::seeded());
    let mut wizard = open(store.clone()).await;
    acme(&mut wizard);
    walk_to_review(&mut wizard);
    let draft_before = wizard.draft().clone();

    store.set_offline(true);
    let err = wizard.finalize().await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(wizard.current_step(), WizardStep::Review);
    assert_eq!(wizard.draft(), &draft_before);
    assert!(wizard
        .last_error()
        .unwrap()
        .starts_with("Failed to save policy"));

    store.set_offline(false);
    let policy = wizard.finalize().await.unwrap();
    assert_eq!(store.create_attempts(), 2);
    assert_eq!(store.policy_count().unwrap(), 1);
    assert!(wizard.last_error().is_none());
    assert_eq!(wizard.saved_token(), Some(&policy.edit_token));
}

#[tokio::test]
async fn unknown_sector_does_not_block() {
    let store = Arc::new(InMemoryPolicyStore::with_sectors(vec![SectorTemplate::new(
        "podcast",
        "Podcast",
        Default::default(),
    )]));
    let mut wizard = open(store).await;
    acme(&mut wizard);
    assert!(wizard.identity_check().unknown_sector);
    walk_to_review(&mut wizard);
    assert_eq!(wizard.review_summary().sector_name, "local-news");
    assert!(wizard.finalize().await.is_ok());
}

/// Gateway whose create call waits until released
struct HeldGateway {
    inner: InMemoryPolicyStore,
    entered: Notify,
    release: Notify,
}

impl HeldGateway {
    fn new() -> Self {
        Self {
            inner: InMemoryPolicyStore::seeded(),
            entered: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl PersistenceGateway for HeldGateway {
    async fn list_sector_templates(&self) -> StorageResult<Vec<SectorTemplate>> {
        self.inner.list_sector_templates().await
    }

    async fn create(&self, request: &PolicyCreateRequest) -> StorageResult<CreatedPolicy> {
        self.entered.notify_one();
        self.release.notified().await;
        self.inner.create(request).await
    }
}

#[tokio::test]
async fn busy_flag_tracks_outstanding_save() {
    let gateway = Arc::new(HeldGateway::new());
    let mut wizard = open(gateway.clone()).await;
    acme(&mut wizard);
    walk_to_review(&mut wizard);
    let handle = wizard.handle();
    assert!(!handle.is_saving());

    let task = tokio::spawn(async move {
        let result = wizard.finalize().await;
        (wizard, result)
    });

    gateway.entered.notified().await;
    assert!(handle.is_saving());
    gateway.release.notify_one();

    let (wizard, result) = task.await.unwrap();
    assert!(result.is_ok());
    assert!(!handle.is_saving());
    assert!(wizard.is_saved());
    assert_eq!(gateway.inner.policy_count().unwrap(), 1);
}

#[tokio::test]
async fn teardown_discards_outstanding_save() {
    let gateway = Arc::new(HeldGateway::new());
    let mut wizard = open(gateway.clone()).await;
    acme(&mut wizard);
    walk_to_review(&mut wizard);
    let handle = wizard.handle();

    let task = tokio::spawn(async move {
        let result = wizard.finalize().await;
        (wizard, result)
    });

    gateway.entered.notified().await;
    handle.teardown();

    let (wizard, result) = task.await.unwrap();
    assert_eq!(result, Err(WizardError::SessionClosed));
    assert!(!handle.is_saving());
    assert!(!wizard.is_saved());
    assert_eq!(gateway.inner.policy_count().unwrap(), 0);
}

#[tokio::test]
async fn offline_catalog_shows_error_screen() {
    let store = InMemoryPolicyStore::seeded();
    store.set_offline(true);
    let entry = BuilderEntry::open(Arc::new(store)).await;
    assert!(matches!(entry, BuilderEntry::Unavailable { .. }));
}
