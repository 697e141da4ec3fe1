//! In-memory reference implementation of the gateway traits.
//!
//! Deterministic apart from token issuance. Used by tests and by the
//! command-line builder when no remote backend is configured.

use crate::model::{sort_for_listing, CreatedPolicy, PolicyCreateRequest, StoredPolicy};
use crate::seed::default_sector_templates;
use crate::traits::{PersistenceGateway, PolicyLookup};
use crate::{StorageError, StorageResult};
use async_trait::async_trait;
use chrono::Utc;
use policy_types::{EditToken, Policy, PolicyDocument, SectorTemplate};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;
use uuid::Uuid;

/// In-memory policy store.
#[derive(Default)]
pub struct InMemoryPolicyStore {
    sectors: RwLock<Vec<SectorTemplate>>,
    policies: RwLock<HashMap<EditToken, StoredPolicy>>,
    offline: AtomicBool,
    create_attempts: AtomicUsize,
}

impl InMemoryPolicyStore {
    /// Empty store with no sector templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the built-in sector catalog.
    pub fn seeded() -> Self {
        Self::with_sectors(default_sector_templates())
    }

    pub fn with_sectors(mut sectors: Vec<SectorTemplate>) -> Self {
        sort_for_listing(&mut sectors);
        Self {
            sectors: RwLock::new(sectors),
            ..Self::default()
        }
    }

    /// Simulate an unreachable backend. Every call fails with
    /// [`StorageError::Unavailable`] while set.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of persisted policies.
    pub fn policy_count(&self) -> StorageResult<usize> {
        let guard = self
            .policies
            .read()
            .map_err(|_| StorageError::Backend("policies lock poisoned".to_string()))?;
        Ok(guard.len())
    }

    /// Number of create calls received, including failed ones.
    pub fn create_attempts(&self) -> usize {
        self.create_attempts.load(Ordering::SeqCst)
    }

    pub fn stored(&self, token: &EditToken) -> StorageResult<Option<StoredPolicy>> {
        let guard = self
            .policies
            .read()
            .map_err(|_| StorageError::Backend("policies lock poisoned".to_string()))?;
        Ok(guard.get(token).cloned())
    }

    fn ensure_online(&self) -> StorageResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(
                "in-memory store is offline".to_string(),
            ));
        }
        Ok(())
    }
}

fn validate(document: &PolicyDocument) -> StorageResult<()> {
    let identity = &document.publishing_identity;
    let required = [
        ("name", document.name.as_str()),
        ("organization_name", identity.organization_name.as_str()),
        ("sector", identity.sector.as_str()),
        ("primary_audience", identity.primary_audience.as_str()),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(StorageError::InvalidInput(format!("{field} is required")));
        }
    }
    Ok(())
}

#[async_trait]
impl PersistenceGateway for InMemoryPolicyStore {
    async fn list_sector_templates(&self) -> StorageResult<Vec<SectorTemplate>> {
        self.ensure_online()?;
        let guard = self
            .sectors
            .read()
            .map_err(|_| StorageError::Backend("sectors lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    async fn create(&self, request: &PolicyCreateRequest) -> StorageResult<CreatedPolicy> {
        self.create_attempts.fetch_add(1, Ordering::SeqCst);
        self.ensure_online()?;

        let document = request.clone().into_document();
        validate(&document)?;

        let mut guard = self
            .policies
            .write()
            .map_err(|_| StorageError::Backend("policies lock poisoned".to_string()))?;

        let edit_token = EditToken::new(Uuid::new_v4().to_string());
        if guard.contains_key(&edit_token) {
            return Err(StorageError::Conflict(format!(
                "edit token {edit_token} already issued"
            )));
        }

        let now = Utc::now();
        guard.insert(
            edit_token.clone(),
            StoredPolicy {
                policy: Policy::new(edit_token.clone(), document),
                created_at: now,
                updated_at: now,
            },
        );

        tracing::debug!(token = %edit_token, "policy created");
        Ok(CreatedPolicy { edit_token })
    }
}

#[async_trait]
impl PolicyLookup for InMemoryPolicyStore {
    async fn get_by_edit_token(&self, token: &EditToken) -> StorageResult<Option<Policy>> {
        self.ensure_online()?;
        Ok(self.stored(token)?.map(|record| record.policy))
    }

    async fn update_by_edit_token(
        &self,
        token: &EditToken,
        document: PolicyDocument,
    ) -> StorageResult<Policy> {
        self.ensure_online()?;
        validate(&document)?;

        let mut guard = self
            .policies
            .write()
            .map_err(|_| StorageError::Backend("policies lock poisoned".to_string()))?;

        let record = guard
            .get_mut(token)
            .ok_or_else(|| StorageError::NotFound(format!("policy {token}")))?;

        record.policy.document = document;
        record.updated_at = Utc::now();
        Ok(record.policy.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use policy_types::{
        AccountabilityFramework, EditorialCommitments, PublishingIdentity, SectorCategory,
        Visibility,
    };

    fn document(org: &str) -> PolicyDocument {
        PolicyDocument {
            name: format!("{org} Publishing Policy"),
            sector: "local-news".into(),
            publishing_identity: PublishingIdentity::new(org, "local-news", "residents"),
            editorial_commitments: EditorialCommitments::default(),
            accountability_framework: AccountabilityFramework::default(),
            derived_definitions: Vec::new(),
            visibility: Visibility::Internal,
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup() {
        let store = InMemoryPolicyStore::seeded();
        let request = PolicyCreateRequest::from(document("Acme News"));

        let created = store.create(&request).await.unwrap();
        assert!(!created.edit_token.as_str().is_empty());
        assert_eq!(store.policy_count().unwrap(), 1);

        let policy = store
            .get_by_edit_token(&created.edit_token)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(policy.name(), "Acme News Publishing Policy");
        assert_eq!(policy.edit_token, created.edit_token);
    }

    #[tokio::test]
    async fn test_each_create_issues_fresh_token() {
        let store = InMemoryPolicyStore::seeded();
        let request = PolicyCreateRequest::from(document("Acme News"));
        let first = store.create(&request).await.unwrap();
        let second = store.create(&request).await.unwrap();
        assert_ne!(first.edit_token, second.edit_token);
        assert_eq!(store.policy_count().unwrap(), 2);
        assert_eq!(store.create_attempts(), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_token() {
        let store = InMemoryPolicyStore::seeded();
        let created = store
            .create(&PolicyCreateRequest::from(document("Acme News")))
            .await
            .unwrap();
        let before = store.stored(&created.edit_token).unwrap().unwrap();

        let updated = store
            .update_by_edit_token(&created.edit_token, document("Acme Daily"))
            .await
            .unwrap();
        assert_eq!(updated.edit_token, created.edit_token);
        assert_eq!(updated.name(), "Acme Daily Publishing Policy");

        let after = store.stored(&created.edit_token).unwrap().unwrap();
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);
    }

    #[tokio::test]
    async fn test_unknown_token() {
        let store = InMemoryPolicyStore::new();
        let token = EditToken::new("missing");
        assert!(store.get_by_edit_token(&token).await.unwrap().is_none());
        let err = store
            .update_by_edit_token(&token, document("Acme News"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_rejects_incomplete_document() {
        let store = InMemoryPolicyStore::new();
        let mut doc = document("Acme News");
        doc.publishing_identity.primary_audience = "  ".into();
        let err = store
            .create(&PolicyCreateRequest::from(doc))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StorageError::InvalidInput("primary_audience is required".into())
        );
        assert_eq!(store.policy_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_offline_store() {
        let store = InMemoryPolicyStore::seeded();
        store.set_offline(true);
        assert!(matches!(
            store.list_sector_templates().await,
            Err(StorageError::Unavailable(_))
        ));
        let err = store
            .create(&PolicyCreateRequest::from(document("Acme News")))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(_)));
        assert_eq!(store.create_attempts(), 1);

        store.set_offline(false);
        assert_eq!(store.list_sector_templates().await.unwrap().len(), 31);
    }

    #[test]
    fn test_poisoned_lock_is_a_backend_error() {
        let store = std::sync::Arc::new(InMemoryPolicyStore::new());
        let writer = std::sync::Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = writer.policies.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(matches!(store.policy_count(), Err(StorageError::Backend(_))));
        assert!(matches!(
            store.stored(&EditToken::new("any")),
            Err(StorageError::Backend(_))
        ));
    }

    #[tokio::test]
    async fn test_listing_is_sorted() {
        let store = InMemoryPolicyStore::with_sectors(vec![
            SectorTemplate::new("zine", "Zine", SectorCategory::Other),
            SectorTemplate::new("podcast", "Podcast", SectorCategory::MediaJournalism),
            SectorTemplate::new("blogger", "Blogger", SectorCategory::IndividualCreator),
        ]);
        let listed = store.list_sector_templates().await.unwrap();
        let slugs: Vec<_> = listed.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(slugs, vec!["blogger", "podcast", "zine"]);
    }
}
