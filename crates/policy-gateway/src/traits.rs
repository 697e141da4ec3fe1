use crate::model::{CreatedPolicy, PolicyCreateRequest};
use crate::StorageResult;
use async_trait::async_trait;
use policy_types::{EditToken, Policy, PolicyDocument, SectorTemplate};
use std::sync::Arc;

/// Storage interface the builder depends on.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Sector templates ordered by category, then name.
    async fn list_sector_templates(&self) -> StorageResult<Vec<SectorTemplate>>;

    /// Persist a new policy and return its freshly issued edit token.
    ///
    /// Every call is a distinct create; there is no deduplication key.
    async fn create(&self, request: &PolicyCreateRequest) -> StorageResult<CreatedPolicy>;
}

/// Locate and modify a saved policy by its edit token.
#[async_trait]
pub trait PolicyLookup: Send + Sync {
    async fn get_by_edit_token(&self, token: &EditToken) -> StorageResult<Option<Policy>>;

    /// Replace the document behind a token. The token itself never changes.
    async fn update_by_edit_token(
        &self,
        token: &EditToken,
        document: PolicyDocument,
    ) -> StorageResult<Policy>;
}

#[async_trait]
impl<T: PersistenceGateway + ?Sized> PersistenceGateway for Arc<T> {
    async fn list_sector_templates(&self) -> StorageResult<Vec<SectorTemplate>> {
        (**self).list_sector_templates().await
    }

    async fn create(&self, request: &PolicyCreateRequest) -> StorageResult<CreatedPolicy> {
        (**self).create(request).await
    }
}
