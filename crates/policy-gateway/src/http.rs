//! HTTP adapter for a remote policy service.

use crate::model::{CreatedPolicy, PolicyCreateRequest};
use crate::traits::{PersistenceGateway, PolicyLookup};
use crate::{StorageError, StorageResult};
use async_trait::async_trait;
use policy_types::{EditToken, Policy, PolicyDocument, SectorTemplate};
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

/// Gateway backed by the policy service's JSON API.
pub struct HttpPolicyGateway {
    client: Client,
    base_url: String,
}

impl HttpPolicyGateway {
    pub fn new(base_url: &str, timeout: Duration) -> StorageResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> StorageResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await.map_err(transport)?;
        handle_response(response).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> StorageResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        handle_response(response).await
    }

    async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> StorageResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        handle_response(response).await
    }
}

fn transport(err: reqwest::Error) -> StorageError {
    if err.is_decode() {
        StorageError::Serialization(err.to_string())
    } else {
        StorageError::Unavailable(err.to_string())
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> StorageResult<T> {
    let status = response.status();

    if status.is_success() {
        response.json().await.map_err(transport)
    } else if status == StatusCode::NOT_FOUND {
        Err(StorageError::NotFound(response.url().path().to_string()))
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(StorageError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl PersistenceGateway for HttpPolicyGateway {
    /// The service orders its listing; it is returned unchanged.
    async fn list_sector_templates(&self) -> StorageResult<Vec<SectorTemplate>> {
        self.get("/api/sectors").await
    }

    async fn create(&self, request: &PolicyCreateRequest) -> StorageResult<CreatedPolicy> {
        self.post("/api/policies", request).await
    }
}

#[async_trait]
impl PolicyLookup for HttpPolicyGateway {
    async fn get_by_edit_token(&self, token: &EditToken) -> StorageResult<Option<Policy>> {
        match self
            .get(&format!("/api/policies/edit/{}", token.as_str()))
            .await
        {
            Ok(policy) => Ok(Some(policy)),
            Err(StorageError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn update_by_edit_token(
        &self,
        token: &EditToken,
        document: PolicyDocument,
    ) -> StorageResult<Policy> {
        self.put(&format!("/api/policies/edit/{}", token.as_str()), &document)
            .await
    }
}
