//! Supabase Storage document store.
//!
//! Talks to the Supabase Storage REST API with a service-role key. Each
//! project's requirements document lives in a single bucket as
//! `{project_id}.md`.
//!
//! - Download: `GET /storage/v1/object/{bucket}/{key}`
//! - Upload:   `POST /storage/v1/object/{bucket}/{key}` (duplicate rejected)
//! - Update:   same POST with the `x-upsert: true` header

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::domain::foundation::ProjectId;
use crate::ports::{DocumentStore, StoreError};

/// Default bucket holding requirements documents.
const DEFAULT_BUCKET: &str = "project-requirements-markdowns";

/// Configuration for the Supabase store.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://abc123.supabase.co`.
    pub url: String,
    /// Service-role key used for both `apikey` and bearer auth.
    service_key: Secret<String>,
    /// Bucket name.
    pub bucket: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl SupabaseConfig {
    /// Creates a configuration for the given project URL and service key.
    pub fn new(url: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            service_key: Secret::new(service_key.into()),
            bucket: DEFAULT_BUCKET.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the bucket name.
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    fn service_key(&self) -> &str {
        self.service_key.expose_secret()
    }
}

/// Supabase Storage implementation of the DocumentStore port.
pub struct SupabaseDocumentStore {
    config: SupabaseConfig,
    client: Client,
}

impl SupabaseDocumentStore {
    /// Creates a new store with the given configuration.
    pub fn new(config: SupabaseConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn object_url(&self, project_id: ProjectId) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.config.url.trim_end_matches('/'),
            self.config.bucket,
            object_key(project_id)
        )
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", self.config.service_key())
            .header(
                "Authorization",
                format!("Bearer {}", self.config.service_key()),
            )
    }

    async fn store_object(
        &self,
        project_id: ProjectId,
        content: &str,
        upsert: bool,
    ) -> Result<(), StoreError> {
        let mut request = self
            .authorized(self.client.post(self.object_url(project_id)))
            .header("Content-Type", "text/markdown")
            .body(content.to_string());
        if upsert {
            request = request.header("x-upsert", "true");
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();

        // Supabase reports a duplicate object as 409, older versions as a
        // 400 with "Duplicate" in the body.
        if status == StatusCode::CONFLICT || (status == StatusCode::BAD_REQUEST && body.contains("Duplicate"))
        {
            return Err(StoreError::Conflict(project_id));
        }

        Err(map_status(status, &body))
    }
}

/// Object key for a project's document.
fn object_key(project_id: ProjectId) -> String {
    format!("{}.md", project_id)
}

fn map_transport_error(err: reqwest::Error) -> StoreError {
    if err.is_timeout() || err.is_connect() {
        StoreError::Unavailable(err.to_string())
    } else {
        StoreError::Unexpected(err.to_string())
    }
}

fn map_status(status: StatusCode, body: &str) -> StoreError {
    if status.is_server_error() {
        StoreError::Unavailable(format!("Storage error {}: {}", status, body))
    } else {
        StoreError::Unexpected(format!("Storage error {}: {}", status, body))
    }
}

#[async_trait]
impl DocumentStore for SupabaseDocumentStore {
    async fn download(&self, project_id: ProjectId) -> Result<Option<String>, StoreError> {
        let response = self
            .authorized(self.client.get(self.object_url(project_id)))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Missing objects also surface as 400 with "not_found".
            if status == StatusCode::BAD_REQUEST && body.contains("not_found") {
                return Ok(None);
            }
            return Err(map_status(status, &body));
        }

        let content = response
            .text()
            .await
            .map_err(|e| StoreError::Unexpected(format!("Failed to read body: {}", e)))?;
        Ok(Some(content))
    }

    async fn upload(&self, project_id: ProjectId, content: &str) -> Result<(), StoreError> {
        self.store_object(project_id, content, false).await
    }

    async fn update(&self, project_id: ProjectId, content: &str) -> Result<(), StoreError> {
        self.store_object(project_id, content, true).await
    }
}
