//! HTTP contact store over the REST backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use url::Url;

use rolo_core::{Contact, ContactDraft, ContactId, ContactStore, StoreError};

use crate::decode::{decode_contact, decode_contact_list};

/// Default backend address for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// REST implementation of [`ContactStore`].
///
/// One network round trip per operation; no auth headers. Transport
/// failures, non-2xx statuses, and malformed bodies all surface as
/// [`StoreError`] values, never as panics.
pub struct ContactApi {
    http: Client,
    base_url: Url,
}

impl ContactApi {
    pub fn new(base_url: Url) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("rolo/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self { http, base_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url, StoreError> {
        self.base_url.join(path).map_err(|e| StoreError::Network {
            message: format!("invalid URL {path}: {e}"),
        })
    }

    fn contact_endpoint(&self, id: ContactId) -> Result<Url, StoreError> {
        self.endpoint(&format!("/api/contacts/{id}"))
    }

    /// Check the status and read the body.
    ///
    /// 404 maps to [`StoreError::NotFound`] on routes addressing a single
    /// contact; any other non-2xx maps to [`StoreError::Status`].
    async fn success_body(
        response: Response,
        missing: Option<ContactId>,
    ) -> Result<String, StoreError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = missing {
                return Err(StoreError::NotFound(id));
            }
        }
        if !status.is_success() {
            return Err(StoreError::Status {
                code: status.as_u16(),
            });
        }
        response.text().await.map_err(transport_error)
    }
}

impl Default for ContactApi {
    fn default() -> Self {
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid");
        Self::new(base_url)
    }
}

fn transport_error(e: reqwest::Error) -> StoreError {
    StoreError::Network {
        message: e.to_string(),
    }
}

#[async_trait]
impl ContactStore for ContactApi {
    async fn fetch_all(&self) -> Result<Vec<Contact>, StoreError> {
        let url = self.endpoint("/api/contacts")?;
        tracing::debug!(%url, "fetching contact collection");
        let response = self.http.get(url).send().await.map_err(transport_error)?;
        let body = Self::success_body(response, None).await?;
        decode_contact_list(&body)
    }

    async fn fetch_one(&self, id: ContactId) -> Result<Contact, StoreError> {
        let url = self.contact_endpoint(id)?;
        tracing::debug!(%url, "fetching contact");
        let response = self.http.get(url).send().await.map_err(transport_error)?;
        let body = Self::success_body(response, Some(id)).await?;
        decode_contact(&body)
    }

    async fn create(&self, draft: &ContactDraft) -> Result<Contact, StoreError> {
        // The backend expects the trailing slash on the create route.
        let url = self.endpoint("/api/contacts/")?;
        tracing::debug!(%url, "creating contact");
        let response = self
            .http
            .post(url)
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;
        let body = Self::success_body(response, None).await?;
        decode_contact(&body)
    }

    async fn update(&self, draft: &ContactDraft, id: ContactId) -> Result<Contact, StoreError> {
        let url = self.contact_endpoint(id)?;
        tracing::debug!(%url, "updating contact");
        let response = self
            .http
            .put(url)
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;
        let body = Self::success_body(response, Some(id)).await?;
        decode_contact(&body)
    }

    async fn remove(&self, id: ContactId) -> Result<ContactId, StoreError> {
        let url = self.contact_endpoint(id)?;
        tracing::debug!(%url, "deleting contact");
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(transport_error)?;
        // Success body is empty or plain text; it is not decoded.
        Self::success_body(response, Some(id)).await?;
        Ok(id)
    }
}
