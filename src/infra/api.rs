//! HTTP client for the ReportCard backend.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::{ApiError, ProfilePayload, ReportCollection};

pub const PROFILE_ENDPOINT: &str = "/api/private";
pub const REPORTS_ENDPOINT: &str = "/api/reports";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Backend calls used by the app. Implemented over HTTP, faked in tests.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn fetch_profile(&self, token: &str) -> Result<ProfilePayload, ApiError>;
}

#[async_trait]
pub trait ReportsApi: Send + Sync {
    async fn fetch_reports(&self, token: &str) -> Result<ReportCollection, ApiError>;
}

#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim_end_matches('/').to_string();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ApiError::InvalidUrl(base_url));
        }
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: trimmed,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        token: &str,
    ) -> Result<T, ApiError> {
        let url = self.url(endpoint);
        log::debug!("GET {url}");
        let response = self.client.get(&url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ProfileApi for HttpApi {
    async fn fetch_profile(&self, token: &str) -> Result<ProfilePayload, ApiError> {
        self.get_json(PROFILE_ENDPOINT, token).await
    }
}

#[async_trait]
impl ReportsApi for HttpApi {
    async fn fetch_reports(&self, token: &str) -> Result<ReportCollection, ApiError> {
        self.get_json(REPORTS_ENDPOINT, token).await
    }
}
