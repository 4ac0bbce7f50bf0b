use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use url::Url;

use super::{ApiError, VerificationApi};
use crate::models::{RecordId, StatusUpdate, VerificationList, VerificationRecord, VerificationStatus};

#[async_trait]
pub trait ResponseExt {
    async fn check_success(self) -> Result<Self, ApiError>
    where
        Self: Sized;
}

#[async_trait]
impl ResponseExt for Response {
    async fn check_success(self) -> Result<Self, ApiError> {
        let status = self.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                text: self
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read response text".to_string()),
            });
        }
        Ok(self)
    }
}

/// `reqwest` implementation of [`VerificationApi`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base: Url,
    user_agent: String,
}

impl HttpClient {
    pub fn new(base: Url, timeout: Duration, user_agent: impl Into<String>) -> Result<Self, ApiError> {
        if base.cannot_be_a_base() {
            return Err(ApiError::Url(base.to_string()));
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base,
            user_agent: user_agent.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Url(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url, token: &str) -> RequestBuilder {
        let req = self
            .http
            .request(method, url)
            .header("Authorization", format!("Bearer {}", token))
            .header("User-Agent", &self.user_agent);
        tracing::debug!("Sending http request: {:?}", req);
        req
    }
}

#[async_trait]
impl VerificationApi for HttpClient {
    async fn list_verifications(&self, token: &str) -> Result<Vec<VerificationRecord>, ApiError> {
        let url = self.endpoint(&["api", "verifications"])?;
        let res = self
            .request(Method::GET, url, token)
            .send()
            .await?
            .check_success()
            .await?;
        let list: VerificationList = res.json().await?;
        tracing::debug!("fetched {} verifications", list.items.len());
        Ok(list.items)
    }

    async fn update_status(
        &self,
        token: &str,
        id: &RecordId,
        status: VerificationStatus,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "verifications", id.as_str()])?;
        self.request(Method::PATCH, url, token)
            .json(&StatusUpdate::new(status))
            .send()
            .await?
            .check_success()
            .await?;
        Ok(())
    }
}
