//! Verification backend collaborator.

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{RecordId, VerificationRecord, VerificationStatus};

pub use http::HttpClient;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("HTTP error {status}: {text}")]
    Http { status: u16, text: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out")]
    Timeout,
    #[error("Invalid response body: {0}")]
    Decode(String),
    #[error("Invalid endpoint url: {0}")]
    Url(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

#[async_trait]
pub trait VerificationApi: Send + Sync + std::fmt::Debug {
    /// `GET /api/verifications`, the `items` of the body.
    async fn list_verifications(&self, token: &str) -> Result<Vec<VerificationRecord>, ApiError>;

    /// `PATCH /api/verifications/{id}` with the new status.
    async fn update_status(
        &self,
        token: &str,
        id: &RecordId,
        status: VerificationStatus,
    ) -> Result<(), ApiError>;
}
