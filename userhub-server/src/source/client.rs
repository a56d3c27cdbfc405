//! reqwest-backed client for the random-user API

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::raw::page_entries;
use super::{RawUser, SourceError, UserSource};

/// Public random-user generator endpoint
pub const DEFAULT_SOURCE_URL: &str = "https://randomuser.me/api/";

/// HTTP client for `GET <source>?results=<n>&page=<p>`
#[derive(Debug, Clone)]
pub struct RandomUserClient {
    http: Client,
    base_url: String,
}

impl RandomUserClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceError> {
        let http = Client::builder()
            .user_agent(concat!("userhub/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl UserSource for RandomUserClient {
    async fn fetch_page(
        &self,
        page: u32,
        results: usize,
    ) -> Result<Option<Vec<RawUser>>, SourceError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("results", results.to_string()), ("page", page.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                page,
            });
        }

        let bytes = response.bytes().await?;
        let body: Value = match serde_json::from_slice(&bytes) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(page, error = %e, "source returned a non-JSON body");
                return Ok(None);
            }
        };

        Ok(page_entries(body))
    }
}
