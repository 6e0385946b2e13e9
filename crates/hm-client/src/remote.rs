use std::time::Duration;

use async_trait::async_trait;
use hm_core::{Topic, TopicDetail};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::{config::ClientConfig, error::TopicApiError};

/// Remote topic API
///
/// Every method is a single attempt: no retry, no caching.
#[async_trait]
pub trait TopicApi: Send + Sync {
    /// `GET /api/topics`
    async fn fetch_topics(&self) -> Result<Vec<Topic>, TopicApiError>;

    /// `GET /api/topics/{id}`
    async fn fetch_topic_detail(&self, id: &str) -> Result<TopicDetail, TopicApiError>;

    /// `GET /api/topics/{id}/questions`
    async fn fetch_topic_questions(&self, id: &str) -> Result<Vec<String>, TopicApiError>;
}

/// JSON-over-HTTP implementation of [`TopicApi`]
#[derive(Debug, Clone)]
pub struct HttpTopicApi {
    client: Client,
    base_url: Url,
}

impl HttpTopicApi {
    /// Client for the API rooted at `base_url`, with a per request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TopicApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| TopicApiError::InvalidBaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(TopicApiError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// Client for `HM_API_BASE_URL` with `HM_API_TIMEOUT_SECS`
    pub fn from_config(config: &ClientConfig) -> Result<Self, TopicApiError> {
        Self::new(&config.api_base_url, config.api_timeout())
    }

    /// Base URL with the given path segments appended, each percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TopicApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| TopicApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, TopicApiError> {
        tracing::debug!(%url, "Fetching from topic API");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TopicApiError::Status(status));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl TopicApi for HttpTopicApi {
    async fn fetch_topics(&self) -> Result<Vec<Topic>, TopicApiError> {
        let url = self.endpoint(&["api", "topics"])?;
        self.get_json(url).await
    }

    async fn fetch_topic_detail(&self, id: &str) -> Result<TopicDetail, TopicApiError> {
        let url = self.endpoint(&["api", "topics", id])?;
        self.get_json(url).await
    }

    async fn fetch_topic_questions(&self, id: &str) -> Result<Vec<String>, TopicApiError> {
        let url = self.endpoint(&["api", "topics", id, "questions"])?;
        self.get_json(url).await
    }
}
