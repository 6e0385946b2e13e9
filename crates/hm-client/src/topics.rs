use std::sync::Arc;

use hm_core::{Sourced, Topic, TopicCatalog, TopicDetail, TopicFilter};
use metrics::counter;

use crate::{
    config::ClientConfig,
    error::{TopicApiError, TopicError},
    remote::{HttpTopicApi, TopicApi},
};

/// Best-available topic data
///
/// Each call makes one attempt against the remote API. On any failure the
/// static catalog is consulted instead and the result is tagged
/// [`Provenance::Fallback`](hm_core::Provenance::Fallback). Calls share no
/// mutable state, so a repository can be cloned into concurrent tasks.
#[derive(Debug)]
pub struct TopicRepository<A = HttpTopicApi> {
    api: Arc<A>,
    fallback: Arc<TopicCatalog>,
}

impl<A> Clone for TopicRepository<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            fallback: Arc::clone(&self.fallback),
        }
    }
}

impl TopicRepository<HttpTopicApi> {
    /// HTTP repository for the configured API, falling back to the built-in catalog
    pub fn from_config(config: &ClientConfig) -> Result<Self, TopicApiError> {
        Ok(Self::new(HttpTopicApi::from_config(config)?))
    }
}

impl<A: TopicApi> TopicRepository<A> {
    /// Repository falling back to the built-in catalog
    pub fn new(api: A) -> Self {
        Self::with_fallback(api, TopicCatalog::fallback().clone())
    }

    /// Repository falling back to `fallback` instead of the built-in catalog
    pub fn with_fallback(api: A, fallback: TopicCatalog) -> Self {
        Self {
            api: Arc::new(api),
            fallback: Arc::new(fallback),
        }
    }

    /// All topics. Never fails: a failed fetch yields the fallback list.
    pub async fn topics(&self) -> Sourced<Vec<Topic>> {
        match self.api.fetch_topics().await {
            Ok(topics) => Sourced::live(topics),
            Err(e) => {
                record_fallback("topics", &e);
                Sourced::fallback(self.fallback.topics().to_vec())
            }
        }
    }

    /// Topics matching `filter`, in API order
    pub async fn filtered_topics(&self, filter: &TopicFilter) -> Sourced<Vec<Topic>> {
        self.topics().await.map(|topics| filter.apply(&topics))
    }

    /// Detail of one topic
    ///
    /// Fails only when the fetch fails and the id is not in the fallback catalog.
    pub async fn topic_detail(&self, id: &str) -> Result<Sourced<TopicDetail>, TopicError> {
        match self.api.fetch_topic_detail(id).await {
            Ok(detail) => Ok(Sourced::live(detail)),
            Err(e) => {
                record_fallback("topic_detail", &e);
                self.fallback
                    .detail(id)
                    .cloned()
                    .map(Sourced::fallback)
                    .ok_or_else(|| TopicError::NotFound(id.to_string()))
            }
        }
    }

    /// Question list of one topic, falling back to the catalog's sample questions
    pub async fn topic_questions(&self, id: &str) -> Result<Sourced<Vec<String>>, TopicError> {
        match self.api.fetch_topic_questions(id).await {
            Ok(questions) => Ok(Sourced::live(questions)),
            Err(e) => {
                record_fallback("topic_questions", &e);
                self.fallback
                    .questions(id)
                    .map(|q| Sourced::fallback(q.to_vec()))
                    .ok_or_else(|| TopicError::NotFound(id.to_string()))
            }
        }
    }
}

fn record_fallback(operation: &'static str, error: &TopicApiError) {
    tracing::warn!(operation, error = %error, "Topic API unavailable, using fallback data");
    counter!("topic_fallback_total", "operation" => operation).increment(1);
}
