use std::sync::Arc;

use hm_core::TopicCatalog;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::{ApiConfig, Environment};

/// Shared state of every route
#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<TopicCatalog>,
    pub environment: Environment,
    pub metrics: Option<PrometheusHandle>,
}

impl ApiState {
    /// State serving the built-in catalog
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let metrics = if config.metrics_enabled {
            Some(crate::metrics::init_metrics()?)
        } else {
            tracing::info!("Metrics exporter disabled");
            None
        };

        Ok(Self {
            catalog: Arc::new(TopicCatalog::fallback().clone()),
            environment: config.env,
            metrics,
        })
    }

    /// State serving an explicit catalog, without metrics
    pub fn with_catalog(catalog: TopicCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            environment: Environment::Development,
            metrics: None,
        }
    }
}

impl std::fmt::Debug for ApiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiState")
            .field("topics", &self.catalog.len())
            .field("environment", &self.environment)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}
