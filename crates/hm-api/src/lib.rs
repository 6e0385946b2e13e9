//! HTTP server for the Hummet topic API.
//!
//! Serves the topic list, topic details and topic questions from a
//! [`hm_core::TopicCatalog`].

pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod router;
pub mod state;
pub mod topic;
pub mod tracing;

pub use config::{ApiConfig, Environment};
pub use state::ApiState;
