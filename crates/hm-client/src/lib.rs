//! Client-side data access for Hummet.
//!
//! [`TopicRepository`] reads interview topics from the remote topic API and
//! substitutes the static catalog when the API is unreachable, tagging every
//! result with its [`Provenance`](hm_core::Provenance).
//! [`UserProfileStore`] keeps one profile document per authenticated user.

pub mod auth;
pub mod config;
pub mod error;
pub mod profile;
pub mod remote;
pub mod topics;

pub use auth::{AuthSession, StaticSession};
pub use config::ClientConfig;
pub use error::{ProfileError, TopicApiError, TopicError};
pub use profile::{MemoryProfileBackend, PgProfileBackend, ProfileBackend, UserProfileStore};
pub use remote::{HttpTopicApi, TopicApi};
pub use topics::TopicRepository;
