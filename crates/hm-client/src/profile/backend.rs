use async_trait::async_trait;
use hm_core::{OnboardingData, ProfileDetails, UserProfile};

use crate::error::ProfileError;

/// Storage for profile documents keyed by user id
///
/// Both write operations are upserts: they create the document when it is
/// absent and touch only their own fields when it exists.
#[async_trait]
pub trait ProfileBackend: Send + Sync {
    /// Profile stored under `uid`, if any
    async fn find(&self, uid: &str) -> Result<Option<UserProfile>, ProfileError>;

    /// Write name, role and goal. A created document starts with a zero
    /// readiness counter.
    async fn upsert_details(
        &self,
        uid: &str,
        details: &ProfileDetails,
    ) -> Result<(), ProfileError>;

    /// Write the onboarding fields and reset the readiness counter to zero.
    async fn merge_onboarding(
        &self,
        uid: &str,
        data: &OnboardingData,
    ) -> Result<(), ProfileError>;
}
