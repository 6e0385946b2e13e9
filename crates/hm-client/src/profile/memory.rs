use std::collections::HashMap;

use async_trait::async_trait;
use hm_core::{OnboardingData, ProfileDetails, UserProfile};
use tokio::sync::RwLock;

use super::backend::ProfileBackend;
use crate::error::ProfileError;

/// In-process profile storage for tests and offline use
#[derive(Debug, Default)]
pub struct MemoryProfileBackend {
    profiles: RwLock<HashMap<String, UserProfile>>,
}

impl MemoryProfileBackend {
    /// Empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a complete document, replacing any existing one with the same uid
    pub async fn insert(&self, profile: UserProfile) {
        self.profiles
            .write()
            .await
            .insert(profile.uid.clone(), profile);
    }

    /// Number of stored profiles
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    /// Whether no profile is stored
    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileBackend for MemoryProfileBackend {
    async fn find(&self, uid: &str) -> Result<Option<UserProfile>, ProfileError> {
        Ok(self.profiles.read().await.get(uid).cloned())
    }

    async fn upsert_details(
        &self,
        uid: &str,
        details: &ProfileDetails,
    ) -> Result<(), ProfileError> {
        self.profiles
            .write()
            .await
            .entry(uid.to_string())
            .or_insert_with(|| UserProfile::new(uid))
            .apply_details(details);
        Ok(())
    }

    async fn merge_onboarding(
        &self,
        uid: &str,
        data: &OnboardingData,
    ) -> Result<(), ProfileError> {
        self.profiles
            .write()
            .await
            .entry(uid.to_string())
            .or_insert_with(|| UserProfile::new(uid))
            .apply_onboarding(data);
        Ok(())
    }
}
