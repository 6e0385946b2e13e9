use hm_core::{
    OnboardingData, ProfileDetails, UserProfile,
    validation::{validate_details, validate_onboarding},
};

use super::backend::ProfileBackend;
use crate::{auth::AuthSession, error::ProfileError};

/// The signed-in user's profile document
///
/// Every operation keys the document by the session's user id, so one user
/// can never read or write another user's profile through this store.
/// Concurrent writers are last-write-wins per field set.
#[derive(Debug)]
pub struct UserProfileStore<B, S> {
    backend: B,
    session: S,
}

impl<B: ProfileBackend, S: AuthSession> UserProfileStore<B, S> {
    /// Store writing through `backend` on behalf of the `session` user
    pub fn new(backend: B, session: S) -> Self {
        Self { backend, session }
    }

    /// The underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn require_uid(&self) -> Result<String, ProfileError> {
        self.session
            .current_user_id()
            .ok_or(ProfileError::NotAuthenticated)
    }

    /// Save the profile edit form
    ///
    /// Creates the document with a zero readiness counter if it does not
    /// exist yet, otherwise changes only name, role and goal.
    pub async fn save_profile(
        &self,
        name: &str,
        role: &str,
        goal: &str,
    ) -> Result<(), ProfileError> {
        let uid = self.require_uid()?;
        let details = ProfileDetails {
            name: name.trim().to_string(),
            role: role.trim().to_string(),
            goal: goal.trim().to_string(),
        };
        validate_details(&details)?;

        self.backend.upsert_details(&uid, &details).await?;

        tracing::info!(uid = %uid, "Profile saved");
        Ok(())
    }

    /// Record the onboarding answers
    ///
    /// Merge-writes name, level, path and goal and resets the readiness
    /// counter. Role and photo of an existing document are kept.
    pub async fn update_onboarding_data(
        &self,
        name: &str,
        level: &str,
        path: &str,
        goal: &str,
    ) -> Result<(), ProfileError> {
        let uid = self.require_uid()?;
        let data = OnboardingData {
            name: name.trim().to_string(),
            experience_level: level.trim().to_string(),
            learning_path: path.trim().to_string(),
            goal: goal.trim().to_string(),
        };
        validate_onboarding(&data)?;

        self.backend.merge_onboarding(&uid, &data).await?;

        tracing::info!(
            uid = %uid,
            experience_level = %data.experience_level,
            learning_path = %data.learning_path,
            "Onboarding data saved"
        );
        Ok(())
    }

    /// The signed-in user's profile
    ///
    /// `None` when signed out, when no document exists, or when the read
    /// fails. Read errors are logged, not returned.
    pub async fn profile(&self) -> Option<UserProfile> {
        let uid = self.session.current_user_id()?;

        match self.backend.find(&uid).await {
            Ok(profile) => profile.filter(|p| {
                let owned = p.uid == uid;
                if !owned {
                    tracing::error!(uid = %uid, stored_uid = %p.uid, "Profile key mismatch");
                }
                owned
            }),
            Err(e) => {
                tracing::warn!(uid = %uid, error = %e, "Failed to read profile");
                None
            }
        }
    }
}
