use async_trait::async_trait;
use hm_core::{OnboardingData, ProfileDetails, UserProfile};
use hm_db::repositories::profile;
use sqlx::PgPool;

use super::backend::ProfileBackend;
use crate::{config::ClientConfig, error::ProfileError};

/// Profile storage in the `user_profiles` PostgreSQL table
#[derive(Debug, Clone)]
pub struct PgProfileBackend {
    pool: PgPool,
}

impl PgProfileBackend {
    /// Backend over an already migrated pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `HM_DATABASE_URL` and run the profile migrations
    pub async fn connect(config: &ClientConfig) -> anyhow::Result<Self> {
        let database_url = config
            .database_url
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("HM_DATABASE_URL is not set"))?;

        let pool = hm_db::create_pool(database_url, config.database_max_connections).await?;
        hm_db::ensure_db_and_migrate(database_url, &pool).await?;

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl ProfileBackend for PgProfileBackend {
    async fn find(&self, uid: &str) -> Result<Option<UserProfile>, ProfileError> {
        let row = profile::find_by_uid(&self.pool, uid).await?;
        Ok(row.map(UserProfile::from))
    }

    async fn upsert_details(
        &self,
        uid: &str,
        details: &ProfileDetails,
    ) -> Result<(), ProfileError> {
        profile::upsert_details(&self.pool, uid, details).await?;
        Ok(())
    }

    async fn merge_onboarding(
        &self,
        uid: &str,
        data: &OnboardingData,
    ) -> Result<(), ProfileError> {
        profile::merge_onboarding(&self.pool, uid, data).await?;
        Ok(())
    }
}
