use chrono::{DateTime, Utc};
use hm_core::UserProfile;
use serde::{Deserialize, Serialize};

/// Row of the `user_profiles` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfileRow {
    /// Auth provider user id, primary key
    pub uid: String,
    pub name: String,
    pub role: String,
    pub goal: String,
    /// Experience level (max 100 chars)
    pub experience_level: String,
    /// Learning path (max 100 chars)
    pub learning_path: String,
    /// Readiness counter, zero on creation
    pub ready_meter: i32,
    pub profile_photo_url: String,
    /// When the profile was created
    pub created_at: DateTime<Utc>,
    /// When the profile was last written
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfileRow> for UserProfile {
    fn from(row: UserProfileRow) -> Self {
        Self {
            uid: row.uid,
            name: row.name,
            role: row.role,
            goal: row.goal,
            experience_level: row.experience_level,
            learning_path: row.learning_path,
            ready_meter: row.ready_meter,
            profile_photo_url: row.profile_photo_url,
        }
    }
}
