use hm_core::{OnboardingData, ProfileDetails};
use sqlx::{Executor, Postgres};

use crate::models::UserProfileRow;

/// Profile row of `uid`, if any
pub async fn find_by_uid<'e, E>(executor: E, uid: &str) -> Result<Option<UserProfileRow>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT uid, name, role, goal, experience_level, learning_path,
                   ready_meter, profile_photo_url, created_at, updated_at
            FROM user_profiles
            WHERE uid = $1
        "#,
    )
    .bind(uid)
    .fetch_optional(executor)
    .await
}

/// Write name, role and goal, creating the profile with a zeroed readiness
/// counter when it does not exist yet. Other columns of an existing profile
/// are left untouched.
pub async fn upsert_details<'e, E>(
    executor: E,
    uid: &str,
    details: &ProfileDetails,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            INSERT INTO user_profiles (uid, name, role, goal, ready_meter)
            VALUES ($1, $2, $3, $4, 0)
            ON CONFLICT (uid) DO UPDATE
            SET name = EXCLUDED.name,
                role = EXCLUDED.role,
                goal = EXCLUDED.goal,
                updated_at = NOW()
        "#,
    )
    .bind(uid)
    .bind(&details.name)
    .bind(&details.role)
    .bind(&details.goal)
    .execute(executor)
    .await?;
    Ok(())
}

/// Merge-write the onboarding fields and reset the readiness counter.
/// Role and photo are left untouched on an existing profile.
pub async fn merge_onboarding<'e, E>(
    executor: E,
    uid: &str,
    data: &OnboardingData,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            INSERT INTO user_profiles (uid, name, experience_level, learning_path, goal, ready_meter)
            VALUES ($1, $2, $3, $4, $5, 0)
            ON CONFLICT (uid) DO UPDATE
            SET name = EXCLUDED.name,
                experience_level = EXCLUDED.experience_level,
                learning_path = EXCLUDED.learning_path,
                goal = EXCLUDED.goal,
                ready_meter = 0,
                updated_at = NOW()
        "#,
    )
    .bind(uid)
    .bind(&data.name)
    .bind(&data.experience_level)
    .bind(&data.learning_path)
    .bind(&data.goal)
    .execute(executor)
    .await?;
    Ok(())
}
