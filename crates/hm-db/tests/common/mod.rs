use sqlx::PgPool;
use tokio::sync::OnceCell;
use uuid::Uuid;

static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Pool on `TEST_DATABASE_URL` with the profile migrations applied
///
/// Returns `None` when the variable is unset, in which case the calling test
/// does nothing.
pub async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL is not set, skipping database test");
        return None;
    };

    let pool = hm_db::create_pool(&database_url, 2)
        .await
        .expect("Failed to connect to test database");

    // Tests run in parallel; create and migrate the database once.
    MIGRATED
        .get_or_init(|| async {
            hm_db::ensure_db_and_migrate(&database_url, &pool)
                .await
                .expect("Failed to migrate test database");
        })
        .await;

    Some(pool)
}

/// Fresh user id so tests never see each other's rows
pub fn unique_uid(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}
