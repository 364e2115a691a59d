use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

/// Open a pool against the configured database and switch on foreign-key
/// enforcement, which SQLite leaves off by default. The article/tag cascade
/// in the schema depends on that pragma. Sizing comes from
/// `AppConfig::database_max_connections`.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
