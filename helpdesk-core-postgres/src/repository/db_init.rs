//! Schema setup and teardown for the ticket store.
//!
//! The schema is described by plain SQL files: `migrations/` builds it up,
//! `cleanup/` tears it down. Both sets are idempotent so a test run can
//! re-apply them against a database that already carries the schema.

use sqlx::PgPool;
use std::fs;
use std::path::Path;

/// Apply every file under `migrations/` in ascending filename order.
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use helpdesk_core_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    run_sql_files(pool, &dir, Order::Ascending).await
}

/// Apply every file under `cleanup/` in descending filename order, dropping
/// the schema objects in reverse dependency order.
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("cleanup");
    run_sql_files(pool, &dir, Order::Descending).await
}

enum Order {
    Ascending,
    Descending,
}

async fn run_sql_files(pool: &PgPool, dir: &Path, order: Order) -> Result<(), sqlx::Error> {
    let mut paths: Vec<_> = fs::read_dir(dir)
        .map_err(sqlx::Error::Io)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("sql"))
        .collect();

    paths.sort();
    if matches!(order, Order::Descending) {
        paths.reverse();
    }

    for path in paths {
        tracing::debug!(file = %path.display(), "applying schema file");
        let sql = fs::read_to_string(&path).map_err(sqlx::Error::Io)?;
        sqlx::raw_sql(&sql).execute(pool).await?;
    }

    Ok(())
}
