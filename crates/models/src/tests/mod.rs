use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};


/// Fresh migrated in-memory database. A single-connection pool keeps every
/// statement on the same SQLite memory instance.
pub async fn setup_db() -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
