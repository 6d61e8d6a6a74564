use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::error::AppError;

/// Connects to the database and brings the schema up to date.
pub async fn connect_to_database(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}
