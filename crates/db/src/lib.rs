pub mod models;
pub mod repositories;
pub mod schema;

use std::str::FromStr;

use eyre::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

pub type DbPool = Pool<Sqlite>;

/// Opens the SQLite pool, creating the database file when it does not
/// exist. `database_url` accepts the usual forms, e.g.
/// `sqlite://tutormatch.db` or `sqlite::memory:`.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
