use std::str::FromStr;

use axum::http::StatusCode;
use sqlx::{
    Sqlite, SqlitePool,
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use standard_error::{Interpolate, StandardError, Status};

use crate::prelude::Result;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS jobs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT,
        price_pi REAL DEFAULT 0
    )
"#;

pub fn storage_error(e: sqlx::Error) -> StandardError {
    tracing::error!("storage failure: {}", &e);
    StandardError::new("ERR-DB-001")
        .code(StatusCode::INTERNAL_SERVER_ERROR)
        .interpolate_err(e.to_string())
}

fn open_error<E: ToString>(e: E) -> StandardError {
    StandardError::new("ERR-DB-002").interpolate_err(e.to_string())
}

/// Handle to the sqlite file holding the jobs table.
///
/// Connections are only borrowed for the span of one operation, see [`Store::conn`].
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(open_error)?
            .create_if_missing(true);
        if let Some(dir) = options
            .get_filename()
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
        {
            tokio::fs::create_dir_all(dir).await.map_err(open_error)?;
        }
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .map_err(open_error)?;
        tracing::info!("opened job store at {}", url);
        Ok(Store { pool })
    }

    /// Private in-memory database, lives as long as the handle.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(open_error)?;
        // every new connection would see a fresh empty database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(open_error)?;
        Ok(Store { pool })
    }

    /// Creates the jobs table when missing. Safe to run on every start.
    pub async fn init(&self) -> Result<()> {
        let mut conn = self.conn().await?;
        sqlx::query(SCHEMA)
            .execute(&mut *conn)
            .await
            .map_err(storage_error)?;
        tracing::debug!("jobs table ready");
        Ok(())
    }

    /// Borrows a connection for a single operation. Statements run in autocommit
    /// mode and the connection goes back to the pool when the guard drops.
    pub async fn conn(&self) -> Result<PoolConnection<Sqlite>> {
        self.pool.acquire().await.map_err(storage_error)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    #[cfg(test)]
    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}
