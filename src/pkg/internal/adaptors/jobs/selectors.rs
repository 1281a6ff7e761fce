use sqlx::SqliteConnection;

use crate::{
    pkg::internal::{adaptors::jobs::spec::JobEntry, store::storage_error},
    prelude::Result,
};

pub struct JobSelector<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        JobSelector { pool }
    }

    #[cfg(test)]
    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            "SELECT id, title, COALESCE(description, '') AS description, COALESCE(price_pi, 0.0) AS price_pi
             FROM jobs WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await
        .map_err(storage_error)?;
        Ok(row)
    }

    pub async fn get_all(&mut self) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(
            "SELECT id, title, COALESCE(description, '') AS description, COALESCE(price_pi, 0.0) AS price_pi
             FROM jobs ORDER BY id DESC",
        )
        .fetch_all(&mut *self.pool)
        .await
        .map_err(storage_error)?;
        Ok(rows)
    }

    #[cfg(test)]
    pub async fn count(&mut self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs")
            .fetch_one(&mut *self.pool)
            .await
            .map_err(storage_error)?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::pkg::internal::store::Store;

    #[tokio::test]
    #[traced_test]
    async fn test_out_of_band_nulls_read_as_defaults() -> Result<()> {
        let store = Store::in_memory().await?;
        store.init().await?;
        let mut conn = store.conn().await?;
        sqlx::query("INSERT INTO jobs (title, description, price_pi) VALUES ('legacy', NULL, NULL)")
            .execute(&mut *conn)
            .await
            .map_err(storage_error)?;

        let job = JobSelector::new(&mut conn)
            .get_by_id(1)
            .await?
            .expect("row inserted above");
        assert_eq!(job.description, "");
        assert_eq!(job.price_pi, 0.0);
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_get_by_id_missing() -> Result<()> {
        let store = Store::in_memory().await?;
        store.init().await?;
        let mut conn = store.conn().await?;
        assert!(JobSelector::new(&mut conn).get_by_id(42).await?.is_none());
        Ok(())
    }
}
