use sqlx::SqliteConnection;

use crate::pkg::internal::{adaptors::jobs::spec::JobEntry, store::storage_error};
use crate::pkg::server::handlers::jobs::CreateJobInput;
use crate::prelude::Result;

pub struct JobMutator<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        JobMutator { pool }
    }

    pub async fn create(&mut self, job: CreateJobInput) -> Result<JobEntry> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            INSERT INTO jobs (title, description, price_pi)
            VALUES (?1, ?2, ?3)
            RETURNING id, title, description, price_pi
            "#,
        )
        .bind(&job.title)
        .bind(&job.description)
        .bind(job.price_pi)
        .fetch_one(&mut *self.pool)
        .await
        .map_err(storage_error)?;
        Ok(row)
    }
}
