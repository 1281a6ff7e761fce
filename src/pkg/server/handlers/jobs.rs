use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use standard_error::{Interpolate, StandardError, Status};
use validator::{Validate, ValidationErrors};

use crate::{
    pkg::{
        internal::adaptors::jobs::{
            mutators::JobMutator, selectors::JobSelector, spec::JobEntry,
        },
        server::state::AppState,
    },
    prelude::Result,
};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobInput {
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_pi: f64,
}

fn invalid_fields(errors: ValidationErrors) -> StandardError {
    let mut fields: Vec<String> = errors.field_errors().keys().map(|f| f.to_string()).collect();
    fields.sort();
    tracing::warn!("job rejected, invalid fields: {:?}", &fields);
    StandardError::new("ERR-JOB-002")
        .code(StatusCode::UNPROCESSABLE_ENTITY)
        .interpolate_err(fields.join(", "))
}

pub async fn create(
    State(state): State<AppState>,
    payload: core::result::Result<Json<CreateJobInput>, JsonRejection>,
) -> Result<(StatusCode, Json<JobEntry>)> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::warn!("job rejected: {}", rejection.body_text());
        StandardError::new("ERR-JOB-001")
            .code(rejection.status())
            .interpolate_err(rejection.body_text())
    })?;
    input.validate().map_err(invalid_fields)?;

    let mut conn = state.store.conn().await?;
    let job = JobMutator::new(&mut conn).create(input).await?;
    tracing::info!("created job {}: {}", job.id, &job.title);
    Ok((StatusCode::CREATED, Json(job)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<JobEntry>>> {
    let mut conn = state.store.conn().await?;
    let jobs = JobSelector::new(&mut conn).get_all().await?;
    tracing::debug!("listing {} jobs", jobs.len());
    Ok(Json(jobs))
}
