use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html};
use standard_error::{Interpolate, StandardError, Status};

use crate::{
    pkg::{
        internal::adaptors::jobs::selectors::JobSelector,
        server::{state::AppState, uispec::Home},
    },
    prelude::Result,
};

pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let mut conn = state.store.conn().await?;
    let jobs = JobSelector::new(&mut conn).get_all().await?;
    tracing::debug!("rendering {} jobs", jobs.len());

    let template = Home { jobs };
    let page = template.render().map_err(|e| {
        StandardError::new("ERR-UI-001")
            .code(StatusCode::INTERNAL_SERVER_ERROR)
            .interpolate_err(e.to_string())
    })?;
    Ok(Html(page))
}
