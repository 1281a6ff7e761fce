pub mod handlers;
pub mod router;
pub mod state;
pub mod uispec;

use standard_error::{Interpolate, StandardError};

use crate::{conf::settings, pkg::internal::store::Store, prelude::Result};
use router::build_routes;
use state::AppState;

pub async fn listen() -> Result<()> {
    let store = Store::connect(&settings.database_url, settings.database_pool_max_connections).await?;
    store.init().await?;
    let app = build_routes(AppState::new(store.clone()), &settings.static_dir);

    let addr = format!("{}:{}", settings.listen_host, settings.listen_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| StandardError::new("ERR-SRV-001").interpolate_err(e.to_string()))?;
    tracing::info!("Listening at {}", &addr);
    tokio::select! {
        r = axum::serve(listener, app) => {
            tracing::warn!("server ended unexpectedly: {:?}", &r)
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received ctrl+c interrupt, closing server");
        }
    }
    store.close().await;
    Ok(())
}
