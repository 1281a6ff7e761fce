use crate::{conf::settings, pkg::internal::store::Store, prelude::Result};

pub async fn apply() -> Result<()> {
    let store = Store::connect(&settings.database_url, 1).await?;
    tracing::debug!("connected to {}", &settings.database_url);
    store.init().await?;
    store.close().await;
    println!("Schema applied successfully");
    Ok(())
}
