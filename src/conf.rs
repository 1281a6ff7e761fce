use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub listen_host: String,
    pub listen_port: String,
    pub database_url: String,
    pub database_pool_max_connections: u32,
    pub static_dir: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("listen_host", "0.0.0.0")?
            .set_default("listen_port", "8000")?
            .set_default("database_url", "sqlite://data/jobs.db")?
            .set_default("database_pool_max_connections", 5)?
            .set_default("static_dir", "static")?
            .add_source(Environment::default())
            .build()?;
        conf.try_deserialize()
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_unset_keys() {
        let s = Settings::new().expect("defaults should deserialize");
        assert!(!s.listen_host.is_empty());
        assert!(s.database_pool_max_connections > 0);
    }
}
