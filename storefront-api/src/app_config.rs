use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use storefront_order::Promotion;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub promotion: Promotion,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 { 80 }

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// JSON array of products served by `/products`
    pub products_path: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Untracked local overrides
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?;

        s.try_deserialize()
    }
}

/// Eg. `STOREFRONT__SERVER__PORT=8080`; the separator also follows the prefix
fn environment() -> config::Environment {
    config::Environment::with_prefix("STOREFRONT").separator("__")
}
