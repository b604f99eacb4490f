//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::DEFAULT_DATABASE_NAME;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub uri: String,
    pub name: String,
}

impl AppConfig {
    /// Loads configuration from code defaults, optional `config/*.toml`
    /// files, and the environment. `database.uri` has no default: a missing
    /// connection string fails the load, and with it, startup.
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "dinedir")?
            .set_default("database.name", DEFAULT_DATABASE_NAME)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            // Documented variable names take precedence over everything else.
            .set_override_option("database.uri", std::env::var("MONGODB_URI").ok())?
            .set_override_option("database.name", std::env::var("MONGODB_DB_NAME").ok())?
            .build()?;
        config.try_deserialize()
    }
}
