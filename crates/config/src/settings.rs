use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    /// Connection string. When absent the data layer serves the sample
    /// dataset for the lifetime of the process.
    pub url: Option<String>,
    pub name: String,
    pub max_pool_size: Option<u32>,
    pub min_pool_size: Option<u32>,
    pub server_selection_timeout_secs: u64,
}

impl DatabaseSettings {
    /// The connection string, if one is set and non-blank.
    pub fn connection_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub access_token_ttl_secs: u64,
    pub issuer: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    /// Email domains whose users sign in with the designer view.
    pub designer_domains: Vec<String>,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .prefix("KANVAS")
                    .list_separator(",")
                    .with_list_parse_key("app.cors_origins")
                    .with_list_parse_key("session.designer_domains")
                    .try_parsing(true),
            )
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 3000)?
            .set_default("app.cors_origins", Vec::<String>::new())?
            .set_default("database.url", None::<String>)?
            .set_default("database.name", "kingdom_kanvas")?
            .set_default("database.server_selection_timeout_secs", 5)?
            .set_default("jwt.secret", "change-me-in-production")?
            .set_default("jwt.access_token_ttl_secs", 86400)?
            .set_default("jwt.issuer", "kingdom-kanvas")?
            .set_default("session.designer_domains", vec!["kingdomkanvas.com"])?
            .build()?;

        config.try_deserialize()
    }
}
