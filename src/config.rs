use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Value of the studentAuthToken cookie issued by the backend at login
    pub auth_token: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::Environment::with_prefix("RSVS").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.base_url.is_empty() {
            anyhow::bail!("server.base_url must not be empty");
        }
        if self.session.auth_token.is_empty() {
            anyhow::bail!("session.auth_token must be set (RSVS_SESSION__AUTH_TOKEN)");
        }
        Ok(())
    }
}
