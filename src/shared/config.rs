use anyhow::{bail, Context};

/// Process-level settings read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub database_url: String,
    pub redis_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
}

impl AppConfig {
    /// Load `.env.{RUST_ENV}` first, then fall back to `.env`.
    pub fn load_env_file() {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> anyhow::Result<String> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("{key} is not set"))
        };

        let port = required("PORT")?
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a positive integer")?,
            None => 50,
        };

        let db_min_connections = match lookup("DB_MIN_CONNECTIONS") {
            Some(v) => v
                .parse::<u32>()
                .context("DB_MIN_CONNECTIONS must be a positive integer")?,
            None => 10,
        };

        if db_min_connections > db_max_connections {
            bail!("DB_MIN_CONNECTIONS must not exceed DB_MAX_CONNECTIONS");
        }

        Ok(Self {
            environment: lookup("RUST_ENV").unwrap_or_else(|| "development".to_string()),
            database_url: required("DATABASE_URL")?,
            redis_url: required("REDIS_URL")?,
            host: required("HOST")?,
            port,
            db_max_connections,
            db_min_connections,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
