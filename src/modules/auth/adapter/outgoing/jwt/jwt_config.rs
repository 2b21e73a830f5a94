use anyhow::{bail, Context};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,  // Expiration in seconds
    pub refresh_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse_expiry = |key: &str, default: i64| -> anyhow::Result<i64> {
            match lookup(key) {
                Some(v) => v
                    .parse::<i64>()
                    .with_context(|| format!("Invalid {key} value")),
                None => Ok(default),
            }
        };

        let secret_key = lookup("JWT_SECRET").context("JWT_SECRET must be set")?;

        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < 32 {
            bail!("JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let access_token_expiry = parse_expiry("JWT_ACCESS_EXPIRY", 1800)?;
        let refresh_token_expiry = parse_expiry("JWT_REFRESH_EXPIRY", 604800)?;

        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            bail!("JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds (24 hours)");
        }

        if refresh_token_expiry <= access_token_expiry {
            bail!("JWT_REFRESH_EXPIRY must be greater than JWT_ACCESS_EXPIRY");
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "learning_log".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
            refresh_token_expiry,
        })
    }
}
