use anyhow::{Context, Result};

const TOKEN_VAR: &str = "DROPBOX_ACCESS_TOKEN";

/// Runtime configuration, from the environment (a `.env` file is honored
/// when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub access_token: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine; the variable may come from the shell.
        let _ = dotenvy::dotenv();

        let access_token = std::env::var(TOKEN_VAR)
            .with_context(|| format!("{TOKEN_VAR} is not set"))?;
        Ok(Self { access_token })
    }
}
