use crate::error::ClientError;

/// Connection settings for the managed database's REST surface.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
}

impl Config {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Read `WAYFARE_DB_URL` and `WAYFARE_DB_KEY`, loading `.env` first if
    /// one is present.
    pub fn from_env() -> Result<Self, ClientError> {
        let _ = dotenvy::dotenv();

        let base_url =
            std::env::var("WAYFARE_DB_URL").map_err(|_| ClientError::MissingEnv("WAYFARE_DB_URL"))?;
        let api_key =
            std::env::var("WAYFARE_DB_KEY").map_err(|_| ClientError::MissingEnv("WAYFARE_DB_KEY"))?;

        Ok(Self::new(base_url, api_key))
    }
}
