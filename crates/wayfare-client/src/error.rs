use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("missing environment variable `{0}`")]
    MissingEnv(&'static str),

    #[error("update on `{0}` requires at least one filter")]
    UnfilteredUpdate(&'static str),

    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    #[error("`{table}` request rejected with status {status}: {message}")]
    Api {
        table: &'static str,
        status: u16,
        message: String,
    },

    #[error("failed to decode `{table}` response")]
    Decode {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
