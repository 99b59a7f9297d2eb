//! Typed client for the managed database's REST query surface.
//!
//! [`Client`] is parameterized by one of the two schema markers
//! ([`wayfare_types::Admin`] or [`wayfare_types::Travel`]); only tables
//! belonging to that schema are reachable through it, so picking a schema is
//! a compile-time decision, not a runtime one. Reads come back as `T::Row`,
//! inserts take `T::Insert`, partial updates take `T::Update` — the database
//! itself enforces everything beyond those shapes.

pub mod config;
pub mod error;
pub mod query;

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use tracing::debug;

use wayfare_types::{Schema, Table};

pub use config::Config;
pub use error::ClientError;
pub use query::{InsertBuilder, SelectBuilder, UpdateBuilder};

#[derive(Debug, Clone)]
pub(crate) struct Backend {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Backend {
    fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub(crate) fn get(&self, table: &str) -> reqwest::RequestBuilder {
        self.decorate(self.http.get(self.endpoint(table)))
    }

    pub(crate) fn post(&self, table: &str) -> reqwest::RequestBuilder {
        self.decorate(self.http.post(self.endpoint(table)))
    }

    pub(crate) fn patch(&self, table: &str) -> reqwest::RequestBuilder {
        self.decorate(self.http.patch(self.endpoint(table)))
    }

    fn decorate(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

/// Client scoped to one schema.
pub struct Client<S: Schema> {
    backend: Backend,
    _schema: PhantomData<S>,
}

impl<S: Schema> Clone for Client<S> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            _schema: PhantomData,
        }
    }
}

impl<S: Schema> Client<S> {
    pub fn new(config: Config) -> Self {
        Self {
            backend: Backend {
                http: reqwest::Client::new(),
                base_url: config.base_url,
                api_key: config.api_key,
            },
            _schema: PhantomData,
        }
    }

    pub fn from_env() -> Result<Self, ClientError> {
        Ok(Self::new(Config::from_env()?))
    }

    /// Scope the client to one of this schema's tables.
    pub fn table<T: Table<Schema = S>>(&self) -> TableHandle<'_, T> {
        TableHandle {
            backend: &self.backend,
            _table: PhantomData,
        }
    }
}

/// Entry point for the three operations a table supports.
pub struct TableHandle<'a, T: Table> {
    backend: &'a Backend,
    _table: PhantomData<T>,
}

impl<'a, T: Table> TableHandle<'a, T> {
    /// Read rows, optionally filtered/ordered/limited.
    pub fn select(&self) -> SelectBuilder<'a, T> {
        SelectBuilder::new(self.backend)
    }

    /// Create rows. Server-defaulted columns may be left `None`.
    pub fn insert(&self, rows: &'a [T::Insert]) -> InsertBuilder<'a, T> {
        InsertBuilder::new(self.backend, rows)
    }

    /// Partially modify rows. At least one filter is mandatory before the
    /// request goes out.
    pub fn update(&self, patch: &'a T::Update) -> UpdateBuilder<'a, T> {
        UpdateBuilder::new(self.backend, patch)
    }
}

pub(crate) async fn execute_json<R: DeserializeOwned>(
    backend: &Backend,
    table: &'static str,
    request: reqwest::Request,
) -> Result<R, ClientError> {
    debug!(table, method = %request.method(), url = %request.url(), "issuing request");

    let response = backend.http.execute(request).await?;
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ClientError::Api {
            table,
            status: status.as_u16(),
            message,
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode { table, source })
}
