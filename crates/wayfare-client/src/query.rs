//! Request builders for the three table operations.
//!
//! Filters use the REST surface's `column=eq.value` form. Builders stay
//! inert until `send()`; request construction itself is pure, which is what
//! the tests below lean on.

use std::fmt::Display;
use std::marker::PhantomData;

use wayfare_types::Table;

use crate::error::ClientError;
use crate::{Backend, execute_json};

pub struct SelectBuilder<'a, T: Table> {
    backend: &'a Backend,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<u32>,
    _table: PhantomData<T>,
}

impl<'a, T: Table> SelectBuilder<'a, T> {
    pub(crate) fn new(backend: &'a Backend) -> Self {
        Self {
            backend,
            filters: Vec::new(),
            order: None,
            limit: None,
            _table: PhantomData,
        }
    }

    /// Keep rows whose column equals `value`.
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    pub fn order_asc(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.asc"));
        self
    }

    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.desc"));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn build(&self) -> Result<reqwest::Request, ClientError> {
        let mut pairs: Vec<(String, String)> = self.filters.clone();
        if let Some(order) = &self.order {
            pairs.push(("order".to_string(), order.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }

        let request = self.backend.get(T::NAME).query(&pairs).build()?;
        Ok(request)
    }

    pub async fn send(self) -> Result<Vec<T::Row>, ClientError> {
        let request = self.build()?;
        execute_json(self.backend, T::NAME, request).await
    }
}

pub struct InsertBuilder<'a, T: Table> {
    backend: &'a Backend,
    rows: &'a [T::Insert],
    _table: PhantomData<T>,
}

impl<'a, T: Table> InsertBuilder<'a, T> {
    pub(crate) fn new(backend: &'a Backend, rows: &'a [T::Insert]) -> Self {
        Self {
            backend,
            rows,
            _table: PhantomData,
        }
    }

    pub(crate) fn build(&self) -> Result<reqwest::Request, ClientError> {
        let request = self
            .backend
            .post(T::NAME)
            .header("Prefer", "return=representation")
            .json(self.rows)
            .build()?;
        Ok(request)
    }

    /// Returns the created rows as the database stored them, defaults
    /// filled in.
    pub async fn send(self) -> Result<Vec<T::Row>, ClientError> {
        let request = self.build()?;
        execute_json(self.backend, T::NAME, request).await
    }
}

pub struct UpdateBuilder<'a, T: Table> {
    backend: &'a Backend,
    patch: &'a T::Update,
    filters: Vec<(String, String)>,
    _table: PhantomData<T>,
}

impl<'a, T: Table> UpdateBuilder<'a, T> {
    pub(crate) fn new(backend: &'a Backend, patch: &'a T::Update) -> Self {
        Self {
            backend,
            patch,
            filters: Vec::new(),
            _table: PhantomData,
        }
    }

    /// Restrict the update to rows whose column equals `value`.
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    pub(crate) fn build(&self) -> Result<reqwest::Request, ClientError> {
        // An unfiltered PATCH would rewrite the whole table.
        if self.filters.is_empty() {
            return Err(ClientError::UnfilteredUpdate(T::NAME));
        }

        let request = self
            .backend
            .patch(T::NAME)
            .query(&self.filters)
            .header("Prefer", "return=representation")
            .json(self.patch)
            .build()?;
        Ok(request)
    }

    /// Returns the rows the update touched.
    pub async fn send(self) -> Result<Vec<T::Row>, ClientError> {
        let request = self.build()?;
        execute_json(self.backend, T::NAME, request).await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use wayfare_types::Travel;
    use wayfare_types::travel::{TripStatus, TripUpdate, Trips, UserInsert, Users};

    use crate::{Client, Config};

    fn client() -> Client<Travel> {
        Client::new(Config::new("https://db.example.com", "secret"))
    }

    #[test]
    fn select_request_carries_filters_order_and_limit() {
        let client = client();
        let request = client
            .table::<Trips>()
            .select()
            .eq("user_id", Uuid::nil())
            .order_desc("start_date")
            .limit(10)
            .build()
            .unwrap();

        assert_eq!(request.method().as_str(), "GET");
        assert_eq!(
            request.url().as_str(),
            "https://db.example.com/rest/v1/trips\
             ?user_id=eq.00000000-0000-0000-0000-000000000000\
             &order=start_date.desc&limit=10"
        );
        assert_eq!(request.headers()["apikey"], "secret");
        assert_eq!(request.headers()["authorization"], "Bearer secret");
    }

    #[test]
    fn insert_request_posts_only_supplied_fields() {
        let client = client();
        let rows = vec![UserInsert {
            id: None,
            email: "kai@example.com".into(),
            name: "Kai".into(),
            avatar_url: None,
            preferences: None,
            created_at: None,
        }];

        let request = client.table::<Users>().insert(&rows).build().unwrap();

        assert_eq!(request.method().as_str(), "POST");
        assert_eq!(request.url().path(), "/rest/v1/users");
        assert_eq!(request.headers()["prefer"], "return=representation");

        let body = request.body().unwrap().as_bytes().unwrap();
        assert_eq!(body, &br#"[{"email":"kai@example.com","name":"Kai"}]"#[..]);
    }

    #[test]
    fn update_request_patches_behind_a_filter() {
        let client = client();
        let patch = TripUpdate {
            status: Some(TripStatus::Booked),
            ..Default::default()
        };

        let request = client
            .table::<Trips>()
            .update(&patch)
            .eq("id", Uuid::nil())
            .build()
            .unwrap();

        assert_eq!(request.method().as_str(), "PATCH");
        assert_eq!(
            request.url().query(),
            Some("id=eq.00000000-0000-0000-0000-000000000000")
        );

        let body = request.body().unwrap().as_bytes().unwrap();
        assert_eq!(body, &br#"{"status":"booked"}"#[..]);
    }

    #[test]
    fn unfiltered_update_is_refused() {
        let client = client();
        let patch = TripUpdate::default();

        let error = client.table::<Trips>().update(&patch).build().unwrap_err();
        assert!(matches!(
            error,
            crate::ClientError::UnfilteredUpdate("trips")
        ));
    }
}
