//! Row shapes for the travel-booking schema.
//!
//! Seven tables: users, trips, destinations, travelers, hotels, flights,
//! saved_trips. Same generation pattern as [`crate::admin`]: generated uuid
//! ids, created_at defaults, nullable Update fields as double-`Option`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::json::Json;
use crate::table::{Column, ColumnKind, Table, Travel};

/// Lifecycle of a trip. New rows default to `Planning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Planning,
    Booked,
    Completed,
    Cancelled,
}

// -- users --

pub struct Users;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub preferences: Option<Json>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Option<Json>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

const USERS: &[Column] = &[
    Column::defaulted("id", ColumnKind::Uuid),
    Column::required("email", ColumnKind::Text),
    Column::required("name", ColumnKind::Text),
    Column::nullable("avatar_url", ColumnKind::Text),
    Column::nullable("preferences", ColumnKind::Json),
    Column::defaulted("created_at", ColumnKind::Timestamp),
];

impl Table for Users {
    type Schema = Travel;
    type Row = UserRow;
    type Insert = UserInsert;
    type Update = UserUpdate;

    const NAME: &'static str = "users";

    fn columns() -> &'static [Column] {
        USERS
    }
}

// -- trips --

pub struct Trips;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TripInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TripStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TripUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TripStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

const TRIPS: &[Column] = &[
    Column::defaulted("id", ColumnKind::Uuid),
    Column::required("user_id", ColumnKind::Uuid),
    Column::required("title", ColumnKind::Text),
    Column::nullable("description", ColumnKind::Text),
    Column::required("start_date", ColumnKind::Date),
    Column::required("end_date", ColumnKind::Date),
    Column::defaulted("status", ColumnKind::Enum),
    Column::defaulted("created_at", ColumnKind::Timestamp),
    Column::defaulted("updated_at", ColumnKind::Timestamp),
];

impl Table for Trips {
    type Schema = Travel;
    type Row = TripRow;
    type Insert = TripInsert;
    type Update = TripUpdate;

    const NAME: &'static str = "trips";

    fn columns() -> &'static [Column] {
        TRIPS
    }
}

// -- destinations --

pub struct Destinations;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationRow {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub name: String,
    pub country: String,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DestinationInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub trip_id: Uuid,
    pub name: String,
    pub country: String,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DestinationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

const DESTINATIONS: &[Column] = &[
    Column::defaulted("id", ColumnKind::Uuid),
    Column::required("trip_id", ColumnKind::Uuid),
    Column::required("name", ColumnKind::Text),
    Column::required("country", ColumnKind::Text),
    Column::required("arrival_date", ColumnKind::Date),
    Column::required("departure_date", ColumnKind::Date),
    Column::nullable("notes", ColumnKind::Text),
    Column::defaulted("created_at", ColumnKind::Timestamp),
];

impl Table for Destinations {
    type Schema = Travel;
    type Row = DestinationRow;
    type Insert = DestinationInsert;
    type Update = DestinationUpdate;

    const NAME: &'static str = "destinations";

    fn columns() -> &'static [Column] {
        DESTINATIONS
    }
}

// -- travelers --

pub struct Travelers;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelerRow {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TravelerInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub trip_id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TravelerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

const TRAVELERS: &[Column] = &[
    Column::defaulted("id", ColumnKind::Uuid),
    Column::required("trip_id", ColumnKind::Uuid),
    Column::required("name", ColumnKind::Text),
    Column::nullable("email", ColumnKind::Text),
    Column::defaulted("created_at", ColumnKind::Timestamp),
];

impl Table for Travelers {
    type Schema = Travel;
    type Row = TravelerRow;
    type Insert = TravelerInsert;
    type Update = TravelerUpdate;

    const NAME: &'static str = "travelers";

    fn columns() -> &'static [Column] {
        TRAVELERS
    }
}

// -- hotels --

pub struct Hotels;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelRow {
    pub id: Uuid,
    pub destination_id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub confirmation_code: Option<String>,
    pub price_per_night: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HotelInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub destination_id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_night: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HotelUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_code: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_night: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

const HOTELS: &[Column] = &[
    Column::defaulted("id", ColumnKind::Uuid),
    Column::required("destination_id", ColumnKind::Uuid),
    Column::required("name", ColumnKind::Text),
    Column::nullable("address", ColumnKind::Text),
    Column::required("check_in", ColumnKind::Date),
    Column::required("check_out", ColumnKind::Date),
    Column::nullable("confirmation_code", ColumnKind::Text),
    Column::nullable("price_per_night", ColumnKind::Numeric),
    Column::defaulted("created_at", ColumnKind::Timestamp),
];

impl Table for Hotels {
    type Schema = Travel;
    type Row = HotelRow;
    type Insert = HotelInsert;
    type Update = HotelUpdate;

    const NAME: &'static str = "hotels";

    fn columns() -> &'static [Column] {
        HOTELS
    }
}

// -- flights --

pub struct Flights;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRow {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub airline: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub confirmation_code: Option<String>,
    pub price: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlightInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub trip_id: Uuid,
    pub airline: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FlightUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_airport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_airport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_code: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

const FLIGHTS: &[Column] = &[
    Column::defaulted("id", ColumnKind::Uuid),
    Column::required("trip_id", ColumnKind::Uuid),
    Column::required("airline", ColumnKind::Text),
    Column::required("flight_number", ColumnKind::Text),
    Column::required("departure_airport", ColumnKind::Text),
    Column::required("arrival_airport", ColumnKind::Text),
    Column::required("departure_time", ColumnKind::Timestamp),
    Column::required("arrival_time", ColumnKind::Timestamp),
    Column::nullable("confirmation_code", ColumnKind::Text),
    Column::nullable("price", ColumnKind::Numeric),
    Column::defaulted("created_at", ColumnKind::Timestamp),
];

impl Table for Flights {
    type Schema = Travel;
    type Row = FlightRow;
    type Insert = FlightInsert;
    type Update = FlightUpdate;

    const NAME: &'static str = "flights";

    fn columns() -> &'static [Column] {
        FLIGHTS
    }
}

// -- saved_trips --

pub struct SavedTrips;

/// Bookmark join table. A user saving someone else's trip creates one row;
/// nothing here is ever updated in practice, but the Update shape exists
/// like everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTripRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub trip_id: Uuid,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedTripInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub trip_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SavedTripUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

const SAVED_TRIPS: &[Column] = &[
    Column::defaulted("id", ColumnKind::Uuid),
    Column::required("user_id", ColumnKind::Uuid),
    Column::required("trip_id", ColumnKind::Uuid),
    Column::defaulted("saved_at", ColumnKind::Timestamp),
];

impl Table for SavedTrips {
    type Schema = Travel;
    type Row = SavedTripRow;
    type Insert = SavedTripInsert;
    type Update = SavedTripUpdate;

    const NAME: &'static str = "saved_trips";

    fn columns() -> &'static [Column] {
        SAVED_TRIPS
    }
}
