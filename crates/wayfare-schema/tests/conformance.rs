//! Every table's serde structs must agree with its declared columns.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use wayfare_schema::conformance::{verify_row, verify_update_all_optional};
use wayfare_types::Json;
use wayfare_types::admin::*;
use wayfare_types::travel::*;

fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn ts() -> DateTime<Utc> {
    "2026-01-15T12:00:00Z".parse().unwrap()
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 7, 4).unwrap()
}

fn json() -> Json {
    Json::from("x")
}

#[test]
fn admin_rows_match_declared_columns() {
    verify_row::<AdminUsers>(&AdminUserRow {
        id: id(1),
        email: "root@example.com".into(),
        password: "hash".into(),
        name: "Root".into(),
        role: AdminRole::SuperAdmin,
        created_at: ts(),
        last_login: Some(ts()),
    })
    .unwrap();

    verify_row::<AdminLogs>(&AdminLogRow {
        id: id(2),
        admin_id: id(1),
        action: "delete_badge".into(),
        entity_type: "badge".into(),
        entity_id: Some(id(9)),
        details: Some(json()),
        ip_address: Some("198.51.100.7".into()),
        created_at: ts(),
    })
    .unwrap();

    verify_row::<AdminPermissions>(&AdminPermissionRow {
        id: id(3),
        role: "support".into(),
        resource: "profiles".into(),
        action: "read".into(),
    })
    .unwrap();

    verify_row::<Profiles>(&ProfileRow {
        id: id(4),
        name: Some("Ada".into()),
        avatar_url: Some("https://cdn.example.com/a.png".into()),
        bio: Some("hi".into()),
        preferences: Some(json()),
        created_at: ts(),
        updated_at: ts(),
    })
    .unwrap();

    verify_row::<Badges>(&BadgeRow {
        id: id(5),
        name: "Globetrotter".into(),
        icon: "globe".into(),
        description: "Ten trips".into(),
        created_at: ts(),
    })
    .unwrap();

    verify_row::<UserBadges>(&UserBadgeRow {
        id: id(6),
        user_id: id(4),
        badge_id: id(5),
        earned_at: ts(),
    })
    .unwrap();
}

#[test]
fn travel_rows_match_declared_columns() {
    verify_row::<Users>(&UserRow {
        id: id(10),
        email: "kai@example.com".into(),
        name: "Kai".into(),
        avatar_url: Some("https://cdn.example.com/k.png".into()),
        preferences: Some(json()),
        created_at: ts(),
    })
    .unwrap();

    verify_row::<Trips>(&TripRow {
        id: id(11),
        user_id: id(10),
        title: "Norway fjords".into(),
        description: Some("Two weeks".into()),
        start_date: day(),
        end_date: day(),
        status: TripStatus::Planning,
        created_at: ts(),
        updated_at: ts(),
    })
    .unwrap();

    verify_row::<Destinations>(&DestinationRow {
        id: id(12),
        trip_id: id(11),
        name: "Bergen".into(),
        country: "Norway".into(),
        arrival_date: day(),
        departure_date: day(),
        notes: Some("rain gear".into()),
        created_at: ts(),
    })
    .unwrap();

    verify_row::<Travelers>(&TravelerRow {
        id: id(13),
        trip_id: id(11),
        name: "Noa".into(),
        email: Some("noa@example.com".into()),
        created_at: ts(),
    })
    .unwrap();

    verify_row::<Hotels>(&HotelRow {
        id: id(14),
        destination_id: id(12),
        name: "Hotel Bryggen".into(),
        address: Some("Bryggen 1".into()),
        check_in: day(),
        check_out: day(),
        confirmation_code: Some("HB-2291".into()),
        price_per_night: Some(180.0),
        created_at: ts(),
    })
    .unwrap();

    verify_row::<Flights>(&FlightRow {
        id: id(15),
        trip_id: id(11),
        airline: "Widerøe".into(),
        flight_number: "WF521".into(),
        departure_airport: "OSL".into(),
        arrival_airport: "BGO".into(),
        departure_time: ts(),
        arrival_time: ts(),
        confirmation_code: Some("QZX9F".into()),
        price: Some(96.5),
        created_at: ts(),
    })
    .unwrap();

    verify_row::<SavedTrips>(&SavedTripRow {
        id: id(16),
        user_id: id(10),
        trip_id: id(11),
        saved_at: ts(),
    })
    .unwrap();
}

#[test]
fn every_update_shape_is_fully_optional() {
    verify_update_all_optional::<AdminUsers>().unwrap();
    verify_update_all_optional::<AdminLogs>().unwrap();
    verify_update_all_optional::<AdminPermissions>().unwrap();
    verify_update_all_optional::<Profiles>().unwrap();
    verify_update_all_optional::<Badges>().unwrap();
    verify_update_all_optional::<UserBadges>().unwrap();

    verify_update_all_optional::<Users>().unwrap();
    verify_update_all_optional::<Trips>().unwrap();
    verify_update_all_optional::<Destinations>().unwrap();
    verify_update_all_optional::<Travelers>().unwrap();
    verify_update_all_optional::<Hotels>().unwrap();
    verify_update_all_optional::<Flights>().unwrap();
    verify_update_all_optional::<SavedTrips>().unwrap();
}
