//! Row shapes for the admin/moderation schema.
//!
//! Six tables: admin_users, admin_logs, admin_permissions, profiles, badges,
//! user_badges. Each table gets a zero-sized marker implementing [`Table`]
//! plus its three row shapes. Nullable Update fields are double-`Option`:
//! the outer `None` leaves the column untouched, `Some(None)` writes null.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::json::Json;
use crate::table::{Admin, Column, ColumnKind, Table};

/// Role of an admin account. Stored lowercase snake_case in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    SuperAdmin,
    ContentManager,
    Support,
}

// -- admin_users --

pub struct AdminUsers;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUserRow {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminUserInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: AdminRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AdminRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<Option<DateTime<Utc>>>,
}

const ADMIN_USERS: &[Column] = &[
    Column::defaulted("id", ColumnKind::Uuid),
    Column::required("email", ColumnKind::Text),
    Column::required("password", ColumnKind::Text),
    Column::required("name", ColumnKind::Text),
    Column::required("role", ColumnKind::Enum),
    Column::defaulted("created_at", ColumnKind::Timestamp),
    Column::nullable("last_login", ColumnKind::Timestamp),
];

impl Table for AdminUsers {
    type Schema = Admin;
    type Row = AdminUserRow;
    type Insert = AdminUserInsert;
    type Update = AdminUserUpdate;

    const NAME: &'static str = "admin_users";

    fn columns() -> &'static [Column] {
        ADMIN_USERS
    }
}

// -- admin_logs --

pub struct AdminLogs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminLogRow {
    pub id: Uuid,
    pub admin_id: Uuid,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<Uuid>,
    pub details: Option<Json>,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminLogInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub admin_id: Uuid,
    pub action: String,
    pub entity_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminLogUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<Option<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Option<Json>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

const ADMIN_LOGS: &[Column] = &[
    Column::defaulted("id", ColumnKind::Uuid),
    Column::required("admin_id", ColumnKind::Uuid),
    Column::required("action", ColumnKind::Text),
    Column::required("entity_type", ColumnKind::Text),
    Column::nullable("entity_id", ColumnKind::Uuid),
    Column::nullable("details", ColumnKind::Json),
    Column::nullable("ip_address", ColumnKind::Text),
    Column::defaulted("created_at", ColumnKind::Timestamp),
];

impl Table for AdminLogs {
    type Schema = Admin;
    type Row = AdminLogRow;
    type Insert = AdminLogInsert;
    type Update = AdminLogUpdate;

    const NAME: &'static str = "admin_logs";

    fn columns() -> &'static [Column] {
        ADMIN_LOGS
    }
}

// -- admin_permissions --

pub struct AdminPermissions;

/// Maps a role to one allowed action on one resource. The role here is free
/// text, not [`AdminRole`] — permission rows can name roles that admin_users
/// does not use yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminPermissionRow {
    pub id: Uuid,
    pub role: String,
    pub resource: String,
    pub action: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminPermissionInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub role: String,
    pub resource: String,
    pub action: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminPermissionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

const ADMIN_PERMISSIONS: &[Column] = &[
    Column::defaulted("id", ColumnKind::Uuid),
    Column::required("role", ColumnKind::Text),
    Column::required("resource", ColumnKind::Text),
    Column::required("action", ColumnKind::Text),
];

impl Table for AdminPermissions {
    type Schema = Admin;
    type Row = AdminPermissionRow;
    type Insert = AdminPermissionInsert;
    type Update = AdminPermissionUpdate;

    const NAME: &'static str = "admin_permissions";

    fn columns() -> &'static [Column] {
        ADMIN_PERMISSIONS
    }
}

// -- profiles --

pub struct Profiles;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: Uuid,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub preferences: Option<Json>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Unlike every other table, `id` is mandatory on insert: it mirrors the
/// auth user's id instead of being generated.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileInsert {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Option<Json>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

const PROFILES: &[Column] = &[
    Column::required("id", ColumnKind::Uuid),
    Column::nullable("name", ColumnKind::Text),
    Column::nullable("avatar_url", ColumnKind::Text),
    Column::nullable("bio", ColumnKind::Text),
    Column::nullable("preferences", ColumnKind::Json),
    Column::defaulted("created_at", ColumnKind::Timestamp),
    Column::defaulted("updated_at", ColumnKind::Timestamp),
];

impl Table for Profiles {
    type Schema = Admin;
    type Row = ProfileRow;
    type Insert = ProfileInsert;
    type Update = ProfileUpdate;

    const NAME: &'static str = "profiles";

    fn columns() -> &'static [Column] {
        PROFILES
    }
}

// -- badges --

pub struct Badges;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeRow {
    pub id: Uuid,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BadgeInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub icon: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BadgeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

const BADGES: &[Column] = &[
    Column::defaulted("id", ColumnKind::Uuid),
    Column::required("name", ColumnKind::Text),
    Column::required("icon", ColumnKind::Text),
    Column::required("description", ColumnKind::Text),
    Column::defaulted("created_at", ColumnKind::Timestamp),
];

impl Table for Badges {
    type Schema = Admin;
    type Row = BadgeRow;
    type Insert = BadgeInsert;
    type Update = BadgeUpdate;

    const NAME: &'static str = "badges";

    fn columns() -> &'static [Column] {
        BADGES
    }
}

// -- user_badges --

pub struct UserBadges;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBadgeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub badge_id: Uuid,
    pub earned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserBadgeInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub badge_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earned_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserBadgeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earned_at: Option<DateTime<Utc>>,
}

const USER_BADGES: &[Column] = &[
    Column::defaulted("id", ColumnKind::Uuid),
    Column::required("user_id", ColumnKind::Uuid),
    Column::required("badge_id", ColumnKind::Uuid),
    Column::defaulted("earned_at", ColumnKind::Timestamp),
];

impl Table for UserBadges {
    type Schema = Admin;
    type Row = UserBadgeRow;
    type Insert = UserBadgeInsert;
    type Update = UserBadgeUpdate;

    const NAME: &'static str = "user_badges";

    fn columns() -> &'static [Column] {
        USER_BADGES
    }
}
