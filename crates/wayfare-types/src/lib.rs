//! Typed row contracts for the wayfare database schemas.
//!
//! Two unrelated schemas share this crate: the admin/moderation schema
//! ([`admin`]) and the travel-booking schema ([`travel`]). A consumer picks
//! exactly one of them — the [`table::Schema`] marker types keep the choice
//! honest at compile time.

pub mod admin;
pub mod json;
pub mod table;
pub mod travel;

pub use json::Json;
pub use table::{Admin, Column, ColumnKind, Schema, Table, Travel};
