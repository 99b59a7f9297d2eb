//! Runtime descriptors and structural checks for the wayfare schemas.
//!
//! The type contract in `wayfare-types` is static; this crate flattens it
//! into inspectable [`SchemaDef`] values and runs the lint checks that keep
//! the declared column metadata and the serde structs from drifting apart.

pub mod conformance;
pub mod descriptor;
pub mod lint;

pub use descriptor::{SchemaDef, TableDef, admin, travel};
pub use lint::{SchemaError, check_schema, check_table};
