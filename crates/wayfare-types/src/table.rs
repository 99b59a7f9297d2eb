use serde::Serialize;
use serde::de::DeserializeOwned;

/// Marker for one of the two database schemas.
///
/// The schemas are mutually exclusive alternatives: a consumer parameterizes
/// its client with exactly one marker and can only touch that schema's
/// tables from then on.
pub trait Schema: Send + Sync + 'static {
    /// Postgres schema the tables live in.
    const NAME: &'static str;
}

/// The admin/moderation schema.
#[derive(Debug, Clone, Copy)]
pub struct Admin;

impl Schema for Admin {
    const NAME: &'static str = "public";
}

/// The travel-booking schema.
#[derive(Debug, Clone, Copy)]
pub struct Travel;

impl Schema for Travel {
    const NAME: &'static str = "public";
}

/// Wire-level type of a column, as introspected from the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Uuid,
    Text,
    Timestamp,
    Date,
    Numeric,
    Json,
    Enum,
}

/// Static description of one column.
///
/// `has_default` drives the Insert variant: a defaulted column is optional
/// on insert, everything else is mandatory. Nullable columns default to
/// null server-side, so `nullable` implies `has_default` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub nullable: bool,
    pub has_default: bool,
}

impl Column {
    /// Non-null column the caller must supply on insert.
    pub const fn required(name: &'static str, kind: ColumnKind) -> Self {
        Self { name, kind, nullable: false, has_default: false }
    }

    /// Non-null column the database fills in when omitted (ids, timestamps,
    /// status defaults).
    pub const fn defaulted(name: &'static str, kind: ColumnKind) -> Self {
        Self { name, kind, nullable: false, has_default: true }
    }

    /// Nullable column; omitting it on insert leaves it null.
    pub const fn nullable(name: &'static str, kind: ColumnKind) -> Self {
        Self { name, kind, nullable: true, has_default: true }
    }
}

/// A table's three row shapes plus its column metadata.
///
/// `Row` is the full record as read back; `Insert` makes server-defaulted
/// columns optional; `Update` makes every column optional. The three share
/// one field set per table — only the optionality differs.
pub trait Table: Send + Sync + 'static {
    /// The schema this table belongs to.
    type Schema: Schema;

    /// Shape of a record returned by a read query.
    type Row: DeserializeOwned + Serialize;

    /// Shape required to create a record.
    type Insert: Serialize;

    /// Shape accepted for a partial modification.
    type Update: Serialize + Default;

    /// Table name as it appears in the database.
    const NAME: &'static str;

    /// Declared columns, in table order.
    fn columns() -> &'static [Column];
}
