use wayfare_types::{Column, Schema, Table};
use wayfare_types::admin::{
    AdminLogs, AdminPermissions, AdminUsers, Badges, Profiles, UserBadges,
};
use wayfare_types::travel::{
    Destinations, Flights, Hotels, SavedTrips, Travelers, Trips, Users,
};

/// One table of a schema, flattened for runtime inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl TableDef {
    /// Capture a [`Table`]'s declared name and columns.
    pub fn of<T: Table>() -> Self {
        Self {
            name: T::NAME,
            columns: T::columns(),
        }
    }

    /// Columns the caller must supply on insert.
    pub fn required_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| !c.has_default)
    }
}

/// A full schema as a list of table descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDef {
    pub name: &'static str,
    pub tables: Vec<TableDef>,
}

impl SchemaDef {
    pub fn new<S: Schema>() -> Self {
        Self {
            name: S::NAME,
            tables: Vec::new(),
        }
    }

    pub fn add_table(mut self, table: TableDef) -> Self {
        self.tables.push(table);
        self
    }

    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|t| t.name == name)
    }
}

/// Descriptor for the admin/moderation schema.
pub fn admin() -> SchemaDef {
    SchemaDef::new::<wayfare_types::Admin>()
        .add_table(TableDef::of::<AdminUsers>())
        .add_table(TableDef::of::<AdminLogs>())
        .add_table(TableDef::of::<AdminPermissions>())
        .add_table(TableDef::of::<Profiles>())
        .add_table(TableDef::of::<Badges>())
        .add_table(TableDef::of::<UserBadges>())
}

/// Descriptor for the travel-booking schema.
pub fn travel() -> SchemaDef {
    SchemaDef::new::<wayfare_types::Travel>()
        .add_table(TableDef::of::<Users>())
        .add_table(TableDef::of::<Trips>())
        .add_table(TableDef::of::<Destinations>())
        .add_table(TableDef::of::<Travelers>())
        .add_table(TableDef::of::<Hotels>())
        .add_table(TableDef::of::<Flights>())
        .add_table(TableDef::of::<SavedTrips>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_lists_all_six_tables() {
        let schema = admin();
        let names: Vec<&str> = schema.tables.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            [
                "admin_users",
                "admin_logs",
                "admin_permissions",
                "profiles",
                "badges",
                "user_badges"
            ]
        );
    }

    #[test]
    fn travel_lists_all_seven_tables() {
        let schema = travel();
        assert_eq!(schema.tables.len(), 7);
        assert!(schema.table("saved_trips").is_some());
        assert!(schema.table("admin_users").is_none());
    }

    #[test]
    fn required_columns_excludes_defaults() {
        let schema = admin();
        let users = schema.table("admin_users").unwrap();
        let required: Vec<&str> = users.required_columns().map(|c| c.name).collect();
        assert_eq!(required, ["email", "password", "name", "role"]);
    }

    #[test]
    fn profiles_id_is_required_on_insert() {
        let schema = admin();
        let profiles = schema.table("profiles").unwrap();
        let required: Vec<&str> = profiles.required_columns().map(|c| c.name).collect();
        assert_eq!(required, ["id"]);
    }
}
