use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::descriptor::{SchemaDef, TableDef};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("schema `{0}` declares no tables")]
    EmptySchema(&'static str),

    #[error("table `{0}` is declared more than once")]
    DuplicateTable(&'static str),

    #[error("table `{0}` declares no columns")]
    EmptyTable(&'static str),

    #[error("table `{table}` declares column `{column}` more than once")]
    DuplicateColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("table `{table}` column `{column}` is not lower snake_case")]
    BadColumnName {
        table: &'static str,
        column: &'static str,
    },

    #[error("table `{table}` column `{column}` is nullable but has no default")]
    NullableWithoutDefault {
        table: &'static str,
        column: &'static str,
    },

    #[error("table `{table}`: declared columns and row shape diverge ({detail})")]
    ShapeMismatch { table: &'static str, detail: String },
}

/// Structural checks over a whole schema descriptor.
pub fn check_schema(schema: &SchemaDef) -> Result<(), SchemaError> {
    if schema.tables.is_empty() {
        return Err(SchemaError::EmptySchema(schema.name));
    }

    let mut seen = HashSet::new();
    for table in &schema.tables {
        if !seen.insert(table.name) {
            return Err(SchemaError::DuplicateTable(table.name));
        }
        check_table(table)?;
    }

    debug!(schema = schema.name, tables = schema.tables.len(), "schema lint passed");
    Ok(())
}

/// Structural checks over one table descriptor.
///
/// The generated contract promises that every nullable column is optional on
/// insert (the server defaults it to null), so nullable-without-default is a
/// lint error, not a representable state.
pub fn check_table(table: &TableDef) -> Result<(), SchemaError> {
    if table.columns.is_empty() {
        return Err(SchemaError::EmptyTable(table.name));
    }

    let mut seen = HashSet::new();
    for column in table.columns {
        if !seen.insert(column.name) {
            return Err(SchemaError::DuplicateColumn {
                table: table.name,
                column: column.name,
            });
        }
        if !is_snake_case(column.name) {
            return Err(SchemaError::BadColumnName {
                table: table.name,
                column: column.name,
            });
        }
        if column.nullable && !column.has_default {
            return Err(SchemaError::NullableWithoutDefault {
                table: table.name,
                column: column.name,
            });
        }
    }

    debug!(table = table.name, columns = table.columns.len(), "table lint passed");
    Ok(())
}

fn is_snake_case(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('_')
        && !name.ends_with('_')
        && name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && !name.contains("__")
}
