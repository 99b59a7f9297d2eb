//! Checks tying the declared column metadata to the serde structs.
//!
//! `Table::columns()` and the Row/Insert/Update structs are written by hand
//! in `wayfare-types`; these checks catch a field added on one side only.

use std::collections::BTreeSet;

use wayfare_types::Table;

use crate::lint::SchemaError;

/// Serialize a fully populated `Row` and compare its key set against the
/// declared columns.
///
/// Also covers the insert-subset property: the columns required on insert
/// must all appear in the row shape. `sample` must have every nullable field
/// set to `Some` so optional fields cannot hide behind a skipped key.
pub fn verify_row<T: Table>(sample: &T::Row) -> Result<(), SchemaError> {
    let value = serde_json::to_value(sample).map_err(|e| SchemaError::ShapeMismatch {
        table: T::NAME,
        detail: format!("row failed to serialize: {e}"),
    })?;

    let object = value.as_object().ok_or_else(|| SchemaError::ShapeMismatch {
        table: T::NAME,
        detail: "row did not serialize to an object".to_string(),
    })?;

    let declared: BTreeSet<&str> = T::columns().iter().map(|c| c.name).collect();
    let actual: BTreeSet<&str> = object.keys().map(String::as_str).collect();

    let missing: Vec<&str> = declared.difference(&actual).copied().collect();
    let extra: Vec<&str> = actual.difference(&declared).copied().collect();
    if !missing.is_empty() || !extra.is_empty() {
        return Err(SchemaError::ShapeMismatch {
            table: T::NAME,
            detail: format!("missing from row: {missing:?}, undeclared in columns: {extra:?}"),
        });
    }

    for column in T::columns().iter().filter(|c| !c.has_default) {
        if !actual.contains(column.name) {
            return Err(SchemaError::ShapeMismatch {
                table: T::NAME,
                detail: format!("insert-required column `{}` absent from row", column.name),
            });
        }
    }

    Ok(())
}

/// Every Update field is optional: the default Update must serialize to `{}`.
pub fn verify_update_all_optional<T: Table>() -> Result<(), SchemaError> {
    let value =
        serde_json::to_value(T::Update::default()).map_err(|e| SchemaError::ShapeMismatch {
            table: T::NAME,
            detail: format!("update failed to serialize: {e}"),
        })?;

    match value.as_object() {
        Some(object) if object.is_empty() => Ok(()),
        Some(object) => Err(SchemaError::ShapeMismatch {
            table: T::NAME,
            detail: format!(
                "default update is not empty, serialized keys: {:?}",
                object.keys().collect::<Vec<_>>()
            ),
        }),
        None => Err(SchemaError::ShapeMismatch {
            table: T::NAME,
            detail: "update did not serialize to an object".to_string(),
        }),
    }
}
