//! Post-extraction repairs: default primary keys and foreign-key columns.

use crate::schema::{Column, DataType, Schema};
use tracing::debug;

/// Run both completion steps. Running it again is a no-op.
pub fn complete(schema: &mut Schema) {
    inject_primary_keys(schema);
    materialize_foreign_keys(schema);
}

/// Prepend an integer `id` key to every table that has none.
pub fn inject_primary_keys(schema: &mut Schema) {
    for table in schema.tables.values_mut() {
        if !table.has_primary_key() {
            debug!(table = %table.name, "injecting id primary key");
            table
                .columns
                .insert(0, Column::new("id", DataType::Integer).primary_key());
        }
    }
}

/// Append a `<to>_id` reference column to the "from" side of every
/// relationship. An existing column with that name is left as it is, even
/// when it carries no reference.
pub fn materialize_foreign_keys(schema: &mut Schema) {
    for rel in &schema.relationships {
        if !schema.tables.contains_key(&rel.to_table) {
            continue;
        }
        let Some(from) = schema.tables.get_mut(&rel.from_table) else {
            continue;
        };
        if from.column(&rel.from_column).is_some() {
            continue;
        }
        debug!(
            table = %rel.from_table,
            column = %rel.from_column,
            target = %rel.to_table,
            "adding foreign key column"
        );
        from.add_column(
            Column::new(rel.from_column.as_str(), DataType::Integer)
                .references(rel.to_table.as_str(), rel.to_column.as_str()),
        );
    }
}
