//! CREATE TABLE / CREATE INDEX generation.

use super::Dialect;
use super::types::sql_type;
use crate::schema::{Column, DataType, Schema, Table};

/// Generate a migration script creating every table of the schema, followed
/// by an index for each foreign-key column.
pub fn generate_sql(schema: &Schema, dialect: Dialect) -> String {
    let mut statements = vec![format!(
        "-- Migration for {} ({})",
        schema.name,
        dialect.name()
    )];

    for table in schema.tables() {
        statements.push(create_table(table, dialect));
    }

    for table in schema.tables() {
        for column in &table.columns {
            if column.references.is_some() && !column.primary_key {
                statements.push(format!(
                    "CREATE INDEX idx_{t}_{c} ON {t}({c});",
                    t = table.name,
                    c = column.name
                ));
            }
        }
    }

    statements.join("\n\n")
}

fn create_table(table: &Table, dialect: Dialect) -> String {
    let pk_columns: Vec<&str> = table.primary_keys().map(|c| c.name.as_str()).collect();
    let composite = pk_columns.len() > 1;

    let mut defs: Vec<String> = table
        .columns
        .iter()
        .map(|c| column_definition(c, dialect, composite))
        .collect();

    if composite {
        defs.push(format!("  PRIMARY KEY ({})", pk_columns.join(", ")));
    }

    format!("CREATE TABLE {} (\n{}\n);", table.name, defs.join(",\n"))
}

fn column_definition(column: &Column, dialect: Dialect, composite_pk: bool) -> String {
    if column.primary_key && !composite_pk {
        return if column.data_type.is_integral() {
            let big = column.data_type == DataType::BigInt;
            format!("  {} {}", column.name, dialect.auto_increment_key(big))
        } else {
            format!("  {} {} PRIMARY KEY", column.name, sql_type(column, dialect))
        };
    }

    let mut def = format!("  {} {}", column.name, sql_type(column, dialect));
    if !column.nullable {
        def.push_str(" NOT NULL");
    }
    if column.unique {
        def.push_str(" UNIQUE");
    }
    if let Some(value) = &column.default {
        def.push_str(&format!(" DEFAULT {}", value));
    }
    if let Some((table, col)) = &column.references {
        def.push_str(&format!(" REFERENCES {}({})", table, col));
    }
    def
}
