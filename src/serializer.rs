//! Serializer for converting a schema to DBML markup.

use crate::schema::{Column, RelationType, Relationship, Schema, Table};

/// Serialize a Schema to DBML.
pub fn serialize(schema: &Schema) -> String {
    let mut output = format!("// Database: {}\n\n", schema.name);

    for table in schema.tables() {
        serialize_table(&mut output, table);
        output.push('\n');
    }

    if !schema.relationships.is_empty() {
        output.push_str("// Relationships\n");
        for rel in &schema.relationships {
            serialize_relationship(&mut output, rel);
        }
    }

    output
}

fn serialize_table(output: &mut String, table: &Table) {
    output.push_str(&format!("Table {} {{\n", table.name));

    for column in &table.columns {
        output.push_str("  ");
        output.push_str(&column_line(column));
        output.push('\n');
    }

    if let Some(note) = &table.note {
        output.push_str(&format!("  Note: '{}'\n", note.replace('\'', "\\'")));
    }

    output.push_str("}\n");
}

/// Single column line, e.g. `email varchar(255) [not null, unique]`.
pub fn column_line(column: &Column) -> String {
    let mut line = format!("{} {}", column.name, column.data_type);
    if let Some(length) = column.length {
        line.push_str(&format!("({})", length));
    }

    // Attribute order: pk, not null, unique, default, ref
    let mut attrs = Vec::new();
    if column.primary_key {
        attrs.push("pk".to_string());
    }
    if !column.nullable {
        attrs.push("not null".to_string());
    }
    if column.unique {
        attrs.push("unique".to_string());
    }
    if let Some(value) = &column.default {
        attrs.push(format!("default: {}", value));
    }
    if let Some((table, col)) = &column.references {
        attrs.push(format!("ref: > {}.{}", table, col));
    }

    if !attrs.is_empty() {
        line.push_str(&format!(" [{}]", attrs.join(", ")));
    }
    line
}

fn serialize_relationship(output: &mut String, rel: &Relationship) {
    output.push_str(&format!(
        "Ref: {}.{} {} {}.{}\n",
        rel.from_table,
        rel.from_column,
        relation_operator(rel.rel_type),
        rel.to_table,
        rel.to_column
    ));
}

fn relation_operator(rel_type: RelationType) -> &'static str {
    match rel_type {
        RelationType::OneToOne => "-",
        RelationType::OneToMany => "<",
        RelationType::ManyToOne => ">",
        RelationType::ManyToMany => "<>",
    }
}
