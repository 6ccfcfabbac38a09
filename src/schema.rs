//! In-memory schema model and its structural validator.

use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::fmt;

/// Column data types understood by every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Integer,
    BigInt,
    /// Short text with an optional length bound.
    Varchar,
    /// Unbounded text.
    Text,
    Boolean,
    Date,
    DateTime,
    Timestamp,
    Decimal,
    Float,
    Json,
    Uuid,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::BigInt => "bigint",
            Self::Varchar => "varchar",
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Timestamp => "timestamp",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::Json => "json",
            Self::Uuid => "uuid",
        }
    }

    pub fn is_integral(&self) -> bool {
        matches!(self, Self::Integer | Self::BigInt)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cardinality of a relationship, read from the "from" side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationType {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl RelationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneToOne => "1:1",
            Self::OneToMany => "1:n",
            Self::ManyToOne => "n:1",
            Self::ManyToMany => "n:m",
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
    pub primary_key: bool,
    pub unique: bool,
    pub default: Option<String>,
    /// Only meaningful for `DataType::Varchar`.
    pub length: Option<u32>,
    /// Foreign-key target as `(table, column)`.
    pub references: Option<(String, String)>,
}

impl Column {
    /// A nullable, non-key column of the given type.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
            primary_key: false,
            unique: false,
            default: None,
            length: None,
            references: None,
        }
    }

    /// Marks the column as primary key. Key columns are never nullable.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn references(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.references = Some((table.into(), column.into()));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub note: Option<String>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            note: None,
        }
    }

    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub fn primary_keys(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.primary_key)
    }

    pub fn has_primary_key(&self) -> bool {
        self.columns.iter().any(|c| c.primary_key)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Directed reference: the "from" side holds the foreign key.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    pub from_table: String,
    pub from_column: String,
    pub to_table: String,
    pub to_column: String,
    pub rel_type: RelationType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub name: String,
    pub tables: IndexMap<String, Table>,
    pub relationships: Vec<Relationship>,
}

impl Default for Schema {
    fn default() -> Self {
        Self::new("database")
    }
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: IndexMap::new(),
            relationships: Vec::new(),
        }
    }

    /// Insert a table. A table with the same name is replaced in place.
    pub fn add_table(&mut self, table: Table) {
        self.tables.insert(table.name.clone(), table);
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.get_mut(name)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub fn add_relationship(&mut self, rel: Relationship) {
        self.relationships.push(rel);
    }

    /// Check relational integrity. Every finding is reported; nothing is fixed.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (name, table) in &self.tables {
            if !table.has_primary_key() {
                errors.push(format!("Table '{}' has no primary key", name));
            }
        }

        for (name, table) in &self.tables {
            for col in &table.columns {
                let Some((ref_table, ref_col)) = &col.references else {
                    continue;
                };
                match self.tables.get(ref_table) {
                    None => errors.push(format!(
                        "Table '{}.{}' references non-existent table '{}'",
                        name, col.name, ref_table
                    )),
                    Some(target) if target.column(ref_col).is_none() => errors.push(format!(
                        "Table '{}.{}' references non-existent column '{}.{}'",
                        name, col.name, ref_table, ref_col
                    )),
                    Some(_) => {}
                }
            }
        }

        for (name, table) in &self.tables {
            let mut seen = BTreeSet::new();
            let mut duplicates = BTreeSet::new();
            for col in &table.columns {
                if !seen.insert(col.name.as_str()) {
                    duplicates.insert(col.name.as_str());
                }
            }
            if !duplicates.is_empty() {
                let names: Vec<String> = duplicates.iter().map(|d| format!("'{}'", d)).collect();
                errors.push(format!(
                    "Table '{}' has duplicate column names: {{{}}}",
                    name,
                    names.join(", ")
                ));
            }
        }

        for rel in &self.relationships {
            for endpoint in [&rel.from_table, &rel.to_table] {
                if !self.tables.contains_key(endpoint) {
                    errors.push(format!(
                        "Relationship references non-existent table '{}'",
                        endpoint
                    ));
                }
            }
        }

        errors
    }
}
