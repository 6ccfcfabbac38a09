//! Schema type to SQL type mapping.

use super::Dialect;
use crate::schema::{Column, DataType};

/// Map a column's data type to the dialect's SQL type.
pub fn sql_type(column: &Column, dialect: Dialect) -> String {
    match column.data_type {
        DataType::Integer => "INTEGER".to_string(),
        DataType::BigInt => "BIGINT".to_string(),
        DataType::Varchar => format!("VARCHAR({})", column.length.unwrap_or(255)),
        DataType::Text => "TEXT".to_string(),
        DataType::Boolean => match dialect {
            Dialect::PostgreSQL => "BOOLEAN".to_string(),
            Dialect::MySQL | Dialect::SQLite => "TINYINT(1)".to_string(),
        },
        DataType::Date => "DATE".to_string(),
        DataType::DateTime | DataType::Timestamp => "TIMESTAMP".to_string(),
        DataType::Decimal => "DECIMAL(10,2)".to_string(),
        DataType::Float => "FLOAT".to_string(),
        DataType::Json => match dialect {
            Dialect::PostgreSQL => "JSON".to_string(),
            Dialect::MySQL | Dialect::SQLite => "TEXT".to_string(),
        },
        DataType::Uuid => match dialect {
            Dialect::PostgreSQL => "UUID".to_string(),
            Dialect::MySQL | Dialect::SQLite => "VARCHAR(36)".to_string(),
        },
    }
}
