//! Fixed word lists and patterns driving clause classification.

use crate::schema::DataType;
use once_cell::sync::Lazy;
use regex::Regex;

pub const TABLE_CUES: [&str; 3] = ["table", "entity", "create"];

pub const COLUMN_CUES: [&str; 5] = ["has", "with", "contains", "field", "column"];

pub const RELATIONSHIP_CUES: [&str; 5] =
    ["references", "links to", "belongs to", "has many", "has one"];

/// Words stripped from the front of a column list.
pub const COLUMN_LEAD_WORDS: [&str; 7] =
    ["has", "with", "contains", "field", "column", "called", "named"];

/// Words that can never be a table name.
pub const TABLE_NAME_STOPWORDS: [&str; 5] = ["a", "an", "the", "with", "has"];

/// Words that can never be a column name.
pub const COLUMN_NAME_STOPWORDS: [&str; 5] = ["a", "an", "the", "table", "entity"];

pub const NOT_NULL_CUES: [&str; 3] = ["required", "not null", "mandatory"];

/// Punctuation trimmed from tokens before they are compared.
pub const TOKEN_PUNCTUATION: [char; 3] = [',', ':', ';'];

/// Table-name patterns, tried in order. Each is only evaluated at its
/// leftmost match.
pub static TABLE_NAME_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r#"(?:table|entity|create)\s+(?:called\s+)?["']?(\w+)["']?"#).unwrap(),
        Regex::new(r"(\w+)\s+(?:table|entity)").unwrap(),
        Regex::new(r"create\s+(\w+)").unwrap(),
    ]
});

/// First whole-word column cue in a clause.
pub static COLUMN_CUE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:has|with|contains|field|column)\b").unwrap());

/// Separators between column definitions.
pub static COLUMN_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r",|\sand\s").unwrap());

/// Map a single keyword to the data type it implies.
pub fn type_keyword(word: &str) -> Option<DataType> {
    let data_type = match word {
        "integer" | "int" | "number" => DataType::Integer,
        "bigint" => DataType::BigInt,
        "string" | "varchar" | "email" => DataType::Varchar,
        "text" => DataType::Text,
        "boolean" | "bool" | "flag" => DataType::Boolean,
        "date" => DataType::Date,
        "datetime" => DataType::DateTime,
        "timestamp" => DataType::Timestamp,
        "decimal" | "money" | "price" => DataType::Decimal,
        "float" | "double" => DataType::Float,
        "json" => DataType::Json,
        "uuid" => DataType::Uuid,
        _ => return None,
    };
    Some(data_type)
}

pub fn contains_any(clause: &str, cues: &[&str]) -> bool {
    cues.iter().any(|cue| clause.contains(cue))
}
