//! Heuristic clause classifier turning prose into a schema.

use crate::completion::complete;
use crate::schema::{Column, DataType, RelationType, Relationship, Schema, Table};
use crate::segmenter::Segmenter;
use crate::vocabulary::{
    COLUMN_CUE_WORD, COLUMN_CUES, COLUMN_LEAD_WORDS, COLUMN_NAME_STOPWORDS, COLUMN_SEPARATOR,
    NOT_NULL_CUES, RELATIONSHIP_CUES, TABLE_CUES, TABLE_NAME_PATTERNS, TABLE_NAME_STOPWORDS,
    TOKEN_PUNCTUATION, contains_any, type_keyword,
};
use tracing::debug;

/// How a single clause was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    Table,
    Column,
    Relationship,
    Ignored,
}

/// Parse a description and run the completion pass.
pub fn parse(input: &str) -> Schema {
    Parser::new(input).parse()
}

pub struct Parser<'a> {
    clauses: Segmenter<'a>,
    schema: Schema,
    /// Implicit target of column-only clauses.
    current_table: Option<String>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            clauses: Segmenter::new(input),
            schema: Schema::default(),
            current_table: None,
        }
    }

    /// Extract and complete the schema.
    pub fn parse(self) -> Schema {
        let mut schema = self.extract();
        complete(&mut schema);
        schema
    }

    /// Extract the schema without running the completion pass.
    pub fn extract(mut self) -> Schema {
        while let Some(clause) = self.clauses.next() {
            let kind = self.process(&clause);
            debug!(?kind, clause = %clause, "classified clause");
        }
        self.schema
    }

    fn process(&mut self, clause: &str) -> ClauseKind {
        if contains_any(clause, &TABLE_CUES) {
            self.declare_table(clause);
            ClauseKind::Table
        } else if self.current_table.is_some() && contains_any(clause, &COLUMN_CUES) {
            let fragment = column_fragment(clause).unwrap_or(clause);
            let columns = extract_columns(fragment);
            self.append_to_current(columns);
            ClauseKind::Column
        } else if contains_any(clause, &RELATIONSHIP_CUES) {
            if let Some(rel) = extract_relationship(clause, &self.schema) {
                self.schema.add_relationship(rel);
            }
            ClauseKind::Relationship
        } else {
            ClauseKind::Ignored
        }
    }

    fn declare_table(&mut self, clause: &str) {
        let Some(name) = extract_table_name(clause) else {
            debug!(clause = %clause, "no table name found");
            return;
        };

        self.schema.add_table(Table::new(name.as_str()));
        self.current_table = Some(name);

        if contains_any(clause, &COLUMN_CUES) {
            if let Some(fragment) = column_fragment(clause) {
                let columns = extract_columns(fragment);
                self.append_to_current(columns);
            }
        }
    }

    fn append_to_current(&mut self, columns: Vec<Column>) {
        let Some(name) = &self.current_table else {
            return;
        };
        if let Some(table) = self.schema.table_mut(name) {
            for column in columns {
                table.add_column(column);
            }
        }
    }
}

/// Find the table name using the fallback patterns in order.
pub fn extract_table_name(clause: &str) -> Option<String> {
    TABLE_NAME_PATTERNS.iter().find_map(|pattern| {
        let name = pattern.captures(clause)?.get(1)?.as_str();
        if TABLE_NAME_STOPWORDS.contains(&name) {
            None
        } else {
            Some(name.to_string())
        }
    })
}

/// The text following the first whole-word column cue.
fn column_fragment(clause: &str) -> Option<&str> {
    COLUMN_CUE_WORD.find(clause).map(|m| &clause[m.end()..])
}

fn strip_lead_words(text: &str) -> &str {
    let mut rest = text.trim_start();
    loop {
        let (word, tail) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        if word.is_empty() || !COLUMN_LEAD_WORDS.contains(&word) {
            return rest;
        }
        rest = tail.trim_start();
    }
}

fn trim_token(token: &str) -> &str {
    token.trim_matches(&TOKEN_PUNCTUATION[..])
}

/// Extract column definitions from a comma / "and" separated list.
pub fn extract_columns(fragment: &str) -> Vec<Column> {
    let body = strip_lead_words(fragment);
    COLUMN_SEPARATOR.split(body).filter_map(parse_column).collect()
}

fn parse_column(part: &str) -> Option<Column> {
    let part = part.trim();
    if part.chars().count() < 2 {
        return None;
    }
    let part = strip_lead_words(part);

    let mut words = part.split_whitespace();
    let name = trim_token(words.next()?);
    if name.is_empty() || COLUMN_NAME_STOPWORDS.contains(&name) {
        return None;
    }
    let rest: Vec<&str> = words.map(trim_token).collect();

    let data_type = rest
        .iter()
        .find_map(|word| type_keyword(word))
        .unwrap_or(DataType::Varchar);

    let mut column = Column::new(name, data_type);

    if contains_any(part, &NOT_NULL_CUES) {
        column = column.not_null();
    }

    if data_type == DataType::Varchar {
        let length = if name.contains("email") || part.contains("email") {
            255
        } else if name.contains("phone") {
            20
        } else {
            255
        };
        column = column.with_length(length);
    }

    Some(column)
}

/// Build a relationship from the first two known table names in the clause.
///
/// Direction follows mention order, whatever the connecting phrase says.
pub fn extract_relationship(clause: &str, schema: &Schema) -> Option<Relationship> {
    let mut mentioned: Vec<&str> = Vec::with_capacity(2);
    for token in clause.split_whitespace().map(trim_token) {
        if schema.tables.contains_key(token) && !mentioned.contains(&token) {
            mentioned.push(token);
            if mentioned.len() == 2 {
                break;
            }
        }
    }

    let &[from_table, to_table] = mentioned.as_slice() else {
        return None;
    };

    let rel_type = if clause.contains("has many") {
        RelationType::OneToMany
    } else if clause.contains("has one") {
        RelationType::OneToOne
    } else if clause.contains("many to many") {
        RelationType::ManyToMany
    } else {
        RelationType::ManyToOne
    };

    Some(Relationship {
        from_table: from_table.to_string(),
        from_column: format!("{}_id", to_table),
        to_table: to_table.to_string(),
        to_column: "id".to_string(),
        rel_type,
    })
}
