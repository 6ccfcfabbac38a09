//! High-level entry point tying extraction to every output format.

use crate::ascii::AsciiRenderer;
use crate::ir::{DetailLevel, DiagramIR};
use crate::schema::Schema;
use crate::sql::{Dialect, generate_sql};
use crate::synth::{Dataset, Generator};
use crate::{html, mermaid, parser, serializer};
use serde::Serialize;
use tracing::info;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("No schema compiled. Call compile() first.")]
    NoSchema,
    #[error("Unknown SQL dialect: {0} (expected postgresql, mysql or sqlite)")]
    UnknownDialect(String),
}

/// Aggregate counts describing a compiled schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub schema_name: String,
    pub num_tables: usize,
    pub num_relationships: usize,
    pub total_columns: usize,
    pub total_primary_keys: usize,
    pub total_foreign_keys: usize,
    pub tables: Vec<String>,
}

#[derive(Debug, Default)]
pub struct Compiler {
    schema: Option<Schema>,
    detail: DetailLevel,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column detail used by the diagram outputs.
    pub fn with_detail(mut self, detail: DetailLevel) -> Self {
        self.detail = detail;
        self
    }

    /// Compile a description into a schema named `schema_name`.
    pub fn compile(&mut self, description: &str, schema_name: &str) -> &mut Self {
        let mut schema = parser::parse(description);
        schema.name = schema_name.to_string();
        info!(
            schema = %schema.name,
            tables = schema.tables.len(),
            relationships = schema.relationships.len(),
            "compiled schema"
        );
        self.schema = Some(schema);
        self
    }

    /// Use an already-built schema instead of compiling one.
    pub fn load_schema(&mut self, schema: Schema) -> &mut Self {
        self.schema = Some(schema);
        self
    }

    pub fn schema(&self) -> Result<&Schema, CompileError> {
        self.schema.as_ref().ok_or(CompileError::NoSchema)
    }

    pub fn into_schema(self) -> Result<Schema, CompileError> {
        self.schema.ok_or(CompileError::NoSchema)
    }

    pub fn to_dbml(&self) -> Result<String, CompileError> {
        Ok(serializer::serialize(self.schema()?))
    }

    /// Returns whether the schema is valid together with every finding.
    pub fn validate(&self) -> Result<(bool, Vec<String>), CompileError> {
        let errors = self.schema()?.validate();
        Ok((errors.is_empty(), errors))
    }

    /// Generate a migration for a dialect given by name.
    pub fn generate_migration(&self, dialect: &str) -> Result<String, CompileError> {
        let schema = self.schema()?;
        let dialect = Dialect::from_str(dialect)
            .ok_or_else(|| CompileError::UnknownDialect(dialect.to_string()))?;
        Ok(generate_sql(schema, dialect))
    }

    pub fn generate_test_data(&self, rows: usize) -> Result<Dataset, CompileError> {
        self.generate_test_data_with(&mut Generator::default(), rows)
    }

    pub fn generate_test_data_with(
        &self,
        generator: &mut Generator,
        rows: usize,
    ) -> Result<Dataset, CompileError> {
        Ok(generator.generate(self.schema()?, rows))
    }

    fn diagram(&self) -> Result<DiagramIR, CompileError> {
        Ok(DiagramIR::from_schema(self.schema()?, self.detail))
    }

    pub fn visualize_ascii(&self) -> Result<String, CompileError> {
        Ok(AsciiRenderer::default().render(&self.diagram()?))
    }

    pub fn visualize_mermaid(&self) -> Result<String, CompileError> {
        Ok(mermaid::render(&self.diagram()?))
    }

    pub fn visualize_html(&self) -> Result<String, CompileError> {
        Ok(html::render(&self.diagram()?))
    }

    pub fn summary(&self) -> Result<Summary, CompileError> {
        let schema = self.schema()?;
        let columns = || schema.tables().flat_map(|t| t.columns.iter());

        Ok(Summary {
            schema_name: schema.name.clone(),
            num_tables: schema.tables.len(),
            num_relationships: schema.relationships.len(),
            total_columns: columns().count(),
            total_primary_keys: columns().filter(|c| c.primary_key).count(),
            total_foreign_keys: columns().filter(|c| c.references.is_some()).count(),
            tables: schema.tables.keys().cloned().collect(),
        })
    }
}
