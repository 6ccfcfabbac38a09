pub mod ascii;
pub mod compiler;
pub mod completion;
pub mod html;
pub mod ir;
pub mod measure;
pub mod mermaid;
pub mod parser;
pub mod schema;
pub mod segmenter;
pub mod serializer;
pub mod sql;
pub mod synth;
pub mod vocabulary;

use wasm_bindgen::prelude::*;

pub use compiler::{CompileError, Compiler, Summary};
pub use ir::DetailLevel;
pub use parser::parse;
pub use schema::{Column, DataType, RelationType, Relationship, Schema, Table};
pub use sql::Dialect;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

fn compile(source: &str, name: Option<String>) -> Compiler {
    let mut compiler = Compiler::new();
    compiler.compile(source, name.as_deref().unwrap_or("database"));
    compiler
}

/// Compile a description to DBML
#[wasm_bindgen(js_name = "nlToDbml")]
pub fn nl_to_dbml(source: &str, name: Option<String>) -> Result<String, String> {
    compile(source, name).to_dbml().map_err(|e| e.to_string())
}

/// Compile a description to a SQL migration
#[wasm_bindgen(js_name = "nlToSql")]
pub fn nl_to_sql(source: &str, dialect: Option<String>) -> Result<String, String> {
    compile(source, None)
        .generate_migration(dialect.as_deref().unwrap_or("postgresql"))
        .map_err(|e| e.to_string())
}

/// Compile a description to Mermaid ER diagram code
#[wasm_bindgen(js_name = "nlToMermaid")]
pub fn nl_to_mermaid(source: &str, detail: Option<String>) -> Result<String, String> {
    let detail = detail
        .as_deref()
        .and_then(DetailLevel::from_str)
        .unwrap_or(DetailLevel::All);

    let mut compiler = Compiler::new().with_detail(detail);
    compiler.compile(source, "database");
    compiler.visualize_mermaid().map_err(|e| e.to_string())
}
