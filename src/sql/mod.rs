//! SQL migration generation.

mod dialect;
mod migration;
mod types;

pub use dialect::Dialect;
pub use migration::generate_sql;
pub use types::sql_type;
