//! Diagram-ready view of a schema, filtered by detail level.

use crate::schema::{RelationType, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailLevel {
    Tables,
    Pk,
    PkFk,
    #[default]
    All,
}

impl DetailLevel {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "tables" => Some(Self::Tables),
            "pk" => Some(Self::Pk),
            "pk_fk" => Some(Self::PkFk),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// Renderer-neutral view of a schema shared by the diagram outputs.
#[derive(Debug, Clone)]
pub struct DiagramIR {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub columns: Vec<ColumnIR>,
}

#[derive(Debug, Clone)]
pub struct ColumnIR {
    pub name: String,
    /// Bare type name; length bounds are left to DBML and SQL.
    pub typ: String,
    pub is_pk: bool,
    pub not_null: bool,
    pub unique: bool,
    /// Referenced table for foreign-key columns.
    pub references: Option<String>,
}

impl ColumnIR {
    pub fn is_fk(&self) -> bool {
        self.references.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub rel_type: RelationType,
}

impl DiagramIR {
    pub fn from_schema(schema: &Schema, detail: DetailLevel) -> Self {
        let nodes: Vec<Node> = schema
            .tables()
            .map(|t| {
                let columns = t
                    .columns
                    .iter()
                    .filter(|c| match detail {
                        DetailLevel::Tables => false,
                        DetailLevel::Pk => c.primary_key,
                        DetailLevel::PkFk => c.primary_key || c.references.is_some(),
                        DetailLevel::All => true,
                    })
                    .map(|c| ColumnIR {
                        name: c.name.clone(),
                        typ: c.data_type.to_string(),
                        is_pk: c.primary_key,
                        not_null: !c.nullable,
                        unique: c.unique,
                        references: c.references.as_ref().map(|(table, _)| table.clone()),
                    })
                    .collect();

                Node {
                    id: t.name.clone(),
                    columns,
                }
            })
            .collect();

        let edges = schema
            .relationships
            .iter()
            .map(|r| Edge {
                from: r.from_table.clone(),
                to: r.to_table.clone(),
                rel_type: r.rel_type,
            })
            .collect();

        DiagramIR { nodes, edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const BLOG: &str = "Create a users table with name and email. \
                        Create a posts table with title. \
                        Posts references users.";

    #[test]
    fn test_ir_all_detail() {
        let ir = DiagramIR::from_schema(&parse(BLOG), DetailLevel::All);

        assert_eq!(ir.nodes.len(), 2);
        assert_eq!(ir.nodes[0].columns.len(), 3);
        assert_eq!(ir.nodes[0].columns[1].typ, "varchar");
        assert_eq!(ir.edges.len(), 1);
    }

    #[test]
    fn test_ir_pk_detail() {
        let ir = DiagramIR::from_schema(&parse(BLOG), DetailLevel::Pk);

        assert_eq!(ir.nodes[0].columns.len(), 1);
        assert_eq!(ir.nodes[0].columns[0].name, "id");
    }

    #[test]
    fn test_ir_pk_fk_detail() {
        let ir = DiagramIR::from_schema(&parse(BLOG), DetailLevel::PkFk);

        let posts: Vec<&str> = ir.nodes[1].columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(posts, vec!["id", "users_id"]);
        assert!(ir.nodes[1].columns[1].is_fk());
    }

    #[test]
    fn test_ir_tables_detail() {
        let ir = DiagramIR::from_schema(&parse(BLOG), DetailLevel::Tables);

        assert!(ir.nodes.iter().all(|n| n.columns.is_empty()));
    }
}
