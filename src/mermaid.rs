//! Mermaid `erDiagram` output.

use crate::ir::{DiagramIR, Edge, Node};
use crate::schema::RelationType;

pub fn render(ir: &DiagramIR) -> String {
    let mut lines = vec!["erDiagram".to_string()];

    for node in &ir.nodes {
        render_node(&mut lines, node);
    }
    for edge in &ir.edges {
        lines.push(render_edge(edge));
    }

    lines.join("\n")
}

fn render_node(lines: &mut Vec<String>, node: &Node) {
    lines.push(format!("  {} {{", node.id));
    for col in &node.columns {
        let key = if col.is_pk {
            " PK"
        } else if col.is_fk() {
            " FK"
        } else {
            ""
        };
        lines.push(format!("    {} {}{}", col.typ, col.name, key));
    }
    lines.push("  }".to_string());
}

fn render_edge(edge: &Edge) -> String {
    format!("  {} {} {} : \"\"", edge.from, symbol(edge.rel_type), edge.to)
}

pub fn symbol(rel_type: RelationType) -> &'static str {
    match rel_type {
        RelationType::OneToOne => "||--||",
        RelationType::OneToMany => "||--o{",
        RelationType::ManyToOne => "}o--||",
        RelationType::ManyToMany => "}o--o{",
    }
}
