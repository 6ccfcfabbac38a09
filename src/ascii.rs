//! Plain-text box view of a schema.

use crate::ir::{DiagramIR, Node};
use crate::measure::TextMetrics;

#[derive(Default)]
pub struct AsciiRenderer {
    metrics: TextMetrics,
}

impl AsciiRenderer {
    pub fn render(&self, ir: &DiagramIR) -> String {
        ir.nodes
            .iter()
            .map(|node| self.render_node(node))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn render_node(&self, node: &Node) -> String {
        let mut lines = vec![format!(
            "┌─ {} {}",
            node.id,
            "─".repeat(self.metrics.header_fill(&node.id))
        )];

        for col in &node.columns {
            let marker = if col.is_pk { "🔑" } else { "  " };
            let reference = col
                .references
                .as_ref()
                .map(|table| format!(" → {}", table))
                .unwrap_or_default();
            lines.push(format!("│ {} {}: {}{}", marker, col.name, col.typ, reference));
        }

        lines.push(format!("└{}", "─".repeat(self.metrics.footer_width)));
        lines.join("\n")
    }
}
