//! HTML table view of a schema.

use crate::ir::{ColumnIR, DiagramIR};

pub fn render(ir: &DiagramIR) -> String {
    let mut html = vec!["<div class='schema-visualization'>".to_string()];

    for node in &ir.nodes {
        html.push(format!("<h3>{}</h3>", escape(&node.id)));
        html.push("<table border='1' cellpadding='5'>".to_string());
        html.push("<tr><th>Column</th><th>Type</th><th>Constraints</th></tr>".to_string());
        for col in &node.columns {
            html.push(format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&col.name),
                escape(&col.typ),
                escape(&constraints(col))
            ));
        }
        html.push("</table><br>".to_string());
    }

    html.push("</div>".to_string());
    html.join("\n")
}

fn constraints(col: &ColumnIR) -> String {
    let mut out = Vec::new();
    if col.is_pk {
        out.push("PK".to_string());
    }
    if col.not_null {
        out.push("NOT NULL".to_string());
    }
    if col.unique {
        out.push("UNIQUE".to_string());
    }
    if let Some(table) = &col.references {
        out.push(format!("FK → {}", table));
    }
    out.join(", ")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
