//! draw.io (mxGraph) XML documents.
//!
//! Output is a single line: `<mxfile>` / `<diagram>` / `<mxGraphModel>` / `<root>`, the two
//! mandatory root cells, one vertex cell per node (ids from 2, discovery order) and one edge
//! cell per edge.

use crate::model::FlowchartLayout;
use easydraw_core::NodeShape;
use rustc_hash::FxHashMap;
use std::fmt::Write as _;

pub const PROCESS_STYLE: &str = "shape=rectangle;rounded=0;whiteSpace=wrap;html=1;fillColor=#FFFFFF;strokeColor=#000000;fontSize=12;";
pub const DECISION_STYLE: &str = "shape=rhombus;perimeter=rhombusPerimeter;whiteSpace=wrap;html=1;fillColor=#FFFFFF;strokeColor=#000000;fontSize=12;";
pub const EDGE_STYLE: &str =
    "edgeStyle=orthogonalEdgeStyle;rounded=1;endArrow=block;strokeColor=#000000;html=1;";
pub const CURVED_EDGE_STYLE: &str =
    "edgeStyle=orthogonalEdgeStyle;rounded=1;curved=1;endArrow=block;strokeColor=#000000;html=1;";
pub const PLACEHOLDER_STYLE: &str =
    "whiteSpace=wrap;html=1;rounded=1;fillColor=#EEF2FF;strokeColor=#4B5563;fontSize=12;";
pub const EMPTY_PLACEHOLDER_TEXT: &str = "Mermaid content is empty";

const DOCUMENT_OPEN: &str = r#"<mxfile host="app.diagrams.net"><diagram name="Generated"><mxGraphModel><root><mxCell id="0"/><mxCell id="1" parent="0"/>"#;
const DOCUMENT_CLOSE: &str = "</root></mxGraphModel></diagram></mxfile>";

/// First id available to diagram cells; `0` and `1` are the root cells.
const FIRST_CELL_ID: usize = 2;

pub fn render_drawio(layout: &FlowchartLayout) -> String {
    let mut out = String::from(DOCUMENT_OPEN);
    let mut cell_ids: FxHashMap<&str, usize> = FxHashMap::default();
    let mut next_id = FIRST_CELL_ID;

    for node in &layout.nodes {
        let style = match node.shape {
            NodeShape::Process => PROCESS_STYLE,
            NodeShape::Decision => DECISION_STYLE,
        };
        let _ = write!(
            out,
            r#"<mxCell id="{next_id}" value="{}" style="{style}" vertex="1" parent="1"><mxGeometry x="{}" y="{}" width="{}" height="{}" as="geometry"/></mxCell>"#,
            escape_xml(&node.label),
            node.x,
            node.y,
            node.width,
            node.height,
        );
        cell_ids.insert(node.id.as_str(), next_id);
        next_id += 1;
    }

    for edge in &layout.edges {
        let (Some(source), Some(target)) = (
            cell_ids.get(edge.from.as_str()),
            cell_ids.get(edge.to.as_str()),
        ) else {
            continue;
        };
        let style = if edge.curved {
            CURVED_EDGE_STYLE
        } else {
            EDGE_STYLE
        };
        let _ = write!(
            out,
            r#"<mxCell id="{next_id}" edge="1" parent="1" source="{source}" target="{target}" value="{}" style="{style}"><mxGeometry relative="1" as="geometry"/></mxCell>"#,
            escape_xml(edge.label.as_deref().unwrap_or_default()),
        );
        next_id += 1;
    }

    out.push_str(DOCUMENT_CLOSE);
    tracing::debug!(cells = next_id - FIRST_CELL_ID, "rendered draw.io document");
    out
}

/// A document holding one rounded box with `text` in it. Blank text gets a fixed notice.
pub fn render_placeholder(text: &str) -> String {
    let text = if text.trim().is_empty() {
        EMPTY_PLACEHOLDER_TEXT
    } else {
        text
    };
    let mut out = String::from(DOCUMENT_OPEN);
    let _ = write!(
        out,
        r#"<mxCell id="{FIRST_CELL_ID}" value="{}" style="{PLACEHOLDER_STYLE}" vertex="1" parent="1"><mxGeometry x="160" y="120" width="320" height="200" as="geometry"/></mxCell>"#,
        escape_xml(text),
    );
    out.push_str(DOCUMENT_CLOSE);
    out
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
