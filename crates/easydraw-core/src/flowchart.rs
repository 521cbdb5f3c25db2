//! Edge-statement extraction from canonical flowchart text.
//!
//! Only the pragmatic subset the sanitizer produces is understood: `id`, `id[label]` and
//! `id{label}` operands joined by `->` / `-->`, with an optional `|label|` after the arrow.

use crate::detect::{self, DiagramKind};
use indexmap::IndexMap;
use indexmap::map::Entry;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn edge_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"([A-Za-z0-9_]+)(?:\[([^\]]*)\]|\{([^}]*)\})?\s*-{1,2}>\s*(?:\|([^|]*)\|\s*)?([A-Za-z0-9_]+)(?:\[([^\]]*)\]|\{([^}]*)\})?",
        )
        .expect("valid regex")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    #[default]
    Process,
    Decision,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowNode {
    pub id: String,
    pub label: String,
    pub shape: NodeShape,
    /// Discovery order, starting at 0.
    pub order: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowEdge {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlowchartModel {
    /// Second token of a `graph` / `flowchart` header, as written.
    pub direction: Option<String>,
    pub nodes: IndexMap<String, FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowchartModel {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.get(id)
    }

    /// Records `id` on first sighting. Later declarations never change label or shape.
    fn upsert(&mut self, id: &str, decl: NodeDecl) {
        let order = self.nodes.len();
        if let Entry::Vacant(e) = self.nodes.entry(id.to_string()) {
            e.insert(FlowNode {
                id: id.to_string(),
                label: decl.label.unwrap_or_else(|| id.to_string()),
                shape: decl.shape,
                order,
            });
        }
    }
}

struct NodeDecl {
    label: Option<String>,
    shape: NodeShape,
}

impl NodeDecl {
    fn from_groups(bracket: Option<&str>, brace: Option<&str>) -> Self {
        match (bracket, brace) {
            (Some(raw), _) => Self {
                label: clean_label(raw),
                shape: NodeShape::Process,
            },
            (None, Some(raw)) => Self {
                label: clean_label(raw),
                shape: NodeShape::Decision,
            },
            (None, None) => Self {
                label: None,
                shape: NodeShape::Process,
            },
        }
    }
}

pub fn parse_flowchart(text: &str) -> FlowchartModel {
    let mut model = FlowchartModel {
        direction: header_direction(text),
        ..Default::default()
    };

    for line in text.lines().map(str::trim) {
        let Some(caps) = edge_regex().captures(line) else {
            continue;
        };
        let group = |i: usize| caps.get(i).map(|m| m.as_str());
        let (Some(from), Some(to)) = (group(1), group(5)) else {
            continue;
        };

        model.upsert(from, NodeDecl::from_groups(group(2), group(3)));
        model.upsert(to, NodeDecl::from_groups(group(6), group(7)));
        model.edges.push(FlowEdge {
            from: from.to_string(),
            to: to.to_string(),
            label: group(4).and_then(clean_label),
        });
    }

    tracing::debug!(
        nodes = model.nodes.len(),
        edges = model.edges.len(),
        "parsed flowchart"
    );
    model
}

fn header_direction(text: &str) -> Option<String> {
    let line = detect::first_content_line(text)?;
    if DiagramKind::detect_header(line) != Some(DiagramKind::Flowchart) {
        return None;
    }
    line.split_whitespace().nth(1).map(str::to_string)
}

/// Trims, unwraps one level of double quotes (undoing `\"` / `\\`) and drops blank labels.
fn clean_label(raw: &str) -> Option<String> {
    let t = raw.trim();
    let label = match t.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) => unescape(inner),
        None => t.to_string(),
    };
    if label.trim().is_empty() {
        None
    } else {
        Some(label)
    }
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
                continue;
            }
        }
        out.push(ch);
    }
    out
}
