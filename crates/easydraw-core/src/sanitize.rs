//! Canonicalization of model-generated Mermaid text.
//!
//! The sanitizer never fails: it drops Markdown fences, makes sure a header is present and,
//! for flowcharts, rewrites free-text edge operands into `id["label"]` nodes.

use crate::detect::{self, DiagramKind};
use indexmap::IndexMap;
use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

pub const DEFAULT_HEADER: &str = "graph TB";
const ARROW: &str = "-->";

fn bare_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("valid regex"))
}

fn shaped_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Za-z0-9_]+)\s*[\[{(]").expect("valid regex"))
}

/// Free-text label to synthesized node id, scoped to a single sanitize call.
///
/// Ids are `N1`, `N2`, ... in first-seen order. Identifiers already written by the author
/// are reserved up front so a synthesized id never aliases an existing node.
#[derive(Debug, Clone, Default)]
pub struct LabelRegistry {
    ids: IndexMap<String, String>,
    reserved: FxHashSet<String>,
    next: usize,
}

impl LabelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reserve(&mut self, id: impl Into<String>) {
        self.reserved.insert(id.into());
    }

    /// Returns the id for `label`, synthesizing one on first sight.
    pub fn resolve(&mut self, label: &str) -> &str {
        if !self.ids.contains_key(label) {
            let id = loop {
                self.next += 1;
                let candidate = format!("N{}", self.next);
                if !self.reserved.contains(&candidate) {
                    break candidate;
                }
            };
            tracing::trace!(label, id = %id, "synthesized node id");
            self.ids.insert(label.to_string(), id);
        }
        self.ids.get(label).map(String::as_str).unwrap_or_default()
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.ids.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// `(label, id)` pairs in synthesis order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ids.iter().map(|(l, id)| (l.as_str(), id.as_str()))
    }
}

/// Rewrites raw diagram text into canonical form. Blank input yields an empty string.
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let normalized = trimmed.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<String> = Vec::new();
    let mut kind: Option<DiagramKind> = None;

    for raw_line in normalized.split('\n') {
        let line = raw_line.trim();
        if line.is_empty() {
            if kind.is_some() {
                lines.push(String::new());
            }
            continue;
        }
        if detect::is_fence_line(line) {
            continue;
        }
        if kind.is_none() {
            match normalize_header(line) {
                Some((detected, header)) => {
                    tracing::debug!(kind = detected.as_str(), header = %header, "diagram header");
                    lines.push(header);
                    kind = Some(detected);
                    continue;
                }
                None => {
                    tracing::debug!("no diagram header, injecting `{DEFAULT_HEADER}`");
                    lines.push(DEFAULT_HEADER.to_string());
                    kind = Some(DiagramKind::Flowchart);
                }
            }
        }
        lines.push(line.to_string());
    }

    let kind = match kind {
        Some(kind) => kind,
        None => {
            lines.push(DEFAULT_HEADER.to_string());
            DiagramKind::Flowchart
        }
    };

    if kind.normalizes_edges() {
        normalize_edges(&mut lines);
    }

    lines.join("\n").trim().to_string()
}

fn normalize_header(line: &str) -> Option<(DiagramKind, String)> {
    let kind = DiagramKind::detect_header(line)?;
    if kind != DiagramKind::Flowchart {
        return Some((kind, line.to_string()));
    }
    let direction = line.split_whitespace().nth(1).unwrap_or("TB");
    Some((kind, format!("graph {direction}")))
}

/// Edge-bearing body lines. The header is always `lines[0]`.
fn body_edges(lines: &[String]) -> impl Iterator<Item = (usize, EdgeParts<'_>)> {
    lines
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, l)| !l.is_empty() && !l.starts_with("%%"))
        .filter_map(|(i, l)| split_edge(l).map(|parts| (i, parts)))
}

fn normalize_edges(lines: &mut [String]) {
    let mut registry = LabelRegistry::new();
    for (_, parts) in body_edges(lines) {
        for operand in [parts.left, parts.right] {
            if let Some(id) = operand_id(operand) {
                registry.reserve(id);
            }
        }
    }

    let rewrites: Vec<(usize, String)> = body_edges(lines)
        .map(|(i, parts)| (i, rewrite_edge(&parts, &mut registry)))
        .collect();
    for (i, line) in rewrites {
        lines[i] = line;
    }
}

#[derive(Debug, Clone, Copy)]
struct EdgeParts<'a> {
    left: &'a str,
    /// `|label|` including both pipes.
    label: Option<&'a str>,
    right: &'a str,
}

fn split_edge(line: &str) -> Option<EdgeParts<'_>> {
    let arrow = line.find(ARROW)?;
    let left = line[..arrow].trim();
    let mut right = line[arrow + ARROW.len()..].trim();
    let mut label = None;
    if let Some(rest) = right.strip_prefix('|') {
        if let Some(end) = rest.find('|') {
            label = Some(&right[..end + 2]);
            right = rest[end + 1..].trim();
        }
    }
    Some(EdgeParts { left, label, right })
}

/// Identifier an operand already names, if it is not free text.
fn operand_id(operand: &str) -> Option<&str> {
    if bare_id_regex().is_match(operand) {
        return Some(operand);
    }
    shaped_id_regex()
        .captures(operand)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn rewrite_edge(parts: &EdgeParts<'_>, registry: &mut LabelRegistry) -> String {
    let left = normalize_operand(parts.left, registry);
    let right = normalize_operand(parts.right, registry);

    let mut out = String::with_capacity(left.len() + right.len() + 8);
    if !left.is_empty() {
        out.push_str(&left);
        out.push(' ');
    }
    out.push_str(ARROW);
    if let Some(label) = parts.label {
        out.push_str(label);
    }
    if !right.is_empty() {
        out.push(' ');
        out.push_str(&right);
    }
    out
}

fn normalize_operand(operand: &str, registry: &mut LabelRegistry) -> String {
    if operand.is_empty() || operand_id(operand).is_some() {
        return operand.to_string();
    }
    let id = registry.resolve(operand);
    format!("{id}[\"{}\"]", escape_label(operand))
}

fn escape_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for ch in label.chars() {
        if matches!(ch, '\\' | '"') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
