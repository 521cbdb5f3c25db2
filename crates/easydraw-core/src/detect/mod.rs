use serde::{Deserialize, Serialize};

/// Diagram families recognized by their header keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagramKind {
    Flowchart,
    Sequence,
    State,
    Class,
    Er,
}

#[derive(Debug, Clone, Copy)]
pub struct Detector {
    pub kind: DiagramKind,
    /// Lowercase keyword matched as a prefix of the trimmed, lowercased header line.
    pub keyword: &'static str,
}

pub const DETECTORS: &[Detector] = &[
    Detector {
        kind: DiagramKind::Flowchart,
        keyword: "flowchart",
    },
    Detector {
        kind: DiagramKind::Flowchart,
        keyword: "graph",
    },
    Detector {
        kind: DiagramKind::Sequence,
        keyword: "sequencediagram",
    },
    Detector {
        kind: DiagramKind::State,
        keyword: "statediagram",
    },
    Detector {
        kind: DiagramKind::Class,
        keyword: "classdiagram",
    },
    Detector {
        kind: DiagramKind::Er,
        keyword: "erdiagram",
    },
];

/// Keywords the validator accepts anywhere in the text when the first line has no header.
pub const FALLBACK_HEADER_KEYWORDS: &[&str] = &["flowchart", "sequencediagram", "statediagram"];

impl DiagramKind {
    pub fn detect_header(line: &str) -> Option<Self> {
        let lower = line.trim().to_lowercase();
        DETECTORS
            .iter()
            .find(|d| lower.starts_with(d.keyword))
            .map(|d| d.kind)
    }

    /// Only flowcharts get their edge statements rewritten by the sanitizer.
    pub fn normalizes_edges(self) -> bool {
        matches!(self, Self::Flowchart)
    }

    /// Whether a free-text diagram type hint asks for a flow-style diagram.
    pub fn is_flow_hint(hint: &str) -> bool {
        hint.to_lowercase().contains("flow")
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Sequence => "sequence",
            Self::State => "state",
            Self::Class => "class",
            Self::Er => "er",
        }
    }
}

/// Markdown fence lines and the bare `mermaid` info-string line that models like to wrap
/// their output in.
pub fn is_fence_line(line: &str) -> bool {
    let t = line.trim();
    t.starts_with("```") || t.eq_ignore_ascii_case("mermaid")
}

/// First line that is neither blank nor a fence marker.
pub fn first_content_line(text: &str) -> Option<&str> {
    text.lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !is_fence_line(l))
}

pub fn detect_kind(text: &str) -> Option<DiagramKind> {
    first_content_line(text).and_then(DiagramKind::detect_header)
}
