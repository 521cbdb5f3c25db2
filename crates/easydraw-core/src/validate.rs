//! Structural checks. Problems are reported as data; nothing here fails.

use crate::detect::{self, DiagramKind, FALLBACK_HEADER_KEYWORDS};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    Empty,
    HeaderMissing,
    BracketMismatch,
    ParenMismatch,
    TypeMismatch,
    BoundaryMissing,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::HeaderMissing => "HEADER_MISSING",
            Self::BracketMismatch => "BRACKET_MISMATCH",
            Self::ParenMismatch => "PAREN_MISMATCH",
            Self::TypeMismatch => "TYPE_MISMATCH",
            Self::BoundaryMissing => "BOUNDARY_MISSING",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramError {
    pub code: ErrorCode,
    pub message: String,
}

impl DiagramError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<DiagramError>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<DiagramError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn has(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }
}

/// Checks Mermaid text. `diagram_type` is the caller's free-text hint, e.g. `flowchart`.
pub fn validate(text: &str, diagram_type: Option<&str>) -> Vec<DiagramError> {
    if text.trim().is_empty() {
        return vec![DiagramError::new(ErrorCode::Empty, "diagram text is empty")];
    }

    let mut errors = Vec::new();
    if !has_header(text) {
        errors.push(DiagramError::new(
            ErrorCode::HeaderMissing,
            "missing diagram header, e.g. `flowchart TD` or `sequenceDiagram`",
        ));
    }

    let (open, close) = count_pair(text, '[', ']');
    if open != close {
        errors.push(DiagramError::new(
            ErrorCode::BracketMismatch,
            format!("unbalanced square brackets: {open} `[` vs {close} `]`"),
        ));
    }

    let (open, close) = count_pair(text, '(', ')');
    if open != close {
        errors.push(DiagramError::new(
            ErrorCode::ParenMismatch,
            format!("unbalanced parentheses: {open} `(` vs {close} `)`"),
        ));
    }

    if let Some(hint) = diagram_type.filter(|h| DiagramKind::is_flow_hint(h)) {
        let lower = text.to_lowercase();
        if !lower.contains("flowchart") && !lower.contains("graph") {
            errors.push(DiagramError::new(
                ErrorCode::TypeMismatch,
                format!("diagram type `{hint}` expects a `flowchart` or `graph` header"),
            ));
        }
    }

    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "mermaid validation failed");
    }
    errors
}

/// Checks PlantUML text for its `@startuml` / `@enduml` boundary.
pub fn validate_plantuml(text: &str) -> Vec<DiagramError> {
    if text.trim().is_empty() {
        return vec![DiagramError::new(ErrorCode::Empty, "diagram text is empty")];
    }
    if text.contains("@startuml") && text.contains("@enduml") {
        return Vec::new();
    }
    vec![DiagramError::new(
        ErrorCode::BoundaryMissing,
        "PlantUML text must be wrapped in `@startuml` ... `@enduml`",
    )]
}

fn has_header(text: &str) -> bool {
    if detect::first_content_line(text)
        .and_then(DiagramKind::detect_header)
        .is_some()
    {
        return true;
    }
    let lower = text.to_lowercase();
    FALLBACK_HEADER_KEYWORDS.iter().any(|k| lower.contains(k))
}

fn count_pair(text: &str, open: char, close: char) -> (usize, usize) {
    text.chars().fold((0, 0), |(o, c), ch| {
        if ch == open {
            (o + 1, c)
        } else if ch == close {
            (o, c + 1)
        } else {
            (o, c)
        }
    })
}
