#![forbid(unsafe_code)]

//! Canonicalization and structural validation of AI-generated diagram text (headless).
//!
//! - `sanitize`: raw Mermaid text to canonical flowchart syntax with synthesized node ids
//! - `validate`: structural checks reported as data, never as failures
//! - `flowchart`: edge-statement extraction into an insertion-ordered model

pub mod detect;
pub mod error;
pub mod flowchart;
pub mod language;
pub mod sanitize;
pub mod validate;

pub use detect::{Detector, DiagramKind};
pub use error::{Error, Result};
pub use flowchart::{FlowEdge, FlowNode, FlowchartModel, NodeShape, parse_flowchart};
pub use language::DiagramLanguage;
pub use sanitize::{LabelRegistry, sanitize};
pub use validate::{DiagramError, ErrorCode, ValidationReport, validate, validate_plantuml};

use serde::{Deserialize, Serialize};

/// Text ready to hand to a renderer, together with its validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prepared {
    pub language: DiagramLanguage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagram_type: Option<String>,
    pub content: String,
    pub validation: ValidationReport,
}

/// Removes one surrounding Markdown code fence (with its info string), if present.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }
    let mut body = match trimmed.find('\n') {
        Some(idx) if idx > 0 => &trimmed[idx + 1..],
        _ => trimmed,
    };
    if let Some(stripped) = body.strip_suffix("```") {
        body = stripped;
    }
    body.trim()
}

/// Fence stripping, sanitizing (Mermaid only) and validation for one generated diagram.
pub fn prepare(raw: &str, language: DiagramLanguage, diagram_type: Option<&str>) -> Prepared {
    let stripped = strip_code_fence(raw);
    let (content, errors) = match language {
        DiagramLanguage::Mermaid => {
            let content = sanitize(stripped);
            let errors = validate(&content, diagram_type);
            (content, errors)
        }
        DiagramLanguage::PlantUml => {
            let errors = validate_plantuml(stripped);
            (stripped.to_string(), errors)
        }
    };

    tracing::debug!(
        language = language.code(),
        valid = errors.is_empty(),
        "prepared diagram"
    );
    Prepared {
        language,
        diagram_type: diagram_type.map(str::to_string),
        content,
        validation: ValidationReport::from_errors(errors),
    }
}
