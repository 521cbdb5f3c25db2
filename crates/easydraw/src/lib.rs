#![forbid(unsafe_code)]

//! `easydraw` turns loosely structured, AI-generated flowchart text into canonical Mermaid
//! and draw.io (mxGraph) XML.
//!
//! # Features
//!
//! - `render`: enable layout + draw.io output (`easydraw::render`)

pub use easydraw_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use easydraw_render::drawio::escape_xml;
    pub use easydraw_render::model::{Bounds, FlowchartLayout, LayoutEdge, LayoutNode};
    pub use easydraw_render::{
        LayoutConfig, LayoutOptions, layout_flowchart, layout_model, render_drawio,
        render_placeholder,
    };

    use easydraw_core::{DiagramLanguage, Prepared};

    #[derive(Debug, thiserror::Error)]
    pub enum ConvertError {
        #[error(transparent)]
        Core(#[from] easydraw_core::Error),
        #[error(transparent)]
        Render(#[from] easydraw_render::Error),
    }

    pub type Result<T> = std::result::Result<T, ConvertError>;

    /// Lays out canonical flowchart text and emits a draw.io document. Text without any
    /// recognizable edge becomes a placeholder document carrying the text itself.
    pub fn convert(canonical: &str, options: &LayoutOptions) -> String {
        match layout_flowchart(canonical, options) {
            Some(layout) => render_drawio(&layout),
            None => {
                tracing::debug!("nothing to lay out, emitting placeholder");
                render_placeholder(canonical)
            }
        }
    }

    /// [`convert`] after running the sanitizer.
    pub fn convert_raw(raw: &str, options: &LayoutOptions) -> String {
        convert(&easydraw_core::sanitize(raw), options)
    }

    pub fn options_from_json(json: &str) -> Result<LayoutOptions> {
        Ok(LayoutOptions::with_config(LayoutConfig::from_json_str(json)?))
    }

    /// A generated diagram after preparation, with its draw.io document when one applies.
    #[derive(Debug, Clone)]
    pub struct Converted {
        pub prepared: Prepared,
        /// Only Mermaid content is converted.
        pub drawio: Option<String>,
    }

    /// Prepares generated text for `language` (`None` or blank means Mermaid) and converts
    /// Mermaid output to draw.io.
    pub fn convert_generated(
        raw: &str,
        language: Option<&str>,
        diagram_type: Option<&str>,
        options: &LayoutOptions,
    ) -> Result<Converted> {
        let language = DiagramLanguage::from_code(language)?;
        let prepared = easydraw_core::prepare(raw, language, diagram_type);
        let drawio = match language {
            DiagramLanguage::Mermaid => Some(convert(&prepared.content, options)),
            DiagramLanguage::PlantUml => None,
        };
        Ok(Converted { prepared, drawio })
    }
}
