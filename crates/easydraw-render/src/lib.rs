#![forbid(unsafe_code)]

//! Flowchart layout and draw.io (mxGraph) XML output.

pub mod config;
pub mod drawio;
pub mod flowchart;
pub mod model;

pub use config::{LayoutConfig, LayoutOptions};
pub use drawio::{render_drawio, render_placeholder};
pub use flowchart::{layout_flowchart, layout_model};
pub use model::FlowchartLayout;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("layout config JSON error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("layout config field `{field}` must be between 0 and {max}, got {value}")]
    ConfigOutOfRange {
        field: &'static str,
        value: i64,
        max: i64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
