use crate::{Error, Result};
use easydraw_core::NodeShape;
use serde::{Deserialize, Serialize};

/// Spacing and node sizes for the layered flowchart layout. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub rank_sep: i64,
    pub node_sep: i64,
    pub center_x: i64,
    pub margin_top: i64,
    pub process_width: i64,
    pub process_height: i64,
    pub decision_width: i64,
    pub decision_height: i64,
    /// Honor the header direction (`LR`, `BT`, `RL`). Off by default: every flowchart is
    /// laid out top to bottom.
    pub follow_direction: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rank_sep: 120,
            node_sep: 150,
            center_x: 280,
            margin_top: 80,
            process_width: 120,
            process_height: 50,
            decision_width: 110,
            decision_height: 80,
            follow_direction: false,
        }
    }
}

impl LayoutConfig {
    /// Upper bound for every spacing, offset and size.
    pub const MAX_VALUE: i64 = 1_000_000;

    /// Parses and range-checks a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Rejects negative values and values above [`Self::MAX_VALUE`].
    pub fn check(&self) -> Result<()> {
        let fields = [
            ("rankSep", self.rank_sep),
            ("nodeSep", self.node_sep),
            ("centerX", self.center_x),
            ("marginTop", self.margin_top),
            ("processWidth", self.process_width),
            ("processHeight", self.process_height),
            ("decisionWidth", self.decision_width),
            ("decisionHeight", self.decision_height),
        ];
        for (field, value) in fields {
            if !(0..=Self::MAX_VALUE).contains(&value) {
                return Err(Error::ConfigOutOfRange {
                    field,
                    value,
                    max: Self::MAX_VALUE,
                });
            }
        }
        Ok(())
    }

    /// `(width, height)` of a node drawn with `shape`.
    pub fn node_size(&self, shape: NodeShape) -> (i64, i64) {
        match shape {
            NodeShape::Process => (self.process_width, self.process_height),
            NodeShape::Decision => (self.decision_width, self.decision_height),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LayoutOptions {
    pub config: LayoutConfig,
}

impl LayoutOptions {
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }
}
