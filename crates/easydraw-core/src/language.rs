use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramLanguage {
    #[default]
    Mermaid,
    PlantUml,
}

impl DiagramLanguage {
    pub fn code(self) -> &'static str {
        match self {
            Self::Mermaid => "mermaid",
            Self::PlantUml => "plantuml",
        }
    }

    /// Resolves an optional language code. Missing or blank codes mean Mermaid.
    pub fn from_code(code: Option<&str>) -> Result<Self> {
        match code {
            None => Ok(Self::Mermaid),
            Some(code) => code.parse(),
        }
    }
}

impl FromStr for DiagramLanguage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "mermaid" => Ok(Self::Mermaid),
            "plantuml" => Ok(Self::PlantUml),
            _ => Err(Error::UnsupportedLanguage {
                code: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DiagramLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
