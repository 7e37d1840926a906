use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Identifies one of the supported Brahmic scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptId {
    Devanagari,
    Kannada,
    Telugu,
}

impl ScriptId {
    /// Every script, in classification priority order.
    pub const ALL: [ScriptId; 3] = [ScriptId::Devanagari, ScriptId::Kannada, ScriptId::Telugu];

    /// Identifier used in host settings and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ScriptId::Devanagari => "devanagari",
            ScriptId::Kannada => "kannada",
            ScriptId::Telugu => "telugu",
        }
    }
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScriptId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ScriptId::ALL
            .into_iter()
            .find(|id| id.name() == lower)
            .ok_or_else(|| ConfigError::UnknownScript(s.to_string()))
    }
}
