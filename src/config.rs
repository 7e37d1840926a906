use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::script::ScriptId;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown script: {0}")]
    UnknownScript(String),
    #[error("unknown output mode: {0}")]
    UnknownMode(String),
    #[error("unknown marker style: {0}")]
    UnknownMarkerStyle(String),
}

/// How a surviving inherent vowel marker is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MarkerStyle {
    /// Subscript `ₐ`, visually distinct from a written vowel.
    #[default]
    Subscript,
    /// A plain `a`.
    Plain,
}

impl FromStr for MarkerStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "subscript" => Ok(MarkerStyle::Subscript),
            "plain" => Ok(MarkerStyle::Plain),
            _ => Err(ConfigError::UnknownMarkerStyle(s.to_string())),
        }
    }
}

/// Caller-side choice of output shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// One transliterated string.
    #[default]
    Flat,
    /// Runs tagged with the script they came from.
    Segmented,
}

impl FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(OutputMode::Flat),
            "segmented" => Ok(OutputMode::Segmented),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// Which scripts are transliterated. Owned by the caller and passed to every call.
///
/// A script is enabled unless it is explicitly set to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    scripts: BTreeMap<ScriptId, bool>,
    marker_style: MarkerStyle,
}

impl EngineConfig {
    /// Parses a host settings object such as `{"devanagari": true, "kannada": false}`.
    ///
    /// `null` counts as absent. Keys must be the exact lowercase script
    /// identifiers; anything else is ignored.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: HashMap<String, Option<bool>> = serde_json::from_str(json)?;
        Ok(EngineConfig::from_settings(raw))
    }

    fn from_settings(raw: HashMap<String, Option<bool>>) -> Self {
        let mut config = EngineConfig::default();
        for (name, flag) in raw {
            match ScriptId::ALL.into_iter().find(|id| id.name() == name) {
                Some(id) => {
                    if let Some(enabled) = flag {
                        config.scripts.insert(id, enabled);
                    }
                }
                None => warn!(script = %name, "ignoring setting for unknown script"),
            }
        }
        config
    }

    /// Serializes the explicit flags back into a host settings object.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(&self.scripts)?)
    }

    pub fn with_marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = style;
        self
    }

    pub fn marker_style(&self) -> MarkerStyle {
        self.marker_style
    }

    pub fn set_marker_style(&mut self, style: MarkerStyle) {
        self.marker_style = style;
    }

    pub fn set_enabled(&mut self, id: ScriptId, enabled: bool) {
        self.scripts.insert(id, enabled);
    }

    #[inline]
    pub fn is_enabled(&self, id: ScriptId) -> bool {
        self.scripts.get(&id) != Some(&false)
    }

    pub fn enabled_scripts(&self) -> impl Iterator<Item = ScriptId> + '_ {
        ScriptId::ALL.into_iter().filter(|&id| self.is_enabled(id))
    }

    #[inline]
    pub fn all_disabled(&self) -> bool {
        ScriptId::ALL.iter().all(|&id| !self.is_enabled(id))
    }

    /// Applies a settings message from the host. The flag set is replaced
    /// wholesale; scripts missing from the message fall back to enabled.
    pub fn apply(&mut self, message: SettingsMessage) {
        match message {
            SettingsMessage::SettingsChanged { settings } => {
                let marker_style = self.marker_style;
                *self = EngineConfig::from_settings(settings).with_marker_style(marker_style);
            }
        }
    }
}

/// Message sent by the settings surface when the user toggles a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SettingsMessage {
    SettingsChanged {
        settings: HashMap<String, Option<bool>>,
    },
}

impl SettingsMessage {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
