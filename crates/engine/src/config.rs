// Chunk: docs/chunks/engine_config - Explicit engine configuration

//! Engine configuration.
//!
//! All behavior knobs are passed into the controller at construction;
//! nothing is read from ambient global state. The host persists the config
//! wherever it likes (registry, dotfile, settings store); the JSON helpers
//! here only fix the shape, not the location.
//!
//! Unknown fields in stored JSON are ignored and missing fields take their
//! defaults, so configs written by older or newer hosts load cleanly.

use serde::{Deserialize, Serialize};

/// Behavior knobs for the highlight tracking engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Whether occurrence matching distinguishes letter case.
    pub case_sensitive: bool,
    /// Number of frozen highlight slots the controller keeps.
    pub frozen_slots: u8,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            frozen_slots: 3,
        }
    }
}

impl HighlightConfig {
    /// Parses a config from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the config to pretty JSON for the host to store.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
