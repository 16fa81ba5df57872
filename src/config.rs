//! Configuration for [`ColorConverter`](crate::ColorConverter).
//!
//! The defaults reproduce the documented conversions exactly. Two knobs are
//! exposed for callers that need different behavior at the edges:
//!
//! - [`HuePolicy`]: how `hsl_to_rgb` treats hues outside `[0, 360)`
//! - [`HexCase`]: the letter case of hex strings produced by `rgb_to_hex`
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use hexhsl::{ColorConverter, ConverterConfig};
//! use std::path::Path;
//!
//! // Load from file
//! let config = ConverterConfig::from_json_file(Path::new("converter.json"))?;
//! let converter = ColorConverter::with_config(config);
//!
//! // Or use defaults
//! let converter = ColorConverter::new();
//! # Ok::<(), hexhsl::ColorError>(())
//! ```
//!
//! Missing fields fall back to their defaults, so `{}` is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ColorError, Result};

/// Complete converter configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Hue handling in `hsl_to_rgb`
    #[serde(default)]
    pub hue_policy: HuePolicy,

    /// Case of generated hex digits
    #[serde(default)]
    pub hex_case: HexCase,
}

/// How `hsl_to_rgb` selects a hue sector for hues outside `[0, 360)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HuePolicy {
    /// Wrap the hue onto the circle first, so 360 is red and -120 is blue
    #[default]
    Wrap,

    /// Leave the hue as given. A hue outside `[0, 360)` matches no sector
    /// and the result is the gray at the color's lightness offset.
    Strict,
}

/// Letter case of hex digits produced by `rgb_to_hex`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HexCase {
    /// `#3366cc`
    #[default]
    Lower,

    /// `#3366CC`
    Upper,
}

impl ConverterConfig {
    /// Default configuration, usable in const contexts
    pub const fn new() -> Self {
        Self {
            hue_policy: HuePolicy::Wrap,
            hex_case: HexCase::Lower,
        }
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ColorError::config("Invalid converter config", e))
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ColorError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded converter config");
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ColorError::config("Failed to serialize converter config", e))?;
        std::fs::write(path, json).map_err(|e| {
            ColorError::config(format!("Failed to write {}", path.display()), e)
        })?;
        tracing::debug!(path = %path.display(), "saved converter config");
        Ok(())
    }
}
