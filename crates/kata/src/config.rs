//! Configuration for JSON output and logging.
//!
//! Every field has a default, so a YAML document only needs the keys it
//! changes:
//!
//! ```yaml
//! json:
//!   pretty: true
//!   indent: 4
//! logging:
//!   level: debug
//!   json: true
//! ```

use serde::{Deserialize, Serialize};

use crate::result::{KataError, KataResult};

/// Default indent width for pretty JSON
pub const DEFAULT_INDENT: usize = 2;

/// Default log level directive
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KataConfig {
    /// JSON output style
    pub json: JsonStyle,
    /// Logging setup
    pub logging: LogConfig,
}

impl KataConfig {
    /// Create a default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from YAML text
    pub fn from_yaml(yaml: &str) -> KataResult<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| KataError::Config {
            message: e.to_string(),
        })
    }

    /// Render as YAML text
    pub fn to_yaml(&self) -> KataResult<String> {
        serde_yaml_ng::to_string(self).map_err(|e| KataError::Config {
            message: e.to_string(),
        })
    }

    /// Set the JSON style
    #[must_use]
    pub fn with_json(mut self, json: JsonStyle) -> Self {
        self.json = json;
        self
    }

    /// Set the logging configuration
    #[must_use]
    pub fn with_logging(mut self, logging: LogConfig) -> Self {
        self.logging = logging;
        self
    }
}

/// How JSON text is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonStyle {
    /// Multi-line output
    pub pretty: bool,
    /// Spaces per level when `pretty` is set
    pub indent: usize,
}

impl Default for JsonStyle {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: DEFAULT_INDENT,
        }
    }
}

impl JsonStyle {
    /// Pretty output with the default indent
    #[must_use]
    pub const fn pretty() -> Self {
        Self {
            pretty: true,
            indent: DEFAULT_INDENT,
        }
    }

    /// Set the indent width
    #[must_use]
    pub const fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Logging setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}

impl LogConfig {
    /// Set the level directive
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Toggle JSON output
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}
