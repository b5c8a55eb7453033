//! Configuration management system for SymZip
//!
//! This crate loads SymZip settings from layered sources: built-in defaults, a
//! YAML/TOML/JSON file, and `SYMZIP__*` environment variables, in that order of
//! increasing precedence. The merged result is validated before use.
//!
//! # Examples
//!
//! ```rust
//! use symzip_config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .add_defaults()
//!     .add_source_file("symzip.yaml")
//!     .add_env_prefix("SYMZIP")
//!     .build()
//!     .expect("Failed to load configuration");
//!
//! println!("Default codec: {}", config.codec.default);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};
use symzip_types::{AnalyzerThresholds, CodecKind, WireFormat};

pub mod builder;
pub mod error;
pub mod loader;

pub use builder::ConfigBuilder;
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

/// Main configuration structure for SymZip
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Codec selection
    pub codec: CodecConfig,
    /// Run-length effectiveness thresholds
    pub analyzer: AnalyzerThresholds,
    /// Payload output settings
    pub output: OutputConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Codec selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Codec used when none is given on the command line
    pub default: CodecKind,
    /// Treat input files as UTF-8 text rather than raw bytes
    pub text_mode: bool,
}

/// Payload output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Wire format for written payloads
    pub format: WireFormat,
    /// Indent JSON payloads
    pub pretty_json: bool,
    /// Replace existing output files
    pub overwrite: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: WireFormat::Json,
            pretty_json: false,
            overwrite: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Enable JSON formatting
    pub json_format: bool,
    /// Enable colored output
    pub colored_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: false,
            colored_output: true,
        }
    }
}
