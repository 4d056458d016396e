//! Shared configuration loader for the xmldoc toolchain.
//!
//! `defaults/xmldoc.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`XmlDocConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use xmldoc_babel::markdown::{ListStyle, MarkdownOptions};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/xmldoc.default.toml");

/// Top-level configuration consumed by xmldoc applications.
#[derive(Debug, Clone, Deserialize)]
pub struct XmlDocConfig {
    pub markdown: MarkdownConfig,
}

/// Mirrors the knobs exposed by the Markdown serializer.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub width: usize,
    pub list_style: ListStyleConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyleConfig {
    Dash,
    Plus,
    Star,
}

impl From<ListStyleConfig> for ListStyle {
    fn from(style: ListStyleConfig) -> Self {
        match style {
            ListStyleConfig::Dash => ListStyle::Dash,
            ListStyleConfig::Plus => ListStyle::Plus,
            ListStyleConfig::Star => ListStyle::Star,
        }
    }
}

impl From<MarkdownConfig> for MarkdownOptions {
    fn from(config: MarkdownConfig) -> Self {
        MarkdownOptions::from(&config)
    }
}

impl From<&MarkdownConfig> for MarkdownOptions {
    fn from(config: &MarkdownConfig) -> Self {
        MarkdownOptions {
            width: config.width,
            list_style: config.list_style.into(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<XmlDocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<XmlDocConfig, ConfigError> {
    Loader::new().build()
}
