//! Application configuration
//!
//! Settings come from three layers: built-in defaults, an optional TOML
//! file, and command-line flags. Later layers win.

use crate::data::InputPaths;
use crate::engine::{QueryOptions, DEFAULT_COUNTRY};
use crate::error::{ErrorCode, Result, RouteError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional settings read from a TOML file
///
/// ```toml
/// country = "Canada"
/// output_dir = "out"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub country: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RouteError::config_with_code(
                ErrorCode::CONFIG_NOT_FOUND,
                format!("cannot read {}", path.display()),
            )
            .with_source(e)
        })?;
        Self::from_toml_str(&content).map_err(|e| e.with_context(path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            RouteError::config_with_code(ErrorCode::CONFIG_INVALID_TOML, "invalid TOML")
                .with_source(e)
        })
    }
}

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// The three input documents
    pub inputs: InputPaths,
    /// Raw question selector, e.g. `q1`
    pub question: String,
    /// Raw chart selector, `bar` or `pie`
    pub graph_type: String,
    /// Target country of the country-scoped questions
    pub country: String,
    /// Directory receiving the CSV and chart
    pub output_dir: PathBuf,
}

impl AppConfig {
    /// Create a configuration with default country and output directory
    pub fn new(
        verbose: u8,
        inputs: InputPaths,
        question: impl Into<String>,
        graph_type: impl Into<String>,
    ) -> Self {
        Self {
            verbose,
            inputs,
            question: question.into(),
            graph_type: graph_type.into(),
            country: DEFAULT_COUNTRY.to_string(),
            output_dir: PathBuf::from("."),
        }
    }

    /// Apply settings from a configuration file
    pub fn with_file_config(mut self, file: FileConfig) -> Self {
        if let Some(country) = file.country {
            self.country = country;
        }
        if let Some(dir) = file.output_dir {
            self.output_dir = dir;
        }
        self
    }

    /// Override the target country when one is given
    pub fn with_country(mut self, country: Option<String>) -> Self {
        if let Some(country) = country {
            self.country = country;
        }
        self
    }

    /// Override the output directory when one is given
    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.output_dir = dir;
        }
        self
    }

    /// Reject settings no run could use
    pub fn validate(&self) -> Result<()> {
        if self.country.trim().is_empty() {
            return Err(RouteError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "country must not be empty",
            ));
        }
        Ok(())
    }

    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            country: self.country.clone(),
        }
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
