/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Conversion options.
//!
//! Options can be built in code or read from a TOML file:
//!
//! ```toml
//! escape = true
//! encode = false
//! style = "MLA"
//! template_dir = "templates"
//! output_dir = "content"
//! on_write_error = "continue"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Options for a conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Attributes for generic HTML tables. Not used by the MLA formatter.
    #[serde(default = "default_table_attributes")]
    pub table_attributes: String,

    /// Transcode the output to ASCII with numeric character references.
    #[serde(default)]
    pub encode: bool,

    /// HTML-escape literal text input.
    #[serde(default = "default_true")]
    pub escape: bool,

    /// Citation style name.
    #[serde(default = "default_style")]
    pub style: String,

    /// Directory the entry template is loaded from.
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,

    /// Directory rendered entries are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub on_write_error: WriteErrorPolicy,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            table_attributes: default_table_attributes(),
            encode: false,
            escape: true,
            style: default_style(),
            template_dir: default_template_dir(),
            output_dir: default_output_dir(),
            on_write_error: WriteErrorPolicy::default(),
        }
    }
}

fn default_table_attributes() -> String {
    r#"border="1""#.to_string()
}

fn default_true() -> bool {
    true
}

fn default_style() -> String {
    "MLA".to_string()
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("content")
}

impl ConvertOptions {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let options: ConvertOptions = toml::from_str(&content)?;
        Ok(options)
    }

    /// Look for a project config file in the working directory.
    pub fn load_from_project() -> Result<Option<Self>> {
        let config_paths = [Path::new(".json2html.toml"), Path::new("json2html.toml")];

        for path in &config_paths {
            if path.exists() {
                return Ok(Some(Self::load(path)?));
            }
        }

        Ok(None)
    }

    /// The configured citation style.
    pub fn citation_style(&self) -> Result<CitationStyle> {
        self.style.parse()
    }
}

/// Supported citation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitationStyle {
    Mla,
}

impl FromStr for CitationStyle {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "MLA" => Ok(CitationStyle::Mla),
            other => Err(ConvertError::UnsupportedStyle(other.to_string())),
        }
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CitationStyle::Mla => write!(f, "MLA"),
        }
    }
}

/// What to do when a rendered entry cannot be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteErrorPolicy {
    /// Stop at the first failure.
    #[default]
    Abort,
    /// Write the remaining entries and report all failures at the end.
    Continue,
}
