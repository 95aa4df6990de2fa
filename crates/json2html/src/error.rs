/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input text looked like a JSON object but was malformed.
    #[error("malformed JSON object: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("the supplied citation style {0} is not recognized")]
    UnsupportedStyle(String),

    #[error("citation data has no \"items\" key")]
    MissingItems,

    #[error("\"items\" must be a list of citation entries")]
    ItemsNotAList,

    #[error("citation entry {index} is not an object")]
    EntryNotAnObject { index: usize },

    #[error("citation entry {index} has no string \"key\"")]
    MissingEntryKey { index: usize },

    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} citation entries could not be written: {}", .0.len(), join_failures(.0))]
    Writes(Vec<WriteFailure>),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for ConvertError {
    fn from(e: toml::de::Error) -> Self {
        ConvertError::Config(e.to_string())
    }
}

/// An entry that could not be persisted while writing continued.
#[derive(Debug)]
pub struct WriteFailure {
    pub id: String,
    pub path: PathBuf,
    pub error: std::io::Error,
}

impl fmt::Display for WriteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path.display(), self.error)
    }
}

fn join_failures(failures: &[WriteFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ConvertError>;
