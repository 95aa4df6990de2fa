/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Persistence of rendered entries.

use std::fs;
use std::io;
use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::info;

/// Derive an output identifier from an entry key by replacing path
/// separators with underscores.
pub fn sanitize_key(key: &str) -> String {
    key.replace(['/', '\\'], "_")
}

/// Destination for rendered entries, keyed by sanitized identifier.
pub trait EntrySink {
    /// Where the entry with this identifier is stored.
    fn path_for(&self, id: &str) -> PathBuf;

    /// Store one rendered entry, replacing any previous content under `id`.
    fn write_entry(&mut self, id: &str, html: &str) -> io::Result<()>;
}

/// Writes each entry to `<root>/<id>.html`.
///
/// The root directory must already exist.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl EntrySink for DirectorySink {
    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.html"))
    }

    fn write_entry(&mut self, id: &str, html: &str) -> io::Result<()> {
        let path = self.path_for(id);
        fs::write(&path, html)?;
        info!(path = %path.display(), "wrote citation entry");
        Ok(())
    }
}

/// Keeps rendered entries in memory, in write order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: IndexMap<String, String>,
}

impl MemorySink {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntrySink for MemorySink {
    fn path_for(&self, id: &str) -> PathBuf {
        PathBuf::from(format!("{id}.html"))
    }

    fn write_entry(&mut self, id: &str, html: &str) -> io::Result<()> {
        self.entries.insert(id.to_string(), html.to_string());
        Ok(())
    }
}
