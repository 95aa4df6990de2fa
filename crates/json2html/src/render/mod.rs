/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Entry rendering through the `entry.html` template.
//!
//! Templates are loaded once into a [`Templates`] value that the converter
//! owns; there is no process-wide template state. Template files ending in
//! `.html` are autoescaped.

pub mod context;

pub use context::RenderContext;

use std::path::Path;

use tera::Tera;
use tracing::debug;

use crate::error::Result;

/// Logical name of the template every citation entry is rendered with.
pub const ENTRY_TEMPLATE: &str = "entry.html";

const BUILTIN_ENTRY: &str = include_str!("../../templates/entry.html");

/// A loaded set of templates.
#[derive(Debug, Clone)]
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Load every `.html` template below `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let pattern = format!("{}/**/*.html", dir.display());
        let tera = Tera::new(&pattern)?;
        debug!(
            dir = %dir.display(),
            templates = tera.get_template_names().count(),
            "loaded templates"
        );
        Ok(Self { tera })
    }

    /// The bundled MLA entry template.
    pub fn builtin() -> Result<Self> {
        Self::from_raw(ENTRY_TEMPLATE, BUILTIN_ENTRY)
    }

    /// A single template from source text.
    pub fn from_raw(name: &str, source: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(name, source)?;
        Ok(Self { tera })
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render one citation entry.
    pub fn render_entry(&self, context: &RenderContext) -> Result<String> {
        Ok(self.tera.render(ENTRY_TEMPLATE, &context.to_tera())?)
    }
}
