/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! JSON to HTML citation conversion
//!
//! This crate turns a JSON-encoded bibliography (a Zotero-style
//! `{"items": [...]}` export) into MLA-formatted HTML fragments, one per
//! citation entry. Input that is not a JSON object is treated as literal text
//! and optionally HTML-escaped.
//!
//! The pipeline is:
//!
//! 1. [`input`] normalizes the raw input into a [`CanonicalValue`].
//! 2. [`converter`] dispatches on the value variant.
//! 3. [`mla`] selects and orders the citation fields of each entry.
//! 4. [`render`] hands the fields to the `entry.html` template.
//! 5. [`writer`] persists each fragment under its sanitized key.
//!
//! # Example
//!
//! ```rust
//! use json2html::{Json2Html, MemorySink, Templates};
//!
//! let templates = Templates::from_raw("entry.html", "<cite>{{ title }}</cite>").unwrap();
//! let converter = Json2Html::new(templates);
//! let mut sink = MemorySink::default();
//!
//! let json = r#"{"items": [{"key": "kuhn/1962", "title": "Structure", "extra": "ignored"}]}"#;
//! let output = converter.convert_with_sink(json, &mut sink).unwrap();
//!
//! assert_eq!(output.into_string(), "<cite>Structure</cite>");
//! assert_eq!(sink.get("kuhn_1962"), Some("<cite>Structure</cite>"));
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod escape;
pub mod input;
pub mod mla;
pub mod render;
pub mod value;
pub mod writer;

pub use config::{CitationStyle, ConvertOptions, WriteErrorPolicy};
pub use converter::{Json2Html, Output};
pub use error::{ConvertError, Result, WriteFailure};
pub use input::RawInput;
pub use mla::{MlaField, OrderedFieldSet};
pub use render::{RenderContext, Templates, ENTRY_TEMPLATE};
pub use value::CanonicalValue;
pub use writer::{sanitize_key, DirectorySink, EntrySink, MemorySink};
