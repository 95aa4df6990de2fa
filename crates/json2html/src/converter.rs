/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The conversion entry point.
//!
//! A conversion normalizes its input, then dispatches on the value variant:
//! text is (optionally) escaped, objects go through the citation formatter,
//! and everything else is emitted as its JSON text. The citation formatter
//! renders every entry of `items` and writes it to an [`EntrySink`].

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::{CitationStyle, ConvertOptions, WriteErrorPolicy};
use crate::error::{ConvertError, Result, WriteFailure};
use crate::escape::{encode_ascii, escape_html};
use crate::input::RawInput;
use crate::mla::select_fields;
use crate::render::{RenderContext, Templates};
use crate::value::CanonicalValue;
use crate::writer::{sanitize_key, DirectorySink, EntrySink};

/// The result of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Text(String),
    /// ASCII bytes with non-ASCII characters as numeric character references.
    Ascii(Vec<u8>),
}

impl Output {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Output::Text(s) => s.as_bytes(),
            Output::Ascii(b) => b,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Output::Text(s) => s,
            // Only ever built from ASCII.
            Output::Ascii(b) => String::from_utf8_lossy(&b).into_owned(),
        }
    }
}

/// Converts JSON bibliographic data into HTML citations.
#[derive(Debug, Clone)]
pub struct Json2Html {
    templates: Templates,
    options: ConvertOptions,
}

impl Json2Html {
    /// Create a converter with default options.
    pub fn new(templates: Templates) -> Self {
        Self::with_options(templates, ConvertOptions::default())
    }

    pub fn with_options(templates: Templates, options: ConvertOptions) -> Self {
        Self { templates, options }
    }

    /// Create a converter whose templates are loaded from
    /// `options.template_dir`.
    pub fn from_options(options: ConvertOptions) -> Result<Self> {
        let templates = Templates::from_dir(&options.template_dir)?;
        Ok(Self::with_options(templates, options))
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert `input`, writing citation entries below `options.output_dir`.
    pub fn convert(&self, input: impl Into<RawInput>) -> Result<Output> {
        let mut sink = DirectorySink::new(self.options.output_dir.clone());
        self.convert_with_sink(input, &mut sink)
    }

    /// Convert `input`, writing citation entries to `sink`.
    pub fn convert_with_sink<S>(&self, input: impl Into<RawInput>, sink: &mut S) -> Result<Output>
    where
        S: EntrySink + ?Sized,
    {
        let value = input.into().normalize()?;
        let converted = self.convert_node(value, sink)?;

        if self.options.encode {
            return Ok(Output::Ascii(encode_ascii(&converted)));
        }
        Ok(Output::Text(converted))
    }

    /// Render a normalized value.
    pub fn convert_node<S>(&self, value: CanonicalValue, sink: &mut S) -> Result<String>
    where
        S: EntrySink + ?Sized,
    {
        match value {
            CanonicalValue::Text(text) if self.options.escape => Ok(escape_html(&text)),
            CanonicalValue::Text(text) => Ok(text),
            CanonicalValue::Mapping(map) => self.convert_object(&map, sink),
            // Lists and scalars are not rendered as tables.
            CanonicalValue::Other(other) => Ok(other.to_string()),
        }
    }

    fn convert_object<S>(&self, data: &Map<String, Value>, sink: &mut S) -> Result<String>
    where
        S: EntrySink + ?Sized,
    {
        if data.is_empty() {
            return Ok(String::new());
        }

        let style = self.options.citation_style()?;
        debug!(%style, "formatting citations");
        match style {
            CitationStyle::Mla => self.format_mla(data, sink),
        }
    }

    /// Render and write every entry of `items`.
    ///
    /// Returns the rendered entries joined by newlines.
    fn format_mla<S>(&self, data: &Map<String, Value>, sink: &mut S) -> Result<String>
    where
        S: EntrySink + ?Sized,
    {
        let entries = data
            .get("items")
            .ok_or(ConvertError::MissingItems)?
            .as_array()
            .ok_or(ConvertError::ItemsNotAList)?;

        let mut rendered = Vec::with_capacity(entries.len());
        let mut failures = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            let entry = entry
                .as_object()
                .ok_or(ConvertError::EntryNotAnObject { index })?;
            let key = entry
                .get("key")
                .and_then(Value::as_str)
                .ok_or(ConvertError::MissingEntryKey { index })?;
            let id = sanitize_key(key);

            let fields = select_fields(entry);
            debug!(%id, fields = ?fields.fields(), "rendering citation entry");
            let html = self
                .templates
                .render_entry(&RenderContext::from_fields(&fields))?;

            if let Err(error) = sink.write_entry(&id, &html) {
                let path = sink.path_for(&id);
                match self.options.on_write_error {
                    WriteErrorPolicy::Abort => {
                        return Err(ConvertError::Write {
                            path,
                            source: error,
                        });
                    }
                    WriteErrorPolicy::Continue => {
                        warn!(path = %path.display(), %error, "skipping citation entry");
                        failures.push(WriteFailure { id, path, error });
                    }
                }
            }

            rendered.push(html);
        }

        if !failures.is_empty() {
            return Err(ConvertError::Writes(failures));
        }
        Ok(rendered.join("\n"))
    }
}
