/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Field selection for MLA entries.
//!
//! Input entries (e.g. Zotero exports) carry bookkeeping fields that have no
//! place in a citation, and their key order is arbitrary. Selection keeps only
//! allow-listed fields with a non-empty value and orders them canonically.

use serde_json::{Map, Value};
use tracing::debug;

use super::fields::MlaField;
use crate::value::is_falsy;

/// The recognized, non-empty fields of one entry in canonical order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedFieldSet<'a> {
    fields: Vec<(MlaField, &'a Value)>,
}

impl<'a> OrderedFieldSet<'a> {
    pub fn get(&self, field: MlaField) -> Option<&'a Value> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MlaField, &'a Value)> + '_ {
        self.fields.iter().copied()
    }

    /// The selected fields, in order.
    pub fn fields(&self) -> Vec<MlaField> {
        self.fields.iter().map(|(f, _)| *f).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Select the citation fields of an entry.
///
/// Unknown keys are dropped silently, as are recognized keys whose value is
/// empty (`null`, `""`, `[]`, ...). The result is ordered by [`MlaField`]
/// position regardless of the entry's own key order.
pub fn select_fields(entry: &Map<String, Value>) -> OrderedFieldSet<'_> {
    let mut fields: Vec<(MlaField, &Value)> = entry
        .iter()
        .filter_map(|(key, value)| MlaField::from_key(key).map(|field| (field, value)))
        .filter(|(_, value)| !is_falsy(value))
        .collect();
    fields.sort_by_key(|(field, _)| field.position());

    debug!(
        kept = fields.len(),
        dropped = entry.len() - fields.len(),
        "selected citation fields"
    );

    OrderedFieldSet { fields }
}
