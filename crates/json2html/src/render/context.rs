/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::mla::{MlaField, OrderedFieldSet};

/// Template variables for one entry.
///
/// Every template parameter is always present. Fields that were not selected
/// are `null`, which templates can tell apart from empty text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderContext {
    params: IndexMap<&'static str, Value>,
}

impl RenderContext {
    pub fn from_fields(fields: &OrderedFieldSet<'_>) -> Self {
        let mut params: IndexMap<&'static str, Value> = MlaField::ALL
            .into_iter()
            .map(|field| (field.template_param(), Value::Null))
            .collect();
        for (field, value) in fields.iter() {
            params.insert(field.template_param(), value.clone());
        }
        Self { params }
    }

    pub fn get(&self, param: &str) -> Option<&Value> {
        self.params.get(param)
    }

    /// Whether a parameter holds a selected field.
    pub fn is_present(&self, param: &str) -> bool {
        self.get(param).is_some_and(|v| !v.is_null())
    }

    pub fn params(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.params.iter().map(|(k, v)| (*k, v))
    }

    pub(crate) fn to_tera(&self) -> tera::Context {
        let mut context = tera::Context::new();
        for (param, value) in &self.params {
            context.insert(*param, value);
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mla::select_fields;
    use serde_json::json;

    #[test]
    fn test_fields_map_to_template_params() {
        let entry = json!({
            "key": "smith/2021",
            "place": "Boston",
            "date": "2021",
            "accessDate": "2022-01-01",
            "title": "T"
        });
        let map = entry.as_object().unwrap();
        let context = RenderContext::from_fields(&select_fields(map));

        assert_eq!(context.get("entry_id"), Some(&json!("smith/2021")));
        assert_eq!(context.get("physical_location"), Some(&json!("Boston")));
        assert_eq!(context.get("publication_date"), Some(&json!("2021")));
        assert_eq!(context.get("accessed_date"), Some(&json!("2022-01-01")));
        assert_eq!(context.get("place"), None);
        assert!(!context.is_present("doi"));
        assert_eq!(context.get("doi"), Some(&Value::Null));
    }

    #[test]
    fn test_unrecognized_keys_never_reach_context() {
        let entry = json!({"key": "k", "itemType": "book", "abstractNote": "x"});
        let map = entry.as_object().unwrap();
        let context = RenderContext::from_fields(&select_fields(map));

        let names: Vec<_> = context.params().map(|(name, _)| name).collect();
        assert_eq!(names.len(), 10);
        assert!(!names.contains(&"itemType"));
        assert!(!names.contains(&"abstractNote"));
        assert!(context.params().all(|(name, value)| name == "entry_id" || value.is_null()));
    }

    #[test]
    fn test_empty_selection_gives_all_null_context() {
        let context = RenderContext::from_fields(&OrderedFieldSet::default());
        assert!(context.params().all(|(_, value)| value.is_null()));
    }
}
