// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dictionary flattening
//!
//! Converts a nested translation document into a single-level mapping from
//! dotted path to leaf value. List elements are keyed by zero-based index
//! (`faq.3.question`), matching the paths authors see in the JSON files.

use crate::types::{FlatDictionary, FlatValue, TranslationDocument};
use serde_json::Value;

/// Flatten a whole translation document.
pub fn flatten_document(doc: &TranslationDocument) -> FlatDictionary {
    let mut flat = FlatDictionary::new();
    flatten_value(doc.root(), "", &mut flat);
    flat
}

fn flatten_value(value: &Value, prefix: &str, flat: &mut FlatDictionary) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_value(child, &join(prefix, key), flat);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_value(child, &join(prefix, &index.to_string()), flat);
            }
        }
        Value::String(s) => {
            flat.insert(prefix.to_string(), FlatValue::Text(s.clone()));
        }
        Value::Number(n) => {
            flat.insert(prefix.to_string(), FlatValue::Number(n.clone()));
        }
        Value::Bool(b) => {
            flat.insert(prefix.to_string(), FlatValue::Bool(*b));
        }
        // Nulls carry no translatable content.
        Value::Null => {}
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}
