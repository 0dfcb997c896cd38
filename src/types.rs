// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for polyglot-pages
//!
//! Translation documents are JSON with a handful of required scalar fields
//! (`lang`, `langName`, `flag`, `locale`, `meta.*`) plus arbitrary nested
//! content mirrored across languages under identical key paths.

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Leaf value of a flattened translation document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FlatValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl FlatValue {
    /// Text payload, if this leaf is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FlatValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Single-level mapping from dotted key path (`meta.title`,
/// `faq.3.question`) to leaf value. Lookups are by key; iteration follows
/// sorted key order, which keeps runs deterministic.
pub type FlatDictionary = BTreeMap<String, FlatValue>;

/// One language's parsed translation document.
#[derive(Debug, Clone)]
pub struct TranslationDocument {
    root: serde_json::Value,
}

impl TranslationDocument {
    /// Parse a document from JSON text. The root must be an object.
    pub fn parse(text: &str) -> Result<Self> {
        let root: serde_json::Value = serde_json::from_str(text)?;
        if !root.is_object() {
            anyhow::bail!("translation document root must be an object");
        }
        Ok(Self { root })
    }

    /// Load and parse a document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// The raw document tree.
    pub fn root(&self) -> &serde_json::Value {
        &self.root
    }

    fn required_str(&self, pointer: &str, name: &str) -> Result<&str> {
        self.root
            .pointer(pointer)
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow!("missing required field: {name}"))
    }

    /// ISO language code (`"es"`).
    pub fn lang(&self) -> Result<&str> {
        self.required_str("/lang", "lang")
    }

    /// Human-readable language name (`"Español"`).
    pub fn lang_name(&self) -> Result<&str> {
        self.required_str("/langName", "langName")
    }

    /// Flag glyph shown in the language switcher.
    pub fn flag(&self) -> Result<&str> {
        self.required_str("/flag", "flag")
    }

    /// Locale tag for `og:locale` (`"es_ES"`).
    pub fn locale(&self) -> Result<&str> {
        self.required_str("/locale", "locale")
    }

    /// Required `meta.*` field used by the meta-tag rewriter.
    pub fn meta_field(&self, name: &str) -> Result<&str> {
        let pointer = format!("/meta/{name}");
        self.root
            .pointer(&pointer)
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow!("missing required field: meta.{name}"))
    }
}

/// Record of one successfully generated page.
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    pub lang: String,
    pub output_path: String,
    pub bytes_written: usize,
}

/// Per-language failure, contained at the language boundary.
#[derive(Debug, Clone, Serialize)]
pub struct PageFailure {
    pub lang: String,
    pub error: String,
}

/// Outcome of a full generation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub generated: Vec<PageRecord>,
    pub failures: Vec<PageFailure>,
}

impl RunSummary {
    /// True when every configured language produced a page.
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}
