// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation document discovery
//!
//! Scans a translations directory for `<lang>.json` documents so site
//! authors can see what would be generated without running the pipeline.

use crate::types::TranslationDocument;
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One discovered translation document.
#[derive(Debug)]
pub struct DiscoveredLanguage {
    pub code: String,
    pub path: PathBuf,
    pub name: Option<String>,
    pub flag: Option<String>,
    /// Set when the document exists but does not parse.
    pub error: Option<String>,
}

/// Find translation documents directly under `dir`, sorted by language
/// code.
pub fn discover_languages(dir: &Path) -> Result<Vec<DiscoveredLanguage>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let code = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };

        let discovered = match TranslationDocument::load(path) {
            Ok(doc) => DiscoveredLanguage {
                code,
                path: path.to_path_buf(),
                name: doc.lang_name().ok().map(str::to_string),
                flag: doc.flag().ok().map(str::to_string),
                error: None,
            },
            Err(err) => DiscoveredLanguage {
                code,
                path: path.to_path_buf(),
                name: None,
                flag: None,
                error: Some(format!("{err:#}")),
            },
        };
        found.push(discovered);
    }

    found.sort_by(|a, b| a.code.cmp(&b.code));
    Ok(found)
}
