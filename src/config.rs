// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generator configuration

use std::path::PathBuf;

/// Language codes generated when no explicit list is given.
pub const DEFAULT_LANGUAGES: &[&str] = &["en", "es", "fr", "pt", "ru", "uk", "tr", "de"];

/// Language every other page points at via `hreflang="x-default"`, and the
/// source of the baseline dictionary.
pub const DEFAULT_REFERENCE_LANGUAGE: &str = "en";

/// Canonical site root used in rewritten canonical/og/twitter URLs.
pub const DEFAULT_BASE_URL: &str = "https://hiregenix.app";

/// Everything one generation run needs to know. Built by the CLI and passed
/// down explicitly; nothing in the pipeline reads ambient state.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Languages to generate, in output order.
    pub languages: Vec<String>,
    /// Source language whose dictionary is the substitution baseline.
    pub reference_language: String,
    /// Site root for canonical/og/twitter URL rewrites.
    pub base_url: String,
    /// English template HTML document.
    pub template_path: PathBuf,
    /// Directory holding `<lang>.json` translation documents.
    pub translations_dir: PathBuf,
    /// Directory receiving `<lang>/index.html` outputs.
    pub output_dir: PathBuf,
}

impl GeneratorConfig {
    /// Path of a language's translation document.
    pub fn translation_path(&self, lang: &str) -> PathBuf {
        self.translations_dir.join(format!("{lang}.json"))
    }

    /// Canonical URL of a language's page, with a trailing slash.
    pub fn page_url(&self, lang: &str) -> String {
        format!("{}/{}/", self.base_url.trim_end_matches('/'), lang)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|s| (*s).to_string()).collect(),
            reference_language: DEFAULT_REFERENCE_LANGUAGE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            template_path: PathBuf::from("index.html"),
            translations_dir: PathBuf::from("translations"),
            output_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_normalizes_trailing_slash() {
        let config = GeneratorConfig {
            base_url: "https://example.com/".to_string(),
            ..GeneratorConfig::default()
        };
        assert_eq!(config.page_url("es"), "https://example.com/es/");
    }

    #[test]
    fn translation_path_uses_language_code() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.translation_path("uk"),
            PathBuf::from("translations/uk.json")
        );
    }
}
