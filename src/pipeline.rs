// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generation driver
//!
//! Runs the load → substitute → assemble pipeline once per configured
//! language. Failures are contained at the single-language boundary: a
//! missing or malformed translation document skips that language and the
//! run keeps going. Only the shared template is fatal — without it there is
//! nothing to generate from.

use crate::assemble::{self, SwitcherEntry};
use crate::config::GeneratorConfig;
use crate::flatten::flatten_document;
use crate::meta;
use crate::report;
use crate::substitute::translate_content;
use crate::types::{FlatDictionary, PageFailure, PageRecord, RunSummary, TranslationDocument};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Generate every configured language. Returns the per-language outcomes;
/// the only hard error is a failure to read the shared template.
pub fn run(config: &GeneratorConfig) -> Result<RunSummary> {
    let template = load_template(&config.template_path)?;

    let mut summary = RunSummary::default();

    // Preload every document once: the switcher needs flag and name for all
    // languages, and load errors surface per language below.
    let documents: Vec<(String, Result<TranslationDocument>)> = config
        .languages
        .iter()
        .map(|lang| {
            (
                lang.clone(),
                TranslationDocument::load(&config.translation_path(lang)),
            )
        })
        .collect();

    let baseline = match load_baseline(config) {
        Ok(flat) => flat,
        Err(err) => {
            // Without the reference dictionary no page can be translated.
            // Every language fails individually; the summary still prints.
            for lang in &config.languages {
                report::page_failed(lang, &err);
                summary.failures.push(PageFailure {
                    lang: lang.clone(),
                    error: format!("{err:#}"),
                });
            }
            return Ok(summary);
        }
    };

    let switcher = switcher_entries(&documents);

    for (lang, loaded) in &documents {
        report::page_started(lang);
        let outcome = match loaded {
            Ok(doc) => generate_page(&template, doc, &baseline, &switcher, lang, config),
            Err(err) => Err(anyhow::anyhow!("{err:#}")),
        };
        match outcome {
            Ok(record) => {
                report::page_generated(&record);
                summary.generated.push(record);
            }
            Err(err) => {
                report::page_failed(lang, &err);
                summary.failures.push(PageFailure {
                    lang: lang.clone(),
                    error: format!("{err:#}"),
                });
            }
        }
    }

    Ok(summary)
}

/// Produce one language's page and write it to `<output>/<lang>/index.html`.
fn generate_page(
    template: &str,
    doc: &TranslationDocument,
    baseline: &FlatDictionary,
    switcher: &[SwitcherEntry],
    lang: &str,
    config: &GeneratorConfig,
) -> Result<PageRecord> {
    let target = flatten_document(doc);

    // Structural rewrites first, then the content pass over what remains.
    let mut html = meta::rewrite_meta_tags(template, doc, config)?;
    html = translate_content(&html, baseline, &target);
    html = assemble::localize_asset_paths(&html);
    html = assemble::inject_language_switcher(&html, switcher, lang);
    html = assemble::inject_switch_script(&html);

    let page_dir = config.output_dir.join(lang);
    fs::create_dir_all(&page_dir)
        .with_context(|| format!("creating {}", page_dir.display()))?;
    let output_path = page_dir.join("index.html");
    fs::write(&output_path, &html)
        .with_context(|| format!("writing {}", output_path.display()))?;

    Ok(PageRecord {
        lang: lang.to_string(),
        output_path: output_path.display().to_string(),
        bytes_written: html.len(),
    })
}

/// Read the shared English template. UTF-8 first, with a Windows-1252
/// fallback for templates saved by legacy editors.
fn load_template(path: &Path) -> Result<String> {
    let raw = fs::read(path).with_context(|| format!("reading template {}", path.display()))?;
    match String::from_utf8(raw) {
        Ok(text) => Ok(text),
        Err(err) => {
            let raw = err.into_bytes();
            let (decoded, _, had_errors) = encoding_rs::WINDOWS_1252.decode(&raw);
            if had_errors {
                anyhow::bail!(
                    "template {} is neither UTF-8 nor Windows-1252",
                    path.display()
                );
            }
            Ok(decoded.into_owned())
        }
    }
}

fn load_baseline(config: &GeneratorConfig) -> Result<FlatDictionary> {
    let path = config.translation_path(&config.reference_language);
    let doc = TranslationDocument::load(&path).with_context(|| {
        format!(
            "loading baseline dictionary for '{}'",
            config.reference_language
        )
    })?;
    Ok(flatten_document(&doc))
}

/// Switcher entries for every language whose document loaded. Languages
/// that failed to load are left out instead of poisoning the other pages.
fn switcher_entries(documents: &[(String, Result<TranslationDocument>)]) -> Vec<SwitcherEntry> {
    documents
        .iter()
        .filter_map(|(lang, loaded)| {
            let doc = loaded.as_ref().ok()?;
            Some(SwitcherEntry {
                code: lang.clone(),
                flag: doc.flag().ok()?.to_string(),
                name: doc.lang_name().ok()?.to_string(),
            })
        })
        .collect()
}
