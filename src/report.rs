// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console reporting and run-summary persistence

use crate::types::{PageRecord, RunSummary};
use anyhow::Result;
use chrono::Utc;
use colored::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub fn run_started(language_count: usize) {
    println!("{}", "=== POLYGLOT-PAGES GENERATION ===".bold().cyan());
    println!("Generating {} localized pages...\n", language_count);
}

pub fn page_started(lang: &str) {
    println!("Generating {}...", lang.to_uppercase().bold());
}

pub fn page_generated(record: &PageRecord) {
    println!(
        "  {} {} -> {} ({} bytes)",
        "ok".green().bold(),
        record.lang,
        record.output_path,
        record.bytes_written
    );
}

pub fn page_failed(lang: &str, error: &anyhow::Error) {
    println!("  {} {}: {:#}", "failed".red().bold(), lang, error);
}

/// Closing block: counts plus what every generated page carries.
pub fn print_summary(summary: &RunSummary) {
    println!();
    println!("{}", "SUMMARY".bold().yellow());
    println!(
        "  Pages generated: {}",
        summary.generated.len().to_string().green()
    );

    if !summary.failures.is_empty() {
        println!(
            "  Failures: {}",
            summary.failures.len().to_string().red().bold()
        );
        for failure in &summary.failures {
            println!("    - {}: {}", failure.lang, failure.error);
        }
    }

    if !summary.generated.is_empty() {
        println!();
        println!("  Each generated page includes:");
        println!("    - translated visible content");
        println!("    - localized meta tags (title, description, OG, Twitter)");
        println!("    - AI assistant descriptions in the target language");
        println!("    - hreflang alternates for all languages");
        println!("    - a language switcher");
    }
}

#[derive(Serialize)]
struct PersistedSummary<'a> {
    generated_at: String,
    #[serde(flatten)]
    summary: &'a RunSummary,
}

/// Persist the run summary as pretty JSON, stamped with the UTC time.
pub fn save_summary(summary: &RunSummary, path: &Path) -> Result<()> {
    let persisted = PersistedSummary {
        generated_at: Utc::now().to_rfc3339(),
        summary,
    };
    let json = serde_json::to_string_pretty(&persisted)?;
    fs::write(path, json)?;
    println!("Summary saved to: {}", path.display());
    Ok(())
}
