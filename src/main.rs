// SPDX-License-Identifier: PMPL-1.0-or-later

//! polyglot-pages: localized static page generation from JSON translation
//! dictionaries and a single English HTML template.

use anyhow::Result;
use clap::{Parser, Subcommand};
use polyglot_pages::config::{
    GeneratorConfig, DEFAULT_BASE_URL, DEFAULT_LANGUAGES, DEFAULT_REFERENCE_LANGUAGE,
};
use polyglot_pages::discover;
use polyglot_pages::flatten::flatten_document;
use polyglot_pages::pipeline;
use polyglot_pages::report;
use polyglot_pages::types::TranslationDocument;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "polyglot-pages")]
#[command(version = "1.0.0")]
#[command(about = "Generate localized static HTML pages from JSON translation dictionaries")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every language's page from the English template
    Generate {
        /// Directory holding <lang>.json translation documents
        #[arg(short, long, default_value = "translations")]
        translations: PathBuf,

        /// English template HTML document
        #[arg(long, default_value = "index.html")]
        template: PathBuf,

        /// Directory receiving <lang>/index.html outputs
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Site root used in canonical/og/twitter URLs
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Languages to generate (default: the full supported set)
        #[arg(short, long, value_delimiter = ',')]
        langs: Option<Vec<String>>,

        /// Reference language supplying the baseline dictionary
        #[arg(long, default_value = DEFAULT_REFERENCE_LANGUAGE)]
        reference: String,

        /// Write a machine-readable run summary (JSON) to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// List translation documents found in a directory
    Langs {
        /// Directory to scan
        #[arg(value_name = "DIR", default_value = "translations")]
        dir: PathBuf,
    },

    /// Flatten one translation document and print the dotted-path dictionary
    Flatten {
        /// Translation document (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            translations,
            template,
            output,
            base_url,
            langs,
            reference,
            report: report_path,
        } => {
            let config = GeneratorConfig {
                languages: langs.unwrap_or_else(|| {
                    DEFAULT_LANGUAGES.iter().map(|s| (*s).to_string()).collect()
                }),
                reference_language: reference,
                base_url,
                template_path: template,
                translations_dir: translations,
                output_dir: output,
            };

            report::run_started(config.languages.len());
            let summary = pipeline::run(&config)?;
            report::print_summary(&summary);

            if let Some(path) = report_path {
                report::save_summary(&summary, &path)?;
            }
        }

        Commands::Langs { dir } => {
            let discovered = discover::discover_languages(&dir)?;
            if discovered.is_empty() {
                println!("No translation documents found in {}", dir.display());
            }
            for lang in discovered {
                if let Some(err) = lang.error {
                    println!("  {}  (unreadable: {})", lang.code, err);
                } else {
                    println!(
                        "  {}  {} {}",
                        lang.code,
                        lang.flag.unwrap_or_default(),
                        lang.name.unwrap_or_default()
                    );
                }
            }
        }

        Commands::Flatten { file } => {
            let doc = TranslationDocument::load(&file)?;
            let flat = flatten_document(&doc);
            println!("{}", serde_json::to_string_pretty(&flat)?);
        }
    }

    Ok(())
}
