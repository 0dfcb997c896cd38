// SPDX-License-Identifier: PMPL-1.0-or-later

//! polyglot-pages: localized static HTML page generation.
//!
//! Generates one fully localized page per supported language from a single
//! English template plus per-language JSON translation dictionaries. There
//! is no templating language and no DOM parsing: visible text is rewritten
//! in place by a chain of best-effort matching heuristics.
//!
//! PIPELINE STAGES:
//! 1. **Flatten**: nested translation documents become dotted-path
//!    dictionaries (`faq.3.question`).
//! 2. **Substitute**: English text found in the raw HTML buffer is replaced
//!    with its translation, longest strings first, falling back from exact
//!    matching to whitespace-tolerant regex matching.
//! 3. **Assemble**: meta tags, hreflang links, asset paths and the language
//!    switcher are rewritten for the target language.

pub mod assemble;
pub mod config;
pub mod discover;
pub mod flatten;
pub mod meta;
pub mod pipeline;
pub mod report;
pub mod substitute;
pub mod types;
