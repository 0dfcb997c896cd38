// SPDX-License-Identifier: PMPL-1.0-or-later

//! Meta-tag rewriting
//!
//! Fixed set of structural head rewrites keyed by known document fields.
//! Every pattern is attribute-anchored and applied independently; a tag that
//! does not match its expected exact shape is left unchanged.

use crate::config::GeneratorConfig;
use crate::types::TranslationDocument;
use anyhow::Result;
use regex::{NoExpand, Regex};

/// Rewrite the document head for the target language and insert the
/// hreflang alternate block.
pub fn rewrite_meta_tags(
    html: &str,
    doc: &TranslationDocument,
    config: &GeneratorConfig,
) -> Result<String> {
    let lang = doc.lang()?;
    let page_url = config.page_url(lang);

    let mut result = html.to_string();

    result = rewrite(
        &result,
        r#"<html lang="[^"]*">"#,
        &format!(r#"<html lang="{lang}">"#),
    )?;
    result = rewrite(
        &result,
        r"(?s)<title>.*?</title>",
        &format!("<title>{}</title>", doc.meta_field("title")?),
    )?;
    result = rewrite_meta_name(&result, "title", doc.meta_field("title")?)?;
    result = rewrite_meta_name(&result, "description", doc.meta_field("description")?)?;
    result = rewrite_meta_name(&result, "keywords", doc.meta_field("keywords")?)?;
    result = rewrite_meta_name(&result, "language", doc.lang_name()?)?;

    result = rewrite(
        &result,
        r#"<link rel="canonical" href="[^"]*" />"#,
        &format!(r#"<link rel="canonical" href="{page_url}" />"#),
    )?;
    result = rewrite_meta_property(&result, "og:url", &page_url)?;
    result = rewrite_meta_property(&result, "og:title", doc.meta_field("ogTitle")?)?;
    result = rewrite_meta_property(&result, "og:description", doc.meta_field("ogDescription")?)?;
    result = rewrite_meta_property(&result, "og:locale", doc.locale()?)?;

    result = rewrite_meta_property(&result, "twitter:url", &page_url)?;
    result = rewrite_meta_property(&result, "twitter:title", doc.meta_field("twitterTitle")?)?;
    result = rewrite_meta_property(
        &result,
        "twitter:description",
        doc.meta_field("twitterDescription")?,
    )?;

    // AI assistant descriptions
    result = rewrite_meta_name(
        &result,
        "chatgpt-description",
        doc.meta_field("chatgptDescription")?,
    )?;
    result = rewrite_meta_name(
        &result,
        "perplexity-description",
        doc.meta_field("perplexityDescription")?,
    )?;
    result = rewrite_meta_name(
        &result,
        "claude-description",
        doc.meta_field("claudeDescription")?,
    )?;

    insert_hreflang_links(&result, config)
}

fn rewrite(html: &str, pattern: &str, replacement: &str) -> Result<String> {
    let re = Regex::new(pattern)?;
    Ok(re.replace_all(html, NoExpand(replacement)).into_owned())
}

fn rewrite_meta_name(html: &str, name: &str, content: &str) -> Result<String> {
    rewrite(
        html,
        &format!(r#"<meta name="{name}" content="[^"]*" />"#),
        &format!(r#"<meta name="{name}" content="{content}" />"#),
    )
}

fn rewrite_meta_property(html: &str, property: &str, content: &str) -> Result<String> {
    rewrite(
        html,
        &format!(r#"<meta property="{property}" content="[^"]*" />"#),
        &format!(r#"<meta property="{property}" content="{content}" />"#),
    )
}

/// Insert the per-language alternate links right after the viewport tag so
/// they land inside `<head>` without the template carrying a placeholder.
/// Skipped silently when the viewport tag is absent.
fn insert_hreflang_links(html: &str, config: &GeneratorConfig) -> Result<String> {
    let links = hreflang_links(config);
    let re = Regex::new(r#"<meta name="viewport"[^>]*>"#)?;
    Ok(re
        .replace(html, |caps: &regex::Captures<'_>| {
            format!("{}\n\n    <!-- Language Alternates -->\n{links}", &caps[0])
        })
        .into_owned())
}

/// One alternate link per supported language plus the `x-default` fallback
/// pointing at the reference language.
fn hreflang_links(config: &GeneratorConfig) -> String {
    let mut links: Vec<String> = config
        .languages
        .iter()
        .map(|lang| {
            format!(
                r#"    <link rel="alternate" hreflang="{lang}" href="{}" />"#,
                config.page_url(lang)
            )
        })
        .collect();
    links.push(format!(
        r#"    <link rel="alternate" hreflang="x-default" href="{}" />"#,
        config.page_url(&config.reference_language)
    ));
    links.join("\n")
}
