// SPDX-License-Identifier: PMPL-1.0-or-later

//! Text substitution engine
//!
//! Rewrites the visible English text of the template buffer into the target
//! language. The buffer is raw HTML and is never parsed: matching is plain
//! string and regex surgery, so text that the formatter wrapped across
//! source lines or split around inline tags needs progressively looser
//! strategies. Each candidate runs through the strategy chain below and
//! stops at the first strategy that claims it; candidates nothing claims
//! stay English.
//!
//! Known limitation: matching is HTML-blind. A candidate whose text also
//! appears in an attribute value or an unrelated element is replaced there
//! too.

use crate::types::FlatDictionary;
use regex::{NoExpand, Regex};

/// Minimum English text length for a substitution candidate. Shorter values
/// are language codes, flag glyphs and similar incidental strings.
pub const MIN_CANDIDATE_CHARS: usize = 5;

/// Explicit line-break marker recognized inside translation values.
pub const LINE_BREAK: &str = "<br />";

/// A colon prefix this short is too ambiguous to replace on its own.
const MIN_PREFIX_CHARS: usize = 3;

/// A colon body this short is skipped rather than risk a bad match.
const MIN_BODY_CHARS: usize = 10;

/// One matching heuristic. Returns the rewritten buffer when the strategy
/// claims the candidate (even if it ended up replacing nothing), `None` to
/// hand the candidate to the next strategy.
type Strategy = fn(&str, &str, &str) -> Option<String>;

/// Ordered from most precise to most permissive.
const STRATEGIES: &[Strategy] = &[
    exact,
    line_break_segments,
    colon_segments,
    whitespace_normalized,
];

/// Replace every substitutable English string in `template` with its
/// translation from `target`.
///
/// `baseline` supplies the strings to search for. Candidates are keys
/// present in both dictionaries whose values are text, differ, and whose
/// English text is longer than [`MIN_CANDIDATE_CHARS`]. Longer English
/// strings are processed first so a short candidate can never clobber the
/// middle of a longer one it is a substring of.
///
/// Candidates no strategy matches are left untranslated; partial output is
/// an accepted outcome, not an error.
pub fn translate_content(
    template: &str,
    baseline: &FlatDictionary,
    target: &FlatDictionary,
) -> String {
    let mut candidates: Vec<(&str, &str, &str)> = baseline
        .iter()
        .filter_map(|(key, value)| {
            let english = value.as_text()?;
            let translated = target.get(key)?.as_text()?;
            (english != translated && english.chars().count() > MIN_CANDIDATE_CHARS)
                .then_some((key.as_str(), english, translated))
        })
        .collect();

    // Longest first; key order breaks ties so runs are deterministic.
    candidates.sort_by(|a, b| {
        b.1.chars()
            .count()
            .cmp(&a.1.chars().count())
            .then_with(|| a.0.cmp(b.0))
    });

    let mut buffer = template.to_string();
    for (_, english, translated) in candidates {
        for strategy in STRATEGIES {
            if let Some(next) = strategy(&buffer, english, translated) {
                buffer = next;
                break;
            }
        }
    }
    buffer
}

/// Strategy 1: the English text appears verbatim. Every occurrence is
/// replaced.
fn exact(buffer: &str, english: &str, translated: &str) -> Option<String> {
    buffer
        .contains(english)
        .then(|| buffer.replace(english, translated))
}

/// Strategy 2: values carrying an explicit `<br />` are split and each
/// segment replaced on its own, since the rendered HTML interleaves markup
/// between the segments. A segment-count mismatch consumes the candidate
/// unchanged; guessing at alignment would mangle the page.
fn line_break_segments(buffer: &str, english: &str, translated: &str) -> Option<String> {
    if !english.contains(LINE_BREAK) {
        return None;
    }
    let english_parts: Vec<&str> = english.split(LINE_BREAK).collect();
    let translated_parts: Vec<&str> = translated.split(LINE_BREAK).collect();
    if english_parts.len() != translated_parts.len() {
        return Some(buffer.to_string());
    }

    let mut result = buffer.to_string();
    for (english_part, translated_part) in english_parts.iter().zip(&translated_parts) {
        let english_part = english_part.trim();
        let translated_part = translated_part.trim();
        if english_part.chars().count() <= MIN_CANDIDATE_CHARS {
            continue;
        }
        if result.contains(english_part) {
            result = result.replace(english_part, translated_part);
        } else if let Some(next) = replace_normalized(&result, english_part, translated_part) {
            result = next;
        }
    }
    Some(result)
}

/// Strategy 3: `"Label: body"` values where the label usually sits in its
/// own inline element (`<strong>Label:</strong> body`). Prefix and body are
/// replaced independently; a translation that lost the separator consumes
/// the candidate unchanged.
fn colon_segments(buffer: &str, english: &str, translated: &str) -> Option<String> {
    let (english_prefix, english_body) = english.split_once(": ")?;
    let Some((translated_prefix, translated_body)) = translated.split_once(": ") else {
        return Some(buffer.to_string());
    };
    if english_prefix.is_empty()
        || english_body.is_empty()
        || translated_prefix.is_empty()
        || translated_body.is_empty()
    {
        return Some(buffer.to_string());
    }

    let mut result = buffer.to_string();
    if english_prefix.chars().count() > MIN_PREFIX_CHARS && result.contains(english_prefix) {
        result = result.replace(english_prefix, translated_prefix);
    }
    if english_body.chars().count() > MIN_BODY_CHARS {
        if result.contains(english_body) {
            result = result.replace(english_body, translated_body);
        } else if let Some(next) = replace_normalized(&result, english_body, translated_body) {
            result = next;
        }
    }
    Some(result)
}

/// Strategy 4: whitespace-normalized match, the catch-all for text the HTML
/// formatter re-wrapped across lines.
fn whitespace_normalized(buffer: &str, english: &str, translated: &str) -> Option<String> {
    replace_normalized(buffer, english, translated)
}

/// Collapse whitespace runs in the English text to single spaces, then match
/// each space against any whitespace run in the buffer. The translation is
/// inserted verbatim ([`NoExpand`] keeps `$` sequences literal). `None` when
/// the pattern matches nothing.
fn replace_normalized(buffer: &str, english: &str, translated: &str) -> Option<String> {
    let normalized = english.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return None;
    }
    let pattern = regex::escape(&normalized).replace(' ', r"\s+");
    let re = Regex::new(&pattern).ok()?;
    re.is_match(buffer)
        .then(|| re.replace_all(buffer, NoExpand(translated)).into_owned())
}
