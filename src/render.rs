// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning ranked results into something a reader can click.
//!
//! Rendering happens in two steps. [`render_results`] produces a structured
//! view (heading plus excerpt fragments, some marked), which the CLI prints
//! with colors and [`Rendered::to_html`] turns into the markup dropped into the
//! results container.
//!
//! Page text goes through [`escape_html`] on the way out. The highlighted
//! query is located on the raw excerpt first and escaped afterwards, so a
//! query like `<b>` marks literal angle brackets instead of injecting a tag.

use crate::text::{find_all_ignore_case, truncate_chars};
use crate::types::{SearchResult, EXCERPT_LEN};
use serde::Serialize;

/// Placeholder shown when a query matches nothing.
pub const NO_RESULTS: &str = "No results found";

/// Appended to every excerpt.
pub const ELLIPSIS: &str = "...";

/// A run of excerpt text, highlighted or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Fragment {
    Plain(String),
    Mark(String),
}

impl Fragment {
    pub fn as_str(&self) -> &str {
        match self {
            Fragment::Plain(s) | Fragment::Mark(s) => s,
        }
    }
}

/// One result as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedResult {
    /// Anchor passed back to `scroll_to_result` on selection.
    pub target: String,
    pub heading: String,
    pub excerpt: Vec<Fragment>,
    pub relevance: u32,
}

/// What the results container shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "results", rename_all = "lowercase")]
pub enum Rendered {
    /// The "no results" placeholder.
    Empty,
    Results(Vec<RenderedResult>),
}

impl Rendered {
    pub fn len(&self) -> usize {
        match self {
            Rendered::Empty => 0,
            Rendered::Results(results) => results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Markup for the results container.
    pub fn to_html(&self) -> String {
        let results = match self {
            Rendered::Empty => return format!("<div class=\"no-results\">{}</div>", NO_RESULTS),
            Rendered::Results(results) => results,
        };

        let mut html = String::new();
        for result in results {
            let excerpt: String = result
                .excerpt
                .iter()
                .map(|fragment| match fragment {
                    Fragment::Plain(s) => escape_html(s),
                    Fragment::Mark(s) => format!("<mark>{}</mark>", escape_html(s)),
                })
                .collect();
            html.push_str(&format!(
                "<div class=\"search-result-item\" onclick=\"scrollToResult('{}')\"><h4>{}</h4><p>{}</p></div>",
                escape_html(&escape_js_string(&result.target)),
                escape_html(&result.heading),
                excerpt
            ));
        }
        html
    }
}

/// First [`EXCERPT_LEN`] characters of the text, then [`ELLIPSIS`].
pub fn excerpt(text: &str) -> String {
    format!("{}{}", truncate_chars(text, EXCERPT_LEN), ELLIPSIS)
}

/// Split `text` into plain and marked runs around every case-insensitive
/// occurrence of `term`.
pub fn highlight(text: &str, term: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut cursor = 0;
    for range in find_all_ignore_case(text, term) {
        if range.start > cursor {
            fragments.push(Fragment::Plain(text[cursor..range.start].to_string()));
        }
        fragments.push(Fragment::Mark(text[range.clone()].to_string()));
        cursor = range.end;
    }
    if cursor < text.len() || fragments.is_empty() {
        fragments.push(Fragment::Plain(text[cursor..].to_string()));
    }
    fragments
}

/// Build the display view for a ranked result list.
pub fn render_results(results: &[SearchResult], query: &str) -> Rendered {
    if results.is_empty() {
        return Rendered::Empty;
    }

    Rendered::Results(
        results
            .iter()
            .map(|result| RenderedResult {
                target: result.anchor().to_string(),
                heading: result.entry.heading.clone(),
                excerpt: highlight(&excerpt(&result.entry.text), query),
                relevance: result.relevance,
            })
            .collect(),
    )
}

/// Escape text for HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for a single-quoted JavaScript string literal.
fn escape_js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}
