// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query matching and ranking.
//!
//! Filter, score every match, sort, then cap. Capping last matters: with more
//! than [`RESULT_CAP`] matches, cutting before the sort would drop whatever
//! happened to sit late in the page, however relevant.
//!
//! # INVARIANTS
//!
//! - Results are in non-increasing relevance order.
//! - Equal relevance keeps index (document) order. The sort is stable.
//! - At most [`RESULT_CAP`] results; all of them when fewer match.
//! - Queries shorter than [`MIN_QUERY_LEN`] characters return nothing.
//!
//! The query is used as given. Trimming is the caller's job (the session does it).

use crate::scoring::relevance;
use crate::text::contains_ignore_case;
use crate::types::{IndexEntry, SearchIndex, SearchResult, MIN_QUERY_LEN, RESULT_CAP};
use tracing::trace;

/// Does the entry's text or heading contain `query`, ignoring case?
pub fn matches(entry: &IndexEntry, query: &str) -> bool {
    contains_ignore_case(&entry.text, query) || contains_ignore_case(&entry.heading, query)
}

/// Whether a query is long enough to run at all.
pub fn is_searchable(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_LEN
}

/// Run a query against the index.
pub fn search(index: &SearchIndex, query: &str) -> Vec<SearchResult> {
    if !is_searchable(query) {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = index
        .entries
        .iter()
        .filter(|entry| matches(entry, query))
        .map(|entry| SearchResult {
            entry: entry.clone(),
            relevance: relevance(entry, query),
        })
        .collect();
    let matched = results.len();

    // sort_by is stable: ties keep document order
    results.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    results.truncate(RESULT_CAP);

    trace!(query, matched, returned = results.len(), "search");
    results
}
