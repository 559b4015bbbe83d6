// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Four additive signals, no cap. The heading signals weigh double the text
//! ones, so a hit in the section heading pulls an entry ahead of a hit buried
//! in body text.
//!
//! # CONSTANTS
//!
//! | Signal                                     | Points |
//! |--------------------------------------------|--------|
//! | heading contains the whole query           | 10     |
//! | text contains the whole query              | 5      |
//! | each query word, whole-word in text        | 3      |
//! | each query word, whole-word in heading     | 6      |
//!
//! Everything is compared case-folded (see [`crate::text::fold_case`]), the
//! same way the matcher and the highlighter compare. Words are split on
//! whitespace and tested literally (see [`crate::text::contains_word`]).

use crate::text::{contains_word, fold_case};
use crate::types::IndexEntry;

/// Whole query appears in the heading.
pub const HEADING_PHRASE_SCORE: u32 = 10;

/// Whole query appears in the text.
pub const TEXT_PHRASE_SCORE: u32 = 5;

/// Per query word found as a whole word in the text.
pub const TEXT_WORD_SCORE: u32 = 3;

/// Per query word found as a whole word in the heading.
pub const HEADING_WORD_SCORE: u32 = 6;

/// Relevance of one entry for one query.
pub fn relevance(entry: &IndexEntry, query: &str) -> u32 {
    let query = fold_case(query);
    let text = fold_case(&entry.text);
    let heading = fold_case(&entry.heading);

    let mut score = 0;

    if heading.contains(&query) {
        score += HEADING_PHRASE_SCORE;
    }
    if text.contains(&query) {
        score += TEXT_PHRASE_SCORE;
    }

    for word in query.split_whitespace() {
        if contains_word(&text, word) {
            score += TEXT_WORD_SCORE;
        }
        if contains_word(&heading, word) {
            score += HEADING_WORD_SCORE;
        }
    }

    score
}
