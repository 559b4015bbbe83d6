// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Literal string matching: case-insensitive find and whole-word tests.
//!
//! Queries come straight from a text box, so nothing here ever treats them as
//! patterns. `a.b` finds `a.b` and never `axb`; `(` is just a parenthesis.
//!
//! # Case folding
//!
//! Every case-insensitive comparison goes through [`fold_case`], one char at a
//! time: uppercase, then lowercase. `ß`, `SS` and `ss` all fold to `ss`; `Σ`,
//! `σ` and a final `ς` all fold to `σ`. Because the fold has no context, a
//! string folds to the same thing however it was cased beforehand, and the
//! matcher, the scorer and the highlighter agree on what a match is.
//!
//! # Word boundaries
//!
//! A boundary sits between a word character (`[A-Za-z0-9_]`) and anything else,
//! including the start or end of the string. A word occurrence counts when there
//! is a boundary on both sides of it. That is the classic `\b` semantics, so a
//! word that starts or ends with punctuation needs a word character on the other
//! side of that edge to count.

use std::ops::Range;

/// Word characters for boundary purposes.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Is byte offset `at` (a char boundary) a word boundary in `s`?
pub fn is_boundary(s: &str, at: usize) -> bool {
    let before = s[..at].chars().next_back().is_some_and(is_word_char);
    let after = s[at..].chars().next().is_some_and(is_word_char);
    before != after
}

/// Fold one char for caseless comparison.
fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_uppercase().flat_map(char::to_lowercase)
}

/// Caseless form of a string. See the module docs.
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(fold_char).collect()
}

/// Case-insensitive literal substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(&fold_case(needle))
}

/// Does `word` occur in `haystack` as a whole token?
///
/// Both sides are compared as given; callers fold with [`fold_case`] first
/// when they want case-insensitivity.
pub fn contains_word(haystack: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let mut from = 0;
    while let Some(found) = haystack[from..].find(word) {
        let start = from + found;
        let end = start + word.len();
        if is_boundary(haystack, start) && is_boundary(haystack, end) {
            return true;
        }
        // Step one char so overlapping occurrences are also tried.
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}

/// Case-folded copy of a string that remembers where each byte came from.
struct Folded {
    text: String,
    /// `origin[i]` = byte offset in the source of the char that produced byte `i`.
    origin: Vec<usize>,
}

impl Folded {
    fn new(source: &str) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut origin = Vec::with_capacity(source.len());
        for (offset, c) in source.char_indices() {
            for folded in fold_char(c) {
                text.push(folded);
                origin.extend(std::iter::repeat(offset).take(folded.len_utf8()));
            }
        }
        Folded { text, origin }
    }

    /// Map a byte range of the folded text back onto whole chars of `source`.
    fn source_range(&self, source: &str, folded: Range<usize>) -> Range<usize> {
        let start = self.origin[folded.start];
        let last = self.origin[folded.end - 1];
        let end = last + source[last..].chars().next().map_or(0, char::len_utf8);
        start..end
    }
}

/// Byte ranges in `haystack` of every case-insensitive occurrence of `needle`,
/// scanned left to right without overlap.
pub fn find_all_ignore_case(haystack: &str, needle: &str) -> Vec<Range<usize>> {
    let needle = fold_case(needle);
    if needle.is_empty() {
        return Vec::new();
    }

    let folded = Folded::new(haystack);
    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut from = 0;
    while let Some(found) = folded.text[from..].find(&needle) {
        let start = from + found;
        let end = start + needle.len();
        let range = folded.source_range(haystack, start..end);
        // Expansions (`ß` -> `ss`) can map two folded matches onto one source char.
        if ranges.last().is_none_or(|prev| range.start >= prev.end) {
            ranges.push(range);
        }
        from = end;
    }
    ranges
}

/// First `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}
