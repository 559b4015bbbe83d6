// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary paragraphs, arbitrary query. Search must not panic, must stay
//! under the cap, must rank in order, and must only return entries that
//! literally contain the query.

#![no_main]

use arbitrary::Arbitrary;
use docseek::{build_index, matches, search, Element, Page, RESULT_CAP};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    heading: String,
    paragraphs: Vec<String>,
    query: String,
}

fuzz_target!(|input: Input| {
    let section = input.paragraphs.iter().take(64).fold(
        Element::new("section").child(Element::new("h2").text(&input.heading)),
        |section, text| section.child(Element::new("p").text(text)),
    );
    let index = build_index(&Page::new("/", Element::new("body").child(section)));

    // Cap query length to avoid timeout
    let query: String = input.query.chars().take(200).collect();

    // INVARIANT 1: search() should never panic
    let results = search(&index, &query);

    // INVARIANT 2: Results should be bounded by the cap
    assert!(
        results.len() <= RESULT_CAP,
        "Got {} results, expected at most {}",
        results.len(),
        RESULT_CAP
    );

    // INVARIANT 3: every result is a literal match
    for result in &results {
        assert!(
            matches(&result.entry, &query),
            "{:?} does not contain {:?}",
            result.entry,
            query
        );
    }

    // INVARIANT 4: non-increasing relevance, ties in document order
    for pair in results.windows(2) {
        assert!(pair[0].relevance >= pair[1].relevance);
        if pair[0].relevance == pair[1].relevance {
            assert!(pair[0].id() < pair[1].id());
        }
    }
});
