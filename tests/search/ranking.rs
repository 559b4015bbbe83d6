//! Ranking order, ties, and the result cap.

use crate::common::*;
use docseek::{build_index, search, RESULT_CAP};

#[test]
fn heading_hit_outranks_text_hit() {
    let page = make_page(
        "/docs/auth.html",
        vec![
            make_section("Overview", &["Tokens are rotated daily by the server."]),
            make_section("Tokens", &["Rotation happens on a schedule you set."]),
        ],
    );
    let index = build_index(&page);
    let results = search(&index, "tokens");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].entry.heading, "Tokens");
    assert_eq!(results[0].relevance, 10 + 6);
    assert_eq!(results[1].entry.heading, "Overview");
    assert_eq!(results[1].relevance, 5 + 3);
}

#[test]
fn ties_keep_document_order() {
    let index = build_index(&page_of(&[
        "first mention of caching here",
        "second mention of caching here",
        "third mention of caching here",
    ]));
    let results = search(&index, "caching");
    let ids: Vec<usize> = results.iter().map(|r| r.id()).collect();

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.relevance == results[0].relevance));
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn fewer_matches_than_cap_all_returned() {
    let index = build_index(&page_of(&[
        "webhooks deliver events",
        "webhooks retry on failure",
        "nothing relevant in here",
    ]));
    assert_eq!(search(&index, "webhooks").len(), 2);
}

#[test]
fn cap_is_applied_after_ranking() {
    let mut texts: Vec<String> = (0..RESULT_CAP + 3)
        .map(|i| format!("filler paragraph {} mentions subscriptions", i))
        .collect();
    texts.push("subscription billing explained".to_string());
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();

    let index = build_index(&page_of(&refs));
    let results = search(&index, "subscription");

    assert_eq!(results.len(), RESULT_CAP);
    // Only the last paragraph has "subscription" as a whole word.
    assert_eq!(results[0].entry.text, "subscription billing explained");
    assert_eq!(results[0].relevance, 5 + 3);
    assert!(results[1..].iter().all(|r| r.relevance == 5));
}

#[test]
fn search_is_repeatable() {
    let index = build_index(&broad_page());
    assert_eq!(search(&index, "config"), search(&index, "config"));
}
