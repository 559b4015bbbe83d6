//! End-to-end walks through the documented search scenarios.

use crate::common::*;
use docseek::{build_index, render_results, search, Evaluation, Rendered, NO_RESULTS};

#[test]
fn api_key_scores_text_phrase_and_both_words() {
    let index = build_index(&getting_started_page());
    assert_eq!(index.len(), 2, "heading and paragraph both indexed");

    let results = search(&index, "api key");
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].entry.text,
        "Install the client and configure your API key."
    );
    assert_eq!(results[0].entry.heading, "Getting Started");
    assert_eq!(results[0].relevance, 5 + 3 + 3);
}

#[test]
fn unmatched_query_renders_placeholder() {
    let index = build_index(&getting_started_page());
    let results = search(&index, "xyz");
    assert!(results.is_empty());

    let rendered = render_results(&results, "xyz");
    assert_eq!(rendered, Rendered::Empty);
    assert!(rendered.to_html().contains(NO_RESULTS));
}

#[test]
fn single_character_query_dismisses_without_searching() {
    let mut session = session(getting_started_page());
    let evaluation = type_and_settle(&mut session, "a", ms(0));

    assert_eq!(
        evaluation,
        Some(Evaluation::Dismissed {
            query: "a".to_string()
        })
    );
    assert!(!session.overlay_active());
    assert!(session.results_html().is_empty());
}

#[test]
fn broad_query_shows_ten_best_in_document_order() {
    let index = build_index(&broad_page());
    let results = search(&index, "config");
    assert_eq!(results.len(), 10);

    let paragraphs: Vec<usize> = results
        .iter()
        .map(|r| {
            r.entry.text["Paragraph ".len()..]
                .split(' ')
                .next()
                .and_then(|n| n.parse().ok())
                .expect("paragraph number")
        })
        .collect();
    assert_eq!(paragraphs, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    // heading phrase + text phrase + text word + heading word
    assert!(results[..5].iter().all(|r| r.relevance == 10 + 5 + 3 + 6));
    // text phrase + text word
    assert!(results[5..].iter().all(|r| r.relevance == 5 + 3));
}

#[test]
fn dot_in_query_is_literal() {
    let index = build_index(&page_of(&[
        "release a.b ships today",
        "release axb ships later",
    ]));
    let results = search(&index, "a.b");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry.text, "release a.b ships today");
}
