//! Queries with characters that would mean something to a pattern engine.

use crate::common::*;
use docseek::{build_index, highlight, search, Fragment};

#[test]
fn star_is_not_a_wildcard() {
    let index = build_index(&page_of(&[
        "glob patterns like src/* are expanded",
        "source files under src are compiled",
    ]));
    let results = search(&index, "src/*");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry.text, "glob patterns like src/* are expanded");
}

#[test]
fn unbalanced_paren_matches_literally() {
    let index = build_index(&page_of(&[
        "call client.connect( with options",
        "the client connects automatically",
    ]));
    let results = search(&index, "connect(");
    assert_eq!(results.len(), 1);
    assert!(results[0].entry.text.contains("connect("));
}

#[test]
fn special_characters_highlight_literally() {
    let fragments = highlight("use a.b or axb", "a.b");
    assert_eq!(
        fragments,
        vec![
            Fragment::Plain("use ".to_string()),
            Fragment::Mark("a.b".to_string()),
            Fragment::Plain(" or axb".to_string()),
        ]
    );

    let fragments = highlight("price is $(x)*2", "(x)*");
    assert_eq!(
        fragments,
        vec![
            Fragment::Plain("price is $".to_string()),
            Fragment::Mark("(x)*".to_string()),
            Fragment::Plain("2".to_string()),
        ]
    );
}

#[test]
fn regex_metacharacter_queries_never_fail() {
    let index = build_index(&broad_page());
    for query in ["((", "[a-z", "\\d+", "^$", ".*", "a|b", "?+", "{2}"] {
        let results = search(&index, query);
        assert!(results.is_empty(), "{query:?} should not match anything");
    }
}
