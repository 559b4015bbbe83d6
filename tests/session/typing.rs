//! Debounced evaluation of the search input.

use crate::common::*;
use docseek::{Evaluation, DEBOUNCE_DELAY};

#[test]
fn burst_of_keystrokes_evaluates_once() {
    let mut session = session(getting_started_page());

    let first = session.input("c", ms(0));
    assert_eq!(session.poll(ms(100)), None);
    session.input("cl", ms(100));
    assert_eq!(session.poll(ms(250)), None);
    let last = session.input("cli", ms(250));
    assert_ne!(first, last);

    // 300ms after the first keystroke is not enough; the clock restarted.
    assert_eq!(session.poll(ms(300)), None);
    assert_eq!(session.next_deadline(), Some(ms(250) + DEBOUNCE_DELAY));

    let Some(Evaluation::Shown { query, results, .. }) = session.poll(ms(550)) else {
        panic!("expected an evaluation after the quiet period");
    };
    assert_eq!(query, "cli");
    assert_eq!(results.len(), 1);

    assert_eq!(session.poll(ms(10_000)), None, "fires only once");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let mut session = session(getting_started_page());
    let Some(Evaluation::Shown { query, .. }) = type_and_settle(&mut session, "   api key\t", ms(0))
    else {
        panic!("expected results");
    };
    assert_eq!(query, "api key");
    assert_eq!(session.input_value(), "   api key\t");
}

#[test]
fn whitespace_only_input_dismisses() {
    let mut session = session(getting_started_page());
    type_and_settle(&mut session, "client", ms(0));
    assert!(session.overlay_active());

    let evaluation = type_and_settle(&mut session, " x  ", ms(1000));
    assert_eq!(
        evaluation,
        Some(Evaluation::Dismissed {
            query: "x".to_string()
        })
    );
    assert!(!session.overlay_active());
}

#[test]
fn results_container_shows_placeholder_for_no_match() {
    let mut session = session(getting_started_page());
    let Some(Evaluation::Shown { results, .. }) = type_and_settle(&mut session, "xyz", ms(0)) else {
        panic!("a searchable query always renders");
    };
    assert!(results.is_empty());
    assert_eq!(
        session.results_html(),
        "<div class=\"no-results\">No results found</div>"
    );
    assert!(session.overlay_active());
}
