//! Overlay lifecycle and the Escape key.

use crate::common::*;
use docseek::{Element, Page, SearchSession};

#[test]
fn attach_requires_input_and_results() {
    let no_controls = Page::new(
        "/",
        Element::new("body").child(Element::new("p").text("Plenty of text but no search box")),
    );
    assert!(SearchSession::attach(no_controls).is_none());

    let results_only = Page::new(
        "/",
        Element::new("body").child(Element::new("div").with_class("search-results")),
    );
    assert!(SearchSession::attach(results_only).is_none());
}

#[test]
fn index_is_built_on_attach() {
    let session = session(broad_page());
    assert_eq!(session.index().len(), 15);
    assert_eq!(session.index().path, "/docs/broad.html");
}

#[test]
fn escape_closes_overlay_and_clears_input() {
    let mut session = session(getting_started_page());
    type_and_settle(&mut session, "client", ms(0));
    assert!(session.overlay_active());

    assert!(session.escape());
    assert!(!session.overlay_active());
    assert_eq!(session.input_value(), "");
}

#[test]
fn escape_without_overlay_does_nothing() {
    let mut session = session(getting_started_page());
    session.input("client", ms(0));
    assert!(!session.escape());
    assert_eq!(session.input_value(), "client");
}

#[test]
fn escape_drops_pending_evaluation() {
    let mut session = session(getting_started_page());
    type_and_settle(&mut session, "client", ms(0));

    session.input("configure", ms(1000));
    assert!(session.escape());
    assert_eq!(session.next_deadline(), None);
    assert_eq!(session.poll(ms(2000)), None);
    assert!(!session.overlay_active());
}
