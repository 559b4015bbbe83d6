//! Picking a result: scroll target, overlay, and the fading highlight.

use crate::common::*;
use docseek::{Evaluation, NodePath, HIGHLIGHT_DECAY};

#[test]
fn picking_a_rendered_result_scrolls_to_its_node() {
    let mut session = session(getting_started_page());
    let Some(Evaluation::Shown { results, .. }) = type_and_settle(&mut session, "api key", ms(0))
    else {
        panic!("expected results");
    };
    let anchor = results[0].anchor().to_string();

    let target = session
        .scroll_to_result(&anchor, ms(1000))
        .expect("indexed node is still there");
    // body: input, results, overlay, section(h2, p)
    assert_eq!(target.path, NodePath(vec![3, 1]));
    assert_eq!(target.anchor, anchor);
    assert_eq!(target.highlight_until, ms(1000) + HIGHLIGHT_DECAY);
    assert!(!session.overlay_active());
    assert!(session.is_highlighted(&target.path));
}

#[test]
fn highlight_fades_after_two_seconds() {
    let mut session = session(getting_started_page());
    let anchor = session.index().entries[1].locator.anchor.clone();
    let target = session.scroll_to_result(&anchor, ms(0)).expect("target");

    assert_eq!(session.next_deadline(), Some(ms(2000)));
    assert!(session.expire_highlights(ms(1999)).is_empty());
    assert_eq!(session.expire_highlights(ms(2000)), vec![target.path.clone()]);
    assert!(!session.is_highlighted(&target.path));
    assert_eq!(session.next_deadline(), None);
}

#[test]
fn picking_again_restarts_the_highlight() {
    let mut session = session(getting_started_page());
    let anchor = session.index().entries[1].locator.anchor.clone();
    session.scroll_to_result(&anchor, ms(0));
    let again = session.scroll_to_result(&anchor, ms(1500)).expect("target");

    assert!(session.expire_highlights(ms(2000)).is_empty());
    assert!(session.is_highlighted(&again.path));
    assert_eq!(session.expire_highlights(ms(3500)), vec![again.path]);
}

#[test]
fn unknown_anchor_only_closes_overlay() {
    let mut session = session(getting_started_page());
    type_and_settle(&mut session, "client", ms(0));

    assert_eq!(session.scroll_to_result("section-99", ms(500)), None);
    assert!(!session.overlay_active());
    assert_eq!(session.next_deadline(), None);
}
