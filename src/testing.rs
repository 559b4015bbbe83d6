//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical page fixtures to avoid duplication.

#![doc(hidden)]

use crate::page::{Element, Page};
use crate::session::{SEARCH_INPUT_CLASS, SEARCH_OVERLAY_CLASS, SEARCH_RESULTS_CLASS};

/// The search controls a documentation page carries: input, results, overlay.
pub fn search_controls() -> Vec<Element> {
    vec![
        Element::new("input").with_class(SEARCH_INPUT_CLASS),
        Element::new("div").with_class(SEARCH_RESULTS_CLASS),
        Element::new("div").with_class(SEARCH_OVERLAY_CLASS),
    ]
}

/// A `<section>` with an `h2` heading followed by paragraphs.
pub fn make_section(heading: &str, paragraphs: &[&str]) -> Element {
    paragraphs.iter().fold(
        Element::new("section").child(Element::new("h2").text(heading)),
        |section, text| section.child(Element::new("p").text(text)),
    )
}

/// A page with the search controls followed by the given sections.
pub fn make_page(path: &str, sections: Vec<Element>) -> Page {
    let body = search_controls()
        .into_iter()
        .chain(sections)
        .fold(Element::new("body"), Element::child);
    Page::new(path, body)
}

/// The one-section "Getting Started" page used throughout the docs.
pub fn getting_started_page() -> Page {
    make_page(
        "/docs/start.html",
        vec![make_section(
            "Getting Started",
            &["Install the client and configure your API key."],
        )],
    )
}
