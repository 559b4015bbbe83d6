//! Result markup as it lands in the results container.

use crate::common::*;
use docseek::{build_index, render_results, search, Rendered};

#[test]
fn result_links_back_to_its_anchor() {
    let index = build_index(&getting_started_page());
    let results = search(&index, "api key");
    let html = render_results(&results, "api key").to_html();

    let anchor = results[0].anchor();
    assert_eq!(anchor, format!("section-{}", results[0].id()));
    assert!(html.starts_with("<div class=\"search-result-item\""));
    assert!(html.contains(&format!("scrollToResult('{}')", anchor)));
    assert!(html.contains("<h4>Getting Started</h4>"));
    assert!(html.contains("configure your <mark>API key</mark>."));
    assert!(html.ends_with("...</p></div>"));
}

#[test]
fn native_id_is_preferred_as_anchor() {
    let page = make_page(
        "/docs/ids.html",
        vec![docseek::Element::new("section")
            .child(docseek::Element::new("h2").text("Rate limits"))
            .child(
                docseek::Element::new("p")
                    .with_id("limits")
                    .text("Requests are limited per minute and key."),
            )],
    );
    let index = build_index(&page);
    let results = search(&index, "per minute");

    assert_eq!(results[0].anchor(), "limits");
    assert_eq!(results[0].entry.url, "/docs/ids.html#limits");
}

#[test]
fn long_text_is_cut_to_excerpt() {
    let long = format!("{} needle at the very end", "lorem ipsum ".repeat(20));
    let index = build_index(&page_of(&[&long]));
    let results = search(&index, "needle");
    assert_eq!(results.len(), 1);

    let Rendered::Results(rendered) = render_results(&results, "needle") else {
        panic!("expected results");
    };
    let excerpt: String = rendered[0].excerpt.iter().map(|f| f.as_str()).collect();
    assert_eq!(excerpt.chars().count(), 150 + 3);
    assert!(!excerpt.contains("needle"), "match past the excerpt is not shown");
}

#[test]
fn page_markup_is_escaped() {
    let index = build_index(&page_of(&["Use <script> tags & friends carefully"]));
    let results = search(&index, "<script>");
    let html = render_results(&results, "<script>").to_html();

    assert!(html.contains("Use <mark>&lt;script&gt;</mark> tags &amp; friends"));
    assert!(!html.contains("<script>"));
}
