//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docseek::{Element, Page, SearchSession};
use std::time::Duration;

// Re-export canonical test utilities from docseek::testing
pub use docseek::testing::{getting_started_page, make_page, make_section, search_controls};

/// Milliseconds since page load.
pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// A page whose body is just the search controls and one paragraph per text.
pub fn page_of(paragraphs: &[&str]) -> Page {
    make_page("/docs/page.html", vec![paragraphs
        .iter()
        .fold(Element::new("div"), |div, text| div.child(Element::new("p").text(text)))])
}

/// Fifteen sections whose paragraphs all mention "config". The first five
/// also carry it in their (too short to index) headings.
pub fn broad_page() -> Page {
    let sections = (0..15)
        .map(|i| {
            let heading = if i < 5 {
                format!("Config {}", i)
            } else {
                format!("Part {}", i)
            };
            make_section(&heading, &[&format!("Paragraph {} explains some config detail.", i)])
        })
        .collect();
    make_page("/docs/broad.html", sections)
}

/// An attached session. Panics if the page lacks search controls.
pub fn session(page: Page) -> SearchSession {
    SearchSession::attach(page).expect("page has search controls")
}

/// Type `value` at `at`, then poll once the debounce delay has passed.
pub fn type_and_settle(session: &mut SearchSession, value: &str, at: Duration) -> Option<docseek::Evaluation> {
    session.input(value, at);
    session.poll(at + docseek::DEBOUNCE_DELAY)
}
