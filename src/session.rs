// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search box, wired to a page.
//!
//! A [`SearchSession`] lives for one page view. It finds the search controls,
//! builds the index once, and then reacts to what the host reports: keystrokes,
//! the clock moving on, Escape, a click on a result.
//!
//! ```text
//!  input(value, t) ──▶ Debouncer ──poll(t ≥ due)──▶ search ──▶ render ──▶ results container
//!                                                              │
//!  scroll_to_result(anchor, t) ──▶ Locator ──▶ ScrollTarget    └──▶ overlay on/off
//!                                         └──▶ HighlightDecay ──expire_highlights(t)──▶ off
//! ```
//!
//! A page without a `.search-input` or `.search-results` element gets no
//! session at all, so there is nothing to call and nothing to fail.

use crate::debounce::{Debouncer, Ticket};
use crate::decay::HighlightDecay;
use crate::index::build_index;
use crate::page::{NodePath, Page};
use crate::render::{render_results, Rendered};
use crate::search::{is_searchable, search};
use crate::types::{IndexEntry, SearchIndex, SearchResult, DEBOUNCE_DELAY, HIGHLIGHT_DECAY};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Class of the text input the reader types into.
pub const SEARCH_INPUT_CLASS: &str = "search-input";

/// Class of the container the rendered results go into.
pub const SEARCH_RESULTS_CLASS: &str = "search-results";

/// Class of the optional overlay that is shown while results are up.
pub const SEARCH_OVERLAY_CLASS: &str = "search-overlay";

/// Where the search controls sit in the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub input: NodePath,
    pub results: NodePath,
    pub overlay: Option<NodePath>,
}

impl Controls {
    /// Locate the controls. `None` when either required one is missing.
    pub fn locate(page: &Page) -> Option<Self> {
        let (input, _) = page.find_by_class(SEARCH_INPUT_CLASS)?;
        let (results, _) = page.find_by_class(SEARCH_RESULTS_CLASS)?;
        let overlay = page.find_by_class(SEARCH_OVERLAY_CLASS).map(|(path, _)| path);
        Some(Controls {
            input,
            results,
            overlay,
        })
    }
}

/// Outcome of a debounced evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Evaluation {
    /// The query ran; results were rendered and the overlay opened.
    Shown {
        query: String,
        results: Vec<SearchResult>,
        rendered: Rendered,
    },
    /// The query was too short; the overlay was closed.
    Dismissed { query: String },
}

/// What the host should scroll to after a result is picked.
///
/// Scroll smoothly, with the node centered in the viewport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrollTarget {
    pub path: NodePath,
    pub anchor: String,
    /// When the transient highlight on the node ends.
    pub highlight_until: Duration,
}

/// Search state for one page view.
#[derive(Debug, Clone)]
pub struct SearchSession {
    page: Page,
    index: SearchIndex,
    controls: Controls,
    input: String,
    debouncer: Debouncer<String>,
    overlay_active: bool,
    results_html: String,
    highlights: HighlightDecay,
}

impl SearchSession {
    /// Wire up search for a page. Builds the index once.
    pub fn attach(page: Page) -> Option<Self> {
        let Some(controls) = Controls::locate(&page) else {
            debug!(path = %page.path, "search controls missing; search not activated");
            return None;
        };
        let index = build_index(&page);
        Some(SearchSession {
            page,
            index,
            controls,
            input: String::new(),
            debouncer: Debouncer::new(DEBOUNCE_DELAY),
            overlay_active: false,
            results_html: String::new(),
            highlights: HighlightDecay::new(HIGHLIGHT_DECAY),
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The live page. Changes made here are not reflected in the index, which
    /// stays as built for the rest of the page view.
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Current value of the search input.
    pub fn input_value(&self) -> &str {
        &self.input
    }

    /// Overlay visibility. Always `false` on pages without an overlay.
    pub fn overlay_active(&self) -> bool {
        self.overlay_active
    }

    /// Markup currently in the results container.
    pub fn results_html(&self) -> &str {
        &self.results_html
    }

    pub fn is_highlighted(&self, path: &NodePath) -> bool {
        self.highlights.is_highlighted(path)
    }

    /// The input changed. Evaluation of the trimmed value is deferred by the
    /// debounce delay; any earlier pending evaluation is dropped.
    pub fn input(&mut self, value: &str, now: Duration) -> Ticket {
        self.input = value.to_string();
        self.debouncer.schedule(value.trim().to_string(), now)
    }

    /// Run the pending evaluation if it is due.
    pub fn poll(&mut self, now: Duration) -> Option<Evaluation> {
        let query = self.debouncer.poll(now)?;

        if !is_searchable(&query) {
            self.set_overlay(false);
            return Some(Evaluation::Dismissed { query });
        }

        let results = search(&self.index, &query);
        let rendered = render_results(&results, &query);
        self.results_html = rendered.to_html();
        self.set_overlay(true);

        debug!(query = %query, results = results.len(), "search evaluated");
        Some(Evaluation::Shown {
            query,
            results,
            rendered,
        })
    }

    /// Escape pressed. Closes an open overlay and clears the input; returns
    /// whether anything happened.
    pub fn escape(&mut self) -> bool {
        if !self.overlay_active {
            return false;
        }
        self.set_overlay(false);
        self.input.clear();
        self.debouncer.cancel();
        true
    }

    /// A rendered result was picked.
    ///
    /// The overlay closes either way. If the anchor still leads to its node,
    /// that node is highlighted and returned for scrolling; if the content was
    /// re-rendered out from under the index, nothing else happens.
    pub fn scroll_to_result(&mut self, anchor: &str, now: Duration) -> Option<ScrollTarget> {
        self.set_overlay(false);

        let Some(path) = self.resolve(anchor) else {
            debug!(anchor, "result target no longer in page");
            return None;
        };

        let highlight_until = self.highlights.add(path.clone(), now);
        Some(ScrollTarget {
            path,
            anchor: anchor.to_string(),
            highlight_until,
        })
    }

    /// Turn off highlights whose time is up and return their nodes.
    pub fn expire_highlights(&mut self, now: Duration) -> Vec<NodePath> {
        self.highlights.expire(now)
    }

    /// Earliest moment the host needs to call back (`poll` or
    /// `expire_highlights`), if anything is waiting.
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.debouncer.deadline(), self.highlights.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn set_overlay(&mut self, active: bool) {
        self.overlay_active = active && self.controls.overlay.is_some();
    }

    /// Anchor to node path. Indexed anchors go through their locator and must
    /// still point at the same node; anything else falls back to a plain id
    /// lookup.
    fn resolve(&self, anchor: &str) -> Option<NodePath> {
        if let Some(entry) = self.index.entry_by_anchor(anchor) {
            if self.still_in_place(entry) {
                return Some(entry.locator.path.clone());
            }
        }
        self.page.find_by_id(anchor).map(|(path, _)| path)
    }

    fn still_in_place(&self, entry: &IndexEntry) -> bool {
        self.page
            .element_at(&entry.locator.path)
            .is_some_and(|element| {
                element.is(&entry.locator.tag) && element.text_content().trim() == entry.text
            })
    }
}
