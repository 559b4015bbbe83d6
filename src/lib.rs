// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-page search for documentation sites.
//!
//! Builds a small index from the text-bearing nodes of the current page,
//! matches queries as literal case-insensitive substrings, ranks matches with
//! a handful of additive signals, and renders a capped, highlighted result
//! list. A [`SearchSession`] ties it to the page's search box: debounced
//! input, overlay, Escape, scroll-to-result with a fading highlight.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   page.rs   │────▶│  index.rs    │────▶│  search.rs  │────▶│  render.rs  │
//! │ (Page, Node │     │ (build_index,│     │  (filter,   │     │ (excerpt,   │
//! │  NodePath)  │     │  IndexEntry) │     │  rank, cap) │     │  highlight) │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!                                                 │
//!                                          ┌─────────────┐
//!                                          │ scoring.rs  │
//!                                          │ (relevance) │
//!                                          └─────────────┘
//!
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │ session.rs: controls, Debouncer (debounce.rs), HighlightDecay (decay.rs) │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use docseek::{build_index, render_results, search, Element, Page};
//!
//! let page = Page::new(
//!     "/docs/start.html",
//!     Element::new("section")
//!         .child(Element::new("h2").text("Getting Started"))
//!         .child(Element::new("p").text("Install the client and configure your API key.")),
//! );
//! let index = build_index(&page);
//!
//! let results = search(&index, "api key");
//! assert_eq!(results[0].relevance, 11);
//!
//! let html = render_results(&results, "api key").to_html();
//! assert!(html.contains("<mark>API key</mark>"));
//! ```

pub mod debounce;
pub mod decay;
pub mod error;
pub mod index;
#[cfg(feature = "cli")]
pub mod logging;
pub mod page;
pub mod render;
pub mod scoring;
pub mod search;
pub mod session;
pub mod testing;
pub mod text;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use debounce::{Debouncer, Ticket};
pub use decay::HighlightDecay;
pub use error::{Error, Result};
pub use index::{build_index, is_candidate, section_heading, DESCRIPTION_CLASSES};
pub use page::{Element, Node, NodePath, Page, Visit};
pub use render::{excerpt, highlight, render_results, Fragment, Rendered, RenderedResult, NO_RESULTS};
pub use scoring::relevance;
pub use search::{is_searchable, matches, search};
pub use session::{Controls, Evaluation, ScrollTarget, SearchSession};
pub use types::{
    IndexEntry, Locator, SearchIndex, SearchResult, DEBOUNCE_DELAY, EXCERPT_LEN, HIGHLIGHT_DECAY,
    MIN_QUERY_LEN, MIN_TEXT_LEN, RESULT_CAP,
};

#[cfg(feature = "wasm")]
pub use wasm::PageSearch;
