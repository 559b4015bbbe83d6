// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a page search.
//!
//! An index is a flat list of [`IndexEntry`] values, one per text-bearing node
//! that survived the length filter. Results are entries with a relevance score
//! bolted on, recomputed for every query.
//!
//! # Invariants
//!
//! - **IndexEntry**: `text.chars().count() > MIN_TEXT_LEN`. Short fragments
//!   (button labels, stray whitespace) never make it in.
//!
//! - **SearchIndex**: `entries[i].id < entries[i + 1].id`. Ids are positions among
//!   *all* candidate nodes, so they can skip but never repeat or go backwards.
//!
//! - **Locator**: `anchor` is the node's own id when it has one, otherwise
//!   `section-{id}`. The `url` field always ends in `#{anchor}`.

use crate::page::NodePath;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// =============================================================================
// FIXED LIMITS
// =============================================================================

/// Queries shorter than this (in characters) never run.
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum number of results a search returns.
pub const RESULT_CAP: usize = 10;

/// Node text must be strictly longer than this to be indexed.
pub const MIN_TEXT_LEN: usize = 10;

/// Number of characters of entry text shown in a rendered excerpt.
pub const EXCERPT_LEN: usize = 150;

/// Quiet period after the last keystroke before a query is evaluated.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// How long a scrolled-to node stays highlighted.
pub const HIGHLIGHT_DECAY: Duration = Duration::from_millis(2000);

// =============================================================================
// INDEX TYPES
// =============================================================================

/// Reference back to the node an entry was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator {
    /// Child-index path from the page root.
    pub path: NodePath,
    /// Tag of the originating element, used to detect re-rendered content.
    pub tag: String,
    /// Native element id, or `section-{id}` when the node has none.
    pub anchor: String,
}

/// One indexed content node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Position among all candidate nodes, skipped ones included.
    pub id: usize,
    /// Trimmed text content of the node.
    pub text: String,
    /// Heading of the nearest enclosing section, or empty.
    pub heading: String,
    pub locator: Locator,
    /// `{page path}#{anchor}`
    pub url: String,
}

/// The in-memory index for one page view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndex {
    /// Page path the index was built from.
    pub path: String,
    /// Entries in document order.
    pub entries: Vec<IndexEntry>,
    /// Number of candidate nodes visited, including those too short to index.
    pub candidates: usize,
}

impl SearchIndex {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry whose locator carries this anchor.
    pub fn entry_by_anchor(&self, anchor: &str) -> Option<&IndexEntry> {
        self.entries.iter().find(|e| e.locator.anchor == anchor)
    }
}

/// A matched entry with its query-time score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub entry: IndexEntry,
    pub relevance: u32,
}

impl SearchResult {
    pub fn id(&self) -> usize {
        self.entry.id
    }

    pub fn anchor(&self) -> &str {
        &self.entry.locator.anchor
    }
}
