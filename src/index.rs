// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search index construction.
//!
//! One pass over the page in document order. Every candidate node gets a
//! sequence number; the ones with enough text become entries.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **DOCUMENT_ORDER**: entries appear in the order their nodes appear in the page
//! 2. **IDS_INCREASING**: `entries[i].id < entries[i + 1].id`, ids count skipped candidates too
//! 3. **LENGTH_FILTER**: every entry's trimmed text is longer than `MIN_TEXT_LEN` chars
//! 4. **READ_ONLY**: building never touches the page
//!
//! # Candidates
//!
//! Headings `h1`-`h6`, paragraphs, and anything carrying one of
//! [`DESCRIPTION_CLASSES`]. Candidates may nest (a paragraph inside a
//! description block); each is indexed on its own.

use crate::page::{Element, Page, Visit};
use crate::types::{IndexEntry, Locator, SearchIndex, MIN_TEXT_LEN};
use tracing::debug;

/// Class names that mark free-form description blocks as indexable.
pub const DESCRIPTION_CLASSES: &[&str] = &["api-description", "feature-description"];

/// Headings considered when naming a section.
const SECTION_HEADING_MAX_LEVEL: u8 = 3;

/// Is this element one of the nodes the index looks at?
pub fn is_candidate(element: &Element) -> bool {
    element.heading_level().is_some()
        || element.is("p")
        || DESCRIPTION_CLASSES.iter().any(|class| element.has_class(class))
}

/// Heading text of a section: its first `h1`-`h3` descendant, trimmed.
pub fn section_heading(section: &Element) -> String {
    section
        .first_descendant(&|e: &Element| {
            e.heading_level()
                .is_some_and(|level| level <= SECTION_HEADING_MAX_LEVEL)
        })
        .map(|heading| heading.text_content().trim().to_string())
        .unwrap_or_default()
}

/// Build the index for one page view.
pub fn build_index(page: &Page) -> SearchIndex {
    let candidates: Vec<Visit<'_>> = page
        .walk()
        .into_iter()
        .filter(|visit| is_candidate(visit.element))
        .collect();

    let entries: Vec<IndexEntry> = candidates
        .iter()
        .enumerate()
        .filter_map(|(id, visit)| make_entry(page, id, visit))
        .collect();

    debug!(
        path = %page.path,
        candidates = candidates.len(),
        indexed = entries.len(),
        "built page index"
    );

    SearchIndex {
        path: page.path.clone(),
        entries,
        candidates: candidates.len(),
    }
}

fn make_entry(page: &Page, id: usize, visit: &Visit<'_>) -> Option<IndexEntry> {
    let raw = visit.element.text_content();
    let text = raw.trim();
    if text.chars().count() <= MIN_TEXT_LEN {
        return None;
    }

    let heading = visit.section.map(section_heading).unwrap_or_default();
    let anchor = match visit.element.native_id() {
        Some(native) => native.to_string(),
        None => format!("section-{}", id),
    };

    Some(IndexEntry {
        id,
        text: text.to_string(),
        heading,
        url: format!("{}#{}", page.path, anchor),
        locator: Locator {
            path: visit.path.clone(),
            tag: visit.element.tag.clone(),
            anchor,
        },
    })
}
