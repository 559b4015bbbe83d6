// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page snapshots: the document tree the search reads from.
//!
//! A [`Page`] is a plain tree of elements and text, close enough to a rendered
//! DOM that the usual questions have the usual answers: what is this node's
//! text content, what is its nearest `section`, which element has id `x`.
//! Nodes are addressed by [`NodePath`], the child indices from the root.
//!
//! Snapshots load from JSON. Children are either bare strings (text nodes) or
//! element objects:
//!
//! ```json
//! {
//!   "path": "/docs/install.html",
//!   "root": {
//!     "tag": "body",
//!     "children": [
//!       { "tag": "section", "children": [
//!         { "tag": "h2", "id": "setup", "children": ["Getting Started"] },
//!         { "tag": "p", "children": ["Install the client and configure your API key."] }
//!       ]}
//!     ]
//!   }
//! }
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// =============================================================================
// TREE TYPES
// =============================================================================

/// Child-index path from the page root. The empty path is the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(pub Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        NodePath(Vec::new())
    }

    pub fn child(&self, index: usize) -> Self {
        let mut steps = self.0.clone();
        steps.push(index);
        NodePath(steps)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

/// A node in the page tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(Element),
}

/// An element with its tag, optional id, class list and children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Node::Element(element));
        self
    }

    /// Tag comparison, ASCII case-insensitive like HTML.
    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Non-empty native id, if any.
    pub fn native_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Heading level 1-6, or `None` for anything else.
    pub fn heading_level(&self) -> Option<u8> {
        let bytes = self.tag.as_bytes();
        match bytes {
            [h, d] if h.eq_ignore_ascii_case(&b'h') && (b'1'..=b'6').contains(d) => {
                Some(d - b'0')
            }
            _ => None,
        }
    }

    /// Concatenated text of every descendant text node, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    /// First descendant (self excluded) matching `pred`, in document order.
    pub fn first_descendant(&self, pred: &impl Fn(&Element) -> bool) -> Option<&Element> {
        for child in &self.children {
            if let Node::Element(element) = child {
                if pred(element) {
                    return Some(element);
                }
                if let Some(found) = element.first_descendant(pred) {
                    return Some(found);
                }
            }
        }
        None
    }

    fn child_element(&self, index: usize) -> Option<&Element> {
        match self.children.get(index)? {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

/// One element reached by a document-order walk.
#[derive(Debug, Clone)]
pub struct Visit<'a> {
    pub path: NodePath,
    pub element: &'a Element,
    /// Nearest ancestor-or-self `section` element.
    pub section: Option<&'a Element>,
}

// =============================================================================
// PAGE
// =============================================================================

/// A snapshot of one rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Location path of the page, prefixed to result urls.
    #[serde(default = "default_path")]
    pub path: String,
    pub root: Element,
}

fn default_path() -> String {
    "/".to_string()
}

impl Page {
    pub fn new(path: &str, root: Element) -> Self {
        Page {
            path: path.to_string(),
            root,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Every element in document order (pre-order), root included.
    pub fn walk(&self) -> Vec<Visit<'_>> {
        let mut visits = Vec::new();
        walk_element(&self.root, NodePath::root(), None, &mut visits);
        visits
    }

    /// Resolve a path to an element. Paths that land on text nodes or run
    /// past the tree resolve to nothing.
    pub fn element_at(&self, path: &NodePath) -> Option<&Element> {
        path.0
            .iter()
            .try_fold(&self.root, |element, &index| element.child_element(index))
    }

    /// First element in document order matching `pred`.
    pub fn find(&self, pred: impl Fn(&Element) -> bool) -> Option<(NodePath, &Element)> {
        self.walk()
            .into_iter()
            .find(|visit| pred(visit.element))
            .map(|visit| (visit.path, visit.element))
    }

    pub fn find_by_id(&self, id: &str) -> Option<(NodePath, &Element)> {
        self.find(|element| element.native_id() == Some(id))
    }

    pub fn find_by_class(&self, class: &str) -> Option<(NodePath, &Element)> {
        self.find(|element| element.has_class(class))
    }
}

fn walk_element<'a>(
    element: &'a Element,
    path: NodePath,
    section: Option<&'a Element>,
    visits: &mut Vec<Visit<'a>>,
) {
    let section = if element.is("section") {
        Some(element)
    } else {
        section
    };

    visits.push(Visit {
        path: path.clone(),
        element,
        section,
    });

    for (index, child) in element.children.iter().enumerate() {
        if let Node::Element(child) = child {
            walk_element(child, path.child(index), section, visits);
        }
    }
}
