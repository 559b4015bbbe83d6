// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Transient highlights that switch themselves off.

use crate::page::NodePath;
use std::time::Duration;

/// Highlighted nodes and when each highlight ends.
#[derive(Debug, Clone)]
pub struct HighlightDecay {
    lifetime: Duration,
    active: Vec<(NodePath, Duration)>,
}

impl HighlightDecay {
    pub fn new(lifetime: Duration) -> Self {
        HighlightDecay {
            lifetime,
            active: Vec::new(),
        }
    }

    /// Highlight `path` until `now + lifetime` (clamped to `Duration::MAX`)
    /// and return that deadline. Highlighting an already lit node restarts
    /// its clock.
    pub fn add(&mut self, path: NodePath, now: Duration) -> Duration {
        let until = now.saturating_add(self.lifetime);
        match self.active.iter_mut().find(|(p, _)| *p == path) {
            Some(slot) => slot.1 = until,
            None => self.active.push((path, until)),
        }
        until
    }

    pub fn is_highlighted(&self, path: &NodePath) -> bool {
        self.active.iter().any(|(p, _)| p == path)
    }

    /// Remove and return every highlight whose time is up.
    pub fn expire(&mut self, now: Duration) -> Vec<NodePath> {
        let mut expired = Vec::new();
        self.active.retain(|(path, until)| {
            if *until <= now {
                expired.push(path.clone());
                false
            } else {
                true
            }
        });
        expired
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.active.iter().map(|(_, until)| *until).min()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
