// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deferred evaluation with cancel-on-reschedule.
//!
//! The host owns the clock. Every call takes `now` as a [`Duration`] since some
//! fixed origin (page load, `performance.now()`, a test counter), and the
//! debouncer only ever compares those values. Nothing here sleeps or spawns.
//!
//! At most one evaluation is pending. Scheduling a new one replaces it, so a
//! burst of keystrokes fires once, `delay` after the last of them.

use std::time::Duration;

/// Handle to one scheduled evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
struct Pending<T> {
    ticket: Ticket,
    due: Duration,
    value: T,
}

/// A single-slot debounced callback.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    next_ticket: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            next_ticket: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm an evaluation of `value` at `now + delay`, cancelling any pending one.
    /// A deadline past `Duration::MAX` is clamped to it.
    pub fn schedule(&mut self, value: T, now: Duration) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(Pending {
            ticket,
            due: now.saturating_add(self.delay),
            value,
        });
        ticket
    }

    /// Drop the pending evaluation. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Is this ticket still the one waiting to fire?
    pub fn is_pending(&self, ticket: Ticket) -> bool {
        self.pending.as_ref().is_some_and(|p| p.ticket == ticket)
    }

    /// When the pending evaluation is due, if any.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.due <= now => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }
}
