// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the page search.
//!
//! The browser glue snapshots the document into the page JSON shape, hands it
//! to [`PageSearch::attach`], and forwards events. Every time-dependent method
//! takes an optional timestamp in milliseconds; when omitted, `Date.now()` is
//! used. Results come back as plain JS objects (via `serde-wasm-bindgen`).
//!
//! ```js
//! const search = PageSearch.attach(snapshot);
//! if (search) {
//!   input.addEventListener('input', () => {
//!     search.input(input.value);
//!     setTimeout(() => {
//!       if (search.poll()) results.innerHTML = search.results_html();
//!     }, 300);
//!   });
//! }
//! ```

use crate::page::Page;
use crate::session::SearchSession;
use serde_wasm_bindgen::{from_value, to_value};
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// WASM-accessible search session for one page view.
#[wasm_bindgen]
pub struct PageSearch {
    session: SearchSession,
}

#[wasm_bindgen]
impl PageSearch {
    /// Build a session from a page snapshot. Returns `undefined` when the
    /// page has no search input or results container.
    #[wasm_bindgen]
    pub fn attach(snapshot: JsValue) -> Result<Option<PageSearch>, JsValue> {
        let page: Page = from_value(snapshot).map_err(|e| e.to_string())?;
        Ok(SearchSession::attach(page).map(|session| PageSearch { session }))
    }

    /// Number of indexed entries.
    #[wasm_bindgen]
    pub fn entry_count(&self) -> usize {
        self.session.index().len()
    }

    /// The search input changed.
    #[wasm_bindgen]
    pub fn input(&mut self, value: &str, now_ms: Option<f64>) {
        self.session.input(value, clock(now_ms));
    }

    /// Run the pending evaluation if due. Returns the evaluation object, or
    /// `null` when nothing was due.
    #[wasm_bindgen]
    pub fn poll(&mut self, now_ms: Option<f64>) -> Result<JsValue, JsValue> {
        match self.session.poll(clock(now_ms)) {
            Some(evaluation) => to_value(&evaluation).map_err(|e| e.to_string().into()),
            None => Ok(JsValue::NULL),
        }
    }

    /// Markup for the results container.
    #[wasm_bindgen]
    pub fn results_html(&self) -> String {
        self.session.results_html().to_string()
    }

    #[wasm_bindgen]
    pub fn overlay_active(&self) -> bool {
        self.session.overlay_active()
    }

    #[wasm_bindgen]
    pub fn input_value(&self) -> String {
        self.session.input_value().to_string()
    }

    /// Escape pressed.
    #[wasm_bindgen]
    pub fn escape(&mut self) -> bool {
        self.session.escape()
    }

    /// Backs the `scrollToResult(anchor)` handler in rendered markup. Returns
    /// `{ path, anchor, highlight_until }` or `null` when the target is gone.
    #[wasm_bindgen]
    pub fn scroll_to_result(&mut self, anchor: &str, now_ms: Option<f64>) -> Result<JsValue, JsValue> {
        match self.session.scroll_to_result(anchor, clock(now_ms)) {
            Some(target) => to_value(&target).map_err(|e| e.to_string().into()),
            None => Ok(JsValue::NULL),
        }
    }

    /// Node paths whose highlight just ended.
    #[wasm_bindgen]
    pub fn expire_highlights(&mut self, now_ms: Option<f64>) -> Result<JsValue, JsValue> {
        let expired = self.session.expire_highlights(clock(now_ms));
        to_value(&expired).map_err(|e| e.to_string().into())
    }

    /// Next time (ms) the host should call `poll` or `expire_highlights`.
    #[wasm_bindgen]
    pub fn next_deadline(&self) -> Option<f64> {
        self.session
            .next_deadline()
            .map(|deadline| deadline.as_secs_f64() * 1000.0)
    }
}

fn clock(now_ms: Option<f64>) -> Duration {
    let ms = now_ms.unwrap_or_else(js_sys::Date::now);
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or_default()
}
