// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for excerpt highlighting.
//!
//! Case folding can change byte lengths (`İ`, `ẞ`), which is exactly where
//! offset bookkeeping goes wrong. Highlighting must never split a character
//! and must give back the text it was handed.

#![no_main]

use docseek::render::escape_html;
use docseek::{excerpt, highlight, Fragment};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, String)| {
    let (text, term) = data;
    let text = excerpt(&text);

    let fragments = highlight(&text, &term);
    let rejoined: String = fragments.iter().map(Fragment::as_str).collect();
    assert_eq!(rejoined, text);

    for fragment in &fragments {
        assert!(!escape_html(fragment.as_str()).contains('<'));
    }
});
