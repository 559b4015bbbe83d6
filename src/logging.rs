// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tracing initialization for the command-line tool.
//!
//! Logs go to stderr so stdout stays clean for `--html` and `--json` output.
//! Verbosity follows `RUST_LOG`; the default is `warn`, or `debug` with `-v`.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let default = if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        };
        let filter = EnvFilter::builder()
            .with_default_directive(default.into())
            .from_env_lossy();

        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
        {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
