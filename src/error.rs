// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Searching never fails. The only fallible step is getting a page snapshot
//! into memory in the first place.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The snapshot file could not be read.
    #[error("failed to read page snapshot: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot is not valid page JSON.
    #[error("invalid page snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
