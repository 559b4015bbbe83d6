// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docseek command-line interface.
//!
//! Two subcommands: `index` shows what a page snapshot would index, and
//! `search` runs a query against it the way the page's search box would.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docseek",
    about = "In-page search for documentation pages",
    version
)]
pub struct Cli {
    /// Log index and search details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the entries a page snapshot indexes
    Index {
        /// Path to a page snapshot (JSON)
        file: PathBuf,

        /// Print the index as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search a page snapshot and display ranked results
    Search {
        /// Path to a page snapshot (JSON)
        file: PathBuf,

        /// Search query (trimmed; at least 2 characters)
        query: String,

        /// Print the rendered results markup instead of a terminal view
        #[arg(long, conflicts_with = "json")]
        html: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}
