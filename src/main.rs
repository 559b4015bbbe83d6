// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use docseek::{build_index, is_searchable, render_results, search, Page, Rendered, MIN_QUERY_LEN};

mod cli;
use cli::display::{self as ui, Role, BOLD, DIM};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    docseek::logging::init(cli.verbose);

    let outcome = match cli.command {
        Commands::Index { file, json } => run_index(&file, json),
        Commands::Search {
            file,
            query,
            html,
            json,
        } => run_search(&file, &query, html, json),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load_page(file: &Path) -> Result<Page> {
    Page::load(file).with_context(|| format!("Failed to load page snapshot {}", file.display()))
}

fn run_index(file: &Path, json: bool) -> Result<()> {
    let page = load_page(file)?;
    let index = build_index(&page);

    if json {
        println!("{}", serde_json::to_string_pretty(&index)?);
        return Ok(());
    }

    ui::section_top(&format!("INDEX {}", index.path));
    ui::row(&format!(
        " {} entries from {} candidate nodes",
        ui::paint(Role::Good, &[BOLD], &index.len().to_string()),
        index.candidates
    ));
    if !index.is_empty() {
        ui::section_mid();
    }
    for entry in &index.entries {
        let tag = format!("{:<4}", entry.locator.tag);
        let label = ui::truncate(&entry.text, ui::BOX_WIDTH.saturating_sub(30));
        ui::row(&format!(
            " {:>3} {} {} {}",
            entry.id,
            ui::paint(Role::Tag, &[], &tag),
            label,
            ui::anchor_label(&entry.locator.anchor)
        ));
    }
    ui::section_bot();
    Ok(())
}

fn run_search(file: &Path, query: &str, html: bool, json: bool) -> Result<()> {
    let page = load_page(file)?;
    let index = build_index(&page);
    let query = query.trim();

    if !is_searchable(query) {
        tracing::warn!(
            query,
            "query shorter than {} characters, nothing to search",
            MIN_QUERY_LEN
        );
        if json {
            println!("[]");
        }
        return Ok(());
    }

    let results = search(&index, query);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let rendered = render_results(&results, query);
    if html {
        println!("{}", rendered.to_html());
        return Ok(());
    }

    print_results(query, &rendered);
    Ok(())
}

fn print_results(query: &str, rendered: &Rendered) {
    ui::section_top(&format!("SEARCH \"{}\"", query));
    let results = match rendered {
        Rendered::Empty => {
            ui::row(&format!(" {}", ui::paint(Role::Muted, &[DIM], docseek::NO_RESULTS)));
            ui::section_bot();
            return;
        }
        Rendered::Results(results) => results,
    };

    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            ui::section_mid();
        }
        let heading = if result.heading.is_empty() {
            ui::paint(Role::Muted, &[DIM], "(no heading)")
        } else {
            ui::paint(Role::Label, &[BOLD], &result.heading)
        };
        ui::row(&format!(
            " {} {} {}",
            ui::score_value(result.relevance),
            heading,
            ui::anchor_label(&result.target)
        ));

        // Wrap on plain text, then restyle each line's marked runs.
        let plain: String = result.excerpt.iter().map(|f| f.as_str()).collect();
        let width = ui::BOX_WIDTH.saturating_sub(7);
        for line in ui::wrap(&plain, width) {
            let fragments = docseek::highlight(&line, query);
            ui::row(&format!("      {}", ui::fragments(&fragments)));
        }
    }
    ui::section_bot();
}
