// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the docseek CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `DOCSEEK_THEME` first (for explicit control), then `COLORFGBG` (set by some
//! terminals), then defaults to dark. Respects `NO_COLOR` and non-TTY stdout,
//! so piping the output gives plain text.

use docseek::Fragment;
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// `DOCSEEK_THEME` wins; otherwise the background from `COLORFGBG`
    /// ("fg;bg" or "fg;default;bg"), where 7 and 9-15 are light.
    fn detect() -> Self {
        match std::env::var("DOCSEEK_THEME")
            .map(|v| v.to_ascii_lowercase())
            .as_deref()
        {
            Ok("light" | "l") => return Theme::Light,
            Ok("dark" | "d") => return Theme::Dark,
            _ => {}
        }

        let light_background = std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
            .is_some_and(|bg| bg == 7 || bg >= 9);
        if light_background {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// The current theme (detected once)
pub fn theme() -> Theme {
    *THEME.get_or_init(Theme::detect)
}

// ═══════════════════════════════════════════════════════════════════════════
// ROLES
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const UNDERLINE: &str = "\x1b[4m";

/// What a piece of output is. Each role has one true color per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Box borders and placeholders
    Muted,
    /// Section labels and result headings
    Label,
    /// Element tags in the index listing
    Tag,
    /// `#anchor` targets
    Anchor,
    /// Highlighted query occurrences
    Mark,
    /// Relevance of 16 and up (a heading hit)
    Strong,
    /// Relevance 8-15, and entry counts
    Good,
    /// Relevance 5-7 (a text hit)
    Fair,
}

impl Role {
    /// OneDark on dark terminals, One Light on light ones.
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Role::Muted) => (92, 99, 112),
            (Theme::Dark, Role::Label) => (86, 182, 194),
            (Theme::Dark, Role::Tag | Role::Fair) => (229, 192, 123),
            (Theme::Dark, Role::Anchor) => (97, 175, 239),
            (Theme::Dark, Role::Mark) => (255, 215, 0),
            (Theme::Dark, Role::Strong) => (166, 226, 46),
            (Theme::Dark, Role::Good) => (152, 195, 121),
            (Theme::Light, Role::Muted) => (160, 161, 167),
            (Theme::Light, Role::Label) => (1, 132, 188),
            (Theme::Light, Role::Tag | Role::Fair) => (193, 132, 1),
            (Theme::Light, Role::Anchor) => (64, 120, 242),
            (Theme::Light, Role::Mark) => (152, 104, 1),
            (Theme::Light, Role::Strong) => (68, 140, 39),
            (Theme::Light, Role::Good) => (80, 161, 79),
        }
    }

    fn escape(self, theme: Theme) -> String {
        let (r, g, b) = self.rgb(theme);
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only for a TTY, and never with `NO_COLOR` set
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Color `text` for its role, with optional modifiers
pub fn paint(role: Role, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.concat(), role.escape(theme()), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut plain text to `max` visible characters, ending in `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

/// Break plain text into lines of at most `width` characters, on spaces
/// where possible.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() { 0 } else { 1 } + word.chars().count();
        if !line.is_empty() && line.chars().count() + needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = paint(Role::Muted, &[], "│");
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border, content, " ".repeat(pad), border);
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let colored_label = paint(Role::Label, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        paint(Role::Muted, &[], "┌"),
        label_part,
        paint(Role::Muted, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section divider: ├──────────────────┤
pub fn section_mid() {
    println!("{}", paint(Role::Muted, &[], &format!("├{}┤", "─".repeat(BOX_WIDTH))));
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", paint(Role::Muted, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded relevance score
pub fn score_value(score: u32) -> String {
    let text = format!("{:>4}", score);
    let role = match score {
        16.. => Role::Strong,
        8..=15 => Role::Good,
        5..=7 => Role::Fair,
        _ => Role::Muted,
    };
    paint(role, &[BOLD], &text)
}

/// Excerpt with highlighted runs drawn bold and underlined.
pub fn fragments(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(|fragment| match fragment {
            Fragment::Plain(text) => text.clone(),
            Fragment::Mark(text) => paint(Role::Mark, &[BOLD, UNDERLINE], text),
        })
        .collect()
}

/// Dimmed anchor label: `#section-3`
pub fn anchor_label(anchor: &str) -> String {
    paint(Role::Anchor, &[DIM], &format!("#{}", anchor))
}
