// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for the settee CLI.
//!
//! Result tables, score coloring, keyword listings. Colors follow the
//! terminal's theme: OneDark on dark backgrounds, One Light on light ones.
//! `NO_COLOR` or a non-TTY stdout turns all styling off, so piping into
//! `grep` or a file gives plain text.
//!
//! # Theme detection order
//!
//! 1. `SETTEE_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark

use settee::{FurnitureCategory, KeywordCategory, KeywordEntry, KeywordPayload, RankedItem, ScoreBreakdown};
use std::sync::OnceLock;

/// Inner width of a box, between the two border characters.
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SETTEE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": background 7 or 9..=15 is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// OneDark
mod dark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

/// One Light
mod light {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            match theme() {
                Theme::Dark => rgb(dark::$name),
                Theme::Light => rgb(light::$name),
            }
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// STYLING
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// `text` in `color_fn`'s color plus modifiers, or plain when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length as seen on screen, skipping ANSI escapes.
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

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut `s` to `max` visible chars with a trailing ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = themed(GRAY, &[], "│");
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{} {}{}{}", border, content, " ".repeat(pad), border);
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Score colored by which signals it must contain: 100+ means a name hit.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>7.1}", score);
    let color: fn() -> String = if score >= 100.0 {
        BRIGHT_GREEN
    } else if score >= 50.0 {
        GREEN
    } else if score >= 15.0 {
        YELLOW
    } else {
        GRAY
    };
    themed(color, &[], &text)
}

pub fn category_label(category: FurnitureCategory) -> String {
    let color: fn() -> String = match category {
        FurnitureCategory::Seating | FurnitureCategory::Bedroom => BLUE,
        FurnitureCategory::Tables | FurnitureCategory::Kitchen => MAGENTA,
        FurnitureCategory::Storage => YELLOW,
        FurnitureCategory::Lighting => GREEN,
        _ => GRAY,
    };
    themed(color, &[], &pad_right(category.as_str(), 13))
}

pub fn price(value: f64) -> String {
    format!("${:>9.2}", value)
}

pub fn availability(is_available: bool) -> String {
    if is_available {
        themed(GREEN, &[], "●")
    } else {
        themed(RED, &[], "○")
    }
}

/// One result line: rank, score, name, category, price, availability.
pub fn result_line(rank: usize, ranked: &RankedItem) -> String {
    let item = &ranked.item;
    format!(
        "{:>2}. {} {} {} {} {}",
        rank,
        score_value(ranked.score),
        pad_right(&themed(CYAN, &[BOLD], &truncate(&item.display_name, 24)), 24),
        category_label(item.category),
        price(item.price),
        availability(item.is_available)
    )
}

/// Signals that fired, as `name +weight` pairs.
pub fn signal_line(breakdown: &ScoreBreakdown) -> String {
    breakdown
        .fired()
        .iter()
        .map(|(name, value)| format!("{} +{:.1}", name, value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Keyword entry for the taxonomy listing: `term (syn, syn) → tags | size`.
pub fn keyword_line(entry: &KeywordEntry) -> String {
    let mut line = themed(CYAN, &[BOLD], &entry.primary_term);
    if !entry.synonyms.is_empty() {
        line.push_str(&themed(GRAY, &[], &format!(" ({})", entry.synonyms.join(", "))));
    }
    match &entry.payload {
        KeywordPayload::Size {
            approximate_size,
            tolerance,
        } => {
            let [x, y, z] = approximate_size.0;
            line.push_str(&format!(" ≈ {}×{}×{} ±{}", x, y, z, tolerance));
        }
        payload if !payload.related_tags().is_empty() => {
            line.push_str(&format!(" → {}", payload.related_tags().join(", ")));
        }
        _ => {}
    }
    line
}

pub fn keyword_section_label(category: KeywordCategory) -> String {
    format!("{}S", category.as_str().to_uppercase())
}
