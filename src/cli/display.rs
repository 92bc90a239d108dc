// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for rankings.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `RESRANK_THEME` first, then `COLORFGBG`, then falls back to dark. Colors
//! are dropped entirely when stdout is not a TTY or `NO_COLOR` is set, so
//! piping a ranking into a file gives plain text.
//!
//! Everything that builds a line returns a `String`; only the `print_*`
//! functions write to stdout.

use std::sync::OnceLock;

use resrank::{KeywordHit, RankingResult, RoleProfile, ScoredDocument};

/// Width between the box borders.
pub const BOX_WIDTH: usize = 72;

/// Columns reserved for the document name in a ranking row.
const NAME_WIDTH: usize = 48;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("RESRANK_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light.
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a theme color plus modifiers, or return plain text.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, skipping ANSI escape sequences.
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

/// Cut `name` to at most `max_chars` characters, ending in "..." when cut.
pub fn truncate_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let head: String = name.chars().take(keep).collect();
    format!("{}...", head)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// `│ content          │`
pub fn row(content: &str) -> String {
    let border = themed(GRAY, &[], "│");
    format!("{}{}{}", border, pad_right(content, BOX_WIDTH), border)
}

/// `┌─ LABEL ──────────┐`
pub fn section_top(label: &str) -> String {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!(
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    )
}

/// `└──────────────────┘`
pub fn section_bot() -> String {
    themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH)))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Score as a percentage with one decimal, colored by band.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>6.1}%", score);
    let color: fn() -> String = if score >= 75.0 {
        BRIGHT_GREEN
    } else if score >= 40.0 {
        GREEN
    } else if score >= 15.0 {
        YELLOW
    } else if score > 0.0 {
        RED
    } else {
        GRAY
    };
    themed(color, &[BOLD], &text)
}

/// One table line: rank, name, score.
pub fn ranking_row(rank: usize, doc: &ScoredDocument) -> String {
    let rank = themed(GRAY, &[], &format!("{:>3}.", rank));
    let name = pad_right(&truncate_name(&doc.name, NAME_WIDTH), NAME_WIDTH);
    format!(" {} {} {}", rank, name, score_value(doc.score))
}

/// One explanation line: keyword, count, weight and contribution.
pub fn hit_row(hit: &KeywordHit) -> String {
    let keyword = pad_right(&truncate_name(&hit.keyword, 28), 28);
    let detail = format!(
        "{:>3} × w{:<2} = {}",
        hit.occurrences,
        hit.weight,
        hit.contribution()
    );
    let detail = if hit.occurrences == 0 {
        themed(GRAY, &[], &detail)
    } else {
        detail
    };
    format!("       {} {}", keyword, detail)
}

// ═══════════════════════════════════════════════════════════════════════════
// PRINTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Print the top `limit` entries of a ranking in a box.
///
/// `explain` is called per shown document; when it returns hits they are
/// printed under the document's row.
pub fn print_ranking<F>(title: &str, ranking: &RankingResult, limit: usize, explain: F)
where
    F: Fn(&ScoredDocument) -> Option<Vec<KeywordHit>>,
{
    println!("{}", section_top(title));
    if ranking.is_empty() {
        println!("{}", row(&themed(GRAY, &[], " no documents")));
    }
    for (i, doc) in ranking.top(limit).iter().enumerate() {
        println!("{}", row(&ranking_row(i + 1, doc)));
        if let Some(hits) = explain(doc) {
            for hit in &hits {
                println!("{}", row(&hit_row(hit)));
            }
        }
    }
    println!("{}", section_bot());

    let hidden = ranking.len().saturating_sub(limit);
    if hidden > 0 {
        println!(
            "{}",
            themed(GRAY, &[], &format!(" … {} more not shown", hidden))
        );
    }
}

/// Print every built-in role with its keyword weights.
pub fn print_roles(roles: &[RoleProfile]) {
    for role in roles {
        println!("{}", section_top(role.name));
        for (keyword, weight) in role.keywords {
            let line = format!(" {} {}", pad_right(keyword, 28), weight);
            println!("{}", row(&line));
        }
        println!("{}", section_bot());
    }
}
