//! Terminal UI helpers for consistent output styling.

use chrono::Utc;
use questlog::{Priority, Progression, Quest};

/// ANSI color codes using true color (24-bit)
pub mod colors {
    pub const HEADER: &str = "\x1b[38;2;200;160;255m";
    pub const OK: &str = "\x1b[38;2;120;255;120m";
    pub const ERR: &str = "\x1b[38;2;255;100;100m";
    pub const WARN: &str = "\x1b[38;2;255;200;100m";
    pub const DIM: &str = "\x1b[38;2;140;140;140m";
    pub const ACCENT: &str = "\x1b[38;2;170;120;255m";
    pub const BOLD: &str = "\x1b[1m";
    pub const STRIKE: &str = "\x1b[9m";
    pub const RESET: &str = "\x1b[0m";
}

/// Unicode symbols
pub mod symbols {
    pub const DONE: &str = "✓";
    pub const OPEN: &str = "·";
    pub const OVERDUE: &str = "!";
    pub const STREAK: &str = "▲";
    pub const PROGRESS_FULL: &str = "█";
    pub const PROGRESS_EMPTY: &str = "░";
}

/// Horizontal rule
pub const HR: &str =
    "──────────────────────────────────────────────────────────────────────────────";

/// Print a styled header with version
pub fn print_header(name: &str, version: &str) {
    println!();
    println!("{}{} v{}{}", colors::HEADER, name, version, colors::RESET);
    println!("{}{}{}", colors::DIM, HR, colors::RESET);
}

/// Print a key-value pair with fixed key width
pub fn print_kv(key: &str, value: &str, width: usize) {
    println!("{:width$} {}", key, value, width = width);
}

/// Print an inline error message
pub fn print_error(message: &str) {
    println!("{}{}{}", colors::ERR, message, colors::RESET);
}

/// XP progress bar out of `width` cells
pub fn xp_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction * width as f64).round() as usize).min(width);
    format!(
        "{}{}{}{}{}",
        colors::ACCENT,
        symbols::PROGRESS_FULL.repeat(filled),
        colors::DIM,
        symbols::PROGRESS_EMPTY.repeat(width - filled),
        colors::RESET
    )
}

/// Print the gamification HUD: level, title, XP bar, streak
pub fn print_hud(progression: &Progression) {
    println!(
        "{}Level {}{}  {}{}{}",
        colors::BOLD,
        progression.level,
        colors::RESET,
        colors::DIM,
        progression.title(),
        colors::RESET
    );
    println!(
        "XP {} / {}  {}",
        progression.current_xp,
        progression.max_xp,
        xp_bar(progression.xp_fraction(), 30)
    );
    println!(
        "{}{}{} {} Day Streak",
        colors::WARN,
        symbols::STREAK,
        colors::RESET,
        progression.streak
    );
}

fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => colors::ERR,
        Priority::Medium => colors::WARN,
        Priority::Low => colors::OK,
    }
}

/// One list line per quest: checkbox, short id, title, badge, deadline,
/// XP reward. Overdue deadlines get a warning marker.
pub fn print_quest_line(quest: &Quest) {
    let now = Utc::now();
    let short_id = quest.id.to_string()[..8].to_string();

    let checkbox = if quest.completed {
        format!("{}[{}]{}", colors::ACCENT, symbols::DONE, colors::RESET)
    } else {
        format!("{}[{}]{}", colors::DIM, symbols::OPEN, colors::RESET)
    };

    let title = if quest.completed {
        format!("{}{}{}{}", colors::DIM, colors::STRIKE, quest.title, colors::RESET)
    } else {
        quest.title.clone()
    };

    let badge = format!(
        "{}[{}]{}",
        priority_color(quest.priority),
        quest.priority.label(),
        colors::RESET
    );

    let due = match quest.due_date {
        Some(date) if quest.is_overdue(now) => format!(
            "  {}{} due {}{}",
            colors::ERR,
            symbols::OVERDUE,
            date,
            colors::RESET
        ),
        Some(date) => format!("  {}due {}{}", colors::DIM, date, colors::RESET),
        None => String::new(),
    };

    println!(
        "{} {}{}{} {} {}{}  {}+{} XP{}",
        checkbox,
        colors::DIM,
        short_id,
        colors::RESET,
        title,
        badge,
        due,
        colors::ACCENT,
        quest.xp_reward,
        colors::RESET
    );
}

/// Empty-projection placeholder
pub fn print_empty_state() {
    println!("{}No Quests Available{}", colors::BOLD, colors::RESET);
    println!(
        "{}Good job! Time to create new quests.{}",
        colors::DIM,
        colors::RESET
    );
}
