//! Terminal output utilities.
//!
//! Box drawing, colorized passwords, strength meters, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use passforge::pass::Strength;
use passforge::pass::charset::CharClass;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const ORANGE: &str = "\x1b[38;5;208m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const CYAN: &str = "\x1b[38;5;14m";
pub const BLUE: &str = "\x1b[38;5;12m";
pub const VIOLET: &str = "\x1b[38;5;141m";
pub const PINK: &str = "\x1b[38;5;211m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and reset attributes.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_notice(msg: &str) {
    println!("{GREEN}{msg}{RESET}");
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
pub const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {title} ");
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// │ content                                        │
pub fn box_line(content: &str) {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    println!("│ {}{} │", content, " ".repeat(padding));
}

pub fn box_line_center(content: &str) {
    let total_padding = INNER_WIDTH.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    println!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(total_padding - left_pad)
    );
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// ├──────────────┤
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// Help option row: flag column, then a description wrapped to the box.
pub fn box_opt(flag: &str, desc: &str) {
    let flag_col = 18;
    let desc_col = INNER_WIDTH - flag_col;

    let mut lines: Vec<String> = Vec::new();
    for word in desc.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.len() + 1 + word.len() <= desc_col => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }

    let mut flag_cell = format!("{flag:<flag_col$}");
    for line in lines.iter() {
        box_line(&format!("{flag_cell}{line}"));
        flag_cell = " ".repeat(flag_col);
    }
    if lines.is_empty() {
        box_line(&flag_cell);
    }
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Passwords
// ============================================================================

/// Color each character by its class.
pub fn colorize(password: &str) -> String {
    let mut out = String::with_capacity(password.len() * 8);
    for c in password.chars() {
        let color = match CharClass::of(c) {
            CharClass::Lowercase => VIOLET,
            CharClass::Uppercase => CYAN,
            CharClass::Digit => PINK,
            CharClass::Symbol => YELLOW,
        };
        out.push_str(color);
        out.push(c);
    }
    out.push_str(RESET);
    out
}

/// One bullet per character.
pub fn mask(password: &str) -> String {
    "•".repeat(password.chars().count())
}

/// Split a password into box-width rows without breaking characters.
pub fn chunk(password: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = password.chars().collect();
    chars
        .chunks(width.max(1))
        .map(|row| row.iter().collect())
        .collect()
}

pub fn strength_color(strength: Strength) -> &'static str {
    match strength {
        Strength::VeryWeak => RED,
        Strength::Weak => ORANGE,
        Strength::Fair => YELLOW,
        Strength::Strong => GREEN,
        Strength::VeryStrong => CYAN,
    }
}

/// `Strong ▰▰▰▰▱` in the strength's color.
pub fn strength_meter(score: u8) -> String {
    let strength = Strength::classify(score);
    let lit = Strength::meter(score);
    format!(
        "{color}{label:<12}{bars}{DIM}{rest}{RESET}",
        color = strength_color(strength),
        label = strength.label(),
        bars = "▰".repeat(lit),
        rest = "▱".repeat(5 - lit),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_escapes() {
        assert_eq!(console_width(&colorize("aB3$")), 4);
        assert_eq!(console_width(&strength_meter(9)), 17);
    }

    #[test]
    fn chunks_keep_every_char() {
        let rows = chunk(&"x".repeat(150), INNER_WIDTH);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.concat().len(), 150);
        assert!(chunk("", 10).is_empty());
    }

    #[test]
    fn mask_matches_length() {
        assert_eq!(mask("abc"), "•••");
    }
}
