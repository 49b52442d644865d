use passforge::pass::{self, ConfigOption, strength::MAX_SCORE};
use passforge::session::Session;
use passforge::source::Source;

use crate::terminal::{
    BLUE, DIM, GREEN, INNER_WIDTH, RESET, UNDERLINE, YELLOW, box_bottom, box_line,
    box_line_center, box_opt, box_top, chunk, clear, colorize, flush, mask, print_error,
    print_notice, print_rule, strength_meter,
};

/// History rows shown under the batch.
const HISTORY_ROWS: usize = 5;

pub fn enter_prompt() -> &'static str {
    "Enter command (or press Enter to regenerate)"
}

pub fn print_help() {
    box_top("Passforge");
    box_line_center("Password generator and strength meter");
    box_line("");
    box_line("COMMANDS:");
    box_opt("  Enter", "Generate a new batch with the current options");
    box_opt("  l", "Set password length (4-128)");
    box_opt("  n", "Set how many passwords to generate (1-50)");
    box_opt("  1-6", "Toggle a character type or exclusion");
    box_opt("  c<N>", "Copy password N to the clipboard (c alone copies the first)");
    box_opt("  a", "Copy every password, one per line");
    box_opt("  v<N>", "Show or hide password N");
    box_opt("  h", "Show or hide the copy history");
    box_opt("  x", "Clear the copy history");
    box_opt("  ?", "This help");
    box_opt("  q", "Quit");
    box_line("");
    box_line("EDITING:");
    box_line("  Esc/CTRL+Q cancels a prompt, CTRL+U clears it.");
    box_line("");
    box_line("STRENGTH:");
    box_line(&format!(
        "  Scored 0-{MAX_SCORE} on length, character variety, and repetition."
    ));
    box_line("  Entropy assumes the selected character types.");
    box_line("");
    box_line("Run `passforge --help` for the non-interactive flags.");
    box_bottom();
    println!();
}

/// What the status line under the menu says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    None,
    Notice(String),
    Error(String),
}

fn print_options(session: &Session) {
    box_line(&format!("{UNDERLINE}Options{RESET}:"));
    for (n, option) in ConfigOption::ALL.into_iter().enumerate() {
        let mark = if session.config.get(option) {
            format!("{GREEN}x{RESET}")
        } else {
            " ".to_string()
        };
        box_line(&format!("  {}) [{mark}] {}", n + 1, option.label()));
    }
}

fn print_passwords(session: &Session) {
    box_line(&format!("{UNDERLINE}Passwords{RESET}:"));
    if !session.config.has_any_class() {
        box_line(&format!(
            "  {YELLOW}Select at least one character type (1-4).{RESET}"
        ));
        return;
    }

    for (i, password) in session.passwords().enumerate() {
        let copied = if session.copied() == Some(i) {
            format!("  {GREEN}copied{RESET}")
        } else {
            String::new()
        };
        box_line(&format!(
            "  {BLUE}{:>2}{RESET} {}{copied}",
            i + 1,
            strength_meter(pass::score(password))
        ));

        let visible = session.is_visible(i);
        for row in chunk(password, INNER_WIDTH - 5) {
            let shown = if visible { colorize(&row) } else { mask(&row) };
            box_line(&format!("     {shown}"));
        }
    }
}

fn print_stats(session: &Session) {
    let Some(stats) = session.stats() else {
        return;
    };
    print_rule();
    box_line(&format!(
        "  Length {BLUE}{}{RESET}   Entropy {BLUE}{} bits{RESET}   Crack time {BLUE}{}{RESET}",
        stats.length, stats.entropy_bits, stats.crack_time
    ));
}

fn print_history(session: &Session, show: bool) {
    let history = session.history();
    print_rule();
    box_line(&format!("History: {DIM}{}{RESET}", history.summary()));
    if !show {
        return;
    }
    for entry in history.iter().take(HISTORY_ROWS) {
        let preview: String = entry.password.chars().take(32).collect();
        let ellipsis = if entry.password.chars().count() > 32 { "…" } else { "" };
        box_line(&format!(
            "  {DIM}{}{RESET}  {:<12} {preview}{ellipsis}",
            entry.copied_at.format("%H:%M"),
            pass::Strength::classify(entry.score).label(),
        ));
    }
    if history.len() > HISTORY_ROWS {
        box_line(&format!("  {DIM}… {} more{RESET}", history.len() - HISTORY_ROWS));
    }
}

pub fn print_main_menu(session: &Session, source: Source, show_history: bool, status: &Status) {
    clear();
    box_top("Passforge");
    box_line(&format!(
        "  Length: {}   Quantity: {}   Source: {}",
        session.config.length,
        session.config.quantity,
        source.name()
    ));
    box_line("");
    print_options(session);
    box_line("");
    print_passwords(session);
    print_stats(session);
    print_history(session, show_history);
    print_rule();
    box_line_center("l) length | n) quantity | c<N>) copy | a) copy all | v<N>) show/hide");
    box_line_center("h) history | x) clear history | ?) help | q) quit");
    box_bottom();

    match status {
        Status::None => println!(),
        Status::Notice(msg) => print_notice(msg),
        Status::Error(msg) => print_error(msg),
    }
    flush();
}
