//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use passforge::session::Stats;

use super::quiet;

/// Warning to stderr - suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        tracing::warn!("{msg}");
    }
}

/// Error to stderr - always shown.
pub fn error(msg: &str) {
    tracing::error!("{msg}");
}

/// Nothing to generate. A hint, not a failure.
pub fn no_class_selected() {
    warn("No character types selected: enable at least one of lowercase, uppercase, numbers or symbols");
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        let noun = if count == 1 { "password" } else { "passwords" };
        eprintln!("*** -COPIED {count} {noun} TO CLIPBOARD- ***");
    }
}

/// Ask whether to print instead when the clipboard cannot be reached.
/// Quiet or non-interactive runs fall back silently.
pub fn clipboard_fallback_prompt(reason: &str) -> bool {
    warn(reason);
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn passwords_written(count: usize, path: &str) {
    if !quiet::enabled() {
        eprintln!("{count} password(s) \u{2192} {path}");
    }
}

/// Entropy and crack-time line for the first password of a batch.
pub fn stats(stats: &Stats) {
    if !quiet::enabled() {
        eprintln!(
            "Length: {} \u{2022} Entropy: {} bits \u{2022} Crack time: {}",
            stats.length, stats.entropy_bits, stats.crack_time
        );
    }
}
