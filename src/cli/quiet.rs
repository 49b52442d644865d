//! Global quiet mode and tty checks for CLI output.

use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses warnings, confirmations and prompts.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn isatty(fd: libc::c_int) -> bool {
    unsafe { libc::isatty(fd) == 1 }
}

/// Stdin is a terminal, so prompts can be answered.
pub fn is_interactive() -> bool {
    isatty(libc::STDIN_FILENO)
}

pub fn stderr_is_terminal() -> bool {
    isatty(libc::STDERR_FILENO)
}

/// Skip prompts in quiet mode or when nobody can answer them.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}
