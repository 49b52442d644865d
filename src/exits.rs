//! Exit handling: signal handlers and terminal restoration.

/// Put the tty back into cooked mode using termios directly.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit - runs on every normal exit, including `exit()`
/// from a signal handler.
extern "C" fn cleanup_on_exit() {
    restore_termios();
    // Reset colors and show the cursor, but only on a tty (not when piping).
    const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h";
    unsafe {
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            libc::write(
                libc::STDOUT_FILENO,
                RESTORE.as_ptr() as *const libc::c_void,
                RESTORE.len(),
            );
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles cleanup.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// SIGSEGV/SIGABRT - restore the tty, then re-raise for the default action.
extern "C" fn crash_handler(sig: libc::c_int) {
    restore_termios();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install signal handlers and register atexit cleanup. Call early in main().
pub fn install_handlers() {
    let on_signal = signal_handler as *const () as libc::sighandler_t;
    let on_crash = crash_handler as *const () as libc::sighandler_t;
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, on_signal);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, on_crash);
        }
    }
}

/// Keep generated secrets out of core dumps and ptrace.
pub fn harden_process() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

pub fn reset_terminal() {
    restore_termios();
}
