//! Ctrl-C handling.
//!
//! A run usually has a child process alive while a server probe waits out
//! its startup window, and the default SIGINT behavior would cut off the
//! report mid-section with no closing line. The handler prints a single
//! farewell and exits with the conventional interrupted status. Only
//! async-signal-safe calls are allowed inside it, so the message bytes
//! are picked via an atomic set at install time.

use std::sync::atomic::{AtomicBool, Ordering};

/// Exit status for an interrupted run, 128 + SIGINT.
pub const INTERRUPT_EXIT_CODE: i32 = 130;

static COLOR_OUTPUT: AtomicBool = AtomicBool::new(false);

const PLAIN_MESSAGE: &[u8] = b"\nHealth check interrupted by user\n";
const COLORED_MESSAGE: &[u8] = b"\n\x1b[33mHealth check interrupted by user\x1b[0m\n";

/// Install the SIGINT handler. Call once, before the first check runs.
#[cfg(unix)]
pub fn install(use_colors: bool) {
    COLOR_OUTPUT.store(use_colors, Ordering::Relaxed);
    unsafe {
        // Two-step cast: fn item -> fn pointer -> sighandler_t.
        let handler = handle_sigint as extern "C" fn(libc::c_int);
        libc::signal(libc::SIGINT, handler as libc::sighandler_t);
    }
}

/// On non-Unix targets the default Ctrl-C behavior stands.
#[cfg(not(unix))]
pub fn install(_use_colors: bool) {}

#[cfg(unix)]
extern "C" fn handle_sigint(_signal: libc::c_int) {
    let msg: &[u8] = if COLOR_OUTPUT.load(Ordering::Relaxed) {
        COLORED_MESSAGE
    } else {
        PLAIN_MESSAGE
    };
    unsafe {
        libc::write(
            libc::STDOUT_FILENO,
            msg.as_ptr() as *const libc::c_void,
            msg.len(),
        );
        libc::_exit(INTERRUPT_EXIT_CODE);
    }
}
