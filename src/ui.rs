/// Console output utilities
///
/// This module handles:
/// - Thread-safe console output
/// - Colored terminal text
/// - Per-sheet result lines
use lazy_static::lazy_static;
use std::io::Write;
use std::sync::Mutex;

/// Execute a function with exclusive access to console output
fn status_lock<F>(f: F)
where
    F: FnOnce(),
{
    lazy_static! {
        static ref LOCK: Mutex<()> = Mutex::new(());
    }
    let _guard = LOCK.lock();
    f();
}

/// Print colored text to terminal, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        print!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        if let Some(ref mut t) = term::stdout() {
            if t.fg(fg).is_err() {
                return false;
            }
            let _ = t.attr(term::Attr::Bold);
            if write!(t, "{}", s).is_err() {
                return false;
            }
            let _ = t.reset();
        }

        true
    }
}

/// Print a status message with "rankpress: " prefix (thread-safe)
pub fn status(s: &str) {
    status_lock(|| {
        print!("rankpress: ");
        println!("{}", s);
    });
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    println!();
    print_color("error", term::color::BRIGHT_RED);
    println!(": {}", msg);
    println!();
}

/// Print one sheet's result with a colored ok/failed tag (thread-safe)
pub fn print_result_line(ok: bool, s: &str) {
    status_lock(|| {
        if ok {
            print_color("ok", term::color::GREEN);
        } else {
            print_color("failed", term::color::BRIGHT_RED);
        }
        println!(" {}", s);
    });
}
